//! DSL parser: converts raw YAML/JSON/TOML text into a [`RawNode`] tree.

use std::path::Path;

use super::RawNode;
use crate::error::DocError;

/// Supported DSL input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DslFormat {
    /// YAML format (`.yaml` / `.yml`).
    #[default]
    Yaml,
    /// JSON format (`.json`).
    Json,
    /// TOML format (`.toml`).
    Toml,
}

impl DslFormat {
    /// Pick a format from a file extension. Unknown extensions fall back to YAML,
    /// which is what pipeline configuration files are written in.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => DslFormat::Json,
            Some("toml") => DslFormat::Toml,
            _ => DslFormat::Yaml,
        }
    }
}

/// YAML decoder options. A repeated mapping key overwrites the earlier value
/// and keeps its first position.
fn yaml_options() -> serde_saphyr::Options {
    serde_saphyr::Options {
        duplicate_keys: serde_saphyr::DuplicateKeyPolicy::LastWins,
        ..serde_saphyr::Options::default()
    }
}

/// Parse DSL content into a generic configuration tree.
pub fn parse_dsl(content: &str, format: DslFormat) -> Result<RawNode, DocError> {
    match format {
        DslFormat::Yaml => serde_saphyr::from_str_with_options(content, yaml_options())
            .map_err(|e| DocError::DslParseError(e.to_string())),
        DslFormat::Json => serde_json::from_str(content)
            .map_err(|e| DocError::DslParseError(e.to_string())),
        DslFormat::Toml => {
            let toml_val: toml::Value = toml::from_str(content)
                .map_err(|e| DocError::DslParseError(e.to_string()))?;
            Ok(toml_value_to_json(toml_val))
        }
    }
}

/// Convert a [`toml::Value`] into a [`RawNode`].
///
/// TOML does not have a null type, so `Datetime` values are stringified.
fn toml_value_to_json(val: toml::Value) -> RawNode {
    match val {
        toml::Value::String(s) => RawNode::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => RawNode::Bool(b),
        toml::Value::Array(arr) => {
            RawNode::Array(arr.into_iter().map(toml_value_to_json).collect())
        }
        toml::Value::Table(tbl) => {
            let map: serde_json::Map<String, RawNode> = tbl
                .into_iter()
                .map(|(k, v)| (k, toml_value_to_json(v)))
                .collect();
            RawNode::Object(map)
        }
        toml::Value::Datetime(dt) => RawNode::String(dt.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
stages: [build, test]
build:
  stage: build
  script: make
"#;
        let tree = parse_dsl(yaml, DslFormat::Yaml).unwrap();
        let map = tree.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(tree["build"]["script"], "make");
    }

    #[test]
    fn test_parse_yaml_preserves_key_order() {
        let yaml = r#"
zeta: { script: a }
alpha: { script: b }
mid: { script: c }
"#;
        let tree = parse_dsl(yaml, DslFormat::Yaml).unwrap();
        let keys: Vec<&str> = tree
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_yaml_duplicate_key_last_wins() {
        let yaml = "build:\n  script: a\nlint:\n  script: l\nbuild:\n  stage: two\n  script: b\n";
        let tree = parse_dsl(yaml, DslFormat::Yaml).unwrap();
        assert_eq!(tree["build"]["stage"], "two");
        assert_eq!(tree["build"]["script"], "b");
        let keys: Vec<&str> = tree
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["build", "lint"]);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"build":{"stage":"compile","script":["a","b"]}}"#;
        let tree = parse_dsl(json, DslFormat::Json).unwrap();
        assert_eq!(tree["build"]["script"][1], "b");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_dsl("{{{invalid", DslFormat::Json).is_err());
    }

    #[test]
    fn test_parse_yaml_invalid() {
        let bad_yaml = r#"
build:
  script: { unclosed
"#;
        let err = parse_dsl(bad_yaml, DslFormat::Yaml).unwrap_err();
        assert!(matches!(err, DocError::DslParseError(_)));
    }

    #[test]
    fn test_parse_json_empty() {
        assert!(parse_dsl("", DslFormat::Json).is_err());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[build]
stage = "compile"
script = ["cargo build"]
"#;
        let tree = parse_dsl(toml_str, DslFormat::Toml).unwrap();
        assert_eq!(tree["build"]["stage"], "compile");
        assert_eq!(tree["build"]["script"][0], "cargo build");
    }

    #[test]
    fn test_parse_toml_invalid() {
        assert!(parse_dsl("[[[bad", DslFormat::Toml).is_err());
    }

    #[test]
    fn test_toml_value_to_json_scalars() {
        assert_eq!(
            toml_value_to_json(toml::Value::String("test".into())),
            RawNode::String("test".into())
        );
        assert_eq!(
            toml_value_to_json(toml::Value::Integer(42)),
            serde_json::json!(42)
        );
        assert_eq!(
            toml_value_to_json(toml::Value::Boolean(true)),
            RawNode::Bool(true)
        );
    }

    #[test]
    fn test_toml_value_to_json_datetime() {
        let dt = "2023-01-01T00:00:00Z"
            .parse::<toml::value::Datetime>()
            .unwrap();
        let json_val = toml_value_to_json(toml::Value::Datetime(dt));
        assert!(matches!(json_val, RawNode::String(_)));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(DslFormat::from_path(Path::new(".gitlab-ci.yml")), DslFormat::Yaml);
        assert_eq!(DslFormat::from_path(Path::new("ci.YAML")), DslFormat::Yaml);
        assert_eq!(DslFormat::from_path(Path::new("ci.json")), DslFormat::Json);
        assert_eq!(DslFormat::from_path(Path::new("ci.toml")), DslFormat::Toml);
        assert_eq!(DslFormat::from_path(Path::new("pipeline")), DslFormat::Yaml);
    }
}
