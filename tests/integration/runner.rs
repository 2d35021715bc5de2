use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use ci_docgen::{build_document, parse_dsl, render_document, DslFormat, RenderConfig};

/// Expectations for one case directory (`expected.json`).
#[derive(Debug, Deserialize)]
struct ExpectedOutput {
    status: String,
    #[serde(default)]
    stage_order: Option<Vec<String>>,
    #[serde(default)]
    job_count: Option<usize>,
    #[serde(default)]
    contains: Vec<String>,
    #[serde(default)]
    not_contains: Vec<String>,
    #[serde(default)]
    error_contains: Vec<String>,
}

pub fn run_case(case_dir: &Path) {
    let pipeline = read_to_string(case_dir.join("pipeline.yml"));
    let expected: ExpectedOutput = read_json(case_dir.join("expected.json"));
    let config = match fs::read_to_string(case_dir.join("config.toml")) {
        Ok(content) => RenderConfig::from_toml_str(&content)
            .unwrap_or_else(|e| panic!("Failed to load config.toml: {}", e)),
        Err(_) => RenderConfig::default(),
    };

    let root = parse_dsl(&pipeline, DslFormat::Yaml)
        .unwrap_or_else(|e| panic!("Failed to parse pipeline.yml: {}", e));

    match expected.status.as_str() {
        "ok" => {
            let document = build_document(&root)
                .unwrap_or_else(|e| panic!("{}: unexpected error: {}", case_dir.display(), e));

            if let Some(order) = &expected.stage_order {
                let actual: Vec<&str> = document.stages.iter().map(|s| s.name.as_str()).collect();
                assert_eq!(&actual, order, "stage order mismatch in {}", case_dir.display());
            }
            if let Some(count) = expected.job_count {
                assert_eq!(document.job_count(), count, "job count mismatch");
            }

            let markdown = render_document(&document, &config);
            assert_eq!(
                markdown,
                render_document(&document, &config),
                "rendering is not deterministic"
            );
            for needle in &expected.contains {
                assert!(
                    markdown.contains(needle.as_str()),
                    "{}: output does not contain {:?}\n--- output ---\n{}",
                    case_dir.display(),
                    needle,
                    markdown
                );
            }
            for needle in &expected.not_contains {
                assert!(
                    !markdown.contains(needle.as_str()),
                    "{}: output unexpectedly contains {:?}",
                    case_dir.display(),
                    needle
                );
            }
        }
        "error" => {
            let err = match build_document(&root) {
                Ok(_) => panic!("{}: expected a validation error", case_dir.display()),
                Err(e) => e.to_string(),
            };
            for needle in &expected.error_contains {
                assert!(
                    err.contains(needle.as_str()),
                    "{}: error {:?} does not contain {:?}",
                    case_dir.display(),
                    err,
                    needle
                );
            }
        }
        other => panic!("Unknown expected status: {}", other),
    }
}

fn read_to_string(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path.as_ref()).unwrap_or_else(|e| {
        panic!("Failed to read {}: {}", path.as_ref().display(), e)
    })
}

fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> T {
    let content = read_to_string(path.as_ref());
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!("Failed to parse {}: {}", path.as_ref().display(), e)
    })
}
