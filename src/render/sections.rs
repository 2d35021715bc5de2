use super::badge::{badge, flag_badge, when_badge};
use super::config::RenderConfig;
use super::generic::render_setting;
use super::table::{check_mark, code, code_list, longest_backtick_run, Table};
use crate::dsl::fields::{
    Artifacts, Cache, CacheKey, Changes, Image, Include, IncludeEntry, Retry, Rule, Variables,
};
use crate::dsl::Vocabulary;
use crate::model::{DefaultConfig, Job, JobSettings, Stage};

pub(crate) fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

pub(crate) fn join_blocks(blocks: &[String]) -> String {
    blocks.join("\n\n")
}

// ================================
// Tables
// ================================

pub(crate) fn variables_table(variables: &Variables) -> String {
    let mut table = Table::new(&["Name", "Value", "Description"]);
    for (name, variable) in variables.iter() {
        let mut value = code(&variable.value);
        if !variable.expand {
            value.push_str(" (raw)");
        }
        table.row(vec![
            code(name),
            value,
            variable.description.clone().unwrap_or_default(),
        ]);
    }
    table.render()
}

pub(crate) fn rules_table(rules: &[Rule]) -> String {
    let mut table = Table::new(&[
        "When",
        "Condition",
        "Allow failure",
        "Variables",
        "Changes",
        "Exists",
    ]);
    for rule in rules {
        let variables = rule
            .variables
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join(" • ");
        table.row(vec![
            when_badge(rule.when),
            code(rule.condition.as_deref().unwrap_or("-")),
            check_mark(rule.allow_failure).to_string(),
            variables,
            changes_cell(&rule.changes),
            code_list(&rule.exists, ", "),
        ]);
    }
    table.render()
}

fn changes_cell(changes: &Changes) -> String {
    let mut cell = code_list(&changes.paths, " • ");
    if let Some(compare_to) = &changes.compare_to {
        cell.push_str(&format!(" (compare to {})", code(compare_to)));
    }
    cell
}

pub(crate) fn include_table(include: &Include) -> String {
    let mut table = Table::new(&["Type", "Value"]);
    for entry in include.entries() {
        table.row(vec![include_badge(entry), include_value(entry)]);
    }
    table.render()
}

fn include_badge(entry: &IncludeEntry) -> String {
    let kind = entry.kind();
    let alt = match entry {
        IncludeEntry::Local(_) => "Local",
        IncludeEntry::Project { .. } => "Project",
        IncludeEntry::Remote(_) => "Remote",
        IncludeEntry::Template(_) => "Template",
        IncludeEntry::Component(_) => "Component",
    };
    badge(alt, "", kind, "green")
}

fn include_value(entry: &IncludeEntry) -> String {
    match entry {
        IncludeEntry::Local(value)
        | IncludeEntry::Remote(value)
        | IncludeEntry::Template(value)
        | IncludeEntry::Component(value) => value.clone(),
        IncludeEntry::Project {
            project,
            files,
            git_ref,
        } => {
            let mut value = project.clone();
            if !files.is_empty() {
                value.push_str(&format!(": {}", code_list(files, ", ")));
            }
            if let Some(git_ref) = git_ref {
                value.push_str(&format!(" @ {}", code(git_ref)));
            }
            value
        }
    }
}

pub(crate) fn cache_table(caches: &[Cache]) -> String {
    let mut table = Table::new(&["Key", "Paths", "Untracked", "Policy", "When"]);
    for cache in caches {
        let key = match &cache.key {
            None => String::new(),
            Some(CacheKey::Literal(key)) => badge("Cache key", "Cache key", key, "blue"),
            Some(CacheKey::Files { files, prefix }) => format!(
                "{} {}",
                badge("Cache key", "Cache key", prefix.as_deref().unwrap_or("files"), "blue"),
                code_list(files, ", ")
            ),
        };
        table.row(vec![
            key,
            code_list(&cache.paths, ", "),
            check_mark(cache.untracked).to_string(),
            badge("Cache policy", "Cache policy", cache.policy.as_str(), "blue"),
            when_badge(cache.when),
        ]);
    }
    table.render()
}

// ================================
// Job settings
// ================================

fn image_badge(image: &Image) -> String {
    badge("Image", "Image", image.name(), "blue")
}

fn retry_badge(retry: &Retry) -> Option<String> {
    retry
        .max
        .map(|max| badge("Retry", "Retry", &max.to_string(), "blue"))
}

/// Fenced bash block. The fence is at least three backticks and longer than
/// any backtick run in the script.
fn script_block(title: &str, lines: &[String]) -> String {
    let longest = lines.iter().map(|l| longest_backtick_run(l)).max().unwrap_or(0);
    let fence = "`".repeat((longest + 1).max(3));
    if lines.is_empty() {
        format!("#### {}\n\n{fence}bash\n{fence}", title)
    } else {
        format!("#### {}\n\n{fence}bash\n{}\n{fence}", title, lines.join("\n"))
    }
}

pub(crate) fn artifacts_block(artifacts: &Artifacts) -> String {
    let mut badges = Vec::new();
    if artifacts.untracked {
        badges.push(flag_badge("Untracked", "orange"));
    }
    badges.push(when_badge(artifacts.when));
    if artifacts.public {
        badges.push(flag_badge("Public", "green"));
    }

    let mut parts = vec!["#### Artifacts".to_string(), badges.join(" ")];
    if !artifacts.paths.is_empty() {
        parts.push(format!("**✅ Paths:** {}", code_list(&artifacts.paths, ", ")));
    }
    if !artifacts.exclude.is_empty() {
        parts.push(format!("**❌ Exclude:** {}", code_list(&artifacts.exclude, ", ")));
    }
    if let Some(expire_in) = &artifacts.expire_in {
        parts.push(format!("**⌚ Expire in:** {}", code(expire_in)));
    }
    if !artifacts.reports.is_empty() {
        let reports = artifacts
            .reports
            .iter()
            .map(|(kind, entries)| format!("{}: {}", kind, code_list(entries, ", ")))
            .collect::<Vec<_>>()
            .join(", ");
        parts.push(format!("**📊 Reports:** {}", reports));
    }
    if let Some(name) = &artifacts.name {
        parts.push(format!("**🏷️ Name:** {}", code(name)));
    }
    if let Some(expose_as) = &artifacts.expose_as {
        parts.push(format!("**🔗 Exposed as:** {}", code(expose_as)));
    }
    join_blocks(&parts)
}

/// Render settings as blocks in a fixed order, generic settings last.
pub(crate) fn settings_blocks(settings: &JobSettings) -> Vec<String> {
    let mut blocks = Vec::new();

    let badges: Vec<String> = settings
        .image
        .iter()
        .map(image_badge)
        .chain(settings.retry.as_ref().and_then(retry_badge))
        .collect();
    if !badges.is_empty() {
        blocks.push(badges.join(" "));
    }
    if let Some(image) = &settings.image {
        if !image.entrypoint().is_empty() {
            blocks.push(format!(
                "**Entrypoint:** {}",
                code_list(image.entrypoint(), ", ")
            ));
        }
    }
    if let Some(retry) = &settings.retry {
        if !retry.when.is_empty() {
            blocks.push(format!("**🔁 Retry when:** {}", code_list(&retry.when, ", ")));
        }
    }

    if let Some(lines) = &settings.before_scripts {
        blocks.push(script_block("Before Scripts", lines));
    }
    if let Some(lines) = &settings.scripts {
        blocks.push(script_block("Scripts", lines));
    }
    if let Some(lines) = &settings.after_scripts {
        blocks.push(script_block("After Scripts", lines));
    }
    if let Some(variables) = &settings.variables {
        blocks.push(format!("#### Variables\n\n{}", variables_table(variables)));
    }
    if let Some(rules) = &settings.rules {
        blocks.push(format!("#### Rules\n\n{}", rules_table(rules)));
    }
    if let Some(artifacts) = &settings.artifacts {
        blocks.push(artifacts_block(artifacts));
    }
    if let Some(caches) = &settings.cache {
        blocks.push(format!("#### Cache\n\n{}", cache_table(caches)));
    }
    for setting in &settings.residual {
        blocks.push(render_setting(setting.keyword.as_str(), &setting.value));
    }
    blocks
}

// ================================
// Jobs, stages, default
// ================================

pub(crate) fn job_block(job: &Job, config: &RenderConfig) -> String {
    let body = join_blocks(&settings_blocks(&job.settings));
    let mut parts = Vec::new();
    if config.collapse_jobs {
        parts.push(format!(
            "<details>\n<summary><h3>{}</h3></summary>",
            html_escape(&job.name)
        ));
        if !body.is_empty() {
            parts.push(body);
        }
        parts.push("</details>".to_string());
    } else {
        parts.push(format!("### {}", html_escape(&job.name)));
        if !body.is_empty() {
            parts.push(body);
        }
    }
    join_blocks(&parts)
}

pub(crate) fn stage_block(stage: &Stage, config: &RenderConfig) -> String {
    let mut parts = vec![format!("## ⚙️ {}", stage.name)];
    parts.extend(stage.jobs.iter().map(|job| job_block(job, config)));
    join_blocks(&parts)
}

pub(crate) fn default_block(default: &DefaultConfig) -> String {
    let mut parts = vec!["## 🌍 Default properties".to_string()];
    parts.extend(settings_blocks(&default.settings));
    join_blocks(&parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::fields::FieldSchema;
    use crate::model::DEFAULT_STAGE;
    use serde_json::json;

    fn job(body: serde_json::Value) -> Job {
        Job::from_raw("build", &body).unwrap()
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a<b> & \"c\""), "a&lt;b&gt; &amp; &quot;c&quot;");
    }

    #[test]
    fn test_variables_table_rows() {
        let variables = Variables::from_raw(&json!({
            "FOO": "1",
            "BAR": {"value": "2", "description": "two"}
        }))
        .unwrap();
        let table = variables_table(&variables);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "| Name | Value | Description |");
        assert_eq!(lines[2], "| `FOO` | `1` |  |");
        assert_eq!(lines[3], "| `BAR` | `2` | two |");
    }

    #[test]
    fn test_rules_table() {
        let job = job(json!({
            "rules": [
                {"if": "$CI_COMMIT_TAG", "when": "manual", "allow_failure": true,
                 "variables": {"A": "1", "B": "2"}, "changes": ["src/**"], "exists": ["Dockerfile"]},
                {"changes": {"paths": ["a", "b"], "compare_to": "main"}}
            ]
        }));
        let table = rules_table(job.settings.rules.as_deref().unwrap());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines[2],
            "| ![manual](https://img.shields.io/badge/-manual-purple) | `$CI_COMMIT_TAG` | ✅ | A: 1 • B: 2 | `src/**` | `Dockerfile` |"
        );
        assert_eq!(
            lines[3],
            "| ![on_success](https://img.shields.io/badge/-on__success-green) | `-` | ❌ |  | `a` • `b` (compare to `main`) |  |"
        );
    }

    #[test]
    fn test_cache_policy_badge_escapes_hyphen() {
        let job = job(json!({"cache": {"key": "deps", "paths": ["node_modules/"]}}));
        let table = cache_table(job.settings.cache.as_deref().unwrap());
        assert!(table.contains("Cache_policy-pull--push-blue"));
        assert!(table.contains("![Cache key](https://img.shields.io/badge/Cache_key-deps-blue)"));
        assert!(table.contains("| `node_modules/` | ❌ |"));
    }

    #[test]
    fn test_include_table() {
        let include = Include::from_raw(&json!([
            "local.yml",
            "https://example.com/ci.yml",
            {"project": "group/proj", "file": ["a.yml", "b.yml"], "ref": "main"},
            {"template": "Auto-DevOps.gitlab-ci.yml"}
        ]))
        .unwrap();
        let table = include_table(&include);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines[2],
            "| ![Local](https://img.shields.io/badge/-local-green) | local.yml |"
        );
        assert!(lines[3].starts_with("| ![Remote]"));
        assert!(lines[4].ends_with("| group/proj: `a.yml`, `b.yml` @ `main` |"));
        assert!(lines[5].contains("-template-green"));
    }

    #[test]
    fn test_artifacts_block() {
        let job = job(json!({
            "artifacts": {
                "paths": ["dist/"],
                "expire_in": "1 week",
                "untracked": true,
                "reports": {"junit": "report.xml"}
            }
        }));
        let block = artifacts_block(job.settings.artifacts.as_ref().unwrap());
        assert!(block.starts_with("#### Artifacts\n\n![Untracked](https://img.shields.io/badge/-Untracked-orange) "));
        assert!(block.contains("![Public](https://img.shields.io/badge/-Public-green)"));
        assert!(block.contains("**✅ Paths:** `dist/`"));
        assert!(block.contains("**⌚ Expire in:** `1 week`"));
        assert!(block.contains("**📊 Reports:** junit: `report.xml`"));
        assert!(!block.contains("Exclude"));
    }

    #[test]
    fn test_settings_block_order() {
        let job = job(json!({
            "tags": ["docker"],
            "script": "make",
            "image": {"name": "rust:1.80", "entrypoint": [""]},
            "retry": {"max": 2, "when": "script_failure"},
            "before_script": ["setup"]
        }));
        let blocks = settings_blocks(&job.settings);
        assert_eq!(
            blocks[0],
            "![Image](https://img.shields.io/badge/Image-rust:1.80-blue) ![Retry](https://img.shields.io/badge/Retry-2-blue)"
        );
        assert_eq!(blocks[1], "**Entrypoint:** ``");
        assert_eq!(blocks[2], "**🔁 Retry when:** `script_failure`");
        assert_eq!(blocks[3], "#### Before Scripts\n\n```bash\nsetup\n```");
        assert_eq!(blocks[4], "#### Scripts\n\n```bash\nmake\n```");
        assert_eq!(blocks[5], "#### tags\n\n`docker`");
        assert_eq!(blocks.len(), 6);
    }

    #[test]
    fn test_job_block_collapsed_and_flat() {
        let job = Job::from_raw("a <b>", &json!({"script": "x"})).unwrap();
        assert_eq!(job.stage, DEFAULT_STAGE);
        let collapsed = job_block(&job, &RenderConfig::default());
        assert_eq!(
            collapsed,
            "<details>\n<summary><h3>a &lt;b&gt;</h3></summary>\n\n#### Scripts\n\n```bash\nx\n```\n\n</details>"
        );
        let flat = job_block(
            &job,
            &RenderConfig {
                collapse_jobs: false,
                ..RenderConfig::default()
            },
        );
        assert_eq!(flat, "### a &lt;b&gt;\n\n#### Scripts\n\n```bash\nx\n```");
    }

    #[test]
    fn test_script_with_fence_gets_longer_fence() {
        let job = job(json!({"script": ["cat <<EOF > README.md", "```sh", "make", "```", "EOF"]}));
        let blocks = settings_blocks(&job.settings);
        assert_eq!(
            blocks[0],
            "#### Scripts\n\n````bash\ncat <<EOF > README.md\n```sh\nmake\n```\nEOF\n````"
        );
    }

    #[test]
    fn test_empty_script_block() {
        assert_eq!(script_block("Scripts", &[]), "#### Scripts\n\n```bash\n```");
    }
}
