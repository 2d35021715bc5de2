//! Settings shared by jobs and the `default` section.

use serde::Serialize;

use crate::dsl::fields::{
    Artifacts, Cache, CacheList, Image, Retry, Rule, Rules, ScriptLines, StageName, Variables,
};
use crate::dsl::{Dispatcher, HandlerKind, JobKeyword, KeywordHandler, RawNode, Vocabulary};
use crate::error::SchemaResult;

/// A recognized keyword without a dedicated renderer, kept as its raw value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Setting {
    pub keyword: JobKeyword,
    pub value: RawNode,
}

/// Validated job settings. `None` means the keyword was absent; a present but
/// empty value stays `Some(empty)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobSettings {
    /// Set by the scalar handler; the job moves it into [`Job::stage`](super::Job).
    #[serde(skip)]
    pub stage: Option<String>,
    pub image: Option<Image>,
    pub before_scripts: Option<Vec<String>>,
    pub scripts: Option<Vec<String>>,
    pub after_scripts: Option<Vec<String>>,
    pub variables: Option<Variables>,
    pub rules: Option<Vec<Rule>>,
    pub artifacts: Option<Artifacts>,
    pub cache: Option<Vec<Cache>>,
    pub retry: Option<Retry>,
    /// Generic settings in first-seen order.
    pub residual: Vec<Setting>,
}

impl JobSettings {
    /// Validate one dispatched keyword and store it. The handler kind picks
    /// the schema family; the keyword picks the slot inside it.
    pub(crate) fn apply(
        &mut self,
        dispatcher: &Dispatcher,
        keyword: JobKeyword,
        handler: KeywordHandler,
        value: &RawNode,
    ) -> SchemaResult<()> {
        let name = keyword.as_str();
        match handler.kind {
            HandlerKind::Scalar => {
                self.stage = Some(dispatcher.validate::<StageName>(name, value)?.0);
            }
            HandlerKind::Sequence => {
                let lines = dispatcher.validate::<ScriptLines>(name, value)?.into_lines();
                match self.script_slot(keyword) {
                    Some(slot) => *slot = Some(lines),
                    None => self.push_residual(dispatcher, keyword, value),
                }
            }
            HandlerKind::Structured => self.apply_structured(dispatcher, keyword, value)?,
            HandlerKind::Generic => self.push_residual(dispatcher, keyword, value),
        }
        Ok(())
    }

    fn script_slot(&mut self, keyword: JobKeyword) -> Option<&mut Option<Vec<String>>> {
        match keyword {
            JobKeyword::Script => Some(&mut self.scripts),
            JobKeyword::BeforeScript => Some(&mut self.before_scripts),
            JobKeyword::AfterScript => Some(&mut self.after_scripts),
            _ => None,
        }
    }

    fn apply_structured(
        &mut self,
        dispatcher: &Dispatcher,
        keyword: JobKeyword,
        value: &RawNode,
    ) -> SchemaResult<()> {
        let name = keyword.as_str();
        match keyword {
            JobKeyword::Image => self.image = Some(dispatcher.validate::<Image>(name, value)?),
            JobKeyword::Variables => {
                self.variables = Some(dispatcher.validate::<Variables>(name, value)?)
            }
            JobKeyword::Rules => {
                self.rules = Some(dispatcher.validate::<Rules>(name, value)?.into_vec())
            }
            JobKeyword::Artifacts => {
                self.artifacts = Some(dispatcher.validate::<Artifacts>(name, value)?)
            }
            JobKeyword::Cache => {
                self.cache = Some(dispatcher.validate::<CacheList>(name, value)?.into_vec())
            }
            JobKeyword::Retry => self.retry = Some(dispatcher.validate::<Retry>(name, value)?),
            _ => self.push_residual(dispatcher, keyword, value),
        }
        Ok(())
    }

    fn push_residual(&mut self, dispatcher: &Dispatcher, keyword: JobKeyword, value: &RawNode) {
        tracing::trace!(keyword = keyword.as_str(), scope = %dispatcher.scope(), "residual setting");
        self.residual.push(Setting {
            keyword,
            value: value.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn apply_all(pairs: &[(&str, RawNode)]) -> SchemaResult<JobSettings> {
        let dispatcher = Dispatcher::job_body("job");
        let mut settings = JobSettings::default();
        for (key, value) in pairs {
            let keyword = JobKeyword::lookup(key).unwrap();
            settings.apply(&dispatcher, keyword, keyword.handler(), value)?;
        }
        Ok(settings)
    }

    #[test]
    fn test_structured_keywords_land_in_fields() {
        let settings = apply_all(&[
            ("image", json!("rust")),
            ("script", json!("cargo test")),
            ("retry", json!(1)),
            ("cache", json!({"key": "k"})),
        ])
        .unwrap();
        assert_eq!(settings.image, Some(Image::Name("rust".into())));
        assert_eq!(settings.scripts, Some(vec!["cargo test".to_string()]));
        assert_eq!(settings.retry.unwrap().max, Some(1));
        assert_eq!(settings.cache.unwrap().len(), 1);
        assert!(settings.residual.is_empty());
    }

    #[test]
    fn test_generic_keywords_keep_order() {
        let settings = apply_all(&[
            ("tags", json!(["docker"])),
            ("needs", json!(["build"])),
            ("allow_failure", json!(true)),
        ])
        .unwrap();
        let keywords: Vec<JobKeyword> = settings.residual.iter().map(|s| s.keyword).collect();
        assert_eq!(
            keywords,
            vec![JobKeyword::Tags, JobKeyword::Needs, JobKeyword::AllowFailure]
        );
        assert_eq!(settings.residual[0].value, json!(["docker"]));
    }

    #[test]
    fn test_empty_script_stays_empty() {
        let settings = apply_all(&[("after_script", json!([]))]).unwrap();
        assert_eq!(settings.after_scripts, Some(vec![]));
        assert_eq!(settings.scripts, None);
    }

    #[test]
    fn test_invalid_shape_names_keyword() {
        let err = apply_all(&[("artifacts", json!("dist/"))]).unwrap_err();
        assert_eq!(err.keyword(), Some("artifacts"));
        assert_eq!(err.job(), Some("job"));
    }

    #[test]
    fn test_routing_follows_handler_kind() {
        let dispatcher = Dispatcher::job_body("job");
        let mut settings = JobSettings::default();

        // A structured keyword handed a generic handler is kept raw, unvalidated.
        let generic = KeywordHandler {
            kind: HandlerKind::Generic,
            in_default: false,
        };
        settings
            .apply(&dispatcher, JobKeyword::Cache, generic, &json!("not-a-cache"))
            .unwrap();
        assert_eq!(settings.cache, None);
        assert_eq!(settings.residual[0].keyword, JobKeyword::Cache);

        // The scalar handler fills the stage slot.
        settings
            .apply(&dispatcher, JobKeyword::Stage, JobKeyword::Stage.handler(), &json!(3))
            .unwrap();
        assert_eq!(settings.stage.as_deref(), Some("3"));

        // A sequence handler validates script lines.
        let err = settings
            .apply(
                &dispatcher,
                JobKeyword::Script,
                JobKeyword::Script.handler(),
                &json!({"not": "lines"}),
            )
            .unwrap_err();
        assert_eq!(err.keyword(), Some("script"));
    }

}
