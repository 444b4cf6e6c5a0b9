//! Answer Resolver - turns flags, prompts and remembered answers into a
//! [`GenerationConfig`].
//!
//! Every field follows the same rule: a value given on the command line is
//! authoritative and its question is never asked; otherwise the user is
//! prompted with the remembered answer as the default.

use tracing::{debug, instrument};

use crate::{
    application::ports::Prompter,
    domain::{
        Driver, GenerationConfig, GenerationOptions, PromptDefaults, Question, ServiceCategory,
        ServiceName,
    },
    error::HatchResult,
};

/// A resolved config plus the answers to remember for the next run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub config: GenerationConfig,
    pub answers: PromptDefaults,
}

pub struct AnswerResolver<'a> {
    prompter: &'a dyn Prompter,
}

impl<'a> AnswerResolver<'a> {
    pub fn new(prompter: &'a dyn Prompter) -> Self {
        Self { prompter }
    }

    /// Resolve a config.
    ///
    /// # Errors
    ///
    /// Invalid names and unparseable answers are domain validation errors,
    /// raised before anything touches the filesystem. Prompter failures
    /// propagate unchanged.
    #[instrument(skip_all, fields(
        category = ?options.category,
        driver = ?options.driver,
        name = ?options.name,
    ))]
    pub fn resolve(
        &self,
        options: GenerationOptions,
        defaults: &PromptDefaults,
    ) -> HatchResult<Resolution> {
        let category = match options.category {
            Some(category) => category,
            None => self
                .prompter
                .ask(&Question::service_type(defaults.service_type))?
                .parse::<ServiceCategory>()?,
        };

        let driver = if category.needs_driver() {
            Some(match options.driver {
                Some(driver) => driver,
                None => self
                    .prompter
                    .ask(&Question::database(defaults.database))?
                    .parse::<Driver>()?,
            })
        } else {
            if let Some(dropped) = options.driver {
                debug!(driver = %dropped, "Ignoring database for a generic service");
            }
            None
        };

        let raw_name = match options.name {
            Some(name) => name,
            None => self.prompter.ask(&Question::name(defaults.name.clone()))?,
        };
        let name = ServiceName::parse(raw_name)?;

        let config = GenerationConfig::new(name, category, driver);
        debug!(config = %config, template = %config.template_kind(), "Answers resolved");

        let answers = PromptDefaults {
            service_type: Some(category),
            database: driver.or(defaults.database),
            name: Some(config.name().to_string()),
        };

        Ok(Resolution { config, answers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockPrompter;
    use crate::domain::{DomainError, TemplateKind, entities::question};
    use crate::error::HatchError;
    use mockall::predicate::function;

    fn answering(pairs: &'static [(&'static str, &'static str)]) -> MockPrompter {
        let mut prompter = MockPrompter::new();
        prompter.expect_ask().returning(move |q| {
            pairs
                .iter()
                .find(|(key, _)| *key == q.key)
                .map(|(_, value)| value.to_string())
                .ok_or_else(|| HatchError::Internal {
                    message: format!("unexpected question {}", q.key),
                })
        });
        prompter
    }

    #[test]
    fn flags_suppress_every_prompt() {
        let mut prompter = MockPrompter::new();
        prompter.expect_ask().never();

        let options = GenerationOptions {
            category: Some(ServiceCategory::Database),
            driver: Some(Driver::MongoDb),
            name: Some("messages".into()),
        };
        let resolution = AnswerResolver::new(&prompter)
            .resolve(options, &PromptDefaults::default())
            .unwrap();

        assert_eq!(resolution.config.template_kind(), TemplateKind::Mongoose);
        assert_eq!(resolution.config.plural_name(), "messages");
    }

    #[test]
    fn database_prompt_only_for_database_services() {
        let prompter = answering(&[("type", "generic"), ("name", "box")]);

        let resolution = AnswerResolver::new(&prompter)
            .resolve(GenerationOptions::default(), &PromptDefaults::default())
            .unwrap();

        assert_eq!(resolution.config.driver(), None);
        assert_eq!(resolution.config.template_kind(), TemplateKind::Generic);
        assert_eq!(resolution.config.plural_name(), "boxes");
    }

    #[test]
    fn prompts_in_order_for_database_services() {
        let mut prompter = MockPrompter::new();
        let mut seq = mockall::Sequence::new();
        for (key, answer) in [("type", "database"), ("database", "postgres"), ("name", "users")] {
            prompter
                .expect_ask()
                .with(function(move |q: &Question| q.key == key))
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_| Ok(answer.to_string()));
        }

        let resolution = AnswerResolver::new(&prompter)
            .resolve(GenerationOptions::default(), &PromptDefaults::default())
            .unwrap();

        assert_eq!(resolution.config.template_kind(), TemplateKind::Sequelize);
    }

    #[test]
    fn remembered_answers_become_question_defaults() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_ask()
            .with(function(|q: &Question| q.key == question::KEY_DATABASE))
            .returning(|q| Ok(q.default.clone().unwrap_or_default()));
        prompter
            .expect_ask()
            .with(function(|q: &Question| q.key == question::KEY_NAME))
            .returning(|q| Ok(q.default.clone().unwrap_or_default()));

        let defaults = PromptDefaults {
            service_type: Some(ServiceCategory::Database),
            database: Some(Driver::NeDb),
            name: Some("notes".into()),
        };
        let options = GenerationOptions {
            category: Some(ServiceCategory::Database),
            ..Default::default()
        };

        let resolution = AnswerResolver::new(&prompter).resolve(options, &defaults).unwrap();

        assert_eq!(resolution.config.driver(), Some(Driver::NeDb));
        assert_eq!(resolution.config.name().as_str(), "notes");
    }

    #[test]
    fn generic_flag_drops_supplied_driver() {
        let prompter = answering(&[("name", "audit")]);
        let options = GenerationOptions {
            category: Some(ServiceCategory::Generic),
            driver: Some(Driver::Postgres),
            name: None,
        };

        let resolution = AnswerResolver::new(&prompter)
            .resolve(options, &PromptDefaults::default())
            .unwrap();

        assert_eq!(resolution.config.driver(), None);
    }

    #[test]
    fn answers_keep_remembered_database_for_generic_runs() {
        let prompter = answering(&[]);
        let defaults = PromptDefaults {
            database: Some(Driver::MySql),
            ..Default::default()
        };
        let options = GenerationOptions {
            category: Some(ServiceCategory::Generic),
            driver: None,
            name: Some("ping".into()),
        };

        let resolution = AnswerResolver::new(&prompter).resolve(options, &defaults).unwrap();

        assert_eq!(
            resolution.answers,
            PromptDefaults {
                service_type: Some(ServiceCategory::Generic),
                database: Some(Driver::MySql),
                name: Some("ping".into()),
            }
        );
    }

    #[test]
    fn invalid_name_is_a_validation_error() {
        let prompter = answering(&[("type", "generic"), ("name", "   ")]);

        let err = AnswerResolver::new(&prompter)
            .resolve(GenerationOptions::default(), &PromptDefaults::default())
            .unwrap_err();

        assert!(matches!(
            err,
            HatchError::Domain(DomainError::InvalidServiceName { .. })
        ));
    }
}
