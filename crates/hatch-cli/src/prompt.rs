//! [`Prompter`] implementations for the terminal.
//!
//! [`DialoguerPrompter`] asks interactively and is only compiled with the
//! `interactive` feature. [`DefaultsPrompter`] never blocks: it answers each
//! question with its default, and is used for `--yes`, piped stdin and
//! builds without the feature.

use std::io::{self, IsTerminal};

use tracing::debug;

use hatch_core::{
    application::ports::Prompter,
    domain::{DomainError, Question},
    error::HatchResult,
};

/// Pick the prompter for this run.
pub fn select(assume_yes: bool) -> Box<dyn Prompter> {
    if !assume_yes && io::stdin().is_terminal() {
        #[cfg(feature = "interactive")]
        return Box::new(DialoguerPrompter::default());
    }
    debug!(assume_yes, "Using non-interactive prompter");
    Box::new(DefaultsPrompter)
}

/// Answers every question with its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn ask(&self, question: &Question) -> HatchResult<String> {
        match &question.default {
            Some(value) => {
                debug!(question = question.key, value = %value, "Answered from default");
                Ok(value.clone())
            }
            None => Err(DomainError::MissingRequiredField {
                field: question.key,
            }
            .into()),
        }
    }
}

#[cfg(feature = "interactive")]
pub use interactive::DialoguerPrompter;

#[cfg(feature = "interactive")]
mod interactive {
    use dialoguer::{Input, Select, theme::ColorfulTheme};

    use hatch_core::{
        application::{ApplicationError, ports::Prompter},
        domain::{Question, QuestionKind},
        error::HatchResult,
    };

    /// Terminal prompts: selects for choices, text input for free answers.
    #[derive(Default)]
    pub struct DialoguerPrompter {
        theme: ColorfulTheme,
    }

    fn failed(err: dialoguer::Error) -> ApplicationError {
        ApplicationError::PromptFailed {
            reason: err.to_string(),
        }
    }

    impl Prompter for DialoguerPrompter {
        fn ask(&self, question: &Question) -> HatchResult<String> {
            match &question.kind {
                QuestionKind::Select(choices) => {
                    let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
                    let index = Select::with_theme(&self.theme)
                        .with_prompt(question.message)
                        .items(&labels)
                        .default(question.default_index().unwrap_or(0))
                        .interact()
                        .map_err(failed)?;
                    Ok(choices[index].value.clone())
                }
                QuestionKind::Input => {
                    let mut input = Input::<String>::with_theme(&self.theme)
                        .with_prompt(question.message);
                    if let Some(default) = &question.default {
                        input = input.default(default.clone());
                    }
                    Ok(input.interact_text().map_err(failed)?)
                }
            }
        }
    }
}
