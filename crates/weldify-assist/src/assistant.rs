//! User-facing assistant operations.

use weldify_calc::WeldingParameters;

use crate::error::AssistError;
use crate::generator::TextGenerator;
use crate::prompts;

/// Outcome of an assistant operation.
///
/// Both variants carry displayable text; callers branch on the variant,
/// never on the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Generated answer.
    Text(String),
    /// User-visible `Error: ...` message. The cause has already been logged.
    Failed(String),
}

impl Reply {
    /// The text to show, whichever variant this is.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Failed(text) => text,
        }
    }

    /// Whether generation failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// One operation per assistant screen.
///
/// Generator errors are logged and turned into [`Reply::Failed`], never
/// returned.
pub struct Assistant<G> {
    generator: G,
}

impl<G: TextGenerator> Assistant<G> {
    /// Wrap a generator.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Suggest starting machine settings.
    pub fn suggest_parameters(&self, params: &WeldingParameters) -> Reply {
        self.run(
            "parameter suggestion",
            &prompts::parameter_suggestion_prompt(params),
            "Cannot get AI suggestions.",
        )
    }

    /// Diagnose a weld defect. `material` and `process` may be blank.
    pub fn analyze_defect(&self, description: &str, material: &str, process: &str) -> Reply {
        if description.trim().is_empty() {
            return Reply::Failed("Error: describe the defect to analyse.".to_owned());
        }
        self.run(
            "defect analysis",
            &prompts::defect_analysis_prompt(description, material, process),
            "Cannot analyse the defect.",
        )
    }

    /// Answer a general welding question.
    pub fn ask(&self, question: &str) -> Reply {
        if question.trim().is_empty() {
            return Reply::Failed("Error: enter a question.".to_owned());
        }
        self.run(
            "general question",
            &prompts::general_question_prompt(question),
            "Cannot get information.",
        )
    }

    fn run(&self, operation: &str, prompt: &str, unavailable: &str) -> Reply {
        match self.generator.generate(prompt) {
            Ok(text) => Reply::Text(text),
            Err(AssistError::MissingApiKey) => {
                tracing::warn!(operation, "assistant called without an API key");
                Reply::Failed(format!("Error: API key not configured. {unavailable}"))
            }
            Err(err) => {
                tracing::warn!(operation, error = %err, "text generation failed");
                Reply::Failed(
                    "Error communicating with the AI service. Please try again later.".to_owned(),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;
    use weldify_calc::WeldingProcess;

    use super::*;
    use crate::UnconfiguredGenerator;

    #[test]
    fn test_reply_passed_through() {
        let seen = Mutex::new(String::new());
        let assistant = Assistant::new(|prompt: &str| -> Result<String, AssistError> {
            seen.lock().unwrap().push_str(prompt);
            Ok("### Settings\n* **Amperage:** 90-110 A".to_owned())
        });

        let reply = assistant.suggest_parameters(&WeldingParameters {
            process: Some(WeldingProcess::Smaw),
            ..Default::default()
        });

        assert_eq!(reply, Reply::Text("### Settings\n* **Amperage:** 90-110 A".to_owned()));
        assert!(seen.lock().unwrap().contains("Process: SMAW (Stick / MMA)"));
    }

    #[test]
    fn test_missing_key_message() {
        let assistant = Assistant::new(UnconfiguredGenerator);
        assert_eq!(
            assistant.ask("What is spatter?"),
            Reply::Failed("Error: API key not configured. Cannot get information.".to_owned())
        );
        assert_eq!(
            assistant.analyze_defect("cracks", "", "").text(),
            "Error: API key not configured. Cannot analyse the defect."
        );
    }

    #[test]
    fn test_service_failure_message() {
        let assistant = Assistant::new(|_: &str| -> Result<String, AssistError> {
            Err(AssistError::HttpResponse {
                status: 503,
                body: "overloaded".to_owned(),
            })
        });
        let reply = assistant.ask("What is spatter?");
        assert!(reply.is_failed());
        assert_eq!(
            reply.text(),
            "Error communicating with the AI service. Please try again later."
        );
    }

    #[test]
    fn test_blank_input_skips_generator() {
        let assistant = Assistant::new(|_: &str| -> Result<String, AssistError> {
            panic!("generator must not be called")
        });
        assert!(assistant.ask("   ").is_failed());
        assert!(assistant.analyze_defect("", "Aluminium", "GTAW").is_failed());
    }

    #[test]
    fn test_reply_starting_with_error_is_not_a_failure() {
        let assistant = Assistant::new(|_: &str| -> Result<String, AssistError> {
            Ok("Errors in GMAW are usually caused by poor shielding.".to_owned())
        });

        let reply = assistant.ask("Why does my MIG weld have porosity?");

        assert!(!reply.is_failed());
        assert_eq!(
            reply,
            Reply::Text("Errors in GMAW are usually caused by poor shielding.".to_owned())
        );
    }
}
