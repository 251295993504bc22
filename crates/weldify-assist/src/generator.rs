//! Text generation seam.

use crate::error::AssistError;

/// Turns a prompt into generated text.
///
/// Implemented by [`GeminiClient`](crate::GeminiClient) and by any
/// `Fn(&str) -> Result<String, AssistError>`, which keeps tests free of HTTP.
pub trait TextGenerator: Send + Sync {
    /// Generate a reply to `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`AssistError`] if no text could be produced.
    fn generate(&self, prompt: &str) -> Result<String, AssistError>;
}

impl<F> TextGenerator for F
where
    F: Fn(&str) -> Result<String, AssistError> + Send + Sync,
{
    fn generate(&self, prompt: &str) -> Result<String, AssistError> {
        self(prompt)
    }
}

/// Generator used when no API key is configured. Always fails with
/// [`AssistError::MissingApiKey`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredGenerator;

impl TextGenerator for UnconfiguredGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, AssistError> {
        Err(AssistError::MissingApiKey)
    }
}
