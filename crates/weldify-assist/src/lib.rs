//! Generative text assistant for Weldify.
//!
//! [`Assistant`] builds welding prompts and sends them through a
//! [`TextGenerator`]. [`GeminiClient`] is the HTTP implementation;
//! [`UnconfiguredGenerator`] stands in when no API key is set.

mod assistant;
mod error;
mod gemini;
mod generator;
pub mod prompts;

pub use assistant::{Assistant, Reply};
pub use error::AssistError;
pub use gemini::GeminiClient;
pub use generator::{TextGenerator, UnconfiguredGenerator};
