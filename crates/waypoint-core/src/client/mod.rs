//! Generative-language service clients.
//!
//! The pipeline only depends on the [`Generator`] trait, so tests can swap in
//! scripted implementations while production code uses [`GeminiClient`].

use async_trait::async_trait;

use crate::error::Result;

pub mod gemini;

pub use gemini::GeminiClient;

/// Content generation capability of a remote model service.
///
/// Implementations must report failures as [`crate::PlannerError`] values
/// whose messages carry the service's own wording (status codes, "quota",
/// "network"), because failures are classified by message text.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Sends `prompt` to the model identified by `model` and returns the
    /// reply text.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String>;
}
