//! Text-generation provider seam.
//!
//! The orchestrator only needs "prompt in, text (or nothing) out". Concrete
//! providers implement [`TextProvider`]; [`GeminiProvider`] talks to Google's
//! Generative Language API.

mod gemini;

use async_trait::async_trait;

pub use gemini::GeminiProvider;

use crate::error::ProviderError;

/// Adapter interface for a hosted text-generation model.
///
/// The trait is object-safe so a generator can hold `Arc<dyn TextProvider>`.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Human-readable provider name (e.g. "gemini").
    fn name(&self) -> &str;

    /// Model identifier sent with every request.
    fn model(&self) -> &str;

    /// Generate text for a prompt.
    ///
    /// `Ok(None)` means the provider answered but produced no text; callers
    /// treat that as an empty string, not as a failure.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ProviderError>;
}
