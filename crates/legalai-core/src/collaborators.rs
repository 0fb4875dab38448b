//! Traits for the external collaborators LegalAI delegates to.
//!
//! Both are treated as opaque: the router only hands over a string and takes
//! back a string (or labelled spans). Implementations live in the `legalai`
//! crate (Gemini client, rule-based and HTTP recognizers) and in tests.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::EntitySpan;

/// A generative model that turns a prompt into free text.
///
/// Implementations carry no guarantees about latency or determinism. The
/// returned text is passed to the caller unmodified.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Model identifier, used in logs.
    fn model_name(&self) -> &str;

    /// Generate a completion for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// A named-entity recognition pipeline.
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    fn name(&self) -> &str;

    /// Recognize entities in `text`, in document order.
    async fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>>;
}
