//! Insight generator abstraction
//!
//! The service layer only knows how to hand a prompt to something that
//! answers with text. The Gemini-backed implementation lives in
//! `infrastructure::gemini`.

use async_trait::async_trait;

use super::DomainError;

#[async_trait]
pub trait InsightGenerator: Send + Sync {
    /// Send `prompt` to the text-generation service and return its reply unchanged.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;

    fn provider_name(&self) -> &'static str;
}
