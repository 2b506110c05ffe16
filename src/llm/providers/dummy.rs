//! Dummy LLM provider - echoes the last user entry back prefixed with `[echo]`.
//! Used for testing the full request path without a real API key.

use crate::chat::{EntryRole, ExchangeEntry};
use crate::llm::ProviderError;

#[derive(Debug, Clone)]
pub struct DummyProvider;

impl DummyProvider {
    pub async fn complete(&self, entries: &[ExchangeEntry]) -> Result<String, ProviderError> {
        let last_user = entries
            .iter()
            .rev()
            .find(|e| e.role == EntryRole::User)
            .map(|e| e.content.as_str())
            .unwrap_or_default();
        Ok(format!("[echo] {last_user}"))
    }
}
