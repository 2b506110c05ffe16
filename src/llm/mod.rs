//! LLM provider abstraction.
//!
//! `LlmProvider` is an enum over concrete provider implementations.
//! Add a new variant + module in `providers/` for each additional backend.
//!
//! Provider instances are shared immutable capabilities - clone them freely.
//! Async is delegated to the underlying provider; the `complete` method is
//! `async fn` on the enum so callers need no trait-object machinery.

pub mod providers;

use thiserror::Error;

use crate::chat::ExchangeEntry;
use crate::config::LlmConfig;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("provider request failed: {0}")]
    Request(String),
}

// ── Provider enum ─────────────────────────────────────────────────────────────

/// All available provider backends.
///
/// Enum dispatch avoids `dyn` trait objects and the `async-trait` dependency.
/// Adding a backend = new module + new variant + new `complete` arm.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    Dummy(providers::dummy::DummyProvider),
    OpenAi(providers::openai_compatible::OpenAiCompatibleProvider),
}

impl LlmProvider {
    /// Build the provider selected in `config`. `api_key` comes from the
    /// `OPENAI_API_KEY` env - never TOML.
    pub fn build(config: &LlmConfig, api_key: Option<String>) -> Result<Self, ProviderError> {
        match config.provider.as_str() {
            "dummy" => Ok(LlmProvider::Dummy(providers::dummy::DummyProvider)),
            "openai" => Ok(LlmProvider::OpenAi(
                providers::openai_compatible::OpenAiCompatibleProvider::new(
                    config.openai.clone(),
                    api_key,
                )?,
            )),
            other => Err(ProviderError::UnknownProvider(other.to_string())),
        }
    }

    /// Send the full exchange history to the provider and return the text of
    /// its reply. One round-trip; no retry, no streaming consumption.
    pub async fn complete(&self, entries: &[ExchangeEntry]) -> Result<String, ProviderError> {
        match self {
            LlmProvider::Dummy(p) => p.complete(entries).await,
            LlmProvider::OpenAi(p) => p.complete(entries).await,
        }
    }

    /// Lightweight reachability probe; see the provider implementations.
    pub async fn ping(&self) -> Result<(), ProviderError> {
        match self {
            LlmProvider::Dummy(_) => Ok(()),
            LlmProvider::OpenAi(p) => p.ping().await,
        }
    }

    /// Provider id as used in config (`"dummy"`, `"openai"`).
    pub fn id(&self) -> &'static str {
        match self {
            LlmProvider::Dummy(_) => "dummy",
            LlmProvider::OpenAi(_) => "openai",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn build_dummy_provider() {
        let cfg = Config::test_default();
        let provider = LlmProvider::build(&cfg.llm, None).unwrap();
        assert_eq!(provider.id(), "dummy");
    }

    #[test]
    fn build_openai_provider() {
        let mut cfg = Config::test_default();
        cfg.llm.provider = "openai".into();
        let provider = LlmProvider::build(&cfg.llm, Some("sk-test".into())).unwrap();
        assert_eq!(provider.id(), "openai");
    }

    #[test]
    fn build_unknown_provider_errors() {
        let mut cfg = Config::test_default();
        cfg.llm.provider = "grok9000".into();
        let err = LlmProvider::build(&cfg.llm, None).unwrap_err();
        assert!(matches!(err, ProviderError::UnknownProvider(_)));
        assert!(err.to_string().contains("grok9000"));
    }
}
