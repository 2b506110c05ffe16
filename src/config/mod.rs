//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory
//! (or the `-f` path), then applies the `SENMON_LOG_LEVEL` env override.
//!
//! # Module layout
//!
//! - **types** - Public configuration structs consumed by the rest of the
//!   crate (`Config`, `LlmConfig`, `CommsConfig`, …).
//! - **raw** - Raw TOML deserialization types (`RawConfig`, `RawLlm`, …).
//!   These mirror the file shape and use serde defaults; kept private.
//! - **load** - Loading logic: `merge_toml`, `load_raw_merged`, `load`,
//!   `load_from`.

mod load;
mod raw;
mod types;

pub use load::{load, load_from};
pub use types::*;

#[cfg(test)]
impl Config {
    /// Safe `Config` for unit tests - dummy LLM, no API key, no external calls.
    pub fn test_default() -> Self {
        Self {
            name: "test".into(),
            log_level: "info".into(),
            prompts_dir: None,
            comms: CommsConfig {
                console: ConsoleConfig { enabled: true },
                axum_channel: AxumChannelConfig {
                    enabled: false,
                    bind: "127.0.0.1:0".into(),
                },
            },
            llm: LlmConfig {
                provider: "dummy".into(),
                openai: OpenAiConfig {
                    api_base_url: "http://localhost:0/v1/chat/completions".into(),
                    model: "test-model".into(),
                    temperature: 0.0,
                    max_tokens: 1000,
                    timeout_seconds: 1,
                },
            },
            llm_api_key: None,
        }
    }
}
