//! Public configuration types.
//!
//! These are the resolved, ready-to-use structs the rest of the crate
//! consumes. Raw TOML deserialization types live in `raw.rs`.

// ── Comms ───────────────────────────────────────────────────────────────────

/// Console (interactive stdin/stdout) channel configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Whether the console channel is explicitly enabled.
    pub enabled: bool,
}

/// Axum HTTP channel configuration.
#[derive(Debug, Clone)]
pub struct AxumChannelConfig {
    /// Whether the axum channel is explicitly enabled.
    pub enabled: bool,
    /// Socket address to bind the axum listener to.
    pub bind: String,
}

/// Comms subsystem configuration.
#[derive(Debug, Clone)]
pub struct CommsConfig {
    pub console: ConsoleConfig,
    pub axum_channel: AxumChannelConfig,
}

// ── LLM ──────────────────────────────────────────────────────────────────────

/// OpenAI / OpenAI-compatible provider configuration.
/// Populated from `[llm.openai]` in the TOML.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Full chat completions endpoint URL.
    pub api_base_url: String,
    /// Model name passed in the request body.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum output tokens per completion.
    pub max_tokens: u32,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

/// LLM subsystem configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Active provider id: `"openai"` or `"dummy"`.
    pub provider: String,
    pub openai: OpenAiConfig,
}

// ── Top-level ────────────────────────────────────────────────────────────────

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Assistant display name.
    pub name: String,
    /// Log level string (validated by the logger module).
    pub log_level: String,
    /// Optional prompt template directory (see `chat::prompt`).
    pub prompts_dir: Option<String>,
    pub comms: CommsConfig,
    pub llm: LlmConfig,
    /// API key from `OPENAI_API_KEY` env - never read from TOML.
    pub llm_api_key: Option<String>,
}
