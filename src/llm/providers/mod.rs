//! Concrete provider backends. See [`crate::llm::LlmProvider`] for dispatch.

pub mod dummy;
pub mod openai_compatible;
