//! Conversation state and role-prompt assembly.
//!
//! - **conversation** - role-tagged exchange history, owned by the caller
//!   (one per session) rather than process-global.
//! - **prompt** - the specialist role instruction template.

pub mod conversation;
pub mod prompt;

pub use conversation::{Conversation, EntryRole, ExchangeEntry};
pub use prompt::RolePrompt;

/// Static reply shown when the user submits an empty or whitespace-only
/// request. The remote service is never called in that case.
pub const EMPTY_REQUEST_MESSAGE: &str = "リクエストが入力されていません。";

/// Header printed/rendered above each assistant answer.
pub const ANSWER_HEADER: &str = "回答:";
