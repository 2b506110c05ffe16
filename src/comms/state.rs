//! Shared state for the comms subsystem - capability boundary for channels.
//!
//! Channels receive an `Arc<CommsState>` and are restricted to the typed
//! methods below. The provider handle is private; channels cannot reach the
//! wire layer directly.
//!
//! # Sessions
//!
//! Each session id owns an isolated [`Conversation`]. Histories accumulate
//! for the life of the process (a session is never pruned), but are scoped
//! to their session instead of being shared process-wide - one web visitor
//! or one console run cannot see or grow another's history.

use std::collections::HashMap;

use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::chat::{Conversation, RolePrompt};
use crate::error::AppError;
use crate::llm::LlmProvider;
use crate::roles::SpecialistRole;

/// Reply to a channel's [`ask`](CommsState::ask) call.
#[derive(Debug, Clone)]
pub struct AskReply {
    pub reply: String,
    pub session_id: Uuid,
}

/// Shared state passed as `Arc<CommsState>` to every channel task.
pub struct CommsState {
    /// Provider handle - private so channels can't bypass session handling.
    provider: LlmProvider,
    prompt: RolePrompt,
    model: String,
    sessions: Mutex<HashMap<Uuid, Conversation>>,
}

impl CommsState {
    pub fn new(provider: LlmProvider, prompt: RolePrompt, model: impl Into<String>) -> Self {
        Self {
            provider,
            prompt,
            model: model.into(),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Forward `request` as `role` within the given session and await the
    /// assistant's reply.
    ///
    /// This is the primary outbound path for all comms channels. The session's
    /// conversation gains exactly one system entry and one user entry before
    /// the remote call, and one assistant entry when the call succeeds.
    /// `None` creates a fresh session; the returned id addresses it on the
    /// next turn.
    ///
    /// Empty-input checks belong to the channel boundary - callers pass
    /// non-empty requests only.
    pub async fn ask(
        &self,
        session_id: Option<Uuid>,
        role: SpecialistRole,
        request: &str,
    ) -> Result<AskReply, AppError> {
        // Append the exchange and snapshot the history. The lock is not held
        // across the provider round-trip.
        let (session_id, entries) = {
            let mut sessions = self.sessions.lock().await;
            let id = match session_id {
                Some(id) => id,
                None => {
                    let id = Uuid::new_v4();
                    debug!(session_id = %id, "comms: session created");
                    id
                }
            };
            let conversation = sessions.entry(id).or_default();
            conversation.push_exchange(self.prompt.render(role), request);
            (id, conversation.entries().to_vec())
        };

        debug!(session_id = %session_id, %role, entries = entries.len(), "dispatching to llm provider");

        let reply = self
            .provider
            .complete(&entries)
            .await
            .map_err(|e| AppError::Llm(e.to_string()))?;

        {
            let mut sessions = self.sessions.lock().await;
            if let Some(conversation) = sessions.get_mut(&session_id) {
                conversation.record_reply(&reply);
            }
        }

        Ok(AskReply { reply, session_id })
    }

    /// Probe provider reachability (backs the health endpoint).
    pub async fn ping(&self) -> Result<(), AppError> {
        self.provider
            .ping()
            .await
            .map_err(|e| AppError::Llm(e.to_string()))
    }

    /// Provider id as configured (`"dummy"`, `"openai"`).
    pub fn provider_id(&self) -> &'static str {
        self.provider.id()
    }

    /// Configured model name (reported by the health endpoint).
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Number of entries in a session's history; `None` if the session does
    /// not exist.
    pub async fn session_len(&self, session_id: Uuid) -> Option<usize> {
        self.sessions.lock().await.get(&session_id).map(|c| c.len())
    }

    /// Number of live sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
