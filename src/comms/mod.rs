//! Comms subsystem - manages all user-facing channels.
//!
//! # Architecture
//!
//! Each channel (console, axum web form) implements [`Component`] and is
//! spawned as an independent concurrent task by [`start`] via
//! [`spawn_components`]. Channels capture their shared [`Arc<CommsState>`]
//! at construction time - no state is passed through the generic
//! `Component::run` signature.
//!
//! # Starting
//!
//! [`start`] is synchronous - it returns a [`SubsystemHandle`] as soon as
//! the tasks are spawned. The caller decides when (or whether) to await it.

pub mod state;

#[cfg(feature = "channel-console")]
pub mod console;
#[cfg(feature = "channel-axum")]
pub mod axum_channel;

pub use state::{AskReply, CommsState};

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::Config;
use crate::runtime::{spawn_components, Component, SubsystemHandle};

/// Spawn all configured comms channels and return a [`SubsystemHandle`].
///
/// Channels start immediately. If any channel exits with an error the shared
/// `shutdown` token is cancelled so siblings stop cooperatively. The handle
/// resolves when all channels have exited.
pub fn start(
    config: &Config,
    state: Arc<CommsState>,
    shutdown: CancellationToken,
) -> SubsystemHandle {
    let mut components: Vec<Box<dyn Component>> = Vec::new();

    #[cfg(feature = "channel-console")]
    {
        if config.comms.console.enabled {
            info!("loading console channel");
            components.push(Box::new(console::ConsoleChannel::new(
                "console0",
                state.clone(),
            )));
        }
    }

    #[cfg(feature = "channel-axum")]
    {
        if config.comms.axum_channel.enabled {
            info!(bind = %config.comms.axum_channel.bind, "loading axum channel");
            components.push(Box::new(axum_channel::AxumChannel::new(
                "axum0",
                config.comms.axum_channel.bind.clone(),
                state.clone(),
            )));
        }
    }

    if components.is_empty() {
        info!("no comms channels configured - waiting for shutdown");
    }

    spawn_components(components, shutdown)
}
