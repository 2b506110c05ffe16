//! Console comms channel - reads lines from stdin, forwards them as
//! specialist requests, prints the reply to stdout.
//!
//! Implements [`Component`] so the comms subsystem can spawn it as an
//! independent task. All provider communication goes through
//! [`CommsState::ask`] - this module has no wire-layer access.
//!
//! One conversation session per channel run. Runs until the `shutdown`
//! token is cancelled (Ctrl-C) or stdin is closed.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::chat::{ANSWER_HEADER, EMPTY_REQUEST_MESSAGE};
use crate::error::AppError;
use crate::roles::SpecialistRole;
use crate::runtime::{Component, ComponentFuture};

use super::state::CommsState;

// ── ConsoleChannel ───────────────────────────────────────────────────────────

/// A console channel instance. Multiple instances would each get a unique id.
pub struct ConsoleChannel {
    channel_id: String,
    state: Arc<CommsState>,
}

impl ConsoleChannel {
    pub fn new(channel_id: impl Into<String>, state: Arc<CommsState>) -> Self {
        Self {
            channel_id: channel_id.into(),
            state,
        }
    }
}

impl Component for ConsoleChannel {
    fn id(&self) -> &str {
        &self.channel_id
    }

    fn run(self: Box<Self>, shutdown: CancellationToken) -> ComponentFuture {
        Box::pin(run_console(self.channel_id, self.state, shutdown))
    }
}

// ── Input parsing ─────────────────────────────────────────────────────────────

/// What a console input line means.
#[derive(Debug, PartialEq, Eq)]
enum ConsoleInput {
    /// Switch persona (`/role N` or `/role <id>`).
    SelectRole(SpecialistRole),
    /// `/role` with a missing or unknown argument.
    BadRole(String),
    /// `/roles` - list the persona menu again.
    ListRoles,
    /// `/help`
    Help,
    /// Anything else is a request for the current persona.
    Request(String),
}

fn parse_input(line: &str) -> ConsoleInput {
    let line = line.trim();
    if line == "/roles" {
        return ConsoleInput::ListRoles;
    }
    if line == "/role" {
        return ConsoleInput::BadRole(String::new());
    }
    if let Some(arg) = line.strip_prefix("/role ") {
        let arg = arg.trim();
        if arg.is_empty() {
            return ConsoleInput::BadRole(String::new());
        }
        // Accept a 1-based menu number or a role id/label.
        if let Ok(n) = arg.parse::<usize>() {
            return match n.checked_sub(1).and_then(|i| SpecialistRole::ALL.get(i)) {
                Some(role) => ConsoleInput::SelectRole(*role),
                None => ConsoleInput::BadRole(arg.to_string()),
            };
        }
        return match arg.parse::<SpecialistRole>() {
            Ok(role) => ConsoleInput::SelectRole(role),
            Err(_) => ConsoleInput::BadRole(arg.to_string()),
        };
    }
    if line == "/help" {
        return ConsoleInput::Help;
    }
    ConsoleInput::Request(line.to_string())
}

fn print_role_menu(current: SpecialistRole) {
    println!("LLMに振る舞わせる専門家の種類:");
    for (i, role) in SpecialistRole::ALL.into_iter().enumerate() {
        let marker = if role == current { "*" } else { " " };
        println!(" {marker}{}. {}", i + 1, role.label());
    }
    println!("(/role N で切り替え)");
}

// ── run_console ──────────────────────────────────────────────────────────────

async fn run_console(
    channel_id: String,
    state: Arc<CommsState>,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    info!(%channel_id, "console channel started - type a request and press Enter. Ctrl-C to quit.");
    println!("─────────────────────────────────");
    println!(" 専門家AIアシスタント  (Ctrl-C で終了)");
    println!("─────────────────────────────────");

    let mut role = SpecialistRole::ALL[0];
    print_role_menu(role);

    // One conversation session for the life of this channel.
    let mut session_id: Option<Uuid> = None;

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        print!("> ");
        use std::io::Write as _;
        let _ = std::io::stdout().flush();

        tokio::select! {
            biased;

            _ = shutdown.cancelled() => {
                println!("\n[console] shutdown signal received - closing channel");
                info!("console channel shutting down");
                break;
            }

            line = lines.next_line() => {
                match line {
                    Err(e) => {
                        warn!("console read error: {e}");
                        break;
                    }
                    Ok(None) => {
                        info!("console stdin closed");
                        break;
                    }
                    Ok(Some(input)) => {
                        match parse_input(&input) {
                            ConsoleInput::Help => {
                                println!("/role N    専門家を切り替え (1-{})", SpecialistRole::ALL.len());
                                println!("/roles     専門家の一覧を表示");
                                println!("/help      このヘルプ");
                                println!("それ以外の入力はリクエストとして送信されます。");
                            }
                            ConsoleInput::ListRoles => print_role_menu(role),
                            ConsoleInput::SelectRole(selected) => {
                                role = selected;
                                println!("専門家: {}", role.label());
                            }
                            ConsoleInput::BadRole(arg) => {
                                println!("不明な専門家です: {arg}");
                                print_role_menu(role);
                            }
                            ConsoleInput::Request(request) => {
                                // Empty input is handled here at the channel
                                // boundary; the provider is never called.
                                if request.is_empty() {
                                    println!("{EMPTY_REQUEST_MESSAGE}");
                                    continue;
                                }

                                debug!(%role, request = %request, "console request");

                                match state.ask(session_id, role, &request).await {
                                    Err(e) => {
                                        warn!("ask failed: {e}");
                                        println!("エラー: {e}");
                                    }
                                    Ok(reply) => {
                                        session_id = Some(reply.session_id);
                                        println!("{ANSWER_HEADER}");
                                        println!("{}", reply.reply);
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
