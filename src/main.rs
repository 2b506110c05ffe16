//! Specialist AI assistant entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Resolve effective log level (CLI `-v` flags > env > config)
//!   4. Init logger once
//!   5. Build the LLM provider and shared comms state
//!   6. Spawn Ctrl-C → shutdown signal watcher
//!   7. Run comms channels (console / web form) until shutdown

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use senmon_assistant::chat::RolePrompt;
use senmon_assistant::comms::{self, CommsState};
use senmon_assistant::config;
use senmon_assistant::error::AppError;
use senmon_assistant::llm::LlmProvider;
use senmon_assistant::logger;
use senmon_assistant::roles::SpecialistRole;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Load .env if present; ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let args = parse_cli_args();

    let mut config = config::load(args.config_path.as_deref())?;

    // Without -i the console channel stays off (daemon-safe default).
    if !args.interactive {
        config.comms.console.enabled = false;
    }

    let effective_log_level = args.log_level.unwrap_or(config.log_level.as_str());
    let force_cli_level = args.log_level.is_some();

    logger::init(effective_log_level, force_cli_level)?;

    info!(
        name = %config.name,
        configured_log_level = %config.log_level,
        effective_log_level = %effective_log_level,
        interactive = %args.interactive,
        "config loaded"
    );

    let provider = LlmProvider::build(&config.llm, config.llm_api_key.clone())
        .map_err(|e| AppError::Config(e.to_string()))?;

    let prompt = match &config.prompts_dir {
        Some(dir) => RolePrompt::from_dir(dir),
        None => RolePrompt::built_in(),
    };

    let state = Arc::new(CommsState::new(
        provider,
        prompt,
        config.llm.openai.model.clone(),
    ));

    // Shared shutdown token: Ctrl-C cancels it, all tasks watch it.
    let shutdown = CancellationToken::new();
    let ctrlc_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received, initiating shutdown");
            ctrlc_token.cancel();
        }
    });

    print_startup_summary(&config, args.interactive);

    // Start comms channels as independent concurrent tasks and wait for them.
    let handle = comms::start(&config, state, shutdown.clone());
    let result = handle.join().await;

    // If comms exited on its own (EOF, bind error), still stop everything.
    shutdown.cancel();

    if args.interactive {
        use std::io::Write as _;
        println!("\nBye :) ...");
        let _ = std::io::stdout().flush();
    }

    result
}

fn print_startup_summary(config: &config::Config, interactive: bool) {
    println!("── {} ──", config.name);
    println!(
        "llm: provider={} model={} temp={} max_tokens={} timeout={}s",
        config.llm.provider,
        config.llm.openai.model,
        config.llm.openai.temperature,
        config.llm.openai.max_tokens,
        config.llm.openai.timeout_seconds
    );

    let console_status = if interactive && config.comms.console.enabled {
        "enabled"
    } else {
        "disabled (pass -i to enable)"
    };
    println!("console: {console_status}");

    if config.comms.axum_channel.enabled {
        println!("web: http://{}", config.comms.axum_channel.bind);
    } else {
        println!("web: disabled");
    }

    println!("roles: {}", SpecialistRole::ALL.map(|r| r.id()).join(", "));

    if interactive {
        println!("💡 Type /help for help");
    }
}

struct CliArgs {
    log_level: Option<&'static str>,
    interactive: bool,
    config_path: Option<String>,
}

fn parse_cli_args() -> CliArgs {
    let mut verbosity = 0u8;
    let mut interactive = false;
    let mut config_path = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: senmon-assistant [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!("  -i, --interactive          Run in interactive mode (enables console channel)");
                println!("  -f, --config <PATH>        Path to configuration file (default: config/default.toml)");
                println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity");
                std::process::exit(0);
            }
            "-i" | "--interactive" => interactive = true,
            "-f" | "--config" => {
                if let Some(path) = iter.next() {
                    config_path = Some(path);
                } else {
                    eprintln!("error: -f/--config requires a path argument");
                    std::process::exit(1);
                }
            }
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            _ => {}
        }
    }

    // Each -v raises verbosity one tier from the config default:
    //   -v      → warn   (suppress info noise, show warnings+errors only)
    //   -vv     → info   (normal operational output)
    //   -vvv    → debug  (flow-level diagnostics: routing, session handling)
    //   -vvvv+  → trace  (full payload dumps, very verbose)
    let log_level = match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("debug"),
        _ => Some("trace"),
    };

    CliArgs { log_level, interactive, config_path }
}
