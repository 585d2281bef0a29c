//! CLI entry and dispatch.

use anyhow::{Context, Result};
use beescore_core::auth::AuthClient;
use beescore_core::config::Config;
use beescore_core::session::FileSessionStore;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "beescore")]
#[command(version)]
#[command(about = "B-BBEE compliance portal client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the API base URL (falls back to BEESCORE_API_URL, then config)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in as an administrator (headless)
    Login {
        /// Business email
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,
    },

    /// Register a new administrator account (headless)
    Signup {
        /// Company email
        #[arg(long)]
        email: String,

        /// Employee name
        #[arg(long)]
        name: String,

        /// Contact number
        #[arg(long)]
        contact: String,
    },

    /// Clear the persisted session
    Logout,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
}

/// Parses arguments and dispatches to the selected command.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let api_base_url = cli
        .api_url
        .clone()
        .unwrap_or_else(|| config.resolved_api_base_url());

    match cli.command {
        None => run_tui(config, &api_base_url),
        Some(Commands::Login { email, password }) => {
            commands::auth::login(&api_base_url, email, password)
        }
        Some(Commands::Signup {
            email,
            name,
            contact,
        }) => commands::auth::signup(&api_base_url, email, name, contact),
        Some(Commands::Logout) => commands::auth::logout(),
        Some(Commands::Config { command }) => commands::config::run(&command),
    }
}

fn run_tui(config: Config, api_base_url: &str) -> Result<()> {
    let client = AuthClient::from_base_url(api_base_url)?;
    let store = Box::new(FileSessionStore::new());

    // The TUI loop itself is synchronous; the runtime context is needed for
    // the spawned submission and redirect tasks.
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let _guard = runtime.enter();

    let mut tui = beescore_tui::TuiRuntime::new(config, client, store)?;
    tui.run()
}
