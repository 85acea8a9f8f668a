// ABOUTME: Pulse CLI - command-line access to NGX Pulse state and services
// ABOUTME: Generates programs, drives the auth provider, and inspects persisted UI state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse
//!
//! Usage:
//! ```bash
//! # Generate a program from a request file, reproducibly
//! pulse-cli program generate --request request.json --seed 42
//!
//! # Generate from arguments
//! pulse-cli program generate --track fitness --goal weight_loss:Perder\ peso:fitness
//!
//! # Sign in with the configured auth provider
//! pulse-cli auth sign-in --email demo@ngx.ai --password secret
//!
//! # Toggle the persisted sidebar flag
//! pulse-cli sidebar toggle
//!
//! # Show trial days remaining
//! pulse-cli trial status
//!
//! # Call the backend
//! pulse-cli api healthz
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use ngx_pulse::{
    config::ServerConfig,
    constants::service_names,
    errors::AppResult,
    logging::{LogFormat, LoggingConfig},
    storage::{factory::create_store, factory::StorageConfig, KeyValueStore},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "pulse-cli",
    about = "NGX Pulse CLI",
    long_about = "Command-line tool for NGX Pulse program generation, auth sessions, and persisted UI state."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Storage file override (defaults to PULSE_STORAGE_PATH or the platform data dir)
    #[arg(long, global = true)]
    storage_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Program generation
    Program {
        #[command(subcommand)]
        action: ProgramCommand,
    },

    /// Authentication session
    Auth {
        #[command(subcommand)]
        action: AuthCommand,
    },

    /// Persisted sidebar state
    Sidebar {
        #[command(subcommand)]
        action: SidebarCommand,
    },

    /// Free trial countdown
    Trial {
        #[command(subcommand)]
        action: TrialCommand,
    },

    /// Backend API calls
    Api {
        #[command(subcommand)]
        action: ApiCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProgramCommand {
    /// Generate a program and print it as JSON
    Generate {
        /// Request JSON file; overrides the argument form
        #[arg(long)]
        request: Option<PathBuf>,

        /// Program track (fitness or nutrition)
        #[arg(long, default_value = "fitness")]
        track: String,

        /// Goal as `id:label:category`, repeatable
        #[arg(long = "goal")]
        goals: Vec<String>,

        /// Experience level
        #[arg(long, default_value = "beginner")]
        experience: String,

        /// Preference as `key=value`, repeatable
        #[arg(long = "pref")]
        preferences: Vec<String>,

        /// Requesting user id
        #[arg(long, default_value = "cli-user")]
        user_id: String,

        /// Fixed RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Apply the configured artificial latency
        #[arg(long)]
        simulate_latency: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum AuthCommand {
    /// Sign in with email and password
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Register a new account
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Show the stored session
    Session,

    /// Sign out and clear the stored session
    SignOut,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SidebarCommand {
    /// Print the collapsed flag
    Show,
    /// Flip the collapsed flag
    Toggle,
    /// Collapse the sidebar
    Collapse,
    /// Expand the sidebar
    Expand,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum TrialCommand {
    /// Days remaining, starting the trial if needed
    Status,
    /// Forget the trial start date
    Reset,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ApiCommand {
    /// GET /_healthz
    Healthz {
        /// Backend base URL (defaults to API_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// GET /routes/ai-coach-messages/
    Messages {
        /// Backend base URL (defaults to API_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,
    },
}

fn open_store(cli_path: Option<PathBuf>, config: &ServerConfig) -> Result<Arc<dyn KeyValueStore>> {
    let storage = match (cli_path, &config.storage) {
        (Some(path), _) => StorageConfig::File { path },
        (None, StorageConfig::File { path }) => StorageConfig::File { path: path.clone() },
        (None, StorageConfig::Memory) => StorageConfig::default_file(),
    };
    debug!(?storage, "Opening CLI storage");
    create_store(&storage)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: if cli.verbose { "debug" } else { "warn" }.to_owned(),
        format: LogFormat::Compact,
        ..LoggingConfig::from_env().for_service(service_names::PULSE_CLI)
    };
    if let Err(e) = logging.init() {
        eprintln!("Logging disabled: {e}");
    }

    let config = ServerConfig::from_env()?;

    match cli.command {
        Command::Program { action } => match action {
            ProgramCommand::Generate {
                request,
                track,
                goals,
                experience,
                preferences,
                user_id,
                seed,
                simulate_latency,
            } => {
                let request = match request {
                    Some(path) => commands::program::read_request(&path)?,
                    None => commands::program::build_request(
                        &track,
                        &goals,
                        experience,
                        &preferences,
                        user_id,
                    )?,
                };
                let service_config = commands::program::service_config(
                    &config.programs,
                    seed,
                    simulate_latency,
                );
                commands::program::generate(&service_config, &request).await?;
            }
        },
        Command::Auth { action } => {
            let store = open_store(cli.storage_path, &config)?;
            let provider = ngx_pulse::auth::create_auth_provider(&config.auth, store)?;
            match action {
                AuthCommand::SignIn { email, password } => {
                    commands::auth::sign_in(provider.as_ref(), &email, &password).await?;
                }
                AuthCommand::SignUp { email, password } => {
                    commands::auth::sign_up(provider.as_ref(), &email, &password).await?;
                }
                AuthCommand::Session => commands::auth::session(provider.as_ref()).await?,
                AuthCommand::SignOut => commands::auth::sign_out(provider.as_ref()).await?,
            }
        }
        Command::Sidebar { action } => {
            let store = open_store(cli.storage_path, &config)?;
            let sidebar = ngx_pulse::sidebar::SidebarState::mount(store)?;
            match action {
                SidebarCommand::Show => {}
                SidebarCommand::Toggle => {
                    sidebar.toggle()?;
                }
                SidebarCommand::Collapse => sidebar.collapse()?,
                SidebarCommand::Expand => sidebar.expand()?,
            }
            helpers::display::display_sidebar(sidebar.is_collapsed());
        }
        Command::Trial { action } => {
            let store = open_store(cli.storage_path, &config)?;
            let tracker = ngx_pulse::trial::TrialTracker::new(store);
            match action {
                TrialCommand::Status => commands::ui::trial_status(&tracker, &config.features)?,
                TrialCommand::Reset => commands::ui::trial_reset(&tracker)?,
            }
        }
        Command::Api { action } => match action {
            ApiCommand::Healthz { base_url } => {
                commands::api::healthz(base_url.as_deref().unwrap_or(&config.api_base_url)).await?;
            }
            ApiCommand::Messages { base_url } => {
                commands::api::messages(base_url.as_deref().unwrap_or(&config.api_base_url))
                    .await?;
            }
        },
    }

    Ok(())
}
