// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! ProxHogar - home-services marketplace client.
//!
//! This is the binary entry point for the `proxhogar` command.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod app;
mod commands;
mod doctor;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use proxhogar_config::ProxHogarConfig;

use crate::app::App;
use crate::commands::{JobsCommand, PlansCommand, RequestsCommand, RoleCommand};
use crate::render::Output;

/// ProxHogar - find and hire home-service workers, or work as one.
#[derive(Parser, Debug)]
#[command(name = "proxhogar", version, about, long_about = None)]
struct Cli {
    /// Configuration file to use instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print lists as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new account.
    Register {
        #[arg(long)]
        email: String,
        /// Full name.
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
    },
    /// Log in and store the session.
    Login {
        #[arg(long)]
        email: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show the logged-in account.
    Whoami,
    /// Switch between client and worker views.
    Role {
        #[command(subcommand)]
        action: RoleCommand,
    },
    /// Verify identity and convert this account into a worker account.
    BecomeWorker {
        /// National identity document number (8 digits).
        #[arg(long)]
        dni: String,
        /// Short professional biography.
        #[arg(long)]
        bio: String,
    },
    /// Manage your service requests (client view).
    Requests {
        #[command(subcommand)]
        action: RequestsCommand,
    },
    /// Find work and manage hired jobs (worker view).
    Jobs {
        #[command(subcommand)]
        action: JobsCommand,
    },
    /// Subscription plans.
    Plans {
        #[command(subcommand)]
        action: PlansCommand,
    },
    /// Show your worker profile and received reviews.
    Profile,
    /// Suggest a clearer wording for a request description.
    Improve {
        description: String,
    },
    /// Run diagnostic checks.
    Doctor,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => proxhogar_config::load_and_validate_path(path),
        None => proxhogar_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            proxhogar_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);

    let out = Output::new(cli.json, cli.plain);
    if let Err(e) = run(cli.command, config, out).await {
        out.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(
    command: Commands,
    config: ProxHogarConfig,
    out: Output,
) -> Result<(), commands::CommandError> {
    if let Commands::Doctor = command {
        doctor::run_doctor(&config, out).await;
        return Ok(());
    }

    let app = App::init(config, out).await?;
    match command {
        Commands::Register { email, name, phone } => {
            commands::account::register(&app, email, name, phone).await
        }
        Commands::Login { email } => commands::account::login(&app, &email).await,
        Commands::Logout => commands::account::logout(&app).await,
        Commands::Whoami => commands::account::whoami(&app).await,
        Commands::Role { action } => commands::account::role(&app, action).await,
        Commands::BecomeWorker { dni, bio } => {
            commands::account::become_worker(&app, &dni, &bio).await
        }
        Commands::Requests { action } => commands::requests::run(&app, action).await,
        Commands::Jobs { action } => commands::jobs::run(&app, action).await,
        Commands::Plans { action } => commands::plans::run(&app, action).await,
        Commands::Profile => commands::account::profile(&app).await,
        Commands::Improve { description } => {
            commands::requests::improve(&app, &description).await
        }
        Commands::Doctor => Ok(()),
    }
}

/// Logs go to stderr so command output stays clean.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("proxhogar={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
