// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Switchyard - pick the right language model for every prompt.
//!
//! This is the binary entry point for the Switchyard router.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod models;
mod route;
mod show_config;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// Switchyard - pick the right language model for every prompt.
#[derive(Parser, Debug)]
#[command(name = "switchyard", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file (environment overrides still apply).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Route one or more prompts and show the chosen model for each.
    Route {
        /// Prompts to route, one argument each.
        #[arg(required = true)]
        prompts: Vec<String>,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List the registered models.
    Models {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Route a set of sample prompts and show the resulting statistics.
    Demo {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => switchyard_config::load_and_validate_path(path),
        None => switchyard_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            switchyard_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.router.log_level);

    let use_color = !cli.plain && std::io::stdout().is_terminal();

    let result = match cli.command {
        Commands::Route { prompts, json } => route::run_route(&config, &prompts, json, use_color),
        Commands::Models { json } => models::run_models(&config, json, use_color),
        Commands::Demo { json } => route::run_demo(&config, json, use_color),
        Commands::Config => show_config::run_config(&config),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize the tracing subscriber. Logs go to stderr so stdout stays
/// parseable with `--json`.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("switchyard={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
