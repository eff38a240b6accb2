//! hoslog library root.
//! Exposes the CLI parser, the high-level run() function and the engines:
//! the duty-status timeline, the route-position projector and their adapters.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, &cli.config_path())
        }
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Itinerary { .. } => cli::commands::itinerary::handle(&cli.command, cfg),
        Commands::Markers { .. } => cli::commands::markers::handle(&cli.command, cfg),
        Commands::Locate { .. } => cli::commands::locate::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ logging (RUST_LOG, warn by default)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init()
        .ok();

    // 2️⃣ parse CLI
    let cli = Cli::parse();

    // 3️⃣ load config once; `init` writes it, so it must not fail on a broken file
    let cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load_from(&cli.config_path())?,
    };

    // 4️⃣ dispatch
    dispatch(&cli, &cfg)
}
