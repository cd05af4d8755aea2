mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod play;
mod session;
mod utils;

use clap::Parser;

use app::{CommandContext, handle_command};
use cli::{Cli, parse_command};
use config::{Config, LoadedConfig};
use error::AppError;
use session::SessionStore;

fn run(cli: Cli) -> Result<(), AppError> {
    let loaded = if cli.no_config {
        LoadedConfig::default()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&loaded.config)?;

    utils::init_logging(cli.debug, cli.log_file.as_deref())?;
    loaded.report();

    let command = parse_command(cli.command);
    let session = cli.session_name()?;
    let store = SessionStore::open_default()?;

    let ctx = CommandContext {
        cli: &cli,
        store: &store,
        session: &session,
        cap: cli.history_cap(),
    };
    handle_command(command, &ctx)
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
