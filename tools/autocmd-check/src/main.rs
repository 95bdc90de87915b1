//! autocmd-check - keeps the autocmd event table in sync with Neovim.
//!
//! `list` prints the table. `check` asks a Neovim build (or a saved event
//! list) for its event names, compares them with the table, and tries to
//! subscribe to every name the table defines.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod cli;
mod config;
mod error;
mod logging;
mod output;
mod report;
mod source;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error::print_error(&e);
            return ExitCode::from(2);
        }
    };

    logging::init(&config);
    debug!(nvim = %config.nvim.display(), "configuration loaded");

    match cli.run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error::print_error(&e);
            ExitCode::from(2)
        }
    }
}
