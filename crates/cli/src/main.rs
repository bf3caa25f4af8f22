//! Chef Kiss CLI - The restaurant menu in a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Start the interactive shell (default)
//! chef-kiss
//! chef-kiss shell
//!
//! # Start with an empty menu instead of the house dishes
//! chef-kiss --empty-menu shell
//!
//! # Print the menu with per-category averages
//! chef-kiss menu
//! chef-kiss menu --json
//!
//! # Print only the per-category averages
//! chef-kiss averages
//! ```
//!
//! # Commands
//!
//! - `shell` - Browse, manage, order and check out interactively
//! - `menu` - Print the browse screen
//! - `averages` - Print the average price of each category
//!
//! All state lives in memory for the lifetime of the process.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};

use chef_kiss_core::{AppState, MenuStore};

mod config;
mod error;
mod logging;
mod render;
mod shell;

use config::CliConfig;
use error::{CliError, Result};
use shell::Shell;

#[derive(Parser)]
#[command(name = "chef-kiss")]
#[command(author, version, about = "Chef Kiss restaurant menu")]
struct Cli {
    /// Start with an empty menu instead of the house dishes
    #[arg(long, global = true)]
    empty_menu: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse, manage, order and check out interactively
    Shell,
    /// Print the menu grouped by category with average prices
    Menu {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the average price of each category
    Averages {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::from_env().map_err(CliError::from) {
        Ok(config) => config,
        Err(e) => {
            logging::init(config::LogFormat::default());
            tracing::error!("Failed to start: {e}");
            std::process::exit(1);
        }
    };

    logging::init(config.log_format);

    let state = initial_state(&config, cli.empty_menu);
    let command = cli.command.unwrap_or(Commands::Shell);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(command, state, io::stdin().lock(), &mut out) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// The house menu unless the environment or `--empty-menu` turns it off.
fn initial_state(config: &CliConfig, empty_menu: bool) -> AppState {
    let state = if config.seed_menu && !empty_menu {
        AppState::seeded()
    } else {
        AppState::new(MenuStore::new())
    };
    tracing::debug!(items = state.menu().len(), "menu loaded");
    state
}

fn run(command: Commands, state: AppState, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Shell => {
            let mut shell = Shell::new(state, input, &mut *out);
            shell.run()?;
        }
        Commands::Menu { json } => {
            let screen = state.home_screen();
            if json {
                serde_json::to_writer_pretty(&mut *out, &screen)?;
                writeln!(out)?;
            } else {
                render::home(out, &screen)?;
            }
        }
        Commands::Averages { json } => {
            let averages = state.home_screen().averages;
            if json {
                serde_json::to_writer_pretty(&mut *out, &averages)?;
                writeln!(out)?;
            } else {
                for average in averages {
                    writeln!(out, "{}: {}", average.category, average.average)?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}
