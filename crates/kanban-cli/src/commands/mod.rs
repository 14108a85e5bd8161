//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use kanban_core::config::KanbanConfig;
use std::path::PathBuf;

pub mod board;
pub mod serve;

/// Kanban - lists of tasks in the browser or the terminal
#[derive(Parser)]
#[command(name = "kanban")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a kanban.toml (defaults to ./kanban.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web board
    Serve(serve::ServeArgs),

    /// Render a board in the terminal
    Board(board::BoardArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let cwd = std::env::current_dir()?;
        let config = KanbanConfig::load(self.config.as_deref(), &cwd)?;
        tracing::debug!(?config, "Configuration loaded");

        match self.command {
            Commands::Serve(args) => serve::execute(args, &config).await,
            Commands::Board(args) => board::execute(args, &config).await,
        }
    }
}
