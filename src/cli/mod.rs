//! Command-line interface definitions.

pub mod cross;
pub mod knapsack;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::config::{LoggingConfig, PuzzleFile};

/// Ferryman - crossing puzzles as integer programs.
#[derive(Parser, Debug)]
#[command(name = "ferryman")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,
}

impl Cli {
    /// Resolve logging settings before anything else runs: flags win, then
    /// the puzzle file's `[logging]` table, then the defaults. A file that
    /// fails to load here falls back to the defaults; the command handler
    /// surfaces the real error.
    #[must_use]
    pub fn logging(&self) -> LoggingConfig {
        let mut logging = match &self.command {
            Commands::Cross(args) => args
                .config
                .as_deref()
                .and_then(|path| PuzzleFile::load(path).ok())
                .map(|file| file.logging)
                .unwrap_or_default(),
            Commands::Knapsack(_) => LoggingConfig::default(),
        };
        if let Some(level) = &self.log_level {
            logging.level.clone_from(level);
        }
        if self.json_logs {
            logging.format = "json".into();
        }
        logging
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan a river crossing (wolf/goat/cabbage by default)
    Cross(CrossArgs),

    /// Pack a knapsack (five-item sample instance by default)
    Knapsack(KnapsackArgs),
}

/// Arguments for the `cross` subcommand.
#[derive(Parser, Debug)]
pub struct CrossArgs {
    /// Path to a TOML puzzle definition
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the planning horizon
    #[arg(long)]
    pub horizon: Option<usize>,

    /// Print the assembled model before solving
    #[arg(long)]
    pub show_model: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `knapsack` subcommand.
#[derive(Parser, Debug)]
pub struct KnapsackArgs {
    /// Comma-separated item values
    #[arg(long, value_delimiter = ',')]
    pub values: Option<Vec<Decimal>>,

    /// Comma-separated item weights
    #[arg(long, value_delimiter = ',')]
    pub weights: Option<Vec<Decimal>>,

    /// Weight capacity
    #[arg(long)]
    pub capacity: Option<Decimal>,

    /// Print the assembled model before solving
    #[arg(long)]
    pub show_model: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}
