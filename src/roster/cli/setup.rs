use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Keep a list of names: add, rename, remove and search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Start with an empty list instead of the configured seed
    #[arg(long, global = true, help_heading = "Options")]
    pub no_seed: bool,

    /// Remove without asking
    #[arg(short, long, global = true, help_heading = "Options")]
    pub yes: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session (the default)
    #[command(alias = "sh")]
    Shell,

    /// Print the list once
    #[command(alias = "ls")]
    List {
        /// Only show names containing this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (seed, confirm-remove, name-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
