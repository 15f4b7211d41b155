use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "profile-verify")]
#[command(about = "Check whether a social-media profile screenshot looks fake", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify one or more profile screenshots
    Verify {
        /// Image files (JPG, PNG, GIF, ...)
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Override the verification endpoint
        #[arg(long)]
        endpoint: Option<String>,

        /// Request timeout in seconds (0 = none)
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Show or edit settings
    Config {
        /// Set the verification endpoint
        #[arg(long)]
        set_endpoint: Option<String>,

        /// Set the request timeout in seconds (0 = none)
        #[arg(long)]
        set_timeout: Option<u64>,

        /// Restore defaults
        #[arg(long)]
        reset: bool,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}
