//! CLI argument definitions using clap
//!
//! Commands:
//! - infergate start --schema <path> --upstream <url> [--host H] [--port P]
//! - infergate check --schema <path> --batch <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// infergate - A schema-strict gateway for batched prediction requests
#[derive(Parser, Debug)]
#[command(name = "infergate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the inference gateway server
    Start {
        /// Path to the schema descriptor file
        #[arg(long, default_value = "./schema.json")]
        schema: PathBuf,

        /// URL of the upstream scoring endpoint
        #[arg(long)]
        upstream: String,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },

    /// Validate a batch file against a schema and exit
    Check {
        /// Path to the schema descriptor file
        #[arg(long, default_value = "./schema.json")]
        schema: PathBuf,

        /// Path to the JSON batch file
        #[arg(long)]
        batch: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
