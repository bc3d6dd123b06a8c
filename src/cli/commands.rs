//! CLI command implementations
//!
//! Boot sequence for `start`: load schema, build the validator once, then
//! open the listener. A schema failure aborts before any socket exists.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::observability::Logger;
use crate::predict::UpstreamPredictor;
use crate::schema::SchemaLoader;
use crate::server::{InferenceServer, ServerConfig};
use crate::validation::BatchValidator;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Start {
            schema,
            upstream,
            host,
            port,
        } => start(&schema, &upstream, host, port),
        Command::Check { schema, batch } => check(&schema, &batch),
    }
}

/// Boot the gateway and serve until terminated.
pub fn start(schema_path: &Path, upstream: &str, host: String, port: u16) -> CliResult<()> {
    let schema = SchemaLoader::load(schema_path)?;
    let validator = BatchValidator::new(&schema);

    Logger::info(
        "SCHEMA_LOADED",
        &[
            ("path", &schema_path.display().to_string()),
            ("features", &schema.feature_count().to_string()),
        ],
    );

    let config = ServerConfig {
        host,
        port,
        cors_origins: Vec::new(),
    };
    let server = InferenceServer::new(config, validator, UpstreamPredictor::new(upstream));

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(e.to_string()))
}

/// One-shot validation of a batch file against a schema.
///
/// Prints the violation list as JSON to stdout and exits non-zero on
/// rejection; prints nothing on acceptance.
pub fn check(schema_path: &Path, batch_path: &Path) -> CliResult<()> {
    let schema = SchemaLoader::load(schema_path)?;
    let validator = BatchValidator::new(&schema);

    let content = fs::read_to_string(batch_path)
        .map_err(|e| CliError::io_error(format!("Failed to read batch file: {}", e)))?;
    let batch: Value = serde_json::from_str(&content)?;

    match validator.validate(Some(&batch)) {
        Ok(_) => Ok(()),
        Err(rejection) => {
            let rendered = serde_json::to_string_pretty(&rejection)
                .unwrap_or_else(|_| "{\"violations\":[]}".to_string());
            println!("{}", rendered);
            Err(CliError::batch_rejected(rejection.count()))
        }
    }
}
