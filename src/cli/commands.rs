//! CLI command implementations

use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            seed,
        } => {
            let config = resolve_config(config.as_deref(), host, port, seed)?;
            serve(config)
        }
    }
}

/// Build the effective config: file (or defaults), then flag overrides
pub fn resolve_config(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    seed: Option<u64>,
) -> CliResult<HttpServerConfig> {
    let mut config = match config_path {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    config.validate()?;
    Ok(config)
}

/// Start the HTTP server and block until it stops
///
/// 1. Logging
/// 2. Tokio runtime
/// 3. Bind and serve until Ctrl-C
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    observability::init_tracing(&config.log_filter)
        .map_err(|e| CliError::logging_error(format!("Failed to initialize logging: {}", e)))?;

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}
