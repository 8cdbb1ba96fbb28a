//! CLI argument definitions using clap
//!
//! Commands:
//! - quote-service serve [--config <path>] [--host <ip>] [--port <port>] [--seed <n>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// In-memory quote service
#[derive(Parser, Debug)]
#[command(name = "quote-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// IP address to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// Seed for random quote selection (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["quote-service", "serve", "--port", "3000", "--seed", "7"])
            .unwrap();

        match cli.command {
            Command::Serve {
                config,
                host,
                port,
                seed,
            } => {
                assert!(config.is_none());
                assert!(host.is_none());
                assert_eq!(port, Some(3000));
                assert_eq!(seed, Some(7));
            }
        }
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["quote-service", "serve", "--port", "http"]).is_err());
    }
}
