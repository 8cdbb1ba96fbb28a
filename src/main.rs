//! quote-service entry point
//!
//! Parses CLI arguments, dispatches the command, and exits non-zero on
//! failure. All logic lives in the CLI module.

use quote_service::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
