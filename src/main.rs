//! update-secrets - push a local file into AWS Secrets Manager and 1Password.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use update_secrets::cli::output;
use update_secrets::cli::{execute, Cli};
use update_secrets::core::constants::LOG_ENV;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("update_secrets=debug")
        } else {
            EnvFilter::new("update_secrets=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());

        // Usage errors are not failures: print the hint and exit cleanly.
        if e.is_usage() {
            output::hint("Show help with [-h] option.");
            std::process::exit(0);
        }
        std::process::exit(1);
    }
}
