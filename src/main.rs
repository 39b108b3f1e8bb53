//! batchsort - HTTP service for sorting batches of integer arrays

use batchsort::server::builder::{load_config, run_server};
use batchsort::utils::logging::{bootstrap_logging, init_logging};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Command-line options
#[derive(Debug, Parser)]
#[command(name = "batchsort", version, about = "Sort batches of integer arrays over HTTP")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "BATCHSORT_CONFIG")]
    config: Option<PathBuf>,

    /// Host to bind, overriding configuration
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding configuration
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Startup notices go to a temporary subscriber until the configured one is installed.
    let bootstrap = bootstrap_logging();
    let loaded = load_config(cli.config).await;
    drop(bootstrap);

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(host) = cli.host {
        config.service.server.host = host;
    }
    if let Some(port) = cli.port {
        config.service.server.port = port;
    }

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
