//! ValidaRFC service.
//!
//! Checks whether a string has the lexical shape of a Mexican tax
//! identifier (RFC) over a small JSON API.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌─────────────────────────────────────────────┐
//!                     │                  VALIDARFC                  │
//!                     │                                             │
//!   Client Request    │  ┌──────────┐   ┌──────────┐   ┌─────────┐  │
//!   ──────────────────┼─▶│  http    │──▶│ handlers │──▶│   rfc   │  │
//!                     │  │ server + │   │          │   │validator│  │
//!   Client Response   │  │middleware│◀──│          │◀──│         │  │
//!   ◀─────────────────┼──└──────────┘   └──────────┘   └─────────┘  │
//!                     │                                             │
//!                     │  ┌───────────────────────────────────────┐  │
//!                     │  │        Cross-Cutting Concerns         │  │
//!                     │  │  config · observability · lifecycle   │  │
//!                     │  └───────────────────────────────────────┘  │
//!                     └─────────────────────────────────────────────┘
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::net::TcpListener;

use validarfc::config::resolve_config;
use validarfc::observability::{logging, metrics};
use validarfc::{HttpServer, ServiceConfig, Shutdown};

#[derive(Parser)]
#[command(name = "validarfc")]
#[command(about = "HTTP service that checks the lexical shape of Mexican RFCs", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "VALIDARFC_CONFIG")]
    config: Option<PathBuf>,

    /// Bind address, overrides the config file and environment.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Logging is not up yet, so these two go straight to stderr.
    let config = match resolve_config(args.config.as_deref(), args.bind.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("validarfc: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init_logging(&config.observability) {
        eprintln!("validarfc: failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "validarfc failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ServiceConfig) -> Result<(), Box<dyn Error>> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "validarfc starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        max_bulk_items = config.limits.max_bulk_items,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.listen_for_signals();

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;
    Ok(())
}
