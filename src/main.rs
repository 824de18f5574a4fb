//! hello-probe: container health check.
//!
//! Entry point. Initializes tracing on stderr, runs a single probe against the
//! fixed target, and exits 0 when it answered 200, 1 otherwise.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_probe::config::{LogFormat, ProbeConfig, TARGET_URL};
use hello_probe::probe;

/// Check that http://localhost:8080/hello answers 200 OK
#[derive(Parser, Debug)]
#[command(name = "hello-probe", version, about)]
struct Args {
    /// Optional configuration file (logging settings only)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "hello_probe=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(config: &ProbeConfig, filter: &str) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    match config.logging.format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Exit codes are reserved for probe results: 0 healthy, 1 anything else.
    // That includes --help, --version and usage errors, none of which probe.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprint!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = match args.config.as_deref().map(ProbeConfig::load) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            eprintln!("hello-probe: {}", e);
            return ExitCode::FAILURE;
        }
        None => ProbeConfig::default(),
    };

    // Priority: CLI > env > config file > default
    let log_filter = config.log_filter(args.log_level, std::env::var("RUST_LOG").ok());
    init_tracing(&config, &log_filter);

    tracing::debug!(target_url = TARGET_URL, "Starting probe");

    probe::run().await.exit_code()
}
