//! Command-line interface for send-test-messages
//!
//! # Usage Examples
//!
//! ```bash
//! # Defaults: 10 messages, 2 seconds apart, to localhost:9092 / orders
//! send-test-messages
//!
//! # Reproducible customer/product choices
//! send-test-messages --count 5 --delay 0.5 --seed 42
//!
//! # Authenticated cluster
//! send-test-messages --kafka-brokers broker:9093 \
//!   --producer-config security.protocol=SASL_SSL \
//!   --producer-config sasl.mechanisms=PLAIN
//! ```
//!
//! Logs go to stderr and are filtered with `RUST_LOG` (default `info`).
//! The delivery report is printed to stdout.

use clap::Parser;
use send_test_messages::{run, shutdown_on_ctrl_c, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let shutdown = shutdown_on_ctrl_c();

    if let Err(e) = run(cli, shutdown).await {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}
