//! Math-utils Demo Binary
//!
//! Run with: cargo run -p mathutils-cli
//!
//! Prints primality, Fibonacci and fixed-point quantization examples to
//! stdout. Logs go to stderr, filtered by `RUST_LOG`.

mod config;
mod report;

use std::io::{self, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{DemoConfig, DEFAULT_LOG_FILTER};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = DemoConfig::from_env();
    tracing::info!("Starting math-utils demo v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        integer_bits = config.integer_bits,
        fractional_bits = config.fractional_bits,
        "Demo format"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::run(&mut out, &config)?;
    out.flush()?;

    Ok(())
}
