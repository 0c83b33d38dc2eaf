//! Greeter CLI
//!
//! Prints the greeting for the default name to standard output. Arguments
//! are ignored.

use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

use greeter::{write_greeting, DEFAULT_NAME};

fn main() -> Result<()> {
    init_tracing();

    let stdout = io::stdout();
    run(&mut stdout.lock())
}

/// Logs go to stderr so stdout carries only the greeting.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<W: Write>(out: &mut W) -> Result<()> {
    tracing::debug!(name = DEFAULT_NAME, "greeting");

    write_greeting(out, DEFAULT_NAME).context("failed to write greeting to stdout")?;

    tracing::debug!("greeting written");
    Ok(())
}
