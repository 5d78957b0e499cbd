//! Clears all flutter_secure_storage items from the macOS Keychain.
//!
//! Used by factory reset, since the `security` CLI tool cannot reach items
//! in the data protection keychain. Status lines go to stdout; diagnostics
//! go to stderr and are controlled with `RUST_LOG`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use purge_core::{platform_store, PurgeConfig, Purger};

/// Clears all flutter_secure_storage items from the Data Protection and legacy Keychains
#[derive(Parser, Debug)]
#[command(name = "clear-keychain")]
#[command(author = "Symbia Labs")]
#[command(version)]
struct Args {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _args = Args::parse();

    // stdout is reserved for status lines
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let purger = Purger::new(platform_store(), PurgeConfig::default())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    purger.run(&mut out)?;

    Ok(())
}
