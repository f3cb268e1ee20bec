mod cli;
mod emitter;
mod error;
mod latency;
mod mock;

use std::io;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use emitter::{Emitter, EmitterConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Logs share stderr with the debug markers, so stay quiet unless asked.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EmitterConfig::from(cli);

    let mut emitter = Emitter::new(config, io::stdout().lock(), io::stderr().lock());
    emitter.run().await
}
