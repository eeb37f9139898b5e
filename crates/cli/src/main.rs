//! # anycopy: Marketing Copy From the Command Line
//!
//! A thin entrypoint. All logic lives in the `anycopy_cli` library crate.

use anyhow::Result;
use anycopy_cli::{run, Cli};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the generated copy.
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("[anycopy error] {e}");
        std::process::exit(1);
    }

    Ok(())
}
