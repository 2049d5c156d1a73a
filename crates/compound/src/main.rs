//! compound — compound interest calculator.

use anyhow::Result;
use compound_lib::{app, config};

fn main() -> Result<()> {
    // Initialize tracing on stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    app::run(&config)
}
