use std::io;

use quicksort::harness::{self, HarnessConfig, HarnessError};

fn main() -> Result<(), HarnessError> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .try_init();

    let config = HarnessConfig::default();
    tracing::debug!(size = config.size, "starting benchmark harness");

    harness::run(&config, &mut io::stdout().lock())?;
    Ok(())
}
