use std::io::{self, Write};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::config::RunConfig;

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = RunConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    workouts::run(&config.packages, &mut out)?;
    out.flush()?;

    Ok(())
}
