// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Explore monotonic Parikh families and print those no word realizes.
//!
//! Settings come from `PARIKH_*` environment variables and the optional
//! file named by `PARIKH_CONFIG`. Log verbosity follows `RUST_LOG`.

use anyhow::{Context, Result};
use parikh_search::config::LogFormat;
use parikh_search::driver::TracingObserver;
use parikh_search::{ExplorationConfig, ExplorationDriver};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() -> Result<()> {
    let path = std::env::var("PARIKH_CONFIG").ok();
    let config = ExplorationConfig::load(path.as_deref()).context("loading configuration")?;
    init_tracing(config.log_format);

    let driver = ExplorationDriver::new(config).context("starting exploration")?;
    let report = driver.run(&mut TracingObserver);

    for family in &report.counterexamples {
        println!("{}", serde_json::to_string(family).context("serializing family")?);
    }
    for (name, value) in report.statistics.entries() {
        info!(counter = name, value, "statistics");
    }
    info!(
        stop_reason = ?report.stop_reason,
        families = report.families_examined(),
        counterexamples = report.counterexamples.len(),
        undecided = report.undecided.len(),
        "done"
    );
    Ok(())
}
