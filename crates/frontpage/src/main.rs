use anyhow::Context;
use clap::Parser;
use frontpage_fetch::{Batch, ClientOptions, Fetcher, ReqwestClient};
use tracing::info;

use crate::cli::App;
use crate::config::Settings;
use crate::ui::Reporter;
use crate::ui::tracker::{ProgressTrackerBuilder, TrackerBuilder};

mod cli;
mod config;
mod logging;
mod ui;

fn main() -> anyhow::Result<()> {
    let app = App::parse();
    logging::init(app.verbose);

    let settings = Settings::load(&app)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    runtime.block_on(run(settings))
}

/// Individual download failures are reported, never returned.
async fn run(settings: Settings) -> anyhow::Result<()> {
    let catalog = settings.catalog();
    info!(
        base = catalog.base(),
        urls = catalog.len(),
        output = %settings.output_dir.display(),
        "starting"
    );

    let client = ReqwestClient::with_options(ClientOptions {
        max_idle_per_host: settings.max_connections,
        ..ClientOptions::default()
    })
    .context("failed to build the HTTP client")?;

    let fetcher = Fetcher::with_max_connections(client, &settings.output_dir, settings.max_connections);
    let batch = Batch::new(fetcher);

    let tracker = settings.progress.then(|| {
        ProgressTrackerBuilder::default()
            .with_len(catalog.len() as u64)
            .with_prefix("Scans")
            .with_finish("all scans processed")
            .build()
    });
    let mut reporter = Reporter::new(tracker);

    batch.run(catalog.urls(), |report| reporter.report(report)).await;

    let summary = reporter.finish();
    info!(total = summary.total(), failed = summary.failed, "done");
    Ok(())
}
