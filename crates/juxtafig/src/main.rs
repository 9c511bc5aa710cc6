mod cli;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use juxtafig_core::config::datasets::DATASETS;
use juxtafig_core::pipeline::{self, RenderConfig};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only LaTeX.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match cli.command.unwrap_or(cli::Command::Render {
        datasets: Vec::new(),
        standalone: false,
    }) {
        cli::Command::Render {
            datasets,
            standalone,
        } => {
            info!(?datasets, standalone, "starting render");

            let config = RenderConfig {
                datasets,
                standalone,
            };
            let figures = pipeline::run_pipeline(&config, std::io::stdout().lock())
                .context("render failed")?;

            info!(figures, "render complete");
            Ok(())
        }
        cli::Command::List => list_datasets(),
    }
}

/// Print one tab-separated `name title size step` row per dataset.
fn list_datasets() -> Result<()> {
    let mut out = std::io::stdout().lock();
    for d in &DATASETS {
        writeln!(out, "{}\t{}\t{}\t{}", d.name, d.title, d.size, d.step)
            .context("failed to write dataset list")?;
    }
    Ok(())
}
