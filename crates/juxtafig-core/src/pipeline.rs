use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::datasets::{find_dataset, Dataset, DATASETS};
use crate::document::{document_postamble, document_preamble};
use crate::error::FigureError;
use crate::figure::emit_figure;

/// Parameters for a rendering run.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Dataset names to render. Empty means every dataset.
    pub datasets: Vec<String>,
    /// Wrap the figures in a compilable `article` document.
    pub standalone: bool,
}

/// Resolve the requested dataset names against the dataset table.
///
/// The result always follows table order, regardless of the order names were given in.
pub fn select_datasets(config: &RenderConfig) -> Result<Vec<&'static Dataset>, FigureError> {
    if config.datasets.is_empty() {
        return Ok(DATASETS.iter().collect());
    }

    for name in &config.datasets {
        if find_dataset(name).is_none() {
            return Err(FigureError::UnknownDataset(name.clone()));
        }
    }

    Ok(DATASETS
        .iter()
        .filter(|d| config.datasets.iter().any(|n| n == d.name))
        .collect())
}

/// Render the figure blocks for `datasets`, optionally wrapped in a full document.
pub fn render_document(datasets: &[&Dataset], standalone: bool) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    if standalone {
        lines.extend(document_preamble());
    }

    for d in datasets {
        let figure = emit_figure(d.title, d.name, d.size, d.step)
            .with_context(|| format!("failed to render figure for {}", d.name))?;
        debug!(name = d.name, lines = figure.len(), "rendered dataset");
        lines.extend(figure);
    }

    if standalone {
        lines.extend(document_postamble());
    }
    Ok(lines)
}

/// Render the configured datasets and write them to `out`, one line per row.
///
/// Returns the number of figures written.
pub fn run_pipeline(config: &RenderConfig, out: impl Write) -> Result<usize> {
    let datasets = select_datasets(config).context("invalid dataset selection")?;

    info!(
        dataset_count = datasets.len(),
        standalone = config.standalone,
        "pipeline starting"
    );

    let lines = render_document(&datasets, config.standalone)?;

    let mut out = BufWriter::new(out);
    for line in &lines {
        writeln!(out, "{line}").context("failed to write output")?;
    }
    out.flush().context("failed to flush output")?;

    info!(
        figure_count = datasets.len(),
        line_count = lines.len(),
        "pipeline complete"
    );
    Ok(datasets.len())
}
