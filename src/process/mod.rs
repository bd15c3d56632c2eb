//! The cleaning pipeline. Stages run in a fixed order, each taking the
//! previous stage's batch and returning a new one:
//! join → completeness filter → code normalization → categorical decode.

pub mod decode;
pub mod filter;
pub mod join;
pub mod normalize;
pub mod utils;

use arrow::record_batch::RecordBatch;
use std::{path::PathBuf, time::Instant};
use tracing::info;

use crate::{
    columns::{DERIVED, EDLVL, GSEGRD, REQUIRED},
    config::PipelineConfig,
    error::{CleanError, Result},
    reference::AgencyLookup,
    table::{read_utf8_csv, require_columns, write_csv, write_parquet},
};

/// Row counts for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub rows_written: usize,
    pub output: PathBuf,
}

/// Apply every transformation stage to an in-memory batch.
pub fn clean_batch(batch: &RecordBatch, lookup: &AgencyLookup) -> Result<RecordBatch> {
    require_columns(batch, REQUIRED)?;
    let schema = batch.schema();
    if let Some(clash) = DERIVED.iter().find(|n| schema.index_of(n).is_ok()) {
        return Err(CleanError::MalformedInput(format!(
            "input already has derived column `{}`",
            clash
        )));
    }

    let joined = join::attach_agency_names(batch, lookup)?;
    let complete = filter::retain_complete(&joined)?;
    let normalized = normalize::normalize_codes(&complete, &[EDLVL, GSEGRD])?;
    decode::decode_categories(&normalized)
}

/// Load, clean, and write one dataset as described by `config`.
#[tracing::instrument(level = "info", skip(config), fields(input = %config.input.display()))]
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    let start = Instant::now();

    // no enrichment is possible without the lookup, so load it first
    let lookup = AgencyLookup::load(&config.reference)?;

    let data = read_utf8_csv(&config.input)
        .map_err(|e| CleanError::MalformedInput(format!("{:#}", e)))?;
    info!(
        rows = data.num_rows(),
        columns = data.num_columns(),
        "loaded input"
    );

    let cleaned = clean_batch(&data, &lookup)?;
    let summary = RunSummary {
        rows_read: data.num_rows(),
        rows_dropped: data.num_rows() - cleaned.num_rows(),
        rows_written: cleaned.num_rows(),
        output: config.output.clone(),
    };
    info!(
        dropped = summary.rows_dropped,
        "removed rows missing SALARY or LOS"
    );

    write_csv(&cleaned, &config.output)?;
    if let Some(parquet_path) = &config.parquet {
        write_parquet(&cleaned, parquet_path)?;
    }

    info!(
        rows = summary.rows_written,
        elapsed = ?start.elapsed(),
        "cleaning complete"
    );
    Ok(summary)
}
