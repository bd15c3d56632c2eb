use anyhow::Context;
use arrow::{csv::WriterBuilder, record_batch::RecordBatch};
use parquet::{arrow::ArrowWriter, basic::Compression, file::properties::WriterProperties};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};
use tracing::info;

use crate::error::{CleanError, Result};

/// Write `batch` as comma-separated text with a header row, replacing any
/// existing file. Nulls become empty fields. Returns the bytes written.
#[tracing::instrument(level = "info", skip(batch, path), fields(path = %path.display()))]
pub fn write_csv(batch: &RecordBatch, path: &Path) -> Result<u64> {
    let bytes = write_csv_file(batch, path).map_err(|e| write_error(path, e))?;
    info!(rows = batch.num_rows(), bytes, "wrote csv");
    Ok(bytes)
}

/// Write `batch` as a Snappy-compressed Parquet file.
#[tracing::instrument(level = "info", skip(batch, path), fields(path = %path.display()))]
pub fn write_parquet(batch: &RecordBatch, path: &Path) -> Result<u64> {
    let bytes = write_parquet_file(batch, path).map_err(|e| write_error(path, e))?;
    info!(rows = batch.num_rows(), bytes, "wrote parquet");
    Ok(bytes)
}

fn write_error(path: &Path, err: anyhow::Error) -> CleanError {
    CleanError::Write {
        path: path.to_path_buf(),
        reason: format!("{:#}", err),
    }
}

fn write_csv_file(batch: &RecordBatch, path: &Path) -> anyhow::Result<u64> {
    let file =
        File::create(path).with_context(|| format!("creating file {}", path.display()))?;

    let mut writer = WriterBuilder::new()
        .with_header(true)
        .with_delimiter(b',')
        .build(BufWriter::new(file));
    writer.write(batch).context("writing batch to csv")?;
    writer
        .into_inner()
        .flush()
        .context("flushing csv writer")?;

    let metadata = fs::metadata(path).context("getting file metadata")?;
    Ok(metadata.len())
}

fn write_parquet_file(batch: &RecordBatch, path: &Path) -> anyhow::Result<u64> {
    let file =
        File::create(path).with_context(|| format!("creating file {}", path.display()))?;

    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();

    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))
        .context("creating parquet writer")?;
    writer.write(batch).context("writing batch to parquet")?;
    writer.close().context("closing parquet writer")?;

    let metadata = fs::metadata(path).context("getting file metadata")?;
    Ok(metadata.len())
}
