//! All-`Utf8` Arrow tables: CSV/Parquet I/O plus the column helpers the
//! pipeline stages share.

pub mod read;
pub mod write;

use arrow::{
    array::{ArrayRef, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;

use crate::error::{CleanError, Result};

pub use read::read_utf8_csv;
pub use write::{write_csv, write_parquet};

/// Borrow the named column as a `StringArray`.
pub fn string_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a StringArray> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| CleanError::MalformedInput(format!("missing required column `{}`", name)))?;
    batch
        .column(idx)
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| CleanError::MalformedInput(format!("column `{}` is not text", name)))
}

/// Fail on the first name in `names` that is not a column of `batch`.
pub fn require_columns(batch: &RecordBatch, names: &[&str]) -> Result<()> {
    for name in names {
        string_column(batch, name)?;
    }
    Ok(())
}

/// Swap the array behind column `name`, keeping its position.
pub fn replace_column(batch: &RecordBatch, name: &str, array: ArrayRef) -> Result<RecordBatch> {
    let schema = batch.schema();
    let target = schema
        .index_of(name)
        .map_err(|_| CleanError::MalformedInput(format!("missing required column `{}`", name)))?;

    let cols: Vec<ArrayRef> = batch
        .columns()
        .iter()
        .enumerate()
        .map(|(i, col)| if i == target { array.clone() } else { col.clone() })
        .collect();

    Ok(RecordBatch::try_new(schema, cols)?)
}

/// Append nullable `Utf8` columns after the existing ones, in the given order.
pub fn append_columns(batch: &RecordBatch, extra: Vec<(&str, ArrayRef)>) -> Result<RecordBatch> {
    let schema = batch.schema();
    let mut fields: Vec<Arc<Field>> = schema.fields().iter().cloned().collect();
    let mut cols: Vec<ArrayRef> = batch.columns().to_vec();

    for (name, array) in extra {
        fields.push(Arc::new(Field::new(name, DataType::Utf8, true)));
        cols.push(array);
    }

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), cols)?)
}

/// Build an all-`Utf8` batch from column names and optional cells. Test and
/// fixture helper; rows must match `headers` in length.
pub fn batch_from_rows(headers: &[&str], rows: &[Vec<Option<&str>>]) -> Result<RecordBatch> {
    let fields: Vec<Field> = headers
        .iter()
        .map(|n| Field::new(*n, DataType::Utf8, true))
        .collect();

    let mut cols: Vec<ArrayRef> = Vec::with_capacity(headers.len());
    for i in 0..headers.len() {
        let col: StringArray = rows.iter().map(|row| row.get(i).copied().flatten()).collect();
        cols.push(Arc::new(col));
    }

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), cols)?)
}
