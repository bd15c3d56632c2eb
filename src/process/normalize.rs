use arrow::{
    array::{ArrayRef, StringArray},
    record_batch::RecordBatch,
};
use std::sync::Arc;

use crate::{
    error::Result,
    process::utils::strip_float_suffix,
    table::{replace_column, string_column},
};

/// Rewrite each named code column in place with its `.0` suffix removed.
/// Nulls stay null.
pub fn normalize_codes(batch: &RecordBatch, code_columns: &[&str]) -> Result<RecordBatch> {
    let mut out = batch.clone();
    for name in code_columns {
        let normalized: StringArray = string_column(&out, name)?
            .iter()
            .map(|opt| opt.map(strip_float_suffix))
            .collect();
        out = replace_column(&out, name, Arc::new(normalized) as ArrayRef)?;
    }
    Ok(out)
}
