use arrow::{
    array::{Array, BooleanArray},
    compute::filter_record_batch,
    record_batch::RecordBatch,
};

use crate::{
    columns::{LOS, SALARY},
    error::Result,
    table::string_column,
};

/// Keep only rows where both `SALARY` and `LOS` are present. Survivors keep
/// their relative order.
pub fn retain_complete(batch: &RecordBatch) -> Result<RecordBatch> {
    let salary = string_column(batch, SALARY)?;
    let los = string_column(batch, LOS)?;

    let keep: BooleanArray = (0..batch.num_rows())
        .map(|i| Some(salary.is_valid(i) && los.is_valid(i)))
        .collect();

    Ok(filter_record_batch(batch, &keep)?)
}
