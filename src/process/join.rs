use arrow::{
    array::{Array, ArrayRef, StringArray},
    record_batch::RecordBatch,
};
use std::sync::Arc;
use tracing::info;

use crate::{
    columns::{AGENCY_NAME, AGYSUB},
    error::Result,
    process::utils::normalize_agency_name,
    reference::AgencyLookup,
    table::{append_columns, string_column},
};

/// Left-join `AGYSUBT` onto each row by `AGYSUB` and append it, cleaned, as
/// `AGENCY_NAME`. Rows without a match keep every column and get a null name.
pub fn attach_agency_names(batch: &RecordBatch, lookup: &AgencyLookup) -> Result<RecordBatch> {
    let codes = string_column(batch, AGYSUB)?;
    let names = agency_names(codes, lookup);

    info!(
        rows = batch.num_rows(),
        unmatched = names.null_count(),
        "joined agency names"
    );

    append_columns(batch, vec![(AGENCY_NAME, Arc::new(names) as ArrayRef)])
}

fn agency_names(codes: &StringArray, lookup: &AgencyLookup) -> StringArray {
    codes
        .iter()
        .map(|opt| {
            opt.and_then(|code| lookup.get(code))
                .map(normalize_agency_name)
        })
        .collect()
}
