//! Agency translation table (`DTagy.txt`): `AGYSUB` code → raw `AGYSUBT` text.

use arrow::{array::Array, record_batch::RecordBatch};
use std::{
    collections::{hash_map::Entry, HashMap},
    path::Path,
};
use tracing::{info, warn};

use crate::{
    columns::{AGYSUB, AGYSUBT},
    error::{CleanError, Result},
    table::{read_utf8_csv, string_column},
};

#[derive(Debug, Default)]
pub struct AgencyLookup {
    names: HashMap<String, String>,
}

impl AgencyLookup {
    /// Load the translation table at `path`. Any failure here is fatal for
    /// the run: absent file, unparsable CSV, or missing `AGYSUB`/`AGYSUBT`.
    #[tracing::instrument(level = "info", skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let missing = |reason: String| CleanError::MissingReferenceFile {
            path: path.to_path_buf(),
            reason,
        };

        if !path.is_file() {
            return Err(missing("file not found".into()));
        }
        let batch = read_utf8_csv(path).map_err(|e| missing(format!("{:#}", e)))?;
        let lookup = Self::from_batch(&batch).map_err(|e| match e {
            CleanError::MalformedInput(reason) => missing(reason),
            other => other,
        })?;

        info!(entries = lookup.len(), "loaded agency lookup");
        Ok(lookup)
    }

    /// Build from a batch carrying `AGYSUB` and `AGYSUBT`. Rows with either
    /// cell null are skipped; on a repeated code the first row wins.
    pub fn from_batch(batch: &RecordBatch) -> Result<Self> {
        let codes = string_column(batch, AGYSUB)?;
        let texts = string_column(batch, AGYSUBT)?;

        let mut names = HashMap::with_capacity(batch.num_rows());
        let mut duplicates = 0usize;
        for i in 0..batch.num_rows() {
            if codes.is_null(i) || texts.is_null(i) {
                continue;
            }
            match names.entry(codes.value(i).to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(texts.value(i).to_string());
                }
                Entry::Occupied(_) => duplicates += 1,
            }
        }
        if duplicates > 0 {
            warn!(duplicates, "repeated AGYSUB codes in agency lookup; kept first");
        }

        Ok(Self { names })
    }

    /// Raw `AGYSUBT` for an agency subcode.
    pub fn get(&self, agysub: &str) -> Option<&str> {
        self.names.get(agysub).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AgencyLookup {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut names = HashMap::new();
        for (code, text) in iter {
            names.entry(code.into()).or_insert_with(|| text.into());
        }
        Self { names }
    }
}
