use anyhow::{Context, Result};
use arrow::{
    compute::concat_batches,
    csv::{reader::Format, ReaderBuilder},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{
    fs::File,
    io::{BufReader, Seek},
    path::Path,
    sync::Arc,
};
use tracing::debug;

/// Cell texts read as missing, alongside the empty cell. Same set a
/// dataframe CSV reader uses by default.
pub const NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

static NULL_MARKERS: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = NA_VALUES.iter().map(|v| regex::escape(v)).collect();
    Regex::new(&format!("^(?:|{})$", alternatives.join("|"))).expect("null pattern should parse")
});

const BATCH_SIZE: usize = 64 * 1024;

/// Read a headed, comma-separated file into one batch whose columns are all
/// nullable `Utf8`, in header order.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.display()))]
pub fn read_utf8_csv(path: &Path) -> Result<RecordBatch> {
    let mut file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    // only the header row matters here; every column is read as text
    let (header, _) = Format::default()
        .with_header(true)
        .infer_schema(&mut file, Some(1))
        .with_context(|| format!("reading header of {}", path.display()))?;
    file.rewind()
        .with_context(|| format!("rewinding {}", path.display()))?;

    let fields: Vec<Field> = header
        .fields()
        .iter()
        .map(|f| Field::new(f.name(), DataType::Utf8, true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_batch_size(BATCH_SIZE)
        .with_quote(b'"')
        .with_delimiter(b',')
        .with_truncated_rows(true)
        .with_null_regex(Regex::clone(&NULL_MARKERS))
        .build(BufReader::new(file))
        .context("creating CSV reader")?;

    let batches = reader
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("parsing {}", path.display()))?;
    let batch = concat_batches(&schema, &batches).context("concatenating CSV batches")?;

    debug!(
        rows = batch.num_rows(),
        columns = batch.num_columns(),
        "read table"
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Array, StringArray};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn column<'a>(batch: &'a RecordBatch, name: &str) -> &'a StringArray {
        let idx = batch.schema().index_of(name).unwrap();
        batch
            .column(idx)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap()
    }

    #[test]
    fn reads_every_column_as_text() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        write!(tmp, "AGYSUB,EDLVL,SALARY\nAF02,01,55000\nAF03,13.0,\n")?;

        let batch = read_utf8_csv(tmp.path())?;
        assert_eq!(batch.num_rows(), 2);
        for field in batch.schema().fields() {
            assert_eq!(field.data_type(), &DataType::Utf8);
        }

        // leading zeros and float text survive untouched
        let edlvl = column(&batch, "EDLVL");
        assert_eq!(edlvl.value(0), "01");
        assert_eq!(edlvl.value(1), "13.0");
        assert!(column(&batch, "SALARY").is_null(1));
        Ok(())
    }

    #[test]
    fn na_markers_are_null() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        write!(tmp, "A,B\nNA,x\nNaN,NULL\n\"\",y\n")?;

        let batch = read_utf8_csv(tmp.path())?;
        let a = column(&batch, "A");
        assert_eq!(a.null_count(), 3);
        let b = column(&batch, "B");
        assert_eq!(b.value(0), "x");
        assert!(b.is_null(1));
        Ok(())
    }

    #[test]
    fn every_default_na_spelling_is_null() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "SALARY,LOS")?;
        for marker in NA_VALUES {
            writeln!(tmp, "{},1", marker)?;
        }
        // near misses stay text
        writeln!(tmp, "na,1")?;
        writeln!(tmp, " NA,1")?;

        let batch = read_utf8_csv(tmp.path())?;
        let salary = column(&batch, "SALARY");
        assert_eq!(batch.num_rows(), NA_VALUES.len() + 2);
        assert_eq!(salary.null_count(), NA_VALUES.len());
        assert_eq!(salary.value(NA_VALUES.len()), "na");
        assert_eq!(salary.value(NA_VALUES.len() + 1), " NA");
        Ok(())
    }

    #[test]
    fn lowercase_and_angle_na_are_null() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        write!(tmp, "AGYSUB,SALARY,LOS\nAB00,n/a,1\nAB00,<NA>,2\nAB00,51000,3\n")?;

        let batch = read_utf8_csv(tmp.path())?;
        let salary = column(&batch, "SALARY");
        assert!(salary.is_null(0));
        assert!(salary.is_null(1));
        assert_eq!(salary.value(2), "51000");
        Ok(())
    }

    #[test]
    fn header_only_file_yields_empty_batch() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        write!(tmp, "AGYSUB,AGYSUBT\n")?;

        let batch = read_utf8_csv(tmp.path())?;
        assert_eq!(batch.num_rows(), 0);
        assert_eq!(batch.num_columns(), 2);
        Ok(())
    }
}
