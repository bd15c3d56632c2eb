//! Static code → label tables for the FedScope categorical columns.

use arrow::{
    array::{Array, ArrayRef, StringArray},
    record_batch::RecordBatch,
};
use std::sync::Arc;
use tracing::debug;

use crate::{
    columns::{
        AGELVL, AGE_GROUP, EDLVL, EDUCATION, GSEGRD, GS_GRADE, LOSLVL, OCC_CATEGORY, PATCO,
        SERVICE_YEARS, WORKSTAT, WORK_STATUS,
    },
    error::Result,
    process::utils::parse_integer_code,
    table::{append_columns, string_column},
};

pub const AGE_GROUPS: &[(&str, &str)] = &[
    ("A", "<20"),
    ("B", "20-24"),
    ("C", "25-29"),
    ("D", "30-34"),
    ("E", "35-39"),
    ("F", "40-44"),
    ("G", "45-49"),
    ("H", "50-54"),
    ("I", "55-59"),
    ("J", "60-64"),
    ("K", "65+"),
    ("L", "Unknown"),
];

pub const EDUCATION_LEVELS: &[(&str, &str)] = &[
    ("01", "Less than HS"),
    ("02", "High School"),
    ("04", "Associate"),
    ("13", "Bachelor's"),
    ("15", "Master's"),
    ("17", "Doctorate"),
];

pub const SERVICE_BANDS: &[(&str, &str)] = &[
    ("A", "<1 yr"),
    ("B", "1-2 yrs"),
    ("C", "3-4 yrs"),
    ("D", "5-9 yrs"),
    ("E", "10-14 yrs"),
    ("F", "15-19 yrs"),
    ("G", "20-24 yrs"),
    ("H", "25-29 yrs"),
    ("I", "30-34 yrs"),
    ("J", "35+ yrs"),
];

pub const OCCUPATION_CATEGORIES: &[(i64, &str)] = &[
    (1, "Professional"),
    (2, "Administrative"),
    (3, "Technical"),
    (4, "Clerical"),
    (5, "Blue Collar"),
    (6, "Senior Exec"),
    (9, "Other"),
];

pub const WORK_STATUSES: &[(i64, &str)] = &[(1, "Full-Time Permanent"), (2, "Other")];

/// How a source code turns into a label.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Exact text key; surrounding whitespace is part of the code.
    Labels(&'static [(&'static str, &'static str)]),
    /// Integer key; float text for whole numbers matches too.
    IntegerLabels(&'static [(i64, &'static str)]),
    /// Copy the code through unchanged.
    Identity,
}

#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    pub source: &'static str,
    pub target: &'static str,
    pub rule: Rule,
}

/// Decoders in output-column order.
pub const DECODERS: &[Decoder] = &[
    Decoder {
        source: AGELVL,
        target: AGE_GROUP,
        rule: Rule::Labels(AGE_GROUPS),
    },
    Decoder {
        source: EDLVL,
        target: EDUCATION,
        rule: Rule::Labels(EDUCATION_LEVELS),
    },
    Decoder {
        source: GSEGRD,
        target: GS_GRADE,
        rule: Rule::Identity,
    },
    Decoder {
        source: LOSLVL,
        target: SERVICE_YEARS,
        rule: Rule::Labels(SERVICE_BANDS),
    },
    Decoder {
        source: PATCO,
        target: OCC_CATEGORY,
        rule: Rule::IntegerLabels(OCCUPATION_CATEGORIES),
    },
    Decoder {
        source: WORKSTAT,
        target: WORK_STATUS,
        rule: Rule::IntegerLabels(WORK_STATUSES),
    },
];

impl Decoder {
    /// Label for one code; `None` when the table has no entry.
    pub fn decode<'a>(&self, code: &'a str) -> Option<&'a str> {
        match self.rule {
            Rule::Labels(table) => table
                .iter()
                .find(|(key, _)| *key == code)
                .map(|(_, label)| *label),
            Rule::IntegerLabels(table) => {
                let key = parse_integer_code(code)?;
                table
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, label)| *label)
            }
            Rule::Identity => Some(code),
        }
    }

    /// Decode every row of the source column.
    pub fn decode_column(&self, batch: &RecordBatch) -> Result<StringArray> {
        let codes = string_column(batch, self.source)?;
        Ok(codes
            .iter()
            .map(|opt| opt.and_then(|code| self.decode(code)))
            .collect())
    }
}

/// Append one decoded column per entry of [`DECODERS`], in order.
pub fn decode_categories(batch: &RecordBatch) -> Result<RecordBatch> {
    let mut extra = Vec::with_capacity(DECODERS.len());
    for decoder in DECODERS {
        let labels = decoder.decode_column(batch)?;
        debug!(
            column = decoder.target,
            unmapped = labels.null_count(),
            "decoded"
        );
        extra.push((decoder.target, Arc::new(labels) as ArrayRef));
    }
    append_columns(batch, extra)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::batch_from_rows;
    use anyhow::Result;

    fn decoder(target: &str) -> Decoder {
        *DECODERS.iter().find(|d| d.target == target).unwrap()
    }

    #[test]
    fn letter_codes() {
        let age = decoder(AGE_GROUP);
        assert_eq!(age.decode("A"), Some("<20"));
        assert_eq!(age.decode("K"), Some("65+"));
        assert_eq!(age.decode("L"), Some("Unknown"));
        assert_eq!(age.decode("Z"), None);

        let service = decoder(SERVICE_YEARS);
        assert_eq!(service.decode("D"), Some("5-9 yrs"));
        assert_eq!(service.decode("J"), Some("35+ yrs"));
        assert_eq!(service.decode("K"), None);
    }

    #[test]
    fn education_keys_on_normalized_text() {
        let edu = decoder(EDUCATION);
        assert_eq!(edu.decode("13"), Some("Bachelor's"));
        assert_eq!(edu.decode("01"), Some("Less than HS"));
        // outside the partial table
        assert_eq!(edu.decode("07"), None);
        assert_eq!(edu.decode("1"), None);
    }

    #[test]
    fn integer_codes_accept_float_text() {
        let occ = decoder(OCC_CATEGORY);
        assert_eq!(occ.decode("1"), Some("Professional"));
        assert_eq!(occ.decode("6.0"), Some("Senior Exec"));
        assert_eq!(occ.decode("9"), Some("Other"));
        assert_eq!(occ.decode("7"), None);

        let work = decoder(WORK_STATUS);
        assert_eq!(work.decode("1"), Some("Full-Time Permanent"));
        assert_eq!(work.decode("2"), Some("Other"));
        assert_eq!(work.decode("3"), None);
    }

    #[test]
    fn text_codes_match_exactly() {
        let age = decoder(AGE_GROUP);
        assert_eq!(age.decode("A "), None);
        assert_eq!(age.decode("a"), None);

        let edu = decoder(EDUCATION);
        assert_eq!(edu.decode(" 13"), None);
        assert_eq!(edu.decode("13 "), None);
    }

    #[test]
    fn grade_is_copied() {
        assert_eq!(decoder(GS_GRADE).decode("13"), Some("13"));
        assert_eq!(decoder(GS_GRADE).decode("**"), Some("**"));
    }

    #[test]
    fn appends_six_columns_in_order() -> Result<()> {
        let batch = batch_from_rows(
            &["AGELVL", "EDLVL", "GSEGRD", "LOSLVL", "PATCO", "WORKSTAT"],
            &[
                vec![Some("C"), Some("13"), Some("11"), Some("B"), Some("7"), Some("1")],
                vec![None, None, None, None, None, None],
            ],
        )?;

        let out = decode_categories(&batch)?;
        let names: Vec<String> = out
            .schema()
            .fields()
            .iter()
            .skip(6)
            .map(|f| f.name().clone())
            .collect();
        assert_eq!(
            names,
            vec![
                "AGE_GROUP",
                "EDUCATION",
                "GS_GRADE",
                "SERVICE_YEARS",
                "OCC_CATEGORY",
                "WORK_STATUS"
            ]
        );

        assert_eq!(string_column(&out, AGE_GROUP)?.value(0), "25-29");
        assert_eq!(string_column(&out, EDUCATION)?.value(0), "Bachelor's");
        assert_eq!(string_column(&out, GS_GRADE)?.value(0), "11");
        assert_eq!(string_column(&out, SERVICE_YEARS)?.value(0), "1-2 yrs");
        assert!(string_column(&out, OCC_CATEGORY)?.is_null(0));
        assert_eq!(string_column(&out, WORK_STATUS)?.value(0), "Full-Time Permanent");

        for target in [AGE_GROUP, EDUCATION, GS_GRADE, SERVICE_YEARS, OCC_CATEGORY, WORK_STATUS] {
            assert!(string_column(&out, target)?.is_null(1));
        }
        Ok(())
    }
}
