use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{CleanError, Result};

pub const DEFAULT_REFERENCE_FILE: &str = "DTagy.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "FedScope_Cleaned_PowerBI.csv";

const INPUT_EXTENSIONS: &[&str] = &["txt", "csv"];

#[derive(Parser, Debug)]
#[command(name = "fedscope_clean")]
#[command(about = "Clean and decode a FedScope employment file for Power BI")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// FedScope data file to clean (.txt or .csv)
    pub input: Option<PathBuf>,

    /// Agency translation table
    #[arg(long, default_value = DEFAULT_REFERENCE_FILE)]
    pub reference: PathBuf,

    /// Destination of the cleaned CSV
    #[arg(long, short, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Also write the cleaned table as Parquet
    #[arg(long)]
    pub parquet: Option<PathBuf>,
}

/// Resolved paths for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub reference: PathBuf,
    pub output: PathBuf,
    pub parquet: Option<PathBuf>,
}

impl PipelineConfig {
    /// Config with the default reference and output locations.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            reference: PathBuf::from(DEFAULT_REFERENCE_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            parquet: None,
        }
    }
}

impl TryFrom<Cli> for PipelineConfig {
    type Error = CleanError;

    fn try_from(cli: Cli) -> Result<Self> {
        let input = select_input(cli.input.as_deref())?;
        Ok(Self {
            input,
            reference: cli.reference,
            output: cli.output,
            parquet: cli.parquet,
        })
    }
}

/// Acquire and validate the primary input path.
pub fn select_input(path: Option<&Path>) -> Result<PathBuf> {
    let path = path.ok_or(CleanError::InputSelectionCancelled)?;

    let accepted = path
        .extension()
        .and_then(|s| s.to_str())
        .map_or(false, |ext| {
            INPUT_EXTENSIONS
                .iter()
                .any(|want| ext.eq_ignore_ascii_case(want))
        });
    if !accepted {
        return Err(CleanError::UnsupportedInputType(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CleanError::InputNotFound(path.to_path_buf()));
    }

    Ok(path.to_path_buf())
}
