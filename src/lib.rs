pub mod columns;
pub mod config;
pub mod error;
pub mod process;
pub mod reference;
pub mod table;

pub use config::PipelineConfig;
pub use error::{CleanError, Result};
pub use process::{clean_batch, run, RunSummary};
