//! Field-values configuration ingestion.
//!
//! Turns the tab-separated configuration spreadsheet into [`ConfigRow`]s.
//! No interpretation of cell text happens here; that is the resolution
//! engine's job.
//!
//! # Example
//!
//! ```ignore
//! use bfd_ingest::{default_config_path, read_config_rows};
//!
//! let rows = read_config_rows(&default_config_path())?;
//! println!("{} configured fields", rows.len());
//! ```
//!
//! [`ConfigRow`]: bfd_model::ConfigRow

mod error;
mod paths;
mod reader;

pub use error::{IngestError, Result};
pub use paths::{FIELD_VALUES_ENV_VAR, FIELD_VALUES_FILE, default_config_path};
pub use reader::{FIELD_COLUMN, read_config_rows, read_config_rows_from_reader};
