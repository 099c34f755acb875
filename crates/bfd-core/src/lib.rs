//! Configuration-driven field resolution for BFD claim export.
//!
//! [`ConfigCatalog`] loads the field-values configuration once and keeps,
//! per export category, the rows whose cells can be evaluated.
//! [`FieldResolver`] then turns those rows into a [`FieldValueMap`] for each
//! encounter, using the small cell language in [`expression`] and the
//! [`DistributionSampler`] for comma-separated alternatives.
//!
//! # Example
//!
//! ```ignore
//! use bfd_core::{ConfigCatalog, FieldResolver};
//! use bfd_model::{CarrierField, EncounterContext, ExportOptions};
//!
//! let catalog = ConfigCatalog::load(&bfd_ingest::default_config_path())?;
//! let mut resolver = FieldResolver::new(&catalog, &ExportOptions::default());
//! let encounter = EncounterContext::from_millis(start_ms, stop_ms)?;
//! let carrier = resolver.resolve_fields::<CarrierField>(&encounter);
//! ```
//!
//! [`FieldValueMap`]: bfd_model::FieldValueMap

pub mod catalog;
pub mod distribution;
pub mod error;
pub mod expression;
pub mod resolver;
pub mod usability;

pub use catalog::{CatalogSummary, CategorySummary, ConfigCatalog, RejectedCell};
pub use distribution::DistributionSampler;
pub use error::{CatalogError, EvalError};
pub use expression::{BLANK_TOKEN, CellFunction, Expression, evaluate};
pub use resolver::{FieldResolver, Resolution, RowIssue, RowIssueKind};
pub use usability::{CellUsability, UNFINISHED_PREFIXES, classify_cell};
