//! Error types for catalog loading and cell evaluation.

use std::path::PathBuf;

use bfd_ingest::IngestError;
use thiserror::Error;

/// The configuration could not be loaded. No catalog is produced.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to load field-values configuration {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: IngestError,
    },
}

impl CatalogError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            CatalogError::Load { path, .. } => path,
        }
    }
}

/// A single cell could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Bracketed token, or an unimplemented construct, with no known function.
    #[error("exporter does not know how to evaluate function: {expression}")]
    UnrecognizedFunction { expression: String },

    /// Cell text that cannot be interpreted at all.
    #[error("malformed cell {expression:?}: {reason}")]
    MalformedCell { expression: String, reason: String },
}

impl EvalError {
    /// Value written for the field when this error occurs; `None` omits the field.
    pub fn fallback_value(&self) -> Option<&'static str> {
        match self {
            EvalError::UnrecognizedFunction { .. } => Some(""),
            EvalError::MalformedCell { .. } => None,
        }
    }
}
