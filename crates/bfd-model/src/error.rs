use std::path::PathBuf;

use thiserror::Error;

use crate::category::ExportCategory;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown export category: {0}")]
    UnknownCategory(String),

    #[error("unknown {category} field: {name}")]
    UnknownField {
        category: ExportCategory,
        name: String,
    },

    #[error("timestamp out of range: {0} ms")]
    TimestampOutOfRange(i64),

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
