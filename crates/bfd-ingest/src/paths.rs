//! Field-values configuration path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the configuration location.
pub const FIELD_VALUES_ENV_VAR: &str = "BFD_FIELD_VALUES";

/// File name of the bundled configuration.
pub const FIELD_VALUES_FILE: &str = "cms_field_values2.tsv";

/// Get the field-values configuration path.
///
/// Resolution order:
/// 1. `BFD_FIELD_VALUES` environment variable
/// 2. `exporters/cms_field_values2.tsv` relative to the workspace root
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(FIELD_VALUES_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../exporters")
        .join(FIELD_VALUES_FILE)
}
