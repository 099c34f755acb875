//! The loaded field-values configuration, filtered per export category.

use std::io::Read;
use std::path::{Path, PathBuf};

use bfd_ingest::{read_config_rows, read_config_rows_from_reader};
use bfd_model::{ConfigRow, ExportCategory};
use serde::Serialize;

use crate::error::CatalogError;
use crate::usability::{CellUsability, classify_cell};

/// A cell excluded from its category at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedCell {
    pub line_number: usize,
    pub category: ExportCategory,
    pub field: String,
    pub text: String,
    pub reason: CellUsability,
}

/// Accepted/rejected cell counts for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: ExportCategory,
    pub accepted: usize,
    /// Non-empty cells that were rejected.
    pub rejected: usize,
}

/// Per-category counts, in category order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total_rows: usize,
    pub categories: Vec<CategorySummary>,
}

/// Field-values configuration, classified once at load.
///
/// Keeps every row in source order plus, per category, the rows whose cell
/// for that category is usable. An unloaded catalog (see
/// [`ConfigCatalog::load_or_empty`]) answers every query with nothing.
#[derive(Debug, Clone, Default)]
pub struct ConfigCatalog {
    source: Option<PathBuf>,
    loaded: bool,
    rows: Vec<ConfigRow>,
    by_category: [Vec<usize>; ExportCategory::COUNT],
    rejections: Vec<RejectedCell>,
}

impl ConfigCatalog {
    /// Load and classify a configuration file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        tracing::info!(path = %path.display(), "reading field-values configuration");
        let rows = read_config_rows(path).map_err(|source| CatalogError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::build(rows, Some(path.to_path_buf())))
    }

    /// Load from any reader; `label` names the source in diagnostics.
    pub fn from_reader<R: Read>(reader: R, label: &Path) -> Result<Self, CatalogError> {
        let rows = read_config_rows_from_reader(reader, label).map_err(|source| {
            CatalogError::Load {
                path: label.to_path_buf(),
                source,
            }
        })?;
        Ok(Self::build(rows, Some(label.to_path_buf())))
    }

    /// Load a configuration, logging the failure and returning an unloaded
    /// catalog instead of an error.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(error) => {
                tracing::error!(path = %path.display(), %error, "error reading field-values configuration");
                Self::default()
            }
        }
    }

    /// Classify rows that were already parsed elsewhere.
    pub fn from_rows(rows: Vec<ConfigRow>) -> Self {
        Self::build(rows, None)
    }

    fn build(rows: Vec<ConfigRow>, source: Option<PathBuf>) -> Self {
        let mut by_category: [Vec<usize>; ExportCategory::COUNT] = Default::default();
        let mut rejections = Vec::new();

        for (idx, row) in rows.iter().enumerate() {
            for category in ExportCategory::ALL {
                let cell = row.cell_for(category);
                let usability = classify_cell(cell);
                if usability.is_usable() {
                    by_category[category.index()].push(idx);
                    continue;
                }
                if usability.should_report() {
                    tracing::warn!(
                        line = row.line_number(),
                        category = %category,
                        field = row.field(),
                        expression = cell.trim(),
                        reason = %usability,
                        "config spreadsheet needs further work"
                    );
                    rejections.push(RejectedCell {
                        line_number: row.line_number(),
                        category,
                        field: row.field().to_string(),
                        text: cell.trim().to_string(),
                        reason: usability,
                    });
                }
            }
        }

        let catalog = Self {
            source,
            loaded: true,
            rows,
            by_category,
            rejections,
        };
        for summary in &catalog.summary().categories {
            tracing::debug!(
                category = %summary.category,
                accepted = summary.accepted,
                rejected = summary.rejected,
                "classified configuration cells"
            );
        }
        catalog
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Where the rows came from, when read from a file or reader.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Usable rows for a category, in source order.
    pub fn rows_for(
        &self,
        category: ExportCategory,
    ) -> impl ExactSizeIterator<Item = &ConfigRow> + '_ {
        self.by_category[category.index()]
            .iter()
            .map(|&idx| &self.rows[idx])
    }

    pub fn row_count(&self, category: ExportCategory) -> usize {
        self.by_category[category.index()].len()
    }

    /// Every loaded row, unfiltered.
    pub fn all_rows(&self) -> &[ConfigRow] {
        &self.rows
    }

    pub fn rejections(&self) -> &[RejectedCell] {
        &self.rejections
    }

    pub fn summary(&self) -> CatalogSummary {
        let categories = ExportCategory::ALL
            .into_iter()
            .map(|category| CategorySummary {
                category,
                accepted: self.row_count(category),
                rejected: self
                    .rejections
                    .iter()
                    .filter(|r| r.category == category)
                    .count(),
            })
            .collect();
        CatalogSummary {
            total_rows: self.rows.len(),
            categories,
        }
    }
}
