use serde::Serialize;

use crate::category::ExportCategory;

/// One line of the field-values configuration.
///
/// Holds the target field name and one raw cell per export category. Rows
/// are built once by the ingest layer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigRow {
    line_number: usize,
    field: String,
    cells: [String; ExportCategory::COUNT],
}

impl ConfigRow {
    pub fn new(line_number: usize, field: impl Into<String>) -> Self {
        Self {
            line_number,
            field: field.into(),
            cells: Default::default(),
        }
    }

    /// Set the cell for one category.
    #[must_use]
    pub fn with_cell(mut self, category: ExportCategory, cell: impl Into<String>) -> Self {
        self.cells[category.index()] = cell.into();
        self
    }

    /// Raw cell text for a category; empty when the field is not emitted.
    pub fn cell_for(&self, category: ExportCategory) -> &str {
        &self.cells[category.index()]
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// 1-based line in the configuration source.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
