//! Load-time classification of configuration cells.
//!
//! Many cells of the field-values spreadsheet still describe intent in
//! prose. Only cells that can be evaluated are kept for a category; the rest
//! are reported and skipped.

use serde::Serialize;
use std::fmt;

/// Prefixes of cells that describe work still to be done in the spreadsheet.
///
/// Bracketed function tokens such as `[bb2Date_EncounterStartTimestamp]` are
/// not listed; only the unbracketed `bb2DateFrom` form is.
pub const UNFINISHED_PREFIXES: &[&str] = &[
    "(",
    "Mapped from ",
    "fieldValues.put",
    "logic exists ",
    "RxNorm to",
    "if (",
    "bb2DateFrom",
];

/// Outcome of classifying one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum CellUsability {
    /// Literal, distribution, blank marker or function token.
    Usable,
    /// Field not emitted for this category.
    Empty,
    /// Explicit `NULL`.
    Null,
    /// Value comes from a coding step that is not configured here.
    Coded,
    /// Prose describing logic that is not machine-actionable yet.
    Unfinished { prefix: &'static str },
}

impl CellUsability {
    pub fn is_usable(&self) -> bool {
        matches!(self, CellUsability::Usable)
    }

    /// Rejections worth reporting to configuration authors. Empty cells are
    /// intentional and stay quiet.
    pub fn should_report(&self) -> bool {
        !matches!(self, CellUsability::Usable | CellUsability::Empty)
    }
}

impl fmt::Display for CellUsability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellUsability::Usable => f.write_str("usable"),
            CellUsability::Empty => f.write_str("empty"),
            CellUsability::Null => f.write_str("NULL"),
            CellUsability::Coded => f.write_str("coded"),
            CellUsability::Unfinished { prefix } => write!(f, "unfinished ({prefix:?})"),
        }
    }
}

/// Decide whether a raw cell can be evaluated.
pub fn classify_cell(cell: &str) -> CellUsability {
    let cell = cell.trim();
    if cell.is_empty() {
        return CellUsability::Empty;
    }
    if cell.eq_ignore_ascii_case("NULL") {
        return CellUsability::Null;
    }
    if cell
        .get(..5)
        .is_some_and(|head| head.eq_ignore_ascii_case("Coded"))
    {
        return CellUsability::Coded;
    }
    if let Some(prefix) = unfinished_prefix(cell) {
        return CellUsability::Unfinished { prefix };
    }
    CellUsability::Usable
}

/// The unfinished-work prefix a cell starts with, if any.
pub fn unfinished_prefix(cell: &str) -> Option<&'static str> {
    UNFINISHED_PREFIXES
        .iter()
        .copied()
        .find(|prefix| cell.starts_with(prefix))
}
