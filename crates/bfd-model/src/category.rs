//! Output record categories of the BFD export.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Kind of claim record produced by the exporter.
///
/// Each category has its own column in the field-values configuration and
/// its own closed set of output fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportCategory {
    Beneficiary,
    BeneficiaryHistory,
    Carrier,
    Inpatient,
    Outpatient,
    Prescription,
}

impl ExportCategory {
    /// Number of categories.
    pub const COUNT: usize = 6;

    /// All categories in configuration column order.
    pub const ALL: [ExportCategory; Self::COUNT] = [
        ExportCategory::Beneficiary,
        ExportCategory::BeneficiaryHistory,
        ExportCategory::Carrier,
        ExportCategory::Inpatient,
        ExportCategory::Outpatient,
        ExportCategory::Prescription,
    ];

    /// Returns the upper-case name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportCategory::Beneficiary => "BENEFICIARY",
            ExportCategory::BeneficiaryHistory => "BENEFICIARY_HISTORY",
            ExportCategory::Carrier => "CARRIER",
            ExportCategory::Inpatient => "INPATIENT",
            ExportCategory::Outpatient => "OUTPATIENT",
            ExportCategory::Prescription => "PRESCRIPTION",
        }
    }

    /// Returns the header of this category's column in the configuration file.
    pub fn column_name(&self) -> &'static str {
        match self {
            ExportCategory::Beneficiary => "beneficiary",
            ExportCategory::BeneficiaryHistory => "beneficiary_history",
            ExportCategory::Carrier => "carrier",
            ExportCategory::Inpatient => "inpatient",
            ExportCategory::Outpatient => "outpatient",
            ExportCategory::Prescription => "prescription",
        }
    }

    /// Stable position of the category, usable as an array index.
    pub fn index(&self) -> usize {
        match self {
            ExportCategory::Beneficiary => 0,
            ExportCategory::BeneficiaryHistory => 1,
            ExportCategory::Carrier => 2,
            ExportCategory::Inpatient => 3,
            ExportCategory::Outpatient => 4,
            ExportCategory::Prescription => 5,
        }
    }
}

impl fmt::Display for ExportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportCategory {
    type Err = ModelError;

    /// Accepts the diagnostic name, the column header, or a hyphenated form
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");

        match normalized.as_str() {
            "BENEFICIARY" => Ok(ExportCategory::Beneficiary),
            "BENEFICIARY_HISTORY" => Ok(ExportCategory::BeneficiaryHistory),
            "CARRIER" => Ok(ExportCategory::Carrier),
            "INPATIENT" => Ok(ExportCategory::Inpatient),
            "OUTPATIENT" => Ok(ExportCategory::Outpatient),
            "PRESCRIPTION" => Ok(ExportCategory::Prescription),
            _ => Err(ModelError::UnknownCategory(s.to_string())),
        }
    }
}
