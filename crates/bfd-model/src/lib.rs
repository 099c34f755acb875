//! Data model for exporting simulated encounters as BFD claim records.
//!
//! The types here are shared by the ingest layer, which builds
//! [`ConfigRow`]s from the field-values configuration, and by the resolution
//! engine, which turns those rows into a [`FieldValueMap`] per record.

pub mod category;
pub mod encounter;
pub mod error;
pub mod fields;
pub mod options;
pub mod row;
pub mod value_map;

pub use category::ExportCategory;
pub use encounter::EncounterContext;
pub use error::{ModelError, Result};
pub use fields::{
    BeneficiaryField, BeneficiaryHistoryField, CarrierField, CategoryField, ExportField,
    InpatientField, OutpatientField, PrescriptionField,
};
pub use options::{ExportOptions, SamplingMode};
pub use row::ConfigRow;
pub use value_map::FieldValueMap;
