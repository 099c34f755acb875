//! Per-record field resolution.
//!
//! Walks a category's usable rows and turns each cell into a value for the
//! record writer. Failures are per row: they are logged, reported in the
//! [`Resolution`], and never stop the remaining rows.

use std::hash::Hash;

use bfd_model::{
    CategoryField, ConfigRow, EncounterContext, ExportCategory, ExportField, ExportOptions,
    FieldValueMap,
};
use rand::Rng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::catalog::ConfigCatalog;
use crate::distribution::DistributionSampler;
use crate::error::EvalError;
use crate::expression::evaluate;

/// What went wrong with one row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowIssueKind {
    /// The field was written as an empty string.
    #[error("exporter does not know how to evaluate function: {expression}")]
    UnrecognizedFunction { expression: String },

    /// The row was skipped.
    #[error("field name is not a column of this record")]
    UnknownFieldName,

    /// The row was skipped.
    #[error("malformed cell {expression:?}: {reason}")]
    MalformedCell { expression: String, reason: String },
}

impl From<EvalError> for RowIssueKind {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::UnrecognizedFunction { expression } => {
                RowIssueKind::UnrecognizedFunction { expression }
            }
            EvalError::MalformedCell { expression, reason } => {
                RowIssueKind::MalformedCell { expression, reason }
            }
        }
    }
}

/// A non-fatal problem with one configuration row during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line_number} ({category}) {field}: {kind}")]
pub struct RowIssue {
    pub line_number: usize,
    pub category: ExportCategory,
    pub field: String,
    pub kind: RowIssueKind,
}

impl RowIssue {
    fn new(row: &ConfigRow, category: ExportCategory, kind: RowIssueKind) -> Self {
        Self {
            line_number: row.line_number(),
            category,
            field: row.field().to_string(),
            kind,
        }
    }
}

/// Result of resolving one category for one encounter.
#[derive(Debug, Clone)]
pub struct Resolution<K: Hash + Eq> {
    pub category: ExportCategory,
    pub values: FieldValueMap<K>,
    /// Rows whose cell was evaluated.
    pub processed: usize,
    pub issues: Vec<RowIssue>,
}

impl<K: Hash + Eq> Resolution<K> {
    /// Number of fields written to the map.
    pub fn populated(&self) -> usize {
        self.values.len()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn into_values(self) -> FieldValueMap<K> {
        self.values
    }
}

/// Produces field-value maps from a loaded catalog.
///
/// The catalog is shared read-only; the sampler (and its random source) is
/// owned, so use one resolver per thread.
#[derive(Debug)]
pub struct FieldResolver<'a, R = StdRng> {
    catalog: &'a ConfigCatalog,
    sampler: DistributionSampler<R>,
}

impl<'a> FieldResolver<'a> {
    pub fn new(catalog: &'a ConfigCatalog, options: &ExportOptions) -> Self {
        Self::with_sampler(catalog, DistributionSampler::from_options(options))
    }
}

impl<'a, R: Rng> FieldResolver<'a, R> {
    pub fn with_sampler(catalog: &'a ConfigCatalog, sampler: DistributionSampler<R>) -> Self {
        Self { catalog, sampler }
    }

    pub fn catalog(&self) -> &'a ConfigCatalog {
        self.catalog
    }

    /// Resolve every usable row of `category`.
    ///
    /// `lookup` maps a row's field name to the writer's field identifier;
    /// rows it does not recognise are skipped. A later row for the same
    /// field overwrites an earlier one.
    pub fn resolve<K, L>(
        &mut self,
        category: ExportCategory,
        encounter: &EncounterContext,
        lookup: L,
    ) -> Resolution<K>
    where
        K: Hash + Eq,
        L: Fn(&str) -> Option<K>,
    {
        let _span = tracing::debug_span!("resolve", category = %category).entered();

        let mut values = FieldValueMap::new();
        let mut issues = Vec::new();
        let mut processed = 0;

        for row in self.catalog.rows_for(category) {
            let cell = row.cell_for(category);
            if cell.is_empty() {
                continue;
            }
            processed += 1;

            let value = match evaluate(cell, encounter) {
                Ok(value) => value,
                Err(err) => {
                    let fallback = err.fallback_value();
                    report(&mut issues, cell, RowIssue::new(row, category, err.into()));
                    match fallback {
                        Some(value) => value.to_string(),
                        None => continue,
                    }
                }
            };
            let value = self.sampler.sample(&value);

            let Some(field) = lookup(row.field()) else {
                report(
                    &mut issues,
                    cell,
                    RowIssue::new(row, category, RowIssueKind::UnknownFieldName),
                );
                continue;
            };
            values.insert(field, value);
        }

        tracing::info!(
            category = %category,
            processed,
            populated = values.len(),
            issues = issues.len(),
            "config props defined and processed"
        );

        Resolution {
            category,
            values,
            processed,
            issues,
        }
    }

    /// Resolve the category of `F`, keyed by its own field enumeration.
    pub fn resolve_fields<F: CategoryField>(
        &mut self,
        encounter: &EncounterContext,
    ) -> Resolution<F> {
        self.resolve(F::CATEGORY, encounter, F::from_name)
    }

    /// Resolve a category chosen at runtime.
    pub fn resolve_any(
        &mut self,
        category: ExportCategory,
        encounter: &EncounterContext,
    ) -> Resolution<ExportField> {
        self.resolve(category, encounter, |name| {
            ExportField::lookup(category, name)
        })
    }
}

fn report(issues: &mut Vec<RowIssue>, expression: &str, issue: RowIssue) {
    tracing::warn!(
        line = issue.line_number,
        category = %issue.category,
        field = %issue.field,
        expression,
        "output configuration error: {}",
        issue.kind
    );
    issues.push(issue);
}
