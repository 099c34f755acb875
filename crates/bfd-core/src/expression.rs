//! Cell expression language.
//!
//! Leading whitespace is ignored. A cell is then evaluated in this order:
//!
//! 1. Unimplemented constructs (`fieldValues.put...` and the other
//!    unfinished-work prefixes) are recognised before comments are stripped,
//!    since their own syntax contains parentheses.
//! 2. Anything from the first `(` on is a comment for configuration
//!    authors and is dropped together with the one character before it.
//! 3. `[Blank]` (any case) becomes the empty string.
//! 4. Any other `[...]` token is a computed function. Trailing whitespace
//!    after a token is ignored.
//! 5. Everything else is a literal, trailing whitespace included.
//!
//! Distribution lists (`A,B,C`) are resolved afterwards by
//! [`DistributionSampler`](crate::DistributionSampler).

use bfd_model::EncounterContext;
use chrono::{DateTime, Utc};

use crate::error::EvalError;
use crate::usability::unfinished_prefix;

/// Marker for an intentionally empty value.
pub const BLANK_TOKEN: &str = "[Blank]";

/// Date pattern of BFD date columns, e.g. `05-Jan-2021`.
pub const BB2_DATE_FORMAT: &str = "%d-%b-%Y";

/// Format an instant as a BFD date.
pub fn bb2_date(instant: DateTime<Utc>) -> String {
    instant.format(BB2_DATE_FORMAT).to_string()
}

/// Computed functions available to configuration cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellFunction {
    /// `[bb2Date_EncounterStartTimestamp]`
    EncounterStartDate,
    /// `[bb2Date_EncounterStopTimestamp]`
    EncounterStopDate,
}

impl CellFunction {
    pub const ALL: [CellFunction; 2] = [
        CellFunction::EncounterStartDate,
        CellFunction::EncounterStopDate,
    ];

    /// Token as written in the configuration.
    pub fn token(&self) -> &'static str {
        match self {
            CellFunction::EncounterStartDate => "[bb2Date_EncounterStartTimestamp]",
            CellFunction::EncounterStopDate => "[bb2Date_EncounterStopTimestamp]",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.token() == token)
    }

    pub fn apply(&self, encounter: &EncounterContext) -> String {
        match self {
            CellFunction::EncounterStartDate => bb2_date(encounter.start()),
            CellFunction::EncounterStopDate => bb2_date(encounter.stop()),
        }
    }
}

/// A classified cell, borrowing from the cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expression<'a> {
    Blank,
    Function(CellFunction),
    /// Function-like text the exporter cannot evaluate.
    Unrecognized(&'a str),
    Literal(&'a str),
}

impl<'a> Expression<'a> {
    pub fn parse(cell: &'a str) -> Result<Self, EvalError> {
        let raw = cell.trim_start();
        if unfinished_prefix(raw).is_some_and(|prefix| prefix != "(") {
            return Ok(Expression::Unrecognized(raw.trim_end()));
        }

        let text = strip_comment(raw)?;
        let token = text.trim_end();
        if token.eq_ignore_ascii_case(BLANK_TOKEN) {
            return Ok(Expression::Blank);
        }
        if token.starts_with('[') {
            return Ok(CellFunction::from_token(token)
                .map_or(Expression::Unrecognized(raw.trim_end()), Expression::Function));
        }
        Ok(Expression::Literal(text))
    }

    /// Produce the cell's value. The result may still be a distribution list.
    pub fn evaluate(&self, encounter: &EncounterContext) -> Result<String, EvalError> {
        match self {
            Expression::Blank => Ok(String::new()),
            Expression::Function(function) => Ok(function.apply(encounter)),
            Expression::Unrecognized(expression) => Err(EvalError::UnrecognizedFunction {
                expression: (*expression).to_string(),
            }),
            Expression::Literal(text) => Ok((*text).to_string()),
        }
    }
}

/// Parse and evaluate a cell in one step.
pub fn evaluate(cell: &str, encounter: &EncounterContext) -> Result<String, EvalError> {
    Expression::parse(cell)?.evaluate(encounter)
}

/// Drop a trailing `(comment)` and the single separator character before it.
///
/// The character before `(` is removed whatever it is, so `72(x)` yields `7`.
pub fn strip_comment(cell: &str) -> Result<&str, EvalError> {
    let Some(start) = cell.find('(') else {
        return Ok(cell);
    };
    let mut before = cell[..start].chars();
    if before.next_back().is_none() {
        return Err(EvalError::MalformedCell {
            expression: cell.to_string(),
            reason: "comment without a value".to_string(),
        });
    }
    Ok(before.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn encounter() -> EncounterContext {
        EncounterContext::new(
            Utc.with_ymd_and_hms(2021, 1, 5, 14, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2021, 2, 17, 9, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_start_and_stop_dates() {
        let ctx = encounter();
        assert_eq!(
            evaluate("[bb2Date_EncounterStartTimestamp]", &ctx).unwrap(),
            "05-Jan-2021"
        );
        assert_eq!(
            evaluate("[bb2Date_EncounterStopTimestamp]", &ctx).unwrap(),
            "17-Feb-2021"
        );
    }

    #[test]
    fn test_blank_any_case() {
        let ctx = encounter();
        assert_eq!(evaluate("[Blank]", &ctx).unwrap(), "");
        assert_eq!(evaluate("[BLANK]", &ctx).unwrap(), "");
        assert_eq!(evaluate("[blank] (not used)", &ctx).unwrap(), "");
    }

    #[test]
    fn test_comment_stripped() {
        let ctx = encounter();
        assert_eq!(evaluate("72 (default value)", &ctx).unwrap(), "72");
        assert_eq!(evaluate("A,B (pick one)", &ctx).unwrap(), "A,B");
    }

    #[test]
    fn test_comment_without_separator_drops_one_more_character() {
        assert_eq!(strip_comment("72(default)").unwrap(), "7");
        assert_eq!(strip_comment("é(x)").unwrap(), "");
        assert_eq!(strip_comment("no comment").unwrap(), "no comment");
    }

    #[test]
    fn test_comment_at_start_is_malformed() {
        let err = strip_comment("(only a note)").unwrap_err();
        assert!(matches!(err, EvalError::MalformedCell { .. }));
        assert_eq!(err.fallback_value(), None);
    }

    #[test]
    fn test_unknown_function() {
        let err = evaluate("[drgFromDiagnosis]", &encounter()).unwrap_err();
        assert_eq!(
            err,
            EvalError::UnrecognizedFunction {
                expression: "[drgFromDiagnosis]".to_string()
            }
        );
        assert_eq!(err.fallback_value(), Some(""));
    }

    #[test]
    fn test_unimplemented_constructs_take_function_error_path() {
        let ctx = encounter();
        for cell in [
            "fieldValues.put(BENE_ID, person.id)",
            "Mapped from person id",
            "if (inpatient) 1",
        ] {
            assert!(
                matches!(
                    evaluate(cell, &ctx),
                    Err(EvalError::UnrecognizedFunction { .. })
                ),
                "{cell}"
            );
        }
    }

    #[test]
    fn test_literal_verbatim() {
        let ctx = encounter();
        assert_eq!(evaluate("INSERT", &ctx).unwrap(), "INSERT");
        assert_eq!(evaluate("1,2,3", &ctx).unwrap(), "1,2,3");
        assert_eq!(evaluate(" 01", &ctx).unwrap(), "01");
        assert_eq!(evaluate("A ", &ctx).unwrap(), "A ");
    }

    #[test]
    fn test_surrounding_whitespace_around_tokens() {
        assert_eq!(Expression::parse("\t[Blank]").unwrap(), Expression::Blank);
        assert_eq!(Expression::parse("[BLANK]  ").unwrap(), Expression::Blank);
        assert_eq!(
            Expression::parse("  [bb2Date_EncounterStartTimestamp] ").unwrap(),
            Expression::Function(CellFunction::EncounterStartDate)
        );
        assert_eq!(
            Expression::parse(" [drgFromDiagnosis] ").unwrap(),
            Expression::Unrecognized("[drgFromDiagnosis]")
        );
        assert!(matches!(
            Expression::parse("  (only a note)"),
            Err(EvalError::MalformedCell { .. })
        ));
    }

    #[test]
    fn test_parse_classifies() {
        assert_eq!(Expression::parse("[Blank]").unwrap(), Expression::Blank);
        assert_eq!(
            Expression::parse("[bb2Date_EncounterStopTimestamp] (discharge)").unwrap(),
            Expression::Function(CellFunction::EncounterStopDate)
        );
        assert_eq!(
            Expression::parse("10").unwrap(),
            Expression::Literal("10")
        );
    }
}
