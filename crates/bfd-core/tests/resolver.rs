//! Integration tests for per-record field resolution.

use bfd_core::{ConfigCatalog, DistributionSampler, FieldResolver, RowIssueKind};
use bfd_model::{
    CarrierField, ConfigRow, EncounterContext, ExportCategory, ExportField, ExportOptions,
    InpatientField, PrescriptionField, SamplingMode,
};
use chrono::{TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn encounter() -> EncounterContext {
    EncounterContext::new(
        Utc.with_ymd_and_hms(2021, 1, 5, 10, 15, 0).unwrap(),
        Utc.with_ymd_and_hms(2021, 1, 8, 16, 45, 0).unwrap(),
    )
}

fn carrier_row(line: usize, field: &str, cell: &str) -> ConfigRow {
    ConfigRow::new(line, field).with_cell(ExportCategory::Carrier, cell)
}

fn catalog(rows: Vec<ConfigRow>) -> ConfigCatalog {
    ConfigCatalog::from_rows(rows)
}

#[test]
fn test_plain_literals_are_written_verbatim() {
    let catalog = catalog(vec![
        carrier_row(2, "DML_IND", "INSERT"),
        carrier_row(3, "CARR_NUM", "99999"),
    ]);
    let mut resolver = FieldResolver::new(&catalog, &ExportOptions::default());
    let result = resolver.resolve_fields::<CarrierField>(&encounter());

    assert_eq!(result.values.get(&CarrierField::DmlInd), Some("INSERT"));
    assert_eq!(result.values.get(&CarrierField::CarrNum), Some("99999"));
    assert_eq!(result.populated(), 2);
    assert_eq!(result.processed, 2);
    assert!(!result.has_issues());
}

#[test]
fn test_functions_blank_comments_and_distributions() {
    let catalog = catalog(vec![
        carrier_row(2, "CLM_FROM_DT", "[bb2Date_EncounterStartTimestamp]"),
        carrier_row(3, "CLM_THRU_DT", "[bb2Date_EncounterStopTimestamp]"),
        carrier_row(4, "CLM_DISP_CD", "[Blank]"),
        carrier_row(5, "CARR_CLM_ENTRY_CD", "1 (original debit)"),
        carrier_row(6, "NCH_CLM_TYPE_CD", "71,72"),
    ]);
    let mut resolver = FieldResolver::new(&catalog, &ExportOptions::default());
    let values = resolver.resolve_fields::<CarrierField>(&encounter()).into_values();

    assert_eq!(values.get(&CarrierField::ClmFromDt), Some("05-Jan-2021"));
    assert_eq!(values.get(&CarrierField::ClmThruDt), Some("08-Jan-2021"));
    assert_eq!(values.get(&CarrierField::ClmDispCd), Some(""));
    assert_eq!(values.get(&CarrierField::CarrClmEntryCd), Some("1"));
    assert_eq!(values.get(&CarrierField::NchClmTypeCd), Some("71"));
}

#[test]
fn test_leading_whitespace_before_blank_and_functions_is_ignored() {
    let catalog = catalog(vec![
        carrier_row(2, "CARR_NUM", "\t[Blank]"),
        carrier_row(3, "CLM_FROM_DT", " [bb2Date_EncounterStartTimestamp]"),
        carrier_row(4, "CLM_DISP_CD", "  01"),
    ]);
    let mut resolver = FieldResolver::new(&catalog, &ExportOptions::default());
    let result = resolver.resolve_fields::<CarrierField>(&encounter());

    assert_eq!(result.values.get(&CarrierField::CarrNum), Some(""));
    assert_eq!(result.values.get(&CarrierField::ClmFromDt), Some("05-Jan-2021"));
    assert_eq!(result.values.get(&CarrierField::ClmDispCd), Some("01"));
    assert_eq!(result.processed, 3);
    assert!(!result.has_issues());
}

#[test]
fn test_trailing_whitespace_after_function_token_is_ignored() {
    let catalog = catalog(vec![
        carrier_row(2, "CLM_THRU_DT", "[bb2Date_EncounterStopTimestamp] "),
        carrier_row(3, "CARR_NUM", "[Blank]\t"),
    ]);
    let mut resolver = FieldResolver::new(&catalog, &ExportOptions::default());
    let result = resolver.resolve_fields::<CarrierField>(&encounter());

    assert_eq!(result.values.get(&CarrierField::ClmThruDt), Some("08-Jan-2021"));
    assert_eq!(result.values.get(&CarrierField::CarrNum), Some(""));
    assert!(!result.has_issues());
}

#[test]
fn test_blank_is_empty_in_every_category() {
    let mut row = ConfigRow::new(2, "DML_IND");
    for category in ExportCategory::ALL {
        row = row.with_cell(category, "[Blank]");
    }
    let catalog = catalog(vec![row]);
    let mut resolver = FieldResolver::new(&catalog, &ExportOptions::default());
    for category in ExportCategory::ALL {
        let result = resolver.resolve_any(category, &encounter());
        let field = ExportField::lookup(category, "DML_IND").unwrap();
        assert_eq!(result.values.get(&field), Some(""), "{category}");
    }
}

#[test]
fn test_unknown_function_yields_empty_value_and_issue() {
    let catalog = catalog(vec![
        ConfigRow::new(7, "CLM_DRG_CD").with_cell(ExportCategory::Inpatient, "[drgFromDiagnosis]"),
        ConfigRow::new(8, "CLM_FREQ_CD").with_cell(ExportCategory::Inpatient, "1"),
    ]);
    let mut resolver = FieldResolver::new(&catalog, &ExportOptions::default());
    let result = resolver.resolve_fields::<InpatientField>(&encounter());

    assert_eq!(result.values.get(&InpatientField::ClmDrgCd), Some(""));
    assert_eq!(result.values.get(&InpatientField::ClmFreqCd), Some("1"));
    assert_eq!(result.issues.len(), 1);
    let issue = &result.issues[0];
    assert_eq!(issue.line_number, 7);
    assert_eq!(issue.category, ExportCategory::Inpatient);
    assert_eq!(issue.field, "CLM_DRG_CD");
    assert_eq!(
        issue.kind,
        RowIssueKind::UnrecognizedFunction {
            expression: "[drgFromDiagnosis]".to_string()
        }
    );
}

#[test]
fn test_unknown_field_name_is_skipped() {
    let catalog = catalog(vec![
        carrier_row(2, "NOT_A_COLUMN", "X"),
        carrier_row(3, "DML_IND", "INSERT"),
    ]);
    let mut resolver = FieldResolver::new(&catalog, &ExportOptions::default());
    let result = resolver.resolve_fields::<CarrierField>(&encounter());

    assert_eq!(result.populated(), 1);
    assert_eq!(result.processed, 2);
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].kind, RowIssueKind::UnknownFieldName);
    assert_eq!(result.issues[0].field, "NOT_A_COLUMN");
}

#[test]
fn test_comment_only_cells_are_rejected_before_resolution() {
    let catalog = catalog(vec![
        carrier_row(2, "CARR_NUM", " (to be decided)"),
        carrier_row(3, "DML_IND", "INSERT"),
    ]);
    assert_eq!(catalog.row_count(ExportCategory::Carrier), 1);

    let mut resolver = FieldResolver::new(&catalog, &ExportOptions::default());
    let result = resolver.resolve_fields::<CarrierField>(&encounter());
    assert!(!result.values.contains(&CarrierField::CarrNum));
    assert_eq!(result.values.get(&CarrierField::DmlInd), Some("INSERT"));
}

#[test]
fn test_single_character_before_comment_leaves_empty_value() {
    let catalog = catalog(vec![carrier_row(4, "CARR_NUM", "x(")]);
    let mut resolver = FieldResolver::new(&catalog, &ExportOptions::default());
    let result = resolver.resolve_fields::<CarrierField>(&encounter());
    assert_eq!(result.values.get(&CarrierField::CarrNum), Some(""));
    assert!(!result.has_issues());
}

#[test]
fn test_later_rows_win_but_keep_first_position() {
    let catalog = catalog(vec![
        carrier_row(2, "CARR_NUM", "111"),
        carrier_row(3, "DML_IND", "INSERT"),
        carrier_row(4, "CARR_NUM", "222"),
    ]);
    let mut resolver = FieldResolver::new(&catalog, &ExportOptions::default());
    let values = resolver.resolve_fields::<CarrierField>(&encounter()).into_values();

    let entries: Vec<_> = values.iter().map(|(k, v)| (*k, v.to_string())).collect();
    assert_eq!(
        entries,
        vec![
            (CarrierField::CarrNum, "222".to_string()),
            (CarrierField::DmlInd, "INSERT".to_string()),
        ]
    );
}

#[test]
fn test_field_order_follows_configuration_order() {
    let catalog = catalog(vec![
        ConfigRow::new(2, "TOT_RX_CST_AMT").with_cell(ExportCategory::Prescription, "10"),
        ConfigRow::new(3, "PDE_ID").with_cell(ExportCategory::Prescription, "1"),
        ConfigRow::new(4, "DML_IND").with_cell(ExportCategory::Prescription, "INSERT"),
    ]);
    let mut resolver = FieldResolver::new(&catalog, &ExportOptions::default());
    let values = resolver
        .resolve_fields::<PrescriptionField>(&encounter())
        .into_values();
    let keys: Vec<_> = values.keys().copied().collect();
    assert_eq!(
        keys,
        vec![
            PrescriptionField::TotRxCstAmt,
            PrescriptionField::PdeId,
            PrescriptionField::DmlInd
        ]
    );
}

#[test]
fn test_deterministic_resolution_is_idempotent() {
    let catalog = catalog(vec![
        carrier_row(2, "LINE_CMS_TYPE_SRVC_CD", "1,2,3,4,5,6,7,8,9"),
        carrier_row(3, "CLM_FROM_DT", "[bb2Date_EncounterStartTimestamp]"),
        carrier_row(4, "CLM_DISP_CD", "01"),
    ]);
    let mut resolver = FieldResolver::new(&catalog, &ExportOptions::default());
    let first = resolver.resolve_fields::<CarrierField>(&encounter());
    let second = resolver.resolve_fields::<CarrierField>(&encounter());
    assert_eq!(first.values, second.values);
    assert_eq!(
        first.values.get(&CarrierField::LineCmsTypeSrvcCd),
        Some("1")
    );
}

#[test]
fn test_seeded_random_resolution_is_reproducible() {
    let catalog = catalog(vec![
        carrier_row(2, "LINE_CMS_TYPE_SRVC_CD", "1,2,3,4,5,6,7,8,9"),
        carrier_row(3, "LINE_PLACE_OF_SRVC_CD", "11,21,22,23"),
    ]);
    let options = ExportOptions::default()
        .with_sampling(SamplingMode::Random)
        .with_seed(Some(99));

    let run = || {
        let mut resolver = FieldResolver::new(&catalog, &options);
        (0..5)
            .map(|_| resolver.resolve_fields::<CarrierField>(&encounter()).values)
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_injected_sampler_is_used() {
    let catalog = catalog(vec![carrier_row(2, "CARR_CLM_PMT_DNL_CD", "1,2,3,4")]);
    let sampler = DistributionSampler::with_rng(SamplingMode::Random, StdRng::seed_from_u64(5));
    let mut resolver = FieldResolver::with_sampler(&catalog, sampler);
    let result = resolver.resolve_fields::<CarrierField>(&encounter());
    let value = result.values.get(&CarrierField::CarrClmPmtDnlCd).unwrap();
    assert!(["1", "2", "3", "4"].contains(&value));
}

#[test]
fn test_custom_lookup_closure() {
    let catalog = catalog(vec![
        carrier_row(2, "DML_IND", "INSERT"),
        carrier_row(3, "CARR_NUM", "99999"),
    ]);
    let mut resolver = FieldResolver::new(&catalog, &ExportOptions::default());
    let result = resolver.resolve(ExportCategory::Carrier, &encounter(), |name| {
        (name == "CARR_NUM").then(|| name.to_lowercase())
    });
    assert_eq!(result.populated(), 1);
    assert_eq!(result.values.get(&"carr_num".to_string()), Some("99999"));
}

#[test]
fn test_unloaded_catalog_resolves_to_empty_map() {
    let catalog = ConfigCatalog::default();
    let mut resolver = FieldResolver::new(&catalog, &ExportOptions::default());
    let result = resolver.resolve_fields::<CarrierField>(&encounter());
    assert!(result.values.is_empty());
    assert_eq!(result.processed, 0);
}
