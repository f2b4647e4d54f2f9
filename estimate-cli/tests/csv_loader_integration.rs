//! Integration tests that run the loader against an on-disk fixture and
//! price every row it yields.

use std::path::Path;

use estimate_cli::csv_loader;
use estimate_core::{
    EstimateInput, FinishLevel, ProjectType, Scope, TimelinePreference, calculate_estimate,
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture_path() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_projects.csv")
        .leak()
}

fn load_fixture() -> Vec<EstimateInput> {
    csv_loader::load_from_file(fixture_path()).expect("fixture file should load without error")
}

#[test]
fn test_load_fixture_file_succeeds() {
    assert_eq!(load_fixture().len(), 4);
}

#[test]
fn test_fixture_first_row_is_default_home() {
    let inputs = load_fixture();

    assert_eq!(inputs[0], EstimateInput::default());
}

#[test]
fn test_fixture_office_row() {
    let inputs = load_fixture();
    let office = &inputs[1];

    assert_eq!(office.project_type, ProjectType::Office);
    assert_eq!(office.location, "Other City");
    assert_eq!(office.finish_level, FinishLevel::Economy);
    assert_eq!(office.scope.workstations, 20);
    assert!(!office.scope.kitchen);
    assert_eq!(office.property_type, "");
}

#[test]
fn test_fixture_retail_row() {
    let inputs = load_fixture();
    let retail = &inputs[2];

    assert_eq!(retail.timeline, TimelinePreference::Fast);
    assert_eq!(
        retail.scope,
        Scope {
            display_units: true,
            ..Scope::default()
        }
    );
}

#[test]
fn test_fixture_rows_price_as_expected() {
    let ranges: Vec<_> = load_fixture()
        .iter()
        .map(|input| {
            let result = calculate_estimate(input).unwrap();
            (result.min, result.max, result.timeline_days)
        })
        .collect();

    assert_eq!(
        ranges,
        vec![
            (dec!(3226500), dec!(3943500), 75),
            (dec!(1800000), dec!(2200000), 75),
            (dec!(3316950), dec!(4054050), 45),
            // Pune is not a known location, so it prices like Other City.
            (dec!(6075000), dec!(7425000), 75),
        ]
    );
}

#[test]
fn test_results_written_back_out_reload_as_csv() {
    let rows: Vec<_> = load_fixture()
        .into_iter()
        .map(|input| {
            let result = calculate_estimate(&input).unwrap();
            (input, result)
        })
        .collect();
    let mut out = Vec::new();

    csv_loader::write_results(&mut out, &rows).unwrap();

    let mut reader = csv::Reader::from_reader(out.as_slice());
    let mins: Vec<String> = reader
        .records()
        .map(|record| record.unwrap()[5].to_string())
        .collect();
    assert_eq!(mins, vec!["3226500", "1800000", "3316950", "6075000"]);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = csv_loader::load_from_file(Path::new("tests/fixtures/does_not_exist.csv"))
        .unwrap_err();

    assert!(matches!(err, csv_loader::CsvLoadError::Io(_)));
}
