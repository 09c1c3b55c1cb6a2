//! Integration tests for the pipeline module.

use std::fs;

use profile_cli::pipeline::{
    BuildInputs, ProfileSource, RenderFormat, build_view, load_rows, render_view, select_row,
};
use profile_ingest::{IngestError, SheetSource};
use profile_model::{ProfileView, PublicationStats, RawRow};
use profile_report::HtmlOptions;

const SHEET: &str = "\
Full Name,Designation,Department,Email,Research Area
Ada Lovelace,Professor,Computer Science,ada@college.edu,Analytical Engines
Charles Babbage,Reader,Mathematics,charles@college.edu,Difference Engines
";

struct FailingSheet;

impl SheetSource for FailingSheet {
    fn fetch_csv(&self, _url: &str) -> profile_ingest::Result<String> {
        Err(IngestError::Network("connection refused".to_string()))
    }
}

struct StaticSheet;

impl SheetSource for StaticSheet {
    fn fetch_csv(&self, _url: &str) -> profile_ingest::Result<String> {
        Ok(SHEET.to_string())
    }
}

fn write_sheet() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("faculty.csv");
    fs::write(&path, SHEET).expect("write csv");
    (dir, path)
}

#[test]
fn loads_local_csv() {
    let (_dir, path) = write_sheet();
    let rows = load_rows(&ProfileSource::Csv(path), &FailingSheet).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].get("Full Name"), Some("Charles Babbage"));
}

#[test]
fn missing_local_csv_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let result = load_rows(&ProfileSource::Csv(dir.path().join("absent.csv")), &FailingSheet);
    assert!(result.is_err());
}

#[test]
fn sheet_failure_degrades_to_defaults() {
    let rows = load_rows(&ProfileSource::Sheet("abc".into()), &FailingSheet).unwrap();
    assert!(rows.is_empty());

    let view = build_view(&select_row(rows, 0), &BuildInputs::default());
    assert_eq!(view.name, "Faculty Member");
    assert_eq!(view.designation, "Designation");
    assert!(view.extras.is_empty());
}

#[test]
fn selects_requested_row() {
    let rows = load_rows(&ProfileSource::Sheet("abc".into()), &StaticSheet).unwrap();
    let row = select_row(rows, 1);
    let view = build_view(&row, &BuildInputs::default());
    assert_eq!(view.name, "Charles Babbage");
    assert_eq!(view.extras.len(), 1);
    assert_eq!(view.extras[0].label, "Research Area");
}

#[test]
fn out_of_range_row_is_empty() {
    let rows = load_rows(&ProfileSource::Sheet("abc".into()), &StaticSheet).unwrap();
    assert_eq!(select_row(rows, 5), RawRow::new());
}

#[test]
fn flips_advance_the_deck() {
    let inputs = BuildInputs {
        stats: Some(PublicationStats {
            journals: 3,
            conferences: 2,
            books: 1,
        }),
        flips: 4,
        ..BuildInputs::default()
    };
    let view = build_view(&RawRow::new(), &inputs);
    assert_eq!(view.stats.len(), 3);
    assert_eq!(view.stats.active(), 1);
}

#[test]
fn large_flip_counts_wrap() {
    let inputs = BuildInputs {
        stats: Some(PublicationStats::default()),
        flips: usize::MAX,
        ..BuildInputs::default()
    };
    let view = build_view(&RawRow::new(), &inputs);
    assert_eq!(view.stats.active(), usize::MAX % 3);

    let empty = build_view(
        &RawRow::new(),
        &BuildInputs {
            flips: usize::MAX,
            ..BuildInputs::default()
        },
    );
    assert_eq!(empty.stats.active(), 0);
}

#[test]
fn renders_both_formats() {
    let rows = load_rows(&ProfileSource::Sheet("abc".into()), &StaticSheet).unwrap();
    let view = build_view(&select_row(rows, 0), &BuildInputs::default());

    let html = render_view(&view, RenderFormat::Html, &HtmlOptions::default()).unwrap();
    assert!(html.contains("Ada Lovelace"));

    let json = render_view(&view, RenderFormat::Json, &HtmlOptions::default()).unwrap();
    let parsed: ProfileView = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.email, "ada@college.edu");
}
