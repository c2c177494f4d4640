//! Integration tests for the full run: input file to company files

use enrollment::adapters::filesystem::{DirectorySink, DryRunSink};
use enrollment::core::ingest::{ingest, IngestOptions};
use enrollment::core::pipeline::run;
use enrollment::core::writer::partition;
use enrollment::domain::EnrollmentError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_input(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_scenario_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        "enrollment.csv",
        "1,John Doe,1,Acme\n1,John Doe,2,Acme\n2,Jane Roe,1,Acme\nbad,line\n",
    );
    let out = dir.path().join("out");
    let sink = DirectorySink::new(&out, true);

    let report = run(&input, &sink, IngestOptions::default()).unwrap();

    assert_eq!(
        report.errors.messages(),
        vec!["Line 4: Error - Invalid Format. Four items expected but 2 found."]
    );
    assert_eq!(
        fs::read_to_string(out.join("Acme.csv")).unwrap(),
        "1,John Doe,2,Acme\n2,Jane Roe,1,Acme"
    );
    assert_eq!(report.summary.companies, 1);
    assert_eq!(report.summary.files_written, 1);
    assert_eq!(report.summary.ingest.lines_rejected, 1);
}

#[test]
fn test_multiple_companies_sorted_and_deduplicated() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        "ENROLLMENT.CSV",
        "\
10,Alice Smith,3,Acme
11,Bob Adams,1,Acme
10,Alice Smith,2,Acme
20,Carol White,1,Globex
20,Carol Whitaker,4,Globex
21,Dan Black,7,Globex
",
    );
    let sink = DirectorySink::new(dir.path(), false);

    let report = run(&input, &sink, IngestOptions::default()).unwrap();

    assert!(report.errors.is_empty());
    assert_eq!(
        fs::read_to_string(dir.path().join("Acme.csv")).unwrap(),
        "11,Bob Adams,1,Acme\n10,Alice Smith,3,Acme"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("Globex.csv")).unwrap(),
        "21,Dan Black,7,Globex\n20,Carol Whitaker,4,Globex"
    );
    assert_eq!(report.summary.ingest.duplicates_ignored, 1);
    assert_eq!(report.summary.ingest.records_replaced, 1);
}

#[test]
fn test_errors_are_reported_in_line_order() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        "enrollment.csv",
        "\
1,John Doe,1,Acme
2,Jane,1,Acme
3,Jim Beam,one,Acme
4,Jack Daniels,1,Acme,extra
5,Jill Hill,5,Acme
",
    );
    let sink = DirectorySink::new(dir.path(), false);

    let report = run(&input, &sink, IngestOptions::default()).unwrap();

    assert_eq!(
        report.errors.messages(),
        vec![
            "Line 2: Error - Name must be a first and last name separated by a single space.",
            "Line 3: Error - Version is required and must be numeric.",
            "Line 4: Error - Invalid Format. Four items expected but 5 found.",
        ]
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("Acme.csv")).unwrap(),
        "1,John Doe,1,Acme\n5,Jill Hill,5,Acme"
    );
}

#[test]
fn test_invalid_utf8_line_does_not_abort_run() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        "enrollment.csv",
        b"1,John Doe,1,Acme\n2,Jos\xE9 Roe,1,Acme\n3,Jane Roe,1,Acme\n",
    );
    let sink = DirectorySink::new(dir.path(), false);

    let report = run(&input, &sink, IngestOptions::default()).unwrap();

    assert!(report.errors.is_empty());
    assert_eq!(report.summary.files_written, 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("Acme.csv")).unwrap(),
        "1,John Doe,1,Acme\n3,Jane Roe,1,Acme\n2,Jos\u{FFFD} Roe,1,Acme"
    );
}

#[test]
fn test_existing_file_overwritten() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Acme.csv"), "old,data\n").unwrap();
    let input = write_input(dir.path(), "enrollment.csv", "1,John Doe,1,Acme");
    let sink = DirectorySink::new(dir.path(), false);

    run(&input, &sink, IngestOptions::default()).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("Acme.csv")).unwrap(),
        "1,John Doe,1,Acme"
    );
}

#[test]
fn test_wrong_extension_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "enrollment.tsv", "1,John Doe,1,Acme\n");
    let out = dir.path().join("out");
    let sink = DirectorySink::new(&out, true);

    let err = run(&input, &sink, IngestOptions::default()).unwrap_err();

    assert!(matches!(err, EnrollmentError::InvalidFileType { .. }));
    assert_eq!(err.to_string(), "ERROR: File type must be CSV.");
    assert!(!out.exists());
}

#[test]
fn test_missing_output_dir_without_create_aborts() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "enrollment.csv", "1,John Doe,1,Acme\n");
    let sink = DirectorySink::new(dir.path().join("missing"), false);

    let err = run(&input, &sink, IngestOptions::default()).unwrap_err();
    assert!(matches!(err, EnrollmentError::OutputDirectory { .. }));
}

#[test]
fn test_unsafe_company_name_reported_others_written() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        "enrollment.csv",
        "1,John Doe,1,../escape\n2,Jane Roe,1,Acme\n",
    );
    let out = dir.path().join("out");
    let sink = DirectorySink::new(&out, true);

    let report = run(&input, &sink, IngestOptions::default()).unwrap();

    assert_eq!(report.output_errors.len(), 1);
    assert_eq!(report.summary.exit_code(), 4);
    assert!(out.join("Acme.csv").exists());
    assert!(!dir.path().join("escape.csv").exists());
}

#[test]
fn test_dry_run_reports_without_writing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "enrollment.csv", "1,John Doe,1,Acme\nbad\n");
    let sink = DryRunSink::new(dir.path());

    let report = run(&input, &sink, IngestOptions::default()).unwrap();

    assert!(report.summary.dry_run);
    assert_eq!(report.summary.files_written, 0);
    assert_eq!(report.errors.len(), 1);
    assert!(!dir.path().join("Acme.csv").exists());
}

#[test]
fn test_strict_mode_through_pipeline() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "enrollment.csv", ",John Doe,1,Acme\n");
    let sink = DryRunSink::new(dir.path());

    let lenient = run(&input, &sink, IngestOptions::default()).unwrap();
    assert!(lenient.errors.is_empty());

    let strict = run(&input, &sink, IngestOptions { strict: true }).unwrap();
    assert_eq!(
        strict.errors.messages(),
        vec!["Line 1: Error - User Id is required."]
    );
}

#[test]
fn test_output_round_trips_through_ingest() {
    let lines = [
        "7,Zed Alpha,1,Initech",
        "8,Amy Beta,12,Initech",
        "9,Bea Gamma,3,Hooli",
        "9,Bea Gamma,2,Hooli",
    ];
    let first = ingest(lines);
    let expected = first.partition.clone();

    let rendered: Vec<String> = partition(first.partition)
        .into_iter()
        .map(|output| output.contents)
        .collect();
    let second = ingest(rendered.iter().flat_map(|text| text.lines()));

    assert!(second.errors.is_empty());
    assert_eq!(second.partition, expected);
}
