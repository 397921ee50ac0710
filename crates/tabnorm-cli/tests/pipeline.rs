//! End-to-end tests for the normalization pipeline.

use std::fs;
use std::path::PathBuf;

use tabnorm_cli::pipeline;
use tabnorm_cli::types::RunOutcome;
use tabnorm_ingest::IngestError;
use tabnorm_model::{ColumnType, NormalizeOptions, ShortRowPolicy};
use tempfile::TempDir;

struct Workspace {
    _dir: TempDir,
    input: PathBuf,
    output: PathBuf,
}

fn workspace(input: &[u8]) -> Workspace {
    let dir = tempfile::tempdir().expect("temp dir");
    let input_path = dir.path().join("input.csv");
    fs::write(&input_path, input).expect("write input");
    Workspace {
        input: input_path,
        output: dir.path().join("output.csv"),
        _dir: dir,
    }
}

impl Workspace {
    fn options(&self) -> NormalizeOptions {
        NormalizeOptions::new(&self.input, &self.output)
    }

    fn run(&self, options: &NormalizeOptions) -> (RunOutcome, String) {
        let outcome = pipeline::run(options).expect("run");
        let output = fs::read_to_string(&self.output).expect("read output");
        (outcome, output)
    }
}

#[test]
fn end_to_end_normalizes_and_dedupes() {
    let ws = workspace(
        b"#ID,Name,Signup Date,Active\n\
          1,Alice,01/02/2023,yes\n\
          1,Alice,01/02/2023,yes\n\
          2,Bob,02/03/2023,no\n",
    );
    let (outcome, output) = ws.run(&ws.options());
    insta::assert_snapshot!(output, @r"
    id,name,signup_date,active
    1,Alice,2023-01-02,true
    2,Bob,2023-02-03,false
    ");

    let types: Vec<ColumnType> = outcome
        .columns
        .iter()
        .map(|column| column.inferred_type)
        .collect();
    assert_eq!(
        types,
        vec![
            ColumnType::String,
            ColumnType::String,
            ColumnType::Date,
            ColumnType::Boolean
        ]
    );
    assert_eq!(outcome.stats.rows_read, 3);
    assert_eq!(outcome.stats.rows_written, 2);
    assert_eq!(outcome.stats.duplicates_removed, 1);
    assert_eq!(outcome.stats.rows_rejected, 0);
    assert!(!outcome.restarted);
}

#[test]
fn single_valued_numeric_column_reads_as_boolean() {
    let ws = workspace(
        b"#ID,Name,Signup Date,Active\n\
          1,Alice,01/02/2023,yes\n\
          1,Alice,01/02/2023,yes\n",
    );
    let (outcome, output) = ws.run(&ws.options());
    insta::assert_snapshot!(output, @r"
    id,name,signup_date,active
    true,Alice,2023-01-02,true
    ");
    assert_eq!(outcome.columns[0].inferred_type, ColumnType::Boolean);
}

#[test]
fn allow_list_orders_output_and_reports_missing() {
    let ws = workspace(b"#ID,Name,Notes\n10,Alice,x\n11,Bob,y\n");
    let options = ws
        .options()
        .with_columns(vec!["Name".into(), "Nope".into(), "#ID".into()]);
    let (outcome, output) = ws.run(&options);
    insta::assert_snapshot!(output, @r"
    name,id
    Alice,10
    Bob,11
    ");
    assert_eq!(outcome.missing_columns, vec!["Nope"]);
}

#[test]
fn short_row_under_filtering_is_dropped() {
    let ws = workspace(b"#ID,Name,Active\n1,Alice,yes\n3,Carol\n");
    let options = ws.options().with_columns(vec!["Active".into()]);
    let (outcome, output) = ws.run(&options);
    insta::assert_snapshot!(output, @r"
    active
    true
    ");
    assert_eq!(outcome.stats.rows_read, 2);
    assert_eq!(outcome.stats.rows_written, 1);
    assert_eq!(outcome.stats.rows_rejected, 1);
}

#[test]
fn pad_policy_keeps_short_rows() {
    let ws = workspace(b"a,b,c\n1,x,z\n2,y\n");
    let options = ws.options().with_short_rows(ShortRowPolicy::Pad);
    let (outcome, output) = ws.run(&options);
    insta::assert_snapshot!(output, @r"
    a,b,c
    1,x,z
    2,y,
    ");
    assert_eq!(outcome.stats.rows_rejected, 0);
}

#[test]
fn control_characters_and_blanks_are_cleaned() {
    let ws = workspace(b"name,flag\nA\x07lice,yes\n   ,no\nBob,\x01\n");
    let (_, output) = ws.run(&ws.options());
    insta::assert_snapshot!(output, @r"
    name,flag
    Alice,true
    ,false
    Bob,
    ");
}

#[test]
fn invalid_utf8_restarts_with_fallback_encoding() {
    let ws = workspace(b"Name,Active\nJos\xe9,yes\n");
    let (outcome, output) = ws.run(&ws.options());
    insta::assert_snapshot!(output, @r"
    name,active
    José,true
    ");
    assert!(outcome.restarted);
    assert_eq!(outcome.encoding, "windows-1252");
}

#[test]
fn restart_after_sample_window_truncates_partial_output() {
    let ws = workspace(b"Name\nAl\nBea\nJos\xe9\n");
    fs::write(&ws.output, "stale contents\n").expect("seed output");
    let options = ws.options().with_sample_size(1);
    let (outcome, output) = ws.run(&options);
    insta::assert_snapshot!(output, @r"
    name
    Al
    Bea
    José
    ");
    assert!(outcome.restarted);
    assert_eq!(outcome.stats.rows_read, 3);
}

#[test]
fn decode_error_without_distinct_fallback_is_fatal() {
    let ws = workspace(b"Name\nJos\xe9\n");
    let mut options = ws.options();
    options.fallback_encoding = "utf-8".to_string();
    let err = pipeline::run(&options).expect_err("decode failure");
    let ingest = err.downcast_ref::<IngestError>().expect("ingest error");
    assert!(ingest.is_decode_error());
}

#[test]
fn utf16_input_encoding_is_rejected_without_output() {
    let text: Vec<u8> = "Name,Active\nAl,yes\nBo,no\n"
        .encode_utf16()
        .flat_map(u16::to_le_bytes)
        .collect();
    let ws = workspace(&text);
    let options = ws.options().with_encoding("utf-16le");
    let err = pipeline::run(&options).expect_err("utf-16 is not splittable");
    assert!(matches!(
        err.downcast_ref::<IngestError>(),
        Some(IngestError::UnsupportedEncoding { .. })
    ));
    assert!(!ws.output.exists());
}

#[test]
fn utf16_fallback_encoding_is_rejected_up_front() {
    let ws = workspace(b"Name\nAl\n");
    let mut options = ws.options();
    options.fallback_encoding = "utf-16be".to_string();
    let err = pipeline::run(&options).expect_err("bad fallback");
    assert!(matches!(
        err.downcast_ref::<IngestError>(),
        Some(IngestError::UnsupportedEncoding { .. })
    ));
}

#[test]
fn rows_equal_after_normalization_are_duplicates() {
    let ws = workspace(
        b"Signup Date,Active\n\
          01/02/2023,yes\n\
          1-2-2023,Y\n\
          2023-01-02,TRUE\n",
    );
    let (outcome, output) = ws.run(&ws.options());
    insta::assert_snapshot!(output, @r"
    signup_date,active
    2023-01-02,true
    ");
    assert_eq!(outcome.stats.rows_read, 3);
    assert_eq!(outcome.stats.rows_written, 1);
    assert_eq!(outcome.stats.duplicates_removed, 2);
}

#[test]
fn normalized_duplicate_keeps_first_arrival_in_either_order() {
    let forward = workspace(b"Name,When\nAl,01/02/2023\nAl,1-2-2023\nBo,03/04/2023\n");
    let reverse = workspace(b"Name,When\nAl,1-2-2023\nAl,01/02/2023\nBo,03/04/2023\n");
    let (_, forward_output) = forward.run(&forward.options());
    let (_, reverse_output) = reverse.run(&reverse.options());
    insta::assert_snapshot!(forward_output, @r"
    name,when
    Al,2023-01-02
    Bo,2023-03-04
    ");
    assert_eq!(forward_output, reverse_output);
}

#[test]
fn empty_input_is_an_error() {
    let ws = workspace(b"");
    let err = pipeline::run(&ws.options()).expect_err("empty input");
    assert!(matches!(
        err.downcast_ref::<IngestError>(),
        Some(IngestError::EmptyCsv { .. })
    ));
}

#[test]
fn header_only_input_writes_header() {
    let ws = workspace(b"First Name,Last Name\n");
    let (outcome, output) = ws.run(&ws.options());
    assert_eq!(output, "first_name,last_name\n");
    assert_eq!(outcome.stats.rows_read, 0);
}

#[test]
fn missing_input_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let options = NormalizeOptions::new(dir.path().join("absent.csv"), dir.path().join("out.csv"));
    let err = pipeline::run(&options).expect_err("missing input");
    assert!(matches!(
        err.downcast_ref::<IngestError>(),
        Some(IngestError::FileNotFound { .. })
    ));
}

#[test]
fn inspect_reports_plan_without_output() {
    let ws = workspace(b"When,Ok,Note\n2023-01-02,y,\n2023-01-03,n,\n");
    let inspection = pipeline::inspect(&ws.options()).expect("inspect");
    assert_eq!(inspection.sampled_rows, 2);
    assert_eq!(inspection.source_columns, 3);
    assert_eq!(inspection.columns[0].inferred_type, ColumnType::Date);
    assert_eq!(inspection.columns[1].inferred_type, ColumnType::Boolean);
    assert_eq!(inspection.columns[2].inferred_type, ColumnType::String);
    assert_eq!(inspection.types.len(), 2);
    assert!(!inspection.types.contains("Note"));
    assert!(!ws.output.exists());
}
