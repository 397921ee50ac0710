//! Tests for tabnorm-model types.

use tabnorm_model::{ColumnType, ModelError, NormalizeOptions, ShortRowPolicy, TypeTable};

#[test]
fn options_defaults() {
    let options = NormalizeOptions::default();
    assert_eq!(options.delimiter, ',');
    assert_eq!(options.quote, '"');
    assert_eq!(options.encoding, "utf-8");
    assert_eq!(options.fallback_encoding, "windows-1252");
    assert_eq!(options.sample_size, 100);
    assert_eq!(options.short_rows, ShortRowPolicy::Reject);
    assert!(!options.is_filtered());
    assert!(options.validate().is_ok());
}

#[test]
fn options_reject_multibyte_delimiter() {
    let options = NormalizeOptions::default().with_delimiter('§');
    assert!(matches!(
        options.validate(),
        Err(ModelError::NotSingleByte {
            name: "delimiter",
            ..
        })
    ));
}

#[test]
fn options_reject_zero_sample() {
    let options = NormalizeOptions::default().with_sample_size(0);
    assert!(matches!(options.validate(), Err(ModelError::EmptySample)));
}

#[test]
fn options_partial_json_uses_defaults() {
    let json = r#"{"input": "in.csv", "delimiter": ";", "short_rows": "pad"}"#;
    let options: NormalizeOptions = serde_json::from_str(json).expect("parse options");
    assert_eq!(options.input.to_str(), Some("in.csv"));
    assert_eq!(options.output.to_str(), Some("-"));
    assert_eq!(options.delimiter_byte().expect("delimiter"), b';');
    assert_eq!(options.short_rows, ShortRowPolicy::Pad);
    assert_eq!(options.sample_size, 100);
}

#[test]
fn column_type_serializes_lowercase() {
    let json = serde_json::to_string(&ColumnType::Boolean).expect("serialize type");
    assert_eq!(json, "\"boolean\"");
    assert_eq!(ColumnType::Date.to_string(), "date");
}

#[test]
fn type_table_serializes_as_map() {
    let mut table = TypeTable::new();
    table.insert("Active", ColumnType::Boolean);
    table.insert("Signup Date", ColumnType::Date);
    let json = serde_json::to_string(&table).expect("serialize table");
    assert_eq!(json, r#"{"Active":"boolean","Signup Date":"date"}"#);
}
