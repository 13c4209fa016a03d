#![allow(non_snake_case)]

use super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_doctype(dir: &TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("doctype.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn run___customer_fixture___succeeds() {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("customer.json");

    run(&fixture).unwrap();
}

#[test]
fn run___unmapped_type___reports_kind() {
    let temp = TempDir::new().unwrap();
    let input = write_doctype(
        &temp,
        r#"{"name": "Customer", "fields": [
            {"fieldname": "mystery", "label": "Mystery", "fieldtype": "Unknown Type"}
        ]}"#,
    );

    let err = run(&input).unwrap_err();

    assert!(err.to_string().starts_with("UnmappedFieldTypeError"));
    assert!(format!("{err:#}").contains("mystery"));
}

#[test]
fn run___unparseable_modified___still_succeeds() {
    let temp = TempDir::new().unwrap();
    let input = write_doctype(
        &temp,
        r#"{"name": "Customer", "modified": "last tuesday", "fields": [
            {"fieldname": "customer_name", "label": "Customer Name", "fieldtype": "Data"}
        ]}"#,
    );

    run(&input).unwrap();
}

#[test]
fn run___duplicate_identifier___reports_kind() {
    let temp = TempDir::new().unwrap();
    let input = write_doctype(
        &temp,
        r#"{"name": "Customer", "fields": [
            {"fieldname": "a", "label": "Credit Limit", "fieldtype": "Currency"},
            {"fieldname": "b", "label": "Credit  Limit", "fieldtype": "Float"}
        ]}"#,
    );

    let err = run(&input).unwrap_err();

    assert!(err.to_string().starts_with("DuplicateIdentifierError"));
}

#[test]
fn run___missing_input___reports_io_error() {
    let temp = TempDir::new().unwrap();

    let err = run(&temp.path().join("absent.json")).unwrap_err();

    assert!(err.to_string().starts_with("IOError"));
}

#[test]
fn run___writes_nothing_next_to_input() {
    let temp = TempDir::new().unwrap();
    let input = write_doctype(&temp, r#"{"name": "Customer", "fields": []}"#);

    run(&input).unwrap();

    let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}
