#![allow(non_snake_case)]

use super::*;
use crate::error::ErrorKind;
use chrono::{Datelike, Timelike};

const CUSTOMER: &str = r#"{
    "name": "Customer",
    "creation": "2013-06-11 14:26:44.000000",
    "modified": "2020-04-07 16:12:38.151932",
    "modified_by": "Administrator",
    "module": "Selling",
    "issingle": 0,
    "istable": 0,
    "is_submittable": 1,
    "_last_update": "1586254358",
    "description": "Buyer of goods or services.",
    "fields": [
        {
            "fieldname": "customer_name",
            "label": "Customer Name",
            "fieldtype": "Data",
            "idx": 1,
            "reqd": 1,
            "in_global_search": 1,
            "description": "Full legal name"
        },
        {"fieldname": "cb1", "fieldtype": "Column Break", "idx": 2},
        {"fieldname": "mystery", "label": "Mystery", "fieldtype": "Unknown Type", "idx": 3}
    ],
    "permissions": [
        {"role": "Sales Manager", "read": 1, "write": 1, "create": 1, "delete": 1, "import": 1}
    ]
}"#;

#[test]
fn Document___from_str___reads_doctype_columns() {
    let document = Document::from_str(CUSTOMER).unwrap();

    assert_eq!(document.doctype.name, "Customer");
    assert_eq!(document.doctype.meta.modified_by, "Administrator");
    assert_eq!(document.doctype.settings.module, "Selling");
    assert_eq!(document.doctype.settings.is_submittable, 1);
    assert_eq!(document.doctype.settings.is_table, 0);
    assert_eq!(document.doctype.settings.last_update, "1586254358");
    assert_eq!(
        document.doctype.settings.description,
        "Buyer of goods or services."
    );
}

#[test]
fn Document___from_str___reads_field_properties() {
    let document = Document::from_str(CUSTOMER).unwrap();
    let field = &document.fields[0];

    assert_eq!(field.fieldname, "customer_name");
    assert_eq!(field.label, "Customer Name");
    assert_eq!(field.meta.idx, 1);
    assert_eq!(field.properties.reqd, 1);
    assert_eq!(field.properties.in_global_search, 1);
    assert_eq!(field.properties.hidden, 0);
    assert_eq!(field.properties.description, "Full legal name");
}

#[test]
fn Document___from_str___missing_label___defaults_to_empty() {
    let document = Document::from_str(CUSTOMER).unwrap();

    assert_eq!(document.fields[1].label, "");
}

#[test]
fn Document___from_str___reads_permission_rights() {
    let document = Document::from_str(CUSTOMER).unwrap();
    let perm = &document.permissions[0];

    assert_eq!(perm.role, "Sales Manager");
    assert_eq!(perm.rights.write, 1);
    assert_eq!(perm.rights.import, 1);
    assert_eq!(perm.rights.submit, 0);
}

#[test]
fn Document___from_str___reads_permission_match_column() {
    let document = Document::from_str(
        r#"{"name": "Note", "fields": [], "permissions": [{"role": "Guest", "match": "owner"}]}"#,
    )
    .unwrap();

    assert_eq!(document.permissions[0].rights.match_, "owner");
}

#[test]
fn Document___from_str___null_columns___read_as_defaults() {
    let document = Document::from_str(
        r#"{"name":"Customer","description":null,"fields":[
            {"fieldname":"customer_name","label":"Customer Name","fieldtype":"Data","options":null},
            {"fieldname":"cb1","label":null,"fieldtype":"Column Break"}
        ]}"#,
    )
    .unwrap();

    assert_eq!(document.doctype.settings.description, "");
    assert_eq!(document.fields[0].label, "Customer Name");
    assert_eq!(document.fields[0].properties.options, "");
    assert_eq!(document.fields[1].label, "");
}

#[test]
fn Document___from_str___null_name___fails() {
    let err = Document::from_str(r#"{"name": null, "fields": []}"#).unwrap_err();

    assert!(err.to_string().contains("null"));
}

#[test]
fn Document___from_str___missing_permissions___defaults_to_empty() {
    let document = Document::from_str(r#"{"name": "Note", "fields": []}"#).unwrap();

    assert!(document.permissions.is_empty());
}

#[test]
fn Document___from_str___missing_name___fails() {
    let err = Document::from_str(r#"{"fields": []}"#).unwrap_err();

    assert!(err.to_string().contains("name"));
}

#[test]
fn Document___from_str___field_without_fieldtype___fails() {
    let err =
        Document::from_str(r#"{"name": "Note", "fields": [{"fieldname": "title"}]}"#).unwrap_err();

    assert!(err.to_string().contains("fieldtype"));
}

#[test]
fn Document___from_slice___ignores_unknown_columns() {
    let json = br#"{"name": "Note", "naming_rule": "Random", "fields": [
        {"fieldname": "title", "fieldtype": "Data", "fetch_from": "x.y"}
    ]}"#;

    let document = Document::from_slice(json).unwrap();

    assert_eq!(document.fields.len(), 1);
}

#[test]
fn Document___data_fields___skips_layout_only_fields() {
    let document = Document::from_str(CUSTOMER).unwrap();

    let names: Vec<_> = document.data_fields().map(|f| f.fieldname.as_str()).collect();

    assert_eq!(names, ["customer_name", "mystery"]);
}

#[test]
fn DocField___class___follows_field_type() {
    let document = Document::from_str(CUSTOMER).unwrap();

    assert_eq!(
        document.fields[0].class(),
        FieldClass::Data(crate::field_type::StorageType::Text)
    );
    assert_eq!(document.fields[1].class(), FieldClass::Layout);
    assert_eq!(document.fields[2].class(), FieldClass::Unmapped);
}

#[test]
fn DocType___modified_at___parses_microsecond_layout() {
    let document = Document::from_str(CUSTOMER).unwrap();

    let modified = document.doctype.modified_at().unwrap();

    assert_eq!(modified.year(), 2020);
    assert_eq!(modified.month(), 4);
    assert_eq!(modified.day(), 7);
    assert_eq!(modified.hour(), 16);
    assert_eq!(modified.second(), 38);
    assert_eq!(modified.nanosecond(), 151_932_000);
}

#[test]
fn DocType___modified_at___rejects_other_layouts() {
    let mut document = Document::from_str(CUSTOMER).unwrap();
    document.doctype.meta.modified = "07/04/2020".to_string();

    let err = document.doctype.modified_at().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("07/04/2020"));
}

#[test]
fn DocType___modified_at___empty_value___fails() {
    let document = Document::from_str(r#"{"name": "Note", "fields": []}"#).unwrap();

    assert!(document.doctype.modified_at().is_err());
}
