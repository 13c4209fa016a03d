//! doctypegen-core - DocType schema model and loader
//!
//! This crate provides the input side of the doctypegen pipeline:
//! - [`Document`] and its parts ([`DocType`], [`DocField`], [`DocPerm`])
//! - [`load`] for reading a DocType JSON document from disk
//! - [`classify`] and the static field-type tables ([`TYPE_MAPPINGS`], [`SKIP_FIELD_TYPES`])
//! - [`DocTypeError`] for error handling

mod document;
mod error;
mod field_type;
mod loader;

pub use document::{
    DocField, DocPerm, DocType, DocTypeSettings, Document, FieldProperties, MODIFIED_LAYOUT,
    PermissionRights, RecordMeta,
};
pub use error::{DocTypeError, DocTypeResult, ErrorKind};
pub use field_type::{
    FieldClass, SKIP_FIELD_TYPES, StorageType, TYPE_MAPPINGS, TypeMapping, classify, is_skipped,
    storage_type,
};
pub use loader::load;

