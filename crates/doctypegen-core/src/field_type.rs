//! Logical field types and their storage mapping
//!
//! Every logical type tag falls in exactly one of three classes:
//!
//! | Class | Meaning |
//! |-------|---------|
//! | [`FieldClass::Layout`] | listed in [`SKIP_FIELD_TYPES`]; never becomes a member |
//! | [`FieldClass::Data`] | listed in [`TYPE_MAPPINGS`]; becomes a member of the mapped storage type |
//! | [`FieldClass::Unmapped`] | anything else; generation fails for it |

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Storage type a data field is held in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageType {
    /// UTF-8 text
    Text,

    /// 64-bit signed integer
    Integer,

    /// Unsigned integer (check boxes and read-only flags)
    Unsigned,

    /// 64-bit floating point
    Float,

    /// Date and time without a zone
    Timestamp,
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageType::Text => write!(f, "text"),
            StorageType::Integer => write!(f, "integer"),
            StorageType::Unsigned => write!(f, "unsigned"),
            StorageType::Float => write!(f, "float"),
            StorageType::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// Mapping from a logical type tag to its storage type
pub struct TypeMapping {
    pub field_type: &'static str,
    pub storage: StorageType,
}

const fn mapping(field_type: &'static str, storage: StorageType) -> TypeMapping {
    TypeMapping {
        field_type,
        storage,
    }
}

/// Every data-carrying logical type
pub const TYPE_MAPPINGS: &[TypeMapping] = &[
    mapping("Attach", StorageType::Text),
    mapping("Attach Image", StorageType::Text),
    mapping("Barcode", StorageType::Text),
    mapping("Check", StorageType::Unsigned),
    mapping("Code", StorageType::Text),
    mapping("Color", StorageType::Text),
    mapping("Currency", StorageType::Float),
    mapping("Data", StorageType::Text),
    mapping("Date", StorageType::Timestamp),
    mapping("Datetime", StorageType::Timestamp),
    mapping("Dynamic Link", StorageType::Text),
    mapping("Float", StorageType::Float),
    mapping("Heading", StorageType::Text),
    mapping("HTML", StorageType::Text),
    mapping("HTML Editor", StorageType::Text),
    mapping("Image", StorageType::Text),
    mapping("Int", StorageType::Integer),
    mapping("Link", StorageType::Text),
    mapping("Long Text", StorageType::Text),
    mapping("Password", StorageType::Text),
    mapping("Percent", StorageType::Float),
    mapping("Read Only", StorageType::Unsigned),
    mapping("Select", StorageType::Text),
    mapping("Small Text", StorageType::Text),
    mapping("Table", StorageType::Text),
    mapping("Text", StorageType::Text),
    mapping("Text Editor", StorageType::Text),
    mapping("Time", StorageType::Timestamp),
    mapping("Signature", StorageType::Text),
];

/// Layout-only logical types
pub const SKIP_FIELD_TYPES: &[&str] = &[
    "Section Break",
    "Button",
    "Column Break",
    "Fold",
    "Geolocation",
];

static STORAGE_BY_TAG: Lazy<HashMap<&'static str, StorageType>> = Lazy::new(|| {
    TYPE_MAPPINGS
        .iter()
        .map(|m| (m.field_type, m.storage))
        .collect()
});

/// Classification of a logical type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    Layout,
    Data(StorageType),
    Unmapped,
}

/// Whether the tag names a layout-only field
pub fn is_skipped(field_type: &str) -> bool {
    SKIP_FIELD_TYPES.contains(&field_type)
}

/// Storage type for a tag, if it is mapped
pub fn storage_type(field_type: &str) -> Option<StorageType> {
    STORAGE_BY_TAG.get(field_type).copied()
}

/// Classify a logical type tag
///
/// Tags are matched exactly; `"data"` is not `"Data"`.
pub fn classify(field_type: &str) -> FieldClass {
    if is_skipped(field_type) {
        return FieldClass::Layout;
    }

    match storage_type(field_type) {
        Some(storage) => FieldClass::Data(storage),
        None => FieldClass::Unmapped,
    }
}
