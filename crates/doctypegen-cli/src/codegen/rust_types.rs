//! Rust type mappings for generated models.
//!
//! # Type Mappings
//!
//! | Storage | Rust | Import |
//! |---------|------|--------|
//! | `Text` | `String` | - |
//! | `Integer` | `i64` | - |
//! | `Unsigned` | `u64` | - |
//! | `Float` | `f64` | - |
//! | `Timestamp` | `NaiveDateTime` | `chrono::NaiveDateTime` |

use doctypegen_core::StorageType;
use std::collections::BTreeSet;

/// A Rust type as written in generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RustType {
    /// Name used in the member declaration.
    pub name: &'static str,

    /// Path to `use` at the top of the file, if the type is not in the prelude.
    pub import: Option<&'static str>,
}

impl RustType {
    const fn prelude(name: &'static str) -> Self {
        Self { name, import: None }
    }

    const fn imported(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            import: Some(path),
        }
    }
}

/// Map a storage type to the Rust type that holds it.
pub fn map_storage_type(storage: StorageType) -> RustType {
    match storage {
        StorageType::Text => RustType::prelude("String"),
        StorageType::Integer => RustType::prelude("i64"),
        StorageType::Unsigned => RustType::prelude("u64"),
        StorageType::Float => RustType::prelude("f64"),
        StorageType::Timestamp => RustType::imported("NaiveDateTime", "chrono::NaiveDateTime"),
    }
}

/// Imports needed by a set of types, sorted and deduplicated.
pub fn required_imports<'a>(types: impl IntoIterator<Item = &'a RustType>) -> BTreeSet<&'static str> {
    types.into_iter().filter_map(|ty| ty.import).collect()
}
