//! DocType document model
//!
//! A DocType export is a single JSON object: the DocType's own columns at the
//! top level, plus `fields` and `permissions` arrays. The model keeps every
//! column the export carries, even though code generation only reads a few of
//! them (`name`, `description`, and each field's `fieldname`, `label`,
//! `fieldtype` and `description`).
//!
//! Flag columns are `0`/`1` integers in the export and stay `u32` here.
//! A `null` in any optional column reads as that column's zero value.

use crate::error::{DocTypeError, DocTypeResult};
use crate::field_type::{FieldClass, classify};
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Layout of the `modified` and `creation` columns (`YYYY-MM-DD HH:MM:SS.ffffff`)
pub const MODIFIED_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A complete DocType export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The DocType's own columns.
    #[serde(flatten)]
    pub doctype: DocType,

    /// Field definitions, in export order.
    pub fields: Vec<DocField>,

    /// Permission rules, in export order.
    #[serde(default)]
    pub permissions: Vec<DocPerm>,
}

/// Bookkeeping columns every stored record carries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordMeta {
    #[serde(deserialize_with = "null_default")]
    pub creation: String,
    #[serde(deserialize_with = "null_default")]
    pub modified: String,
    #[serde(deserialize_with = "null_default")]
    pub modified_by: String,
    #[serde(deserialize_with = "null_default")]
    pub owner: String,
    #[serde(deserialize_with = "null_default")]
    pub docstatus: u32,
    #[serde(deserialize_with = "null_default")]
    pub parent: String,
    #[serde(deserialize_with = "null_default")]
    pub parentfield: String,
    #[serde(deserialize_with = "null_default")]
    pub parenttype: String,

    /// Position of the record within its parent.
    #[serde(deserialize_with = "null_default")]
    pub idx: u32,
}

/// DocType-level metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocType {
    /// DocType name, e.g. `"Sales Invoice"`.
    pub name: String,

    #[serde(flatten)]
    pub meta: RecordMeta,

    #[serde(flatten)]
    pub settings: DocTypeSettings,
}

/// The optional DocType columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocTypeSettings {
    #[serde(deserialize_with = "null_default")]
    pub module: String,
    #[serde(deserialize_with = "null_default")]
    pub app: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub search_fields: String,
    #[serde(rename = "issingle", deserialize_with = "null_default")]
    pub is_single: u32,
    #[serde(rename = "istable", deserialize_with = "null_default")]
    pub is_table: u32,
    #[serde(deserialize_with = "null_default")]
    pub is_submittable: u32,
    #[serde(deserialize_with = "null_default")]
    pub editable_grid: u32,
    #[serde(deserialize_with = "null_default")]
    pub track_changes: u32,
    #[serde(deserialize_with = "null_default")]
    pub track_seen: u32,
    #[serde(deserialize_with = "null_default")]
    pub restrict_to_domain: String,
    #[serde(deserialize_with = "null_default")]
    pub autoname: String,
    #[serde(deserialize_with = "null_default")]
    pub name_case: String,
    #[serde(deserialize_with = "null_default")]
    pub title_field: String,
    #[serde(deserialize_with = "null_default")]
    pub image_field: String,
    #[serde(deserialize_with = "null_default")]
    pub timeline_field: String,
    #[serde(deserialize_with = "null_default")]
    pub sort_field: String,
    #[serde(deserialize_with = "null_default")]
    pub sort_order: String,
    #[serde(deserialize_with = "null_default")]
    pub colour: String,
    #[serde(deserialize_with = "null_default")]
    pub color: String,
    #[serde(deserialize_with = "null_default")]
    pub icon: String,
    #[serde(rename = "smallicon", deserialize_with = "null_default")]
    pub small_icon: String,
    #[serde(deserialize_with = "null_default")]
    pub read_only: u32,
    #[serde(deserialize_with = "null_default")]
    pub read_only_onload: u32,
    #[serde(deserialize_with = "null_default")]
    pub in_create: u32,
    #[serde(deserialize_with = "null_default")]
    pub menu_index: u32,
    #[serde(deserialize_with = "null_default")]
    pub parent_node: String,
    #[serde(deserialize_with = "null_default")]
    pub allow_copy: u32,
    #[serde(deserialize_with = "null_default")]
    pub allow_rename: u32,
    #[serde(deserialize_with = "null_default")]
    pub allow_import: u32,
    #[serde(deserialize_with = "null_default")]
    pub hide_toolbar: u32,
    #[serde(deserialize_with = "null_default")]
    pub hide_heading: u32,
    #[serde(deserialize_with = "null_default")]
    pub max_attachments: u32,
    #[serde(deserialize_with = "null_default")]
    pub print_outline: String,
    #[serde(deserialize_with = "null_default")]
    pub document_type: String,
    #[serde(deserialize_with = "null_default")]
    pub tag_fields: String,
    #[serde(deserialize_with = "null_default")]
    pub subject: String,
    #[serde(rename = "_last_update", deserialize_with = "null_default")]
    pub last_update: String,
    #[serde(deserialize_with = "null_default")]
    pub engine: String,
    #[serde(deserialize_with = "null_default")]
    pub default_print_format: String,
    #[serde(deserialize_with = "null_default")]
    pub show_name_in_global_search: u32,
    #[serde(rename = "_user_tags", deserialize_with = "null_default")]
    pub user_tags: String,
    #[serde(deserialize_with = "null_default")]
    pub custom: u32,
    #[serde(deserialize_with = "null_default")]
    pub beta: u32,
    #[serde(deserialize_with = "null_default")]
    pub image_view: u32,
    #[serde(deserialize_with = "null_default")]
    pub has_web_view: u32,
    #[serde(deserialize_with = "null_default")]
    pub allow_guest_to_view: u32,
    #[serde(deserialize_with = "null_default")]
    pub route: String,
    #[serde(deserialize_with = "null_default")]
    pub is_published_field: String,
}

/// One field definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocField {
    /// Machine name; becomes the serialization tag of the generated member.
    pub fieldname: String,

    /// Logical type tag, e.g. `"Data"` or `"Column Break"`.
    pub fieldtype: String,

    /// Human label; becomes the generated member identifier.
    #[serde(default, deserialize_with = "null_default")]
    pub label: String,

    #[serde(default, deserialize_with = "null_default")]
    pub name: String,

    #[serde(flatten)]
    pub meta: RecordMeta,

    #[serde(flatten)]
    pub properties: FieldProperties,
}

/// Display and behaviour flags of a field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldProperties {
    #[serde(deserialize_with = "null_default")]
    pub oldfieldname: String,
    #[serde(deserialize_with = "null_default")]
    pub oldfieldtype: String,
    #[serde(deserialize_with = "null_default")]
    pub options: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub default: String,
    #[serde(deserialize_with = "null_default")]
    pub depends_on: String,
    #[serde(deserialize_with = "null_default")]
    pub collapsible_depends_on: String,
    #[serde(deserialize_with = "null_default")]
    pub trigger: String,
    #[serde(deserialize_with = "null_default")]
    pub width: String,
    #[serde(deserialize_with = "null_default")]
    pub print_width: String,
    #[serde(deserialize_with = "null_default")]
    pub precision: String,
    #[serde(deserialize_with = "null_default")]
    pub search_index: u32,
    #[serde(deserialize_with = "null_default")]
    pub hidden: u32,
    #[serde(deserialize_with = "null_default")]
    pub set_only_once: u32,
    #[serde(deserialize_with = "null_default")]
    pub allow_in_quick_entry: u32,
    #[serde(deserialize_with = "null_default")]
    pub print_hide: u32,
    #[serde(deserialize_with = "null_default")]
    pub report_hide: u32,
    #[serde(deserialize_with = "null_default")]
    pub reqd: u32,
    #[serde(deserialize_with = "null_default")]
    pub bold: u32,
    #[serde(deserialize_with = "null_default")]
    pub in_global_search: u32,
    #[serde(deserialize_with = "null_default")]
    pub collapsible: u32,
    #[serde(deserialize_with = "null_default")]
    pub unique: u32,
    #[serde(deserialize_with = "null_default")]
    pub no_copy: u32,
    #[serde(deserialize_with = "null_default")]
    pub allow_on_submit: u32,
    #[serde(deserialize_with = "null_default")]
    pub permlevel: u32,
    #[serde(deserialize_with = "null_default")]
    pub ignore_user_permissions: u32,
    #[serde(deserialize_with = "null_default")]
    pub columns: u32,
    #[serde(deserialize_with = "null_default")]
    pub in_list_view: u32,
    #[serde(deserialize_with = "null_default")]
    pub in_standard_filter: u32,
    #[serde(deserialize_with = "null_default")]
    pub read_only: u32,
    #[serde(deserialize_with = "null_default")]
    pub length: u32,
    #[serde(deserialize_with = "null_default")]
    pub translatable: u32,
}

/// One permission rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocPerm {
    /// Role the rule grants rights to.
    #[serde(default, deserialize_with = "null_default")]
    pub role: String,

    #[serde(default, deserialize_with = "null_default")]
    pub name: String,

    #[serde(flatten)]
    pub meta: RecordMeta,

    #[serde(flatten)]
    pub rights: PermissionRights,
}

/// Rights granted by a permission rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionRights {
    #[serde(deserialize_with = "null_default")]
    pub permlevel: u32,
    #[serde(deserialize_with = "null_default")]
    pub read: u32,
    #[serde(deserialize_with = "null_default")]
    pub write: u32,
    #[serde(deserialize_with = "null_default")]
    pub create: u32,
    #[serde(deserialize_with = "null_default")]
    pub delete: u32,
    #[serde(deserialize_with = "null_default")]
    pub submit: u32,
    #[serde(deserialize_with = "null_default")]
    pub cancel: u32,
    #[serde(deserialize_with = "null_default")]
    pub amend: u32,
    #[serde(deserialize_with = "null_default")]
    pub report: u32,
    #[serde(deserialize_with = "null_default")]
    pub export: u32,
    #[serde(deserialize_with = "null_default")]
    pub import: u32,
    #[serde(deserialize_with = "null_default")]
    pub share: u32,
    #[serde(deserialize_with = "null_default")]
    pub print: u32,
    #[serde(deserialize_with = "null_default")]
    pub email: u32,
    #[serde(deserialize_with = "null_default")]
    pub if_owner: u32,
    #[serde(deserialize_with = "null_default")]
    pub set_user_permissions: u32,

    /// Legacy user-property match condition.
    #[serde(rename = "match", deserialize_with = "null_default")]
    pub match_: String,
}

/// Read a column that may be `null`, treating `null` as the default value
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Document {
    /// Parse a document from JSON bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Parse a document from JSON text
    pub fn from_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// The DocType name
    pub fn name(&self) -> &str {
        &self.doctype.name
    }

    /// Fields that hold data, skipping layout-only ones
    ///
    /// Unmapped types are included; the generator reports them.
    pub fn data_fields(&self) -> impl Iterator<Item = &DocField> {
        self.fields.iter().filter(|f| !f.is_layout())
    }
}

impl DocType {
    /// Parse the `modified` column
    pub fn modified_at(&self) -> DocTypeResult<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.meta.modified, MODIFIED_LAYOUT).map_err(|source| {
            DocTypeError::InvalidTimestamp {
                value: self.meta.modified.clone(),
                source,
            }
        })
    }
}

impl DocField {
    /// Classify this field's logical type
    pub fn class(&self) -> FieldClass {
        classify(&self.fieldtype)
    }

    /// Whether the field is a layout-only element
    pub fn is_layout(&self) -> bool {
        matches!(self.class(), FieldClass::Layout)
    }
}

#[cfg(test)]
#[path = "document/document_tests.rs"]
mod document_tests;
