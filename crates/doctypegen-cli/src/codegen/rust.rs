//! Rust struct generation from DocType documents.

use super::naming::{is_valid_identifier, scrub_name};
use super::rust_types::{RustType, map_storage_type, required_imports};
use doctypegen_core::{DocField, DocTypeError, DocTypeResult, Document, FieldClass};
use std::collections::HashMap;
use std::fmt::Write;
use tracing::{debug, trace};

/// Options controlling generated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Emit DocType and field descriptions as doc comments.
    pub doc_comments: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { doc_comments: true }
    }
}

/// A member of the generated struct.
#[derive(Debug, Clone)]
pub struct Member<'a> {
    /// Identifier derived from the field label.
    pub ident: String,

    /// Rust type derived from the field type.
    pub ty: RustType,

    /// The field the member was derived from.
    pub field: &'a DocField,
}

/// Everything needed to emit a model, with all checks already passed.
#[derive(Debug, Clone)]
pub struct ModelPlan<'a> {
    /// Name of the generated struct.
    pub type_name: String,

    /// Members in document order.
    pub members: Vec<Member<'a>>,

    /// Fieldnames of the layout-only fields that were left out.
    pub skipped: Vec<&'a str>,
}

/// Work out the struct a document generates, without emitting anything.
///
/// Fails on the first field whose type is unmapped, whose label is not an
/// identifier, or whose identifier is already taken.
pub fn plan_model(document: &Document) -> DocTypeResult<ModelPlan<'_>> {
    let type_name = scrub_name(document.name());
    if !is_valid_identifier(&type_name) {
        return Err(DocTypeError::invalid_source(
            document.name(),
            format!("DocType name does not produce a valid type name ({type_name:?})"),
        ));
    }

    let mut members = Vec::new();
    let mut skipped = Vec::new();
    let mut taken: HashMap<String, &str> = HashMap::new();

    for field in &document.fields {
        let storage = match field.class() {
            FieldClass::Layout => {
                trace!(fieldname = %field.fieldname, fieldtype = %field.fieldtype, "skipping layout field");
                skipped.push(field.fieldname.as_str());
                continue;
            }
            FieldClass::Data(storage) => storage,
            FieldClass::Unmapped => {
                return Err(DocTypeError::UnmappedFieldType {
                    fieldname: field.fieldname.clone(),
                    fieldtype: field.fieldtype.clone(),
                });
            }
        };

        let ident = scrub_name(&field.label);
        if !is_valid_identifier(&ident) {
            return Err(DocTypeError::invalid_source(
                document.name(),
                format!(
                    "label {:?} of field {:?} does not produce a valid identifier",
                    field.label, field.fieldname
                ),
            ));
        }

        if let Some(first) = taken.insert(ident.clone(), &field.fieldname) {
            return Err(DocTypeError::DuplicateIdentifier {
                ident,
                first: first.to_string(),
                second: field.fieldname.clone(),
            });
        }

        members.push(Member {
            ident,
            ty: map_storage_type(storage),
            field,
        });
    }

    Ok(ModelPlan {
        type_name,
        members,
        skipped,
    })
}

/// Generate the formatted source of the struct for a document.
///
/// Output depends only on the document and options, so regenerating an
/// unchanged DocType yields identical bytes.
pub fn generate_source(document: &Document, options: &GenerateOptions) -> DocTypeResult<String> {
    let plan = plan_model(document)?;
    let code = assemble(document, &plan, options);
    let formatted = format_source(document.name(), &code)?;

    debug!(
        doctype = %document.name(),
        members = plan.members.len(),
        skipped = plan.skipped.len(),
        "generated model source"
    );

    Ok(formatted)
}

/// Emit unformatted source for a plan.
fn assemble(document: &Document, plan: &ModelPlan<'_>, options: &GenerateOptions) -> String {
    let mut code = String::new();

    // File header; line breaks in the name would end the comment
    let display_name = document.name().split_whitespace().collect::<Vec<_>>().join(" ");
    let _ = writeln!(code, "//! Record model for the `{display_name}` DocType.");
    code.push_str("//!\n");
    code.push_str("//! Generated by doctypegen. Regenerate from the DocType instead of editing.\n\n");

    // Imports
    for import in required_imports(plan.members.iter().map(|m| &m.ty)) {
        let _ = writeln!(code, "use {import};");
    }
    code.push_str("use serde::{Deserialize, Serialize};\n\n");

    // Struct declaration
    if options.doc_comments {
        push_doc(&mut code, "", &document.doctype.settings.description);
    }
    code.push_str("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n");
    code.push_str("#[allow(non_snake_case)]\n");
    let _ = writeln!(code, "pub struct {} {{", plan.type_name);

    // Members
    for member in &plan.members {
        if options.doc_comments {
            push_doc(&mut code, "    ", &member.field.properties.description);
        }
        let _ = writeln!(code, "    #[serde(rename = {:?})]", member.field.fieldname);
        let _ = writeln!(code, "    pub {}: {},", member.ident, member.ty.name);
    }

    code.push_str("}\n");
    code
}

/// Append `text` as outer doc comment lines.
fn push_doc(code: &mut String, indent: &str, text: &str) {
    for line in text.lines() {
        let line = line.replace('\r', "");
        let line = line.trim_end();
        if line.is_empty() {
            let _ = writeln!(code, "{indent}///");
        } else {
            let _ = writeln!(code, "{indent}/// {line}");
        }
    }
}

/// Parse and pretty-print assembled source.
fn format_source(doctype: &str, code: &str) -> DocTypeResult<String> {
    let file = syn::parse_file(code)
        .map_err(|e| DocTypeError::invalid_source(doctype, format!("{e} in generated source")))?;

    Ok(prettyplease::unparse(&file))
}
