//! Check command implementation

use crate::generate::describe;
use anyhow::Result;
use doctypegen_cli::codegen::plan_model;
use std::path::Path;

/// Check command implementation
pub fn run(input: &Path) -> Result<()> {
    println!("Checking DocType: {}", input.display());

    let document = doctypegen_core::load(input).map_err(|e| describe(e, input))?;
    let plan = plan_model(&document).map_err(|e| describe(e, input))?;

    let module = &document.doctype.settings.module;
    if module.is_empty() {
        println!("✓ DocType: {}", document.name());
    } else {
        println!("✓ DocType: {} ({module})", document.name());
    }
    println!("✓ Struct: {}", plan.type_name);
    println!("✓ Members: {}", plan.members.len());
    println!("✓ Layout fields skipped: {}", plan.skipped.len());
    println!("✓ Permissions: {}", document.permissions.len());

    match document.doctype.modified_at() {
        Ok(modified) => println!("✓ Modified: {modified}"),
        Err(_) => println!("! Modified: unparseable ({:?})", document.doctype.meta.modified),
    }

    println!("\nDocType can be generated!");

    Ok(())
}

#[cfg(test)]
#[path = "check/check_tests.rs"]
mod check_tests;
