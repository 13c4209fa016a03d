//! Identifier derivation for generated models.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `Customer Name` | [`scrub_name`] | `CustomerName` |
//! | `Sales Invoice` | [`model_file_name`] | `SalesInvoice.rs` |

/// Join the whitespace-separated words of a label into one identifier.
///
/// No separator is inserted and no case is changed. Distinct labels may
/// produce the same result; callers check for collisions.
///
/// # Examples
///
/// ```
/// use doctypegen_cli::codegen::naming::scrub_name;
///
/// assert_eq!(scrub_name("Customer Name"), "CustomerName");
/// assert_eq!(scrub_name("is primary contact"), "isprimarycontact");
/// assert_eq!(scrub_name("Customer"), "Customer");
/// ```
pub fn scrub_name(label: &str) -> String {
    label.split_whitespace().collect()
}

/// Whether `name` is usable as a Rust identifier.
///
/// Keywords (`type`, `Self`, ...) are rejected.
///
/// # Examples
///
/// ```
/// use doctypegen_cli::codegen::naming::is_valid_identifier;
///
/// assert!(is_valid_identifier("CustomerName"));
/// assert!(!is_valid_identifier("Customer'sName"));
/// assert!(!is_valid_identifier("type"));
/// assert!(!is_valid_identifier(""));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
    syn::parse_str::<syn::Ident>(name).is_ok()
}

/// File name of the model generated for a DocType.
///
/// # Examples
///
/// ```
/// use doctypegen_cli::codegen::naming::model_file_name;
///
/// assert_eq!(model_file_name("Sales Invoice"), "SalesInvoice.rs");
/// ```
pub fn model_file_name(doctype: &str) -> String {
    format!("{}.rs", scrub_name(doctype))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn scrub_name___joins_words() {
        assert_eq!(scrub_name("Customer Name"), "CustomerName");
        assert_eq!(scrub_name("Default Price List"), "DefaultPriceList");
    }

    #[test]
    fn scrub_name___preserves_case() {
        assert_eq!(scrub_name("tax ID"), "taxID");
        assert_eq!(scrub_name("lower case"), "lowercase");
    }

    #[test]
    fn scrub_name___collapses_repeated_and_edge_whitespace() {
        assert_eq!(scrub_name("  Credit   Limit "), "CreditLimit");
        assert_eq!(scrub_name("Credit\tLimit"), "CreditLimit");
    }

    #[test]
    fn scrub_name___handles_empty_label() {
        assert_eq!(scrub_name(""), "");
        assert_eq!(scrub_name("   "), "");
    }

    #[test]
    fn scrub_name___keeps_punctuation() {
        assert_eq!(scrub_name("Customer's Name"), "Customer'sName");
        assert_eq!(scrub_name("No."), "No.");
    }

    #[test]
    fn is_valid_identifier___accepts_identifiers() {
        assert!(is_valid_identifier("CustomerName"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("Type"));
    }

    #[test]
    fn is_valid_identifier___rejects_non_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("2FACode"));
        assert!(!is_valid_identifier("No."));
        assert!(!is_valid_identifier("type"));
        assert!(!is_valid_identifier("Self"));
    }

    #[test]
    fn model_file_name___uses_scrubbed_doctype_name() {
        assert_eq!(model_file_name("Customer"), "Customer.rs");
        assert_eq!(model_file_name("Sales Invoice Item"), "SalesInvoiceItem.rs");
    }
}
