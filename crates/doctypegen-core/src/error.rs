//! Error types for doctypegen

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for doctypegen operations
pub type DocTypeResult<T> = Result<T, DocTypeError>;

/// Error type for loading, generating and writing DocType models
#[derive(Error, Debug)]
pub enum DocTypeError {
    /// The source could not be read, or the destination could not be written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input bytes are not a valid DocType document
    #[error("malformed DocType document {origin}: {source}")]
    MalformedDocument {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// The assembled source is not valid Rust
    #[error("invalid generated source for DocType {doctype:?}: {message}")]
    InvalidSource { doctype: String, message: String },

    /// The `modified` column does not follow the timestamp layout
    #[error("invalid modified timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A data field uses a logical type with no storage mapping
    #[error("field {fieldname:?} has unmapped field type {fieldtype:?}")]
    UnmappedFieldType {
        fieldname: String,
        fieldtype: String,
    },

    /// Two retained fields sanitize to the same member identifier
    #[error("fields {first:?} and {second:?} both produce member identifier {ident:?}")]
    DuplicateIdentifier {
        ident: String,
        first: String,
        second: String,
    },
}

/// Coarse error classification reported to users
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Format,
    UnmappedFieldType,
    DuplicateIdentifier,
}

impl ErrorKind {
    /// Stable numeric code for the kind
    pub fn code(&self) -> u32 {
        match self {
            ErrorKind::Io => 1,
            ErrorKind::Format => 2,
            ErrorKind::UnmappedFieldType => 3,
            ErrorKind::DuplicateIdentifier => 4,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Io => write!(f, "IOError"),
            ErrorKind::Format => write!(f, "FormatError"),
            ErrorKind::UnmappedFieldType => write!(f, "UnmappedFieldTypeError"),
            ErrorKind::DuplicateIdentifier => write!(f, "DuplicateIdentifierError"),
        }
    }
}

impl DocTypeError {
    /// Returns the kind this error is reported as
    pub fn kind(&self) -> ErrorKind {
        match self {
            DocTypeError::Io { .. } => ErrorKind::Io,
            DocTypeError::MalformedDocument { .. }
            | DocTypeError::InvalidSource { .. }
            | DocTypeError::InvalidTimestamp { .. } => ErrorKind::Format,
            DocTypeError::UnmappedFieldType { .. } => ErrorKind::UnmappedFieldType,
            DocTypeError::DuplicateIdentifier { .. } => ErrorKind::DuplicateIdentifier,
        }
    }

    /// Create a [`DocTypeError::Io`] for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocTypeError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a [`DocTypeError::InvalidSource`] for the given DocType
    pub fn invalid_source(doctype: impl Into<String>, message: impl Into<String>) -> Self {
        DocTypeError::InvalidSource {
            doctype: doctype.into(),
            message: message.into(),
        }
    }
}
