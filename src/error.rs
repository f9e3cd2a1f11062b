//! One error channel for everything between reading a schema and attaching its tree.
use std::path::PathBuf;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// The schema source could not be read.
    #[error("failed to read {source_name}: {error}")]
    Acquisition {
        source_name: String,
        #[source]
        error: std::io::Error,
    },
    /// The text is not JSON, or not JSON shaped like a form schema.
    #[error("failed to decode {source_name}: {message}")]
    Decode {
        source_name: String,
        message: String,
    },
    /// The json pointer / jq pre-processing step failed.
    #[error("failed to pre-process {source_name}: {message}")]
    Preprocess {
        source_name: String,
        message: String,
    },
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("failed to write {}: {error}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

/// Structural problems with an otherwise well-formed schema document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("fields is not defined")]
    MissingFields,
    #[error("fields is empty")]
    EmptyFields,
}

pub type Result<T, E = FormError> = std::result::Result<T, E>;
