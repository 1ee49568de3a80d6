//! Error types for `gru` commands.

use std::io;

use gru_core::{DictionaryError, HostsError, RenderError, UnsupportedShape};
use thiserror::Error;

/// Specialized `Result` type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Host list could not be resolved
    #[error(transparent)]
    Hosts(#[from] HostsError),

    /// Attribute dictionary could not be built
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// Results could not be rendered
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Failed to read the input document
    #[error("{path}: {source}")]
    ReadInput {
        /// Path of the input, `(stdin)` for standard input
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Input is not valid JSON or not an object
    #[error("{path}: not a result set: {source}")]
    InvalidResultSet {
        /// Path of the input
        path: String,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A host entry is not an object of fields
    #[error("{path}: {host}: expected an object of fields")]
    InvalidRecord {
        /// Path of the input
        path: String,
        /// Host whose entry is malformed
        host: String,
    },

    /// A field has a shape the renderer cannot display
    #[error("{host}: {field}: {source}")]
    UnsupportedValue {
        /// Host owning the field
        host: String,
        /// Field name
        field: String,
        /// What was wrong with the value
        #[source]
        source: UnsupportedShape,
    },

    /// Requested attribute is not in the dictionary
    #[error("{name}: unknown attribute")]
    UnknownAttribute {
        /// Attribute name as given
        name: String,
    },

    /// Failed to write to stdout
    #[error("writing output: {source}")]
    WriteOutput {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Formats an error message for stderr.
///
/// # Parameters
///
/// - `program`: Program name prefix to use in error output (e.g. `"gru"`).
/// - `err`: The error returned by the CLI runner.
///
/// # Returns
///
/// A single-line message suitable for stderr. Multi-line causes, such as the
/// raw contents of a malformed descriptor, follow on subsequent lines.
pub fn format_error_for_stderr(program: &str, err: &CliError) -> String {
    format!("{program}: {err}")
}
