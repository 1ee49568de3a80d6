//! Error types for host resolution, dictionary loading and rendering.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures while resolving the host list.
#[derive(Debug, Error)]
pub enum HostsError {
    /// Standard input is interactive and no host arguments were supplied.
    #[error("no hosts given")]
    NoHosts,

    /// Piped input could not be read.
    #[error("reading input: {source}")]
    Read {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Failures while building or extending an attribute dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// A descriptor document is not valid JSON or lacks required fields.
    #[error("{document}: malformed attribute document: {source}\n{contents}")]
    Parse {
        /// Name of the offending document
        document: String,
        /// Raw document contents, kept for diagnostics
        contents: String,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// An attribute with the same name is already registered.
    #[error("{name} already exists")]
    AlreadyExists {
        /// Name of the rejected attribute
        name: String,
    },

    /// A descriptor directory or file could not be read.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Failures while rendering a result set.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The result set could not be serialized as JSON.
    #[error("could not create valid JSON from result set: {source}")]
    Serialize {
        /// Underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// Writing the rendered output failed.
    #[error("writing output: {source}")]
    Write {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Any failure produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Host list resolution failed.
    #[error(transparent)]
    Hosts(#[from] HostsError),

    /// Dictionary loading or registration failed.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// Rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A JSON value that has no [`crate::value::Value`] representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported value: {0}")]
pub struct UnsupportedShape(pub &'static str);
