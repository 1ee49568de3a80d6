//! Configuration types for `gru` invocations.

use std::path::PathBuf;

/// Environment variable that enables JSON output, same as `--json`.
pub const JSON_ENV: &str = "GRU_JSON";

/// Operation requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the resolved host list
    Hosts {
        /// Host arguments, ignored when hosts are piped in
        hosts: Vec<String>,
    },
    /// Decode BIOS attribute keys
    Decode {
        /// Keys to decode
        keys: Vec<String>,
    },
    /// Describe attributes from the dictionary
    Attributes {
        /// Attribute names, or empty for all of them
        keys: Vec<String>,
    },
    /// Render a serialized result set
    Render {
        /// Input file, or `None`/`"-"` for stdin
        input: Option<String>,
    },
}

/// Options shared by every command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Machine-readable JSON output
    pub json: bool,
    /// Log verbosity, as counted by `-v` occurrences
    pub verbosity: u8,
    /// Extra attribute descriptors to register on top of the built-in corpus
    pub attributes_dir: Option<PathBuf>,
}
