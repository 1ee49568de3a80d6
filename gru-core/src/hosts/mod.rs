//! Host list resolution from piped input or command-line arguments.

mod scan;


use std::io::{self, IsTerminal, Read};

use tracing::debug;

use crate::error::HostsError;

pub use scan::{is_delimiter, scan_words, HostScanner, Scan, DEFAULT_CHUNK_SIZE};

/// Reads every host name from `reader`.
///
/// # Errors
///
/// Returns the first I/O error raised by the reader.
pub fn parse_hosts<R: Read>(reader: R) -> io::Result<Vec<String>> {
    HostScanner::new(reader).collect()
}

/// Resolves the host list from an optional piped source or from `args`.
///
/// When `piped` is present its words are the host list and `args` is ignored;
/// an empty pipe yields an empty list. Otherwise `args` is returned as is.
///
/// # Errors
///
/// - [`HostsError::NoHosts`] when nothing is piped and `args` is empty
/// - [`HostsError::Read`] when the piped source cannot be read
pub fn resolve_hosts_from<R: Read>(
    args: &[String],
    piped: Option<R>,
) -> Result<Vec<String>, HostsError> {
    match piped {
        Some(reader) => {
            let hosts = parse_hosts(reader).map_err(|source| HostsError::Read { source })?;
            debug!(count = hosts.len(), "read hosts from piped input");
            Ok(hosts)
        }
        None if args.is_empty() => Err(HostsError::NoHosts),
        None => Ok(args.to_vec()),
    }
}

/// Resolves the host list for the current process.
///
/// Standard input is used whenever it is not an interactive terminal.
///
/// # Errors
///
/// See [`resolve_hosts_from`].
pub fn resolve_hosts(args: &[String]) -> Result<Vec<String>, HostsError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        resolve_hosts_from(args, None::<io::Empty>)
    } else {
        resolve_hosts_from(args, Some(stdin.lock()))
    }
}
