//! Result set rendering.
//!
//! A [`ResultSet`] is printed either as pretty JSON or as a text report with
//! one section per host. Attribute keys inside map fields go through a decode
//! hook supplied by the caller, so the renderer never depends on a particular
//! [`crate::bios::AttributeDictionary`].

mod json;
mod text;


use std::io::{self, Write};

use crate::error::RenderError;
use crate::value::ResultSet;

/// Width of each aligned column in the text report.
pub const COLUMN_WIDTH: usize = 60;

/// Hook translating a raw attribute key; the flag is `true` in JSON mode.
pub type Decode<'a> = &'a dyn Fn(&str, bool) -> String;

/// Decode hook that leaves every key unchanged.
pub fn passthrough(key: &str, _json: bool) -> String {
    key.to_string()
}

/// Renders `results` into `out`.
///
/// # Parameters
///
/// * `out` - Destination writer
/// * `results` - Per-host results
/// * `json` - Emit pretty JSON instead of the text report
/// * `decode` - Hook applied to the keys of map fields
///
/// # Errors
///
/// - [`RenderError::Serialize`] if the results cannot be represented as JSON
/// - [`RenderError::Write`] if writing to `out` fails
pub fn render<W: Write + ?Sized>(
    out: &mut W,
    results: &ResultSet,
    json: bool,
    decode: Decode<'_>,
) -> Result<(), RenderError> {
    if json {
        json::write_json(out, results, decode)
    } else {
        text::write_text(out, results, decode).map_err(|source| RenderError::Write { source })
    }
}

/// Renders `results` to standard output.
///
/// # Errors
///
/// See [`render`].
pub fn print_results(results: &ResultSet, json: bool, decode: Decode<'_>) -> Result<(), RenderError> {
    let mut out = io::stdout().lock();
    render(&mut out, results, json, decode)?;
    out.flush().map_err(|source| RenderError::Write { source })
}
