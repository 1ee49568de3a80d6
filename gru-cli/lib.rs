//! Command-line front-end for `gru-core`.
//!
//! This crate wires the host tokenizer, the BIOS attribute dictionary and the
//! result renderer into the `gru` commands. Each command writes to a caller
//! supplied writer so it can be exercised without a terminal.

use std::io::{self, Read, Write};

use gru_core::hosts::resolve_hosts;
use gru_core::{
    render, AttributeDescriptor, AttributeDictionary, DefaultValue, ResultRecord, ResultSet, Value,
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod error;


pub use config::{CliConfig, Command, JSON_ENV};
pub use error::{format_error_for_stderr, CliError, Result};

/// Name shown for standard input in diagnostics.
const STDIN_NAME: &str = "(stdin)";

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbosity` picks the level, from
/// `warn` for no `-v` up to `trace` for three or more.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed, e.g. by a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Builds the attribute dictionary for an invocation.
///
/// The built-in corpus is loaded first; descriptors from
/// [`CliConfig::attributes_dir`] are registered on top. Attributes already
/// known are reported and skipped.
///
/// # Errors
///
/// Returns [`CliError::Dictionary`] if a document is malformed or the
/// directory cannot be read.
pub fn load_dictionary(config: &CliConfig) -> Result<AttributeDictionary> {
    let mut dictionary = AttributeDictionary::builtin()?;

    if let Some(dir) = &config.attributes_dir {
        for name in dictionary.register_dir(dir)? {
            warn!(attribute = %name, dir = %dir.display(), "attribute already exists, skipping");
        }
    }

    debug!(attributes = dictionary.len(), "dictionary ready");
    Ok(dictionary)
}

fn write_output(out: &mut dyn Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .map_err(|source| CliError::WriteOutput { source })
}

/// Writes a list of strings, one per line or as a JSON array.
fn write_list(out: &mut dyn Write, items: &[String], json: bool) -> Result<()> {
    if json {
        let mut text = serde_json::to_string_pretty(items)
            .map_err(|source| CliError::Render(gru_core::RenderError::Serialize { source }))?;
        text.push('\n');
        return write_output(out, &text);
    }

    for item in items {
        writeln!(out, "{item}").map_err(|source| CliError::WriteOutput { source })?;
    }
    Ok(())
}

/// Prints resolved hosts.
///
/// # Errors
///
/// Returns [`CliError::WriteOutput`] if writing fails.
pub fn write_hosts(out: &mut dyn Write, hosts: &[String], json: bool) -> Result<()> {
    write_list(out, hosts, json)
}

/// Prints the decoded form of every key.
///
/// # Errors
///
/// Returns [`CliError::WriteOutput`] if writing fails.
pub fn write_decoded(
    out: &mut dyn Write,
    dictionary: &AttributeDictionary,
    keys: &[String],
    json: bool,
) -> Result<()> {
    let decoded: Vec<String> = keys.iter().map(|key| dictionary.decode(key, json)).collect();
    write_list(out, &decoded, json)
}

fn descriptor_record(descriptor: &AttributeDescriptor) -> ResultRecord {
    let default_value = match &descriptor.default_value {
        Some(DefaultValue::Bool(value)) => Value::from(*value),
        Some(DefaultValue::Int(value)) => Value::from(*value),
        Some(DefaultValue::Float(value)) => Value::from(*value),
        Some(DefaultValue::Str(value)) => Value::from(value.as_str()),
        Some(DefaultValue::Other(raw)) => {
            Value::try_from(raw.clone()).unwrap_or_else(|_| Value::from(raw.to_string()))
        }
        None => Value::Null,
    };
    let choices = if descriptor.choices.is_empty() {
        Value::Null
    } else {
        Value::List(descriptor.choices.iter().map(ToString::to_string).collect())
    };

    ResultRecord::new()
        .with("DisplayName", descriptor.display_name.as_str())
        .with("HelpText", descriptor.help_text.as_str())
        .with("ReadOnly", descriptor.read_only)
        .with("Type", descriptor.value_kind.as_str())
        .with("DefaultValue", default_value)
        .with("Choices", choices)
}

/// Builds a result set describing dictionary attributes.
///
/// Entries are keyed by the decoded attribute name. An empty `keys` selects
/// every attribute.
///
/// # Errors
///
/// Returns [`CliError::UnknownAttribute`] for the first key not in the
/// dictionary.
pub fn attribute_results(
    dictionary: &AttributeDictionary,
    keys: &[String],
    json: bool,
) -> Result<ResultSet> {
    let descriptors: Vec<&AttributeDescriptor> = if keys.is_empty() {
        dictionary.iter().collect()
    } else {
        keys.iter()
            .map(|key| {
                dictionary
                    .get(key)
                    .ok_or_else(|| CliError::UnknownAttribute { name: key.clone() })
            })
            .collect::<Result<_>>()?
    };

    Ok(descriptors
        .into_iter()
        .map(|descriptor| {
            (
                dictionary.decode(&descriptor.name, json),
                descriptor_record(descriptor),
            )
        })
        .collect())
}

/// Parses a serialized result set.
///
/// The document must be an object mapping host names to objects of fields.
/// Field order within each host is preserved.
///
/// # Errors
///
/// - [`CliError::InvalidResultSet`] if the document is not a JSON object
/// - [`CliError::InvalidRecord`] if a host entry is not an object
/// - [`CliError::UnsupportedValue`] if a field cannot be represented
pub fn parse_result_set(path: &str, contents: &str) -> Result<ResultSet> {
    let document: serde_json::Map<String, serde_json::Value> = serde_json::from_str(contents)
        .map_err(|source| CliError::InvalidResultSet {
            path: path.to_string(),
            source,
        })?;

    let mut results = ResultSet::new();
    for (host, entry) in document {
        let serde_json::Value::Object(fields) = entry else {
            return Err(CliError::InvalidRecord {
                path: path.to_string(),
                host,
            });
        };

        let mut record = ResultRecord::new();
        for (field, value) in fields {
            let value = Value::try_from(value).map_err(|source| CliError::UnsupportedValue {
                host: host.clone(),
                field: field.clone(),
                source,
            })?;
            record.insert(field, value);
        }
        results.insert(host, record);
    }

    Ok(results)
}

/// Reads the whole input document from a file or stdin.
///
/// If `path` is `None`, or equals `"-"`, standard input is read.
///
/// # Returns
///
/// The display name of the input and its contents.
///
/// # Errors
///
/// Returns [`CliError::ReadInput`] if the input cannot be read or is not
/// valid UTF-8.
pub fn read_input(path: Option<&str>) -> Result<(String, String)> {
    let mut contents = String::new();

    match path {
        None | Some("-") => {
            io::stdin()
                .lock()
                .read_to_string(&mut contents)
                .map_err(|source| CliError::ReadInput {
                    path: STDIN_NAME.to_string(),
                    source,
                })?;
            Ok((STDIN_NAME.to_string(), contents))
        }
        Some(path) => {
            contents = std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
                path: path.to_string(),
                source,
            })?;
            Ok((path.to_string(), contents))
        }
    }
}

/// Runs a command, writing its output to `out`.
///
/// # Errors
///
/// Returns the first error raised by the command.
pub fn run_command(out: &mut dyn Write, command: &Command, config: &CliConfig) -> Result<()> {
    match command {
        Command::Hosts { hosts } => {
            let hosts = resolve_hosts(hosts)?;
            write_hosts(out, &hosts, config.json)
        }
        Command::Decode { keys } => {
            let dictionary = load_dictionary(config)?;
            write_decoded(out, &dictionary, keys, config.json)
        }
        Command::Attributes { keys } => {
            let dictionary = load_dictionary(config)?;
            let results = attribute_results(&dictionary, keys, config.json)?;
            render(out, &results, config.json, &dictionary.decoder())?;
            Ok(())
        }
        Command::Render { input } => {
            let dictionary = load_dictionary(config)?;
            let (path, contents) = read_input(input.as_deref())?;
            let results = parse_result_set(&path, &contents)?;
            debug!(hosts = results.len(), input = %path, "rendering result set");
            render(out, &results, config.json, &dictionary.decoder())?;
            Ok(())
        }
    }
}

/// Runs a command against standard output.
///
/// # Errors
///
/// See [`run_command`].
pub fn run_cli(command: &Command, config: &CliConfig) -> Result<()> {
    let mut out = io::stdout().lock();
    run_command(&mut out, command, config)?;
    out.flush().map_err(|source| CliError::WriteOutput { source })
}
