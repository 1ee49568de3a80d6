//! # gru-core
//!
//! Presentation and attribute-decoding core for BMC management tools.
//!
//! This crate turns per-host query results into either pretty JSON or a sorted,
//! column-aligned text report, and translates terse vendor BIOS attribute keys
//! into human-friendly names through a mergeable [`bios::AttributeDictionary`].
//! It performs no network I/O: results are produced elsewhere and handed over
//! as a [`value::ResultSet`].
//!
//! The crate is organised around three components:
//!
//! - [`hosts`] turns piped standard input or command-line arguments into an
//!   ordered host list.
//! - [`bios`] loads the built-in attribute corpus and decodes attribute keys.
//! - [`render`] prints a [`value::ResultSet`] using an injected decode hook.

pub mod bios;
pub mod error;
pub mod hosts;
pub mod render;
pub mod value;

pub use bios::{AttributeDescriptor, AttributeDictionary, Choice, DefaultValue, ValueKind};
pub use error::{DictionaryError, Error, HostsError, RenderError, Result, UnsupportedShape};
pub use render::{passthrough, print_results, render, Decode};
pub use value::{ResultRecord, ResultSet, Scalar, Value};
