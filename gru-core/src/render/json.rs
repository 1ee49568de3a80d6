//! Pretty JSON output.

use std::collections::BTreeMap;
use std::io::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Decode;
use crate::error::RenderError;
use crate::value::{ResultRecord, ResultSet, Scalar, Value};

/// Serializes a result set, passing map keys through the decode hook.
struct Decoded<'a, T> {
    inner: &'a T,
    decode: Decode<'a>,
}

impl<'a, T> Decoded<'a, T> {
    fn wrap<U>(&self, inner: &'a U) -> Decoded<'a, U> {
        Decoded {
            inner,
            decode: self.decode,
        }
    }
}

impl Serialize for Decoded<'_, ResultSet> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.inner.len()))?;
        for (host, record) in self.inner {
            map.serialize_entry(host, &self.wrap(record))?;
        }
        map.end()
    }
}

impl Serialize for Decoded<'_, ResultRecord> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.inner.len()))?;
        for (field, value) in self.inner.iter() {
            match value {
                Value::Map(entries) => {
                    // Keys are re-sorted after decoding; aliases collapse onto
                    // their canonical name.
                    let decoded: BTreeMap<String, &Scalar> = entries
                        .iter()
                        .map(|(key, scalar)| ((self.decode)(key, true), scalar))
                        .collect();
                    map.serialize_entry(field, &decoded)?;
                }
                other => map.serialize_entry(field, other)?,
            }
        }
        map.end()
    }
}

/// Writes `results` as two-space indented JSON followed by a newline.
///
/// The document is built in memory first, so nothing reaches `out` when a
/// value cannot be represented.
pub(crate) fn write_json<W: Write + ?Sized>(
    out: &mut W,
    results: &ResultSet,
    decode: Decode<'_>,
) -> Result<(), RenderError> {
    let view = Decoded {
        inner: results,
        decode,
    };

    let mut document =
        serde_json::to_vec_pretty(&view).map_err(|source| RenderError::Serialize { source })?;
    document.push(b'\n');
    out.write_all(&document)
        .map_err(|source| RenderError::Write { source })
}
