//! Generic per-host result records.
//!
//! Different command families (power status, boot configuration, inventory)
//! return differently shaped records. Rather than a fixed struct per command,
//! a record is an ordered list of named [`Value`]s and the renderer dispatches
//! on the value's tag.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::UnsupportedShape;


/// Results keyed by host identifier, iterated in sorted host order.
pub type ResultSet = BTreeMap<String, ResultRecord>;

/// A single scalar reported by a BMC.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// No value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    Str(String),
}

impl Scalar {
    /// Whether the scalar carries no information (null or an empty string).
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Str(value) => value.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so that width and alignment flags apply.
        match self {
            Scalar::Null => f.pad("null"),
            Scalar::Bool(value) => f.pad(if *value { "true" } else { "false" }),
            Scalar::Int(value) => f.pad(&value.to_string()),
            Scalar::Float(value) => f.pad(&value.to_string()),
            Scalar::Str(value) => f.pad(value),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(value) => serializer.serialize_bool(*value),
            Scalar::Int(value) => serializer.serialize_i64(*value),
            Scalar::Float(value) if !value.is_finite() => Err(S::Error::custom(format!(
                "{value} has no JSON representation"
            ))),
            Scalar::Float(value) => serializer.serialize_f64(*value),
            Scalar::Str(value) => serializer.serialize_str(value),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl TryFrom<serde_json::Value> for Scalar {
    type Error = UnsupportedShape;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Scalar::Null),
            serde_json::Value::Bool(value) => Ok(Scalar::Bool(value)),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(value) => Ok(Scalar::Int(value)),
                None => number
                    .as_f64()
                    .map(Scalar::Float)
                    .ok_or(UnsupportedShape("number out of range")),
            },
            serde_json::Value::String(value) => Ok(Scalar::Str(value)),
            serde_json::Value::Array(_) => Err(UnsupportedShape("array where a scalar is expected")),
            serde_json::Value::Object(_) => Err(UnsupportedShape("object where a scalar is expected")),
        }
    }
}

/// One field of a [`ResultRecord`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Null,
    /// A single scalar
    Scalar(Scalar),
    /// An ordered list of strings, e.g. boot order
    List(Vec<String>),
    /// Named scalars, e.g. BIOS attributes keyed by attribute name
    Map(BTreeMap<String, Scalar>),
}

impl Value {
    /// Whether the field is left out of text output.
    ///
    /// Null, blank scalars and empty maps are blank; a list is never blank,
    /// an empty one still prints its header.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Scalar(scalar) => scalar.is_blank(),
            Value::List(_) => false,
            Value::Map(entries) => entries.is_empty(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Scalar(scalar) => scalar.serialize(serializer),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, scalar) in entries {
                    map.serialize_entry(key, scalar)?;
                }
                map.end()
            }
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

macro_rules! scalar_value_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

scalar_value_from!(bool, i64, i32, u32, f64, &str, String);

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<BTreeMap<String, Scalar>> for Value {
    fn from(entries: BTreeMap<String, Scalar>) -> Self {
        Value::Map(entries)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = UnsupportedShape;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(item) => Ok(item),
                    _ => Err(UnsupportedShape("list item that is not a string")),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            serde_json::Value::Object(entries) => entries
                .into_iter()
                .map(|(key, item)| Scalar::try_from(item).map(|scalar| (key, scalar)))
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(Value::Map),
            scalar => Scalar::try_from(scalar).map(Value::Scalar),
        }
    }
}

/// The result returned for one host: named fields in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRecord {
    fields: Vec<(String, Value)>,
}

impl ResultRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ResultRecord::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a field, keeping its original position if it already exists.
    ///
    /// Returns the previous value of the field, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    /// Returns the value of a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ResultRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl Serialize for ResultRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
