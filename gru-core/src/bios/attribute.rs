//! BIOS attribute descriptors as published by the BMC.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Metadata for one vendor BIOS attribute.
///
/// Field names on the wire follow the BMC's BIOS parameter dump, so a
/// descriptor document can be copied verbatim from the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeDescriptor {
    /// Stable attribute key, unique within a dictionary.
    #[serde(rename = "AttributeName")]
    pub name: String,
    /// Human-readable label, may be empty.
    #[serde(default)]
    pub display_name: String,
    /// Free-text description.
    #[serde(default)]
    pub help_text: String,
    /// Whether the BMC refuses writes to this attribute.
    #[serde(default)]
    pub read_only: bool,
    /// Type tag as reported by the BMC, see [`AttributeDescriptor::kind`].
    #[serde(rename = "Type", default)]
    pub value_kind: String,
    /// Factory default.
    #[serde(default)]
    pub default_value: Option<DefaultValue>,
    /// Allowed values for enumerations, in BMC order.
    #[serde(rename = "Value", default)]
    pub choices: Vec<Choice>,
}

impl AttributeDescriptor {
    /// Creates a descriptor with only a name and display name set.
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            help_text: String::new(),
            read_only: false,
            value_kind: String::new(),
            default_value: None,
            choices: Vec::new(),
        }
    }

    /// Typed view of [`AttributeDescriptor::value_kind`].
    pub fn kind(&self) -> ValueKind {
        ValueKind::from_tag(&self.value_kind)
    }
}

/// Known attribute type tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    /// Integer-valued attribute
    Integer,
    /// Free-form string attribute
    String,
    /// Boolean attribute
    Boolean,
    /// One of [`AttributeDescriptor::choices`]
    Enumeration,
    /// Any tag this crate does not interpret
    Other(String),
}

impl ValueKind {
    /// Maps a BMC type tag onto a [`ValueKind`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Integer" => ValueKind::Integer,
            "String" => ValueKind::String,
            "Boolean" => ValueKind::Boolean,
            "Enumeration" => ValueKind::Enumeration,
            other => ValueKind::Other(other.to_string()),
        }
    }
}

/// Untyped default value of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Boolean default
    Bool(bool),
    /// Integer default
    Int(i64),
    /// Fractional default
    Float(f64),
    /// String default, also used for enumeration choices
    Str(String),
    /// Any other JSON document, kept as is
    Other(serde_json::Value),
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Bool(value) => write!(f, "{value}"),
            DefaultValue::Int(value) => write!(f, "{value}"),
            DefaultValue::Float(value) => write!(f, "{value}"),
            DefaultValue::Str(value) => f.write_str(value),
            DefaultValue::Other(value) => write!(f, "{value}"),
        }
    }
}

/// One allowed value of an enumerated attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Internal value written to the BMC.
    #[serde(rename = "ValueName")]
    pub name: String,
    /// Label shown in the BIOS setup screen.
    #[serde(rename = "ValueDisplayName", default)]
    pub display_name: String,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.display_name)
    }
}
