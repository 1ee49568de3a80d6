//! BIOS attribute dictionary.
//!
//! BMCs name BIOS settings with terse, generation-specific keys such as
//! `Rome0039`. The dictionary maps those keys to their descriptors so output can
//! show `Rome0039 (SVM Mode)` instead. It starts from the built-in corpus and can
//! be extended at runtime, e.g. with descriptors for another platform
//! generation, without touching any decode call site.
//!
//! Bulk loading and explicit registration deliberately differ on duplicates:
//! [`AttributeDictionary::load`] keeps the first descriptor and ignores the
//! rest, while [`AttributeDictionary::register`] rejects them.

mod attribute;
pub mod corpus;


use std::collections::btree_map::{BTreeMap, Entry};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::DictionaryError;

pub use attribute::{AttributeDescriptor, Choice, DefaultValue, ValueKind};
pub use corpus::CorpusDocument;

/// Lookup table from attribute name to descriptor.
#[derive(Debug, Clone, Default)]
pub struct AttributeDictionary {
    attributes: BTreeMap<String, AttributeDescriptor>,
}

fn parse_document(document: &str, contents: &str) -> Result<AttributeDescriptor, DictionaryError> {
    serde_json::from_str(contents).map_err(|source| DictionaryError::Parse {
        document: document.to_string(),
        contents: contents.to_string(),
        source,
    })
}

impl AttributeDictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the built-in attribute corpus.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Parse`] if a bundled document is malformed.
    pub fn builtin() -> Result<Self, DictionaryError> {
        Self::load(corpus::ROME.iter().copied())
    }

    /// Builds a dictionary from descriptor documents.
    ///
    /// Documents are applied in lexicographic order of their name, so the
    /// result does not depend on the order they were enumerated in. When two
    /// documents describe the same attribute the first one wins and the later
    /// one is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Parse`] for the first malformed document,
    /// including its raw contents.
    pub fn load<'a, I>(documents: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = CorpusDocument<'a>>,
    {
        let mut documents: Vec<CorpusDocument<'a>> = documents.into_iter().collect();
        documents.sort_by(|a, b| a.name.cmp(b.name));

        let mut dictionary = Self::new();
        for document in documents {
            let descriptor = parse_document(document.name, document.contents)?;
            match dictionary.attributes.entry(descriptor.name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(descriptor);
                }
                Entry::Occupied(_) => {
                    debug!(
                        attribute = %descriptor.name,
                        document = document.name,
                        "duplicate attribute ignored during load"
                    );
                }
            }
        }

        debug!(count = dictionary.len(), "attribute dictionary loaded");
        Ok(dictionary)
    }

    /// Adds a single descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::AlreadyExists`] if an attribute with the same
    /// name is present; the dictionary is left unchanged.
    pub fn register(&mut self, descriptor: AttributeDescriptor) -> Result<(), DictionaryError> {
        match self.attributes.entry(descriptor.name.clone()) {
            Entry::Occupied(_) => Err(DictionaryError::AlreadyExists {
                name: descriptor.name,
            }),
            Entry::Vacant(slot) => {
                slot.insert(descriptor);
                Ok(())
            }
        }
    }

    /// Registers every `*.json` descriptor document found in `dir`.
    ///
    /// Files are read in file-name order and all of them are parsed before
    /// anything is registered, so a malformed file leaves the dictionary
    /// untouched. Attributes that are already present are skipped.
    ///
    /// # Returns
    ///
    /// The names of the skipped attributes, for the caller to report.
    ///
    /// # Errors
    ///
    /// - [`DictionaryError::Io`] if the directory or a file cannot be read
    /// - [`DictionaryError::Parse`] if a file is not a valid descriptor
    pub fn register_dir(&mut self, dir: impl AsRef<Path>) -> Result<Vec<String>, DictionaryError> {
        let dir = dir.as_ref();
        let dir_error = |source: io::Error| DictionaryError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir).map_err(dir_error)? {
            let path = entry.map_err(dir_error)?.path();
            if path.is_file() && path.extension().and_then(OsStr::to_str) == Some("json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut descriptors = Vec::with_capacity(paths.len());
        for path in &paths {
            let contents = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
                path: path.clone(),
                source,
            })?;
            descriptors.push(parse_document(&path.display().to_string(), &contents)?);
        }

        let mut skipped = Vec::new();
        for descriptor in descriptors {
            match self.register(descriptor) {
                Ok(()) => {}
                Err(DictionaryError::AlreadyExists { name }) => skipped.push(name),
                Err(err) => return Err(err),
            }
        }

        debug!(
            dir = %dir.display(),
            registered = paths.len() - skipped.len(),
            skipped = skipped.len(),
            "attribute documents registered"
        );
        Ok(skipped)
    }

    /// Translates an attribute key for display.
    ///
    /// Unknown keys are returned unchanged. For known keys `json` selects the
    /// canonical attribute name, otherwise `"<name> (<display name>)"`.
    pub fn decode(&self, key: &str, json: bool) -> String {
        match self.attributes.get(key) {
            Some(attribute) if json => attribute.name.clone(),
            Some(attribute) => format!("{} ({})", attribute.name, attribute.display_name),
            None => key.to_string(),
        }
    }

    /// Returns [`AttributeDictionary::decode`] as a renderer decode hook.
    pub fn decoder(&self) -> impl Fn(&str, bool) -> String + '_ {
        move |key, json| self.decode(key, json)
    }

    /// Looks up a descriptor by attribute name.
    pub fn get(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes.get(name)
    }

    /// Reports whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Number of registered attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether no attributes are registered.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterates over the descriptors sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.attributes.values()
    }
}
