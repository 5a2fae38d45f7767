//! Identifier extraction.
//!
//! The classifier never looks at documents itself; a [`CandidateSource`]
//! turns a host document into the identifiers to check. [`JsonObjectSource`]
//! is the source used by the command-line host: it treats a JSON object (or
//! each object in a top-level array) as a component options object and
//! yields its keys.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::spelling::classifier::{Candidate, Rename};

/// Something that yields identifiers to classify.
pub trait CandidateSource {
    /// Host-specific handle attached to every candidate.
    type Location;

    /// Extract candidates in document order.
    fn candidates(&self) -> Vec<Candidate<Self::Location>>;
}

/// Location of an option key inside a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyLocation {
    /// Index of the component when the document is an array of components.
    pub component: Option<usize>,
    /// The key as written.
    pub key: String,
}

impl KeyLocation {
    /// RFC 6901 JSON pointer to the key's value.
    pub fn pointer(&self) -> String {
        let key = self.key.replace('~', "~0").replace('/', "~1");
        match self.component {
            Some(index) => format!("/{index}/{key}"),
            None => format!("/{key}"),
        }
    }
}

impl fmt::Display for KeyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pointer())
    }
}

/// Whether `name` would parse as a bare JavaScript identifier.
///
/// Quoted keys such as `"my-option"` are not option names and are skipped.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Component options read from a JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonObjectSource {
    document: Value,
}

impl JsonObjectSource {
    /// Wrap a parsed document.
    pub fn new(document: Value) -> Self {
        JsonObjectSource { document }
    }

    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a document from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The underlying document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Serialize the document, pretty-printed.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }

    /// Apply a rename to the document, keeping key order.
    ///
    /// Returns false if the key is gone or the replacement key already exists
    /// in the same object.
    pub fn apply(&mut self, rename: &Rename<KeyLocation>) -> bool {
        let object = match (&mut self.document, rename.location.component) {
            (Value::Object(object), None) => object,
            (Value::Array(items), Some(index)) => match items.get_mut(index) {
                Some(Value::Object(object)) => object,
                _ => return false,
            },
            _ => return false,
        };

        let key = &rename.location.key;
        if !object.contains_key(key) || object.contains_key(&rename.replacement) {
            return false;
        }

        let entries = std::mem::take(object);
        let mut renamed = Map::with_capacity(entries.len());
        for (name, value) in entries {
            if &name == key {
                renamed.insert(rename.replacement.clone(), value);
            } else {
                renamed.insert(name, value);
            }
        }
        *object = renamed;
        true
    }
}

fn object_candidates(
    object: &Map<String, Value>,
    component: Option<usize>,
    out: &mut Vec<Candidate<KeyLocation>>,
) {
    for key in object.keys().filter(|key| is_identifier(key)) {
        out.push(Candidate::new(
            key.as_str(),
            KeyLocation {
                component,
                key: key.clone(),
            },
        ));
    }
}

impl CandidateSource for JsonObjectSource {
    type Location = KeyLocation;

    fn candidates(&self) -> Vec<Candidate<KeyLocation>> {
        let mut candidates = Vec::new();
        match &self.document {
            Value::Object(object) => object_candidates(object, None, &mut candidates),
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if let Value::Object(object) = item {
                        object_candidates(object, Some(index), &mut candidates);
                    }
                }
            }
            _ => {}
        }
        candidates
    }
}
