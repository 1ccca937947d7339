//! Object, field and key descriptors.

use serde::{Deserialize, Serialize};

/// A single-instance configuration object (no key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticObject {
    pub name: String,
    pub description: String,
    pub attrs: Vec<Field>,
}

/// A keyed, potentially repeated configuration object.
///
/// After key restructuring every key names a field that was removed from
/// `attrs`, and `keys` keeps the declared key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicObject {
    pub name: String,
    pub description: String,
    pub attrs: Vec<Field>,
    pub keys: Vec<Key>,
}

impl DynamicObject {
    /// Key names in declared order.
    pub fn key_names(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.name.as_str())
    }
}

/// A scalar or multi-value attribute of an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub description: String,
    /// True for leaf-lists.
    #[serde(rename = "is-leaf-list")]
    pub is_multivalue: bool,
    #[serde(rename = "is-mandatory")]
    pub is_mandatory: bool,
}

impl Field {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        is_multivalue: bool,
        is_mandatory: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            is_multivalue,
            is_mandatory,
        }
    }
}

/// One component of a dynamic object's key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub name: String,
    /// Copied from the matching field; `None` when no field matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Key {
    /// A key that has not been matched to a field yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// A key carrying its field's description.
    pub fn described(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
        }
    }

    /// Returns true once a field has been matched to this key.
    pub fn is_matched(&self) -> bool {
        self.description.is_some()
    }
}
