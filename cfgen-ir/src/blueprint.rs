//! Blueprint and table descriptors.

use serde::{Deserialize, Serialize};

use crate::{DynamicObject, StaticObject};

/// Everything one schema module defines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    /// Tables in declaration order.
    pub tables: Vec<Table>,
}

impl Blueprint {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// Find a table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Total number of objects across all tables.
    pub fn object_count(&self) -> usize {
        self.tables.iter().map(|t| t.objects.len()).sum()
    }
}

/// A configuration table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table name.
    pub name: String,
    /// Table description, empty if the schema has none.
    pub description: String,
    /// The table's objects, serialized as either `static-objects` or
    /// `dynamic-objects`.
    #[serde(flatten)]
    pub objects: Objects,
}

impl Table {
    /// Returns true if the table holds keyed objects.
    pub fn is_dynamic(&self) -> bool {
        matches!(self.objects, Objects::Dynamic(_))
    }

    /// Static objects, empty for dynamic tables.
    pub fn static_objects(&self) -> &[StaticObject] {
        match &self.objects {
            Objects::Static(objects) => objects.as_slice(),
            Objects::Dynamic(_) => &[],
        }
    }

    /// Dynamic objects, empty for static tables.
    pub fn dynamic_objects(&self) -> &[DynamicObject] {
        match &self.objects {
            Objects::Static(_) => &[],
            Objects::Dynamic(objects) => objects.as_slice(),
        }
    }
}

/// The objects of a table: all single-instance or all keyed, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objects {
    /// Single-instance objects (from containers).
    #[serde(rename = "static-objects")]
    Static(Vec<StaticObject>),
    /// Keyed, repeatable objects (from lists).
    #[serde(rename = "dynamic-objects")]
    Dynamic(Vec<DynamicObject>),
}

impl Objects {
    /// Number of objects.
    pub fn len(&self) -> usize {
        match self {
            Objects::Static(objects) => objects.len(),
            Objects::Dynamic(objects) => objects.len(),
        }
    }

    /// Returns true if there are no objects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the serialized member (`static-objects` / `dynamic-objects`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Objects::Static(_) => "static-objects",
            Objects::Dynamic(_) => "dynamic-objects",
        }
    }
}
