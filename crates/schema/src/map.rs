//! The ordered field map driving form generation.

use indexmap::IndexMap;

use crate::Field;

/// Ordered mapping from field name to descriptor.
///
/// Insertion order is the rendering order and is preserved for the lifetime
/// of the schema. Re-inserting an existing name replaces the descriptor
/// without moving it. A schema is immutable once handed to a form instance;
/// the engine never mutates descriptors.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Backing ordered map.
    fields: IndexMap<String, Field>,
}

impl Schema {
    /// An empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a descriptor; replacement keeps the original slot.
    pub fn insert(&mut self, name: impl Into<String>, field: Field) {
        self.fields.insert(name.into(), field);
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, field: Field) -> Self {
        self.insert(name, field);
        self
    }

    /// Descriptor for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Field)> for Schema {
    fn from_iter<I: IntoIterator<Item = (String, Field)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
