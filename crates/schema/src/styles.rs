//! Style sheets and the deep-merge cascade.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Deep-merge `overlay` into `base`, overlay keys winning per leaf.
///
/// Object values merge recursively; any other overlay value replaces the
/// base value wholesale. Merging an empty object is a no-op, and the
/// operation is associative and idempotent.
pub fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(slot) if slot.is_object() && value.is_object() => {
                        deep_merge(slot, value);
                    }
                    _ => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}

/// Component name → (region → props) style tree.
///
/// The engine composes three sheets: library defaults, caller global
/// overrides, and field-local overrides. Property sets are opaque to the
/// engine; only the widget layer interprets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    /// Backing component map.
    components: Map<String, Value>,
}

impl StyleSheet {
    /// An empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sheet from a JSON object value; any other value yields an empty sheet.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(components) => Self { components },
            _ => Self::new(),
        }
    }

    /// Overlay `other` onto this sheet, later keys winning per leaf.
    #[must_use]
    pub fn overlay(mut self, other: &Self) -> Self {
        for (component, value) in &other.components {
            match self.components.get_mut(component) {
                Some(slot) => deep_merge(slot, value),
                None => {
                    self.components.insert(component.clone(), value.clone());
                }
            }
        }
        self
    }

    /// Entry for one component, if present.
    pub fn component(&self, name: &str) -> Option<&Value> {
        self.components.get(name)
    }

    /// Cascade the style bag for `component`, merging an optional
    /// field-local override (region → props) over the sheet entry.
    pub fn resolve(&self, component: &str, local: Option<&Value>) -> ResolvedStyles {
        let mut merged = self
            .components
            .get(component)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        if let Some(overrides) = local {
            deep_merge(&mut merged, overrides);
        }
        match merged {
            Value::Object(regions) => ResolvedStyles { regions },
            _ => ResolvedStyles::default(),
        }
    }
}

/// Fully cascaded styles for one rendered component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedStyles {
    /// Region name → opaque property value.
    regions: Map<String, Value>,
}

impl ResolvedStyles {
    /// Property set for one region; empty when the region carries no styling
    /// or holds a non-object value.
    pub fn region(&self, name: &str) -> Map<String, Value> {
        match self.regions.get(name) {
            Some(Value::Object(props)) => props.clone(),
            _ => Map::new(),
        }
    }

    /// Raw value for one region, covering scalar regions such as spacing.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.regions.get(name)
    }

    /// Whether any region carries styling.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
