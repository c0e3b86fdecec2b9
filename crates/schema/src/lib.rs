//! Form schema vocabulary shared by the formwright engine and widget layers.
//!
//! A [`Schema`] is an ordered mapping from field name to [`Field`]
//! descriptor; insertion order is the rendering order. Styling composes
//! through a three-level cascade of [`StyleSheet`] bags (library defaults,
//! caller global overrides, field-local overrides) with deep-merge
//! semantics. Visibility is expressed as a [`DisplayRule`] predicate over
//! the full current value snapshot, and the `custom` escape hatch carries an
//! opaque [`CustomRenderer`] capability outside the standard pipeline.

mod defaults;
mod error;
mod fields;
mod map;
mod styles;


pub use defaults::default_styles;
pub use error::Error;
pub use fields::{
    ArrayField, CheckboxField, CheckboxItem, CustomCtx, CustomField, CustomNode, CustomRenderer,
    DisplayRule, Field, FieldBase, NumberField, ObjectField, SelectField, SelectOption,
    SwitchField, TextAreaField, TextField,
};
pub use map::Schema;
pub use styles::{ResolvedStyles, StyleSheet, deep_merge};

/// Snapshot of current form values keyed by field name.
pub type Values = serde_json::Map<String, serde_json::Value>;
