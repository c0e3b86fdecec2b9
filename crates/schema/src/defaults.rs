//! Library default styles, the lowest layer of the cascade.

use once_cell::sync::Lazy;
use serde_json::json;

use crate::StyleSheet;

/// Built-in style sheet merged beneath caller overrides.
static DEFAULT_STYLES: Lazy<StyleSheet> = Lazy::new(|| {
    StyleSheet::from_value(json!({
        "form": {
            "container": { "padding": 4 },
            "title": { "size": "lg", "marginBottom": 4 },
            "fieldSpacing": 6,
            "buttonGroup": { "marginTop": 4 },
            "submitButton": { "size": "sm" },
            "resetButton": { "size": "sm" },
        },
        "textField": {
            "input": { "size": "sm", "variant": "outline" },
        },
        "textAreaField": {
            "input": { "size": "sm", "variant": "outline" },
        },
        "numberField": {
            "input": { "size": "sm", "variant": "outline" },
        },
        "selectField": {
            "input": { "size": "sm", "variant": "outline" },
        },
        "switchField": {},
        "checkboxField": {
            "checkboxGroup": { "isInline": true, "spacing": 4 },
        },
        "arrayField": {
            "arrayContainer": { "spacing": 4 },
            "itemContainer": { "spacing": 2 },
            "addButton": { "size": "xs" },
            "deleteButton": { "size": "xs" },
        },
        "objectField": {
            "objectContainer": { "spacing": 4, "borderWidth": 1, "borderRadius": 4, "padding": 2 },
            "propertyContainer": { "spacing": 2 },
        },
    }))
});

/// The library's built-in style sheet.
///
/// Callers exclude it entirely by constructing the form with the
/// overwrite-defaults flag set.
pub fn default_styles() -> &'static StyleSheet {
    &DEFAULT_STYLES
}
