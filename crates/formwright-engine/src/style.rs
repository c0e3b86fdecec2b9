//! Form-wide style cascade, resolved once per form instance.

use schema::{ResolvedStyles, StyleSheet, default_styles};
use serde_json::Value;

/// The root of the style cascade for one form instance.
///
/// Library defaults are overlaid with the caller's global overrides at
/// construction; every dispatch call reuses the merged sheet instead of
/// re-merging per field. When defaults are overwritten, the caller sheet is
/// used verbatim and library defaults never contribute a key. Field-local
/// overrides merge over this base at render time regardless of the
/// overwrite flag.
#[derive(Debug, Clone, Default)]
pub struct StyleCtx {
    /// The merged form-wide sheet.
    sheet: StyleSheet,
}

impl StyleCtx {
    /// Resolve the form-wide sheet once.
    pub fn new(global: Option<&StyleSheet>, overwrite_defaults: bool) -> Self {
        let sheet = match (global, overwrite_defaults) {
            (Some(overrides), true) => overrides.clone(),
            (Some(overrides), false) => default_styles().clone().overlay(overrides),
            (None, true) => StyleSheet::new(),
            (None, false) => default_styles().clone(),
        };
        Self { sheet }
    }

    /// Cascaded styles for one component, with an optional field-local
    /// override merged on top.
    pub fn resolve(&self, component: &str, local: Option<&Value>) -> ResolvedStyles {
        self.sheet.resolve(component, local)
    }

    /// The merged form-wide sheet.
    pub fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }
}
