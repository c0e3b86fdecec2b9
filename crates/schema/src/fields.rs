//! Field descriptors: the tagged variants a schema maps names onto.

use std::{any::Any, fmt, sync::Arc};

use serde_json::Value;

use crate::{Error, Schema, Values};

/// Attributes shared by every standard (non-custom) field variant.
#[derive(Debug, Clone, Default)]
pub struct FieldBase {
    /// Optional user-facing label.
    pub label: Option<String>,
    /// Optional helper text rendered beneath the control.
    pub helper_text: Option<String>,
    /// Whether the field is marked required.
    pub required: bool,
    /// Optional visibility rule evaluated against the full value snapshot.
    pub display: Option<DisplayRule>,
    /// Field-local style override (region → props) for this field's component.
    pub styles: Option<Value>,
}

/// Visibility predicate over the full current value snapshot.
///
/// Predicates must be pure and side-effect free; the engine re-runs them on
/// every value change notification, and two evaluations over identical
/// snapshots must agree. A failure returned from a [`DisplayRule::try_when`]
/// rule is fatal to the render pass for that field and propagates to the
/// embedding application.
#[derive(Clone)]
pub struct DisplayRule {
    /// Wrapped predicate; failures are attributed to a field by the engine.
    predicate: Arc<dyn Fn(&Values) -> Result<bool, String> + Send + Sync>,
}

impl DisplayRule {
    /// Rule from an infallible predicate.
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&Values) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(move |values| Ok(predicate(values))),
        }
    }

    /// Rule from a fallible predicate; the error message surfaces in
    /// [`Error::Predicate`].
    pub fn try_when<F>(predicate: F) -> Self
    where
        F: Fn(&Values) -> Result<bool, String> + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate against a snapshot, attributing failures to `field`.
    pub fn evaluate(&self, field: &str, values: &Values) -> Result<bool, Error> {
        (self.predicate)(values).map_err(|message| Error::Predicate {
            field: field.to_string(),
            message,
        })
    }
}

impl fmt::Debug for DisplayRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayRule").finish_non_exhaustive()
    }
}

/// A single-line text input.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    /// Shared attributes.
    pub base: FieldBase,
    /// Placeholder text shown while empty.
    pub placeholder: Option<String>,
    /// HTML input type; the widget layer defaults to `"text"` when absent.
    pub input_type: Option<String>,
    /// Opaque props for a decoration rendered before the input.
    pub left_addon: Option<Value>,
    /// Opaque props for a decoration rendered after the input.
    pub right_addon: Option<Value>,
}

/// A multi-line text input.
#[derive(Debug, Clone, Default)]
pub struct TextAreaField {
    /// Shared attributes.
    pub base: FieldBase,
    /// Placeholder text shown while empty.
    pub placeholder: Option<String>,
}

/// A numeric input.
#[derive(Debug, Clone, Default)]
pub struct NumberField {
    /// Shared attributes.
    pub base: FieldBase,
    /// Placeholder text shown while empty.
    pub placeholder: Option<String>,
    /// Inclusive lower bound hint for the widget layer.
    pub min: Option<f64>,
    /// Inclusive upper bound hint for the widget layer.
    pub max: Option<f64>,
}

/// One option of a select field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Display label; the widget layer falls back to the value.
    pub label: Option<String>,
}

/// A single-choice select.
#[derive(Debug, Clone, Default)]
pub struct SelectField {
    /// Shared attributes.
    pub base: FieldBase,
    /// Placeholder shown before a choice is made.
    pub placeholder: Option<String>,
    /// Ordered options.
    pub options: Vec<SelectOption>,
}

/// An on/off switch.
#[derive(Debug, Clone, Default)]
pub struct SwitchField {
    /// Shared attributes.
    pub base: FieldBase,
}

/// One checkbox inside a checkbox group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckboxItem {
    /// Store name the checkbox registers under.
    pub name: String,
    /// Optional label; the widget layer falls back to the name.
    pub label: Option<String>,
}

/// A group of related checkboxes, each registered under its own name.
#[derive(Debug, Clone, Default)]
pub struct CheckboxField {
    /// Shared attributes.
    pub base: FieldBase,
    /// Ordered sub-checkboxes.
    pub items: Vec<CheckboxItem>,
}

/// A homogeneous list container, one sub-field per current value element.
#[derive(Debug, Clone)]
pub struct ArrayField {
    /// Shared attributes.
    pub base: FieldBase,
    /// Descriptor dispatched for each element as `{name}[{index}]`.
    pub item: Box<Field>,
}

/// A nested group of named sub-fields.
#[derive(Debug, Clone, Default)]
pub struct ObjectField {
    /// Shared attributes.
    pub base: FieldBase,
    /// Nested schema dispatched under `{name}.{child}`.
    pub properties: Schema,
}

/// Opaque node produced by a custom renderer.
///
/// The engine never inspects the payload; the widget layer downcasts it back
/// to whatever concrete type the renderer produced.
#[derive(Clone)]
pub struct CustomNode {
    /// The opaque payload.
    payload: Arc<dyn Any + Send + Sync>,
}

impl CustomNode {
    /// Wrap an arbitrary payload.
    pub fn new<T: Any + Send + Sync>(payload: T) -> Self {
        Self {
            payload: Arc::new(payload),
        }
    }

    /// Borrow the payload as `T`, if that is what the renderer produced.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.as_ref().downcast_ref()
    }
}

impl fmt::Debug for CustomNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomNode").finish_non_exhaustive()
    }
}

/// Stable context handed to a custom renderer on every dispatch.
#[derive(Debug, Clone, Copy)]
pub struct CustomCtx<'a> {
    /// Schema name of the field.
    pub name: &'a str,
    /// The raw custom descriptor.
    pub field: &'a CustomField,
    /// Caller-specified extra props, passed through verbatim.
    pub props: &'a Value,
}

/// Caller-supplied renderer invoked outside the standard pipeline.
///
/// The engine guarantees only that it is called with a stable name/field
/// pair plus the passthrough props; the returned node is opaque.
pub trait CustomRenderer: Send + Sync {
    /// Produce an opaque node for the widget layer.
    fn render(&self, ctx: CustomCtx<'_>) -> CustomNode;
}

impl<F> CustomRenderer for F
where
    F: Fn(CustomCtx<'_>) -> CustomNode + Send + Sync,
{
    fn render(&self, ctx: CustomCtx<'_>) -> CustomNode {
        self(ctx)
    }
}

/// Escape hatch: a field rendered entirely by caller code.
///
/// Custom fields skip the style, visibility, and error pipeline.
#[derive(Clone)]
pub struct CustomField {
    /// The renderer capability.
    pub renderer: Arc<dyn CustomRenderer>,
    /// Extra props passed through to the renderer verbatim.
    pub props: Value,
}

impl CustomField {
    /// Build a custom field from a renderer and passthrough props.
    pub fn new(renderer: impl CustomRenderer + 'static, props: Value) -> Self {
        Self {
            renderer: Arc::new(renderer),
            props,
        }
    }
}

impl fmt::Debug for CustomField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomField")
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}

/// A field descriptor: one tagged variant per supported kind.
#[derive(Debug, Clone)]
pub enum Field {
    /// Single-line text input.
    Text(TextField),
    /// Multi-line text input.
    TextArea(TextAreaField),
    /// Numeric input.
    Number(NumberField),
    /// Single-choice select.
    Select(SelectField),
    /// On/off switch.
    Switch(SwitchField),
    /// Checkbox group.
    Checkbox(CheckboxField),
    /// Homogeneous list container.
    Array(ArrayField),
    /// Nested object container.
    Object(ObjectField),
    /// Caller-rendered field outside the standard pipeline.
    Custom(CustomField),
    /// Unrecognized kind; renders nothing.
    Unknown {
        /// The declared kind string, kept for diagnostics by the embedding.
        kind: String,
    },
}

impl Field {
    /// The declared kind string for this descriptor.
    pub fn kind(&self) -> &str {
        match self {
            Self::Text(_) => "text",
            Self::TextArea(_) => "textArea",
            Self::Number(_) => "number",
            Self::Select(_) => "select",
            Self::Switch(_) => "switch",
            Self::Checkbox(_) => "checkbox",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Custom(_) => "custom",
            Self::Unknown { kind } => kind,
        }
    }

    /// Shared attributes, absent for custom and unknown fields.
    pub fn base(&self) -> Option<&FieldBase> {
        match self {
            Self::Text(field) => Some(&field.base),
            Self::TextArea(field) => Some(&field.base),
            Self::Number(field) => Some(&field.base),
            Self::Select(field) => Some(&field.base),
            Self::Switch(field) => Some(&field.base),
            Self::Checkbox(field) => Some(&field.base),
            Self::Array(field) => Some(&field.base),
            Self::Object(field) => Some(&field.base),
            Self::Custom(_) | Self::Unknown { .. } => None,
        }
    }

    /// Style-sheet component key for this variant, absent for custom and
    /// unknown fields, which never enter the cascade.
    pub fn component(&self) -> Option<&'static str> {
        match self {
            Self::Text(_) => Some("textField"),
            Self::TextArea(_) => Some("textAreaField"),
            Self::Number(_) => Some("numberField"),
            Self::Select(_) => Some("selectField"),
            Self::Switch(_) => Some("switchField"),
            Self::Checkbox(_) => Some("checkboxField"),
            Self::Array(_) => Some("arrayField"),
            Self::Object(_) => Some("objectField"),
            Self::Custom(_) | Self::Unknown { .. } => None,
        }
    }
}
