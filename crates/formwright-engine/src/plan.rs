//! Render plan data model: the engine's output, interpreted by the widget
//! layer.

use schema::{CustomNode, ResolvedStyles, SelectOption};
use serde_json::Value;

/// Output of dispatching one schema entry.
#[derive(Debug, Clone)]
pub enum RenderPlan {
    /// Nothing to render: hidden field or unrecognized kind.
    Empty,
    /// A fully resolved standard field.
    Node(Box<FieldNode>),
    /// A caller-rendered field; the engine only carries the opaque node.
    Custom(CustomPlan),
}

impl RenderPlan {
    /// Whether this plan renders nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A standard field with all of its resolved inputs.
#[derive(Debug, Clone)]
pub struct FieldNode {
    /// Stable test/automation identifier.
    pub id: String,
    /// Store name of the field.
    pub name: String,
    /// Whether the field is marked required.
    pub required: bool,
    /// Optional label.
    pub label: Option<String>,
    /// Optional helper text.
    pub helper_text: Option<String>,
    /// Resolved error display string, present when a failure is recorded.
    pub error: Option<String>,
    /// Cascaded styles for this field's component.
    pub styles: ResolvedStyles,
    /// Variant-specific control description.
    pub control: ControlNode,
}

/// Variant-specific control payload of a field node.
#[derive(Debug, Clone)]
pub enum ControlNode {
    /// Single-line text input.
    Text {
        /// Placeholder text shown while empty.
        placeholder: Option<String>,
        /// HTML input type, defaulted to `"text"`.
        input_type: String,
        /// Opaque props for a decoration rendered before the input.
        left_addon: Option<Value>,
        /// Opaque props for a decoration rendered after the input.
        right_addon: Option<Value>,
    },
    /// Multi-line text input.
    TextArea {
        /// Placeholder text shown while empty.
        placeholder: Option<String>,
    },
    /// Numeric input.
    Number {
        /// Placeholder text shown while empty.
        placeholder: Option<String>,
        /// Inclusive lower bound hint.
        min: Option<f64>,
        /// Inclusive upper bound hint.
        max: Option<f64>,
    },
    /// Single-choice select.
    Select {
        /// Placeholder shown before a choice is made.
        placeholder: Option<String>,
        /// Ordered options.
        options: Vec<SelectOption>,
    },
    /// On/off switch.
    Switch,
    /// Checkbox group.
    Checkbox {
        /// One entry per declared checkbox, in declaration order.
        items: Vec<CheckboxPlanItem>,
    },
    /// List container with one dispatched plan per current value element.
    Array {
        /// Plans for the current elements, in order.
        items: Vec<RenderPlan>,
    },
    /// Nested object container.
    Object {
        /// Child name → dispatched plan, in nested schema order.
        children: Vec<(String, RenderPlan)>,
    },
}

/// One rendered checkbox inside a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxPlanItem {
    /// Store name the checkbox registers under.
    pub name: String,
    /// Display label, falling back to the name.
    pub label: String,
    /// Composite test identifier, `{field id}-{item name}`.
    pub test_id: String,
}

/// A caller-rendered field carried opaquely.
#[derive(Debug, Clone)]
pub struct CustomPlan {
    /// Schema name of the field.
    pub name: String,
    /// Opaque node produced by the caller's renderer.
    pub node: CustomNode,
}
