//! Field dispatch: maps descriptors to rendering strategies.

use schema::{ArrayField, CustomCtx, Error, Field, ObjectField, Values};
use serde_json::Value;

use crate::{
    message,
    plan::{CheckboxPlanItem, ControlNode, CustomPlan, FieldNode, RenderPlan},
    store::FormStore,
    style::StyleCtx,
    visibility,
};

/// One render pass over a schema.
///
/// Holds a value snapshot taken at pass start, so every visibility decision
/// within the pass sees the same values. Visible fields are registered with
/// the store as they are dispatched; hidden fields are skipped entirely, so
/// their side effects (registration included) are suppressed.
pub struct Dispatcher<'a, S: FormStore> {
    /// Form-wide style cascade root.
    styles: &'a StyleCtx,
    /// Value snapshot for this pass.
    values: Values,
    /// Store used for registration and failure lookups.
    store: &'a mut S,
    /// Names registered during this pass.
    active: Vec<String>,
}

impl<'a, S: FormStore> Dispatcher<'a, S> {
    /// Begin a pass, snapshotting the store's current values.
    pub fn new(styles: &'a StyleCtx, store: &'a mut S) -> Self {
        let values = store.values().clone();
        Self {
            styles,
            values,
            store,
            active: Vec::new(),
        }
    }

    /// Names registered during this pass, consuming the dispatcher.
    pub fn into_active(self) -> Vec<String> {
        self.active
    }

    /// Dispatch one schema entry to its rendering strategy.
    ///
    /// Unrecognized kinds produce an empty plan rather than an error, a
    /// deliberate permissive fallback; the embedding may log the omission if
    /// it cares. Custom fields bypass the style/visibility/error pipeline
    /// entirely: the caller's renderer is invoked with the stable
    /// name/field pair plus passthrough props, and its return value is
    /// opaque. Container fields recurse over their nested schemas; guarding
    /// against self-referential schemas is the caller's responsibility.
    pub fn dispatch(&mut self, name: &str, field: &Field) -> Result<RenderPlan, Error> {
        match field {
            Field::Custom(custom) => {
                let node = custom.renderer.render(CustomCtx {
                    name,
                    field: custom,
                    props: &custom.props,
                });
                Ok(RenderPlan::Custom(CustomPlan {
                    name: name.to_string(),
                    node,
                }))
            }
            Field::Unknown { .. } => Ok(RenderPlan::Empty),
            _ => self.standard(name, field),
        }
    }

    /// Standard pipeline: visibility → registration → styles → error → node.
    fn standard(&mut self, name: &str, field: &Field) -> Result<RenderPlan, Error> {
        let (Some(base), Some(component)) = (field.base(), field.component()) else {
            return Ok(RenderPlan::Empty);
        };

        if !visibility::is_visible(name, base.display.as_ref(), &self.values)? {
            return Ok(RenderPlan::Empty);
        }

        match field {
            // Checkbox groups register each sub-checkbox under its own name.
            Field::Checkbox(group) => {
                for item in &group.items {
                    self.register(&item.name);
                }
            }
            // Object containers own no value; children register themselves.
            Field::Object(_) => {}
            _ => self.register(name),
        }

        let styles = self.styles.resolve(component, base.styles.as_ref());
        let error = message::resolve_error(name, base.label.as_deref(), self.store.failure(name));

        let control = match field {
            Field::Text(text) => ControlNode::Text {
                placeholder: text.placeholder.clone(),
                input_type: text
                    .input_type
                    .clone()
                    .unwrap_or_else(|| "text".to_string()),
                left_addon: text.left_addon.clone(),
                right_addon: text.right_addon.clone(),
            },
            Field::TextArea(area) => ControlNode::TextArea {
                placeholder: area.placeholder.clone(),
            },
            Field::Number(number) => ControlNode::Number {
                placeholder: number.placeholder.clone(),
                min: number.min,
                max: number.max,
            },
            Field::Select(select) => ControlNode::Select {
                placeholder: select.placeholder.clone(),
                options: select.options.clone(),
            },
            Field::Switch(_) => ControlNode::Switch,
            Field::Checkbox(group) => ControlNode::Checkbox {
                items: group
                    .items
                    .iter()
                    .map(|item| CheckboxPlanItem {
                        name: item.name.clone(),
                        label: item.label.clone().unwrap_or_else(|| item.name.clone()),
                        test_id: format!("{}-{}", name, item.name),
                    })
                    .collect(),
            },
            Field::Array(array) => ControlNode::Array {
                items: self.array_items(name, array)?,
            },
            Field::Object(object) => ControlNode::Object {
                children: self.object_children(name, object)?,
            },
            // Routed away in dispatch(); base() returned None above.
            Field::Custom(_) | Field::Unknown { .. } => return Ok(RenderPlan::Empty),
        };

        Ok(RenderPlan::Node(Box::new(FieldNode {
            id: name.to_string(),
            name: name.to_string(),
            required: base.required,
            label: base.label.clone(),
            helper_text: base.helper_text.clone(),
            error,
            styles,
            control,
        })))
    }

    /// Dispatch the array's item descriptor once per current value element,
    /// under the name `{name}[{index}]`.
    fn array_items(&mut self, name: &str, field: &ArrayField) -> Result<Vec<RenderPlan>, Error> {
        let count = match self.values.get(name) {
            Some(Value::Array(items)) => items.len(),
            _ => 0,
        };
        let mut plans = Vec::with_capacity(count);
        for index in 0..count {
            let item_name = format!("{name}[{index}]");
            plans.push(self.dispatch(&item_name, &field.item)?);
        }
        Ok(plans)
    }

    /// Dispatch each property of a nested object schema under the name
    /// `{name}.{child}`.
    fn object_children(
        &mut self,
        name: &str,
        field: &ObjectField,
    ) -> Result<Vec<(String, RenderPlan)>, Error> {
        let mut children = Vec::with_capacity(field.properties.len());
        for (child, descriptor) in field.properties.iter() {
            let child_name = format!("{name}.{child}");
            let plan = self.dispatch(&child_name, descriptor)?;
            children.push((child.to_string(), plan));
        }
        Ok(children)
    }

    /// Register a name with the store, deduplicating within the pass.
    fn register(&mut self, name: &str) {
        if !self.active.iter().any(|n| n == name) {
            self.store.register(name);
            self.active.push(name.to_string());
        }
    }
}
