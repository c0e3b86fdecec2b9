#[cfg(test)]
mod tests {
    use schema::{
        ArrayField, CheckboxField, CheckboxItem, CustomCtx, CustomField, CustomNode, DisplayRule,
        Error, Field, FieldBase, NumberField, ObjectField, Schema, TextField,
    };
    use serde_json::{Value, json};

    use crate::{
        ControlNode, Dispatcher, FieldFailure, FormStore, MemoryStore, RenderPlan, StyleCtx,
        resolve_error,
    };

    fn store_with(values: Value) -> MemoryStore {
        match values {
            Value::Object(map) => MemoryStore::with_values(map),
            _ => MemoryStore::new(),
        }
    }

    fn dispatch_one(store: &mut MemoryStore, name: &str, field: &Field) -> RenderPlan {
        let styles = StyleCtx::new(None, false);
        Dispatcher::new(&styles, store)
            .dispatch(name, field)
            .expect("dispatch must succeed")
    }

    fn age_gated_number() -> Field {
        Field::Number(NumberField {
            base: FieldBase {
                display: Some(DisplayRule::when(|values| {
                    values.get("age").and_then(Value::as_i64).unwrap_or(0) > 0
                })),
                ..FieldBase::default()
            },
            ..NumberField::default()
        })
    }

    fn terms_checkbox() -> Field {
        Field::Checkbox(CheckboxField {
            base: FieldBase {
                required: true,
                ..FieldBase::default()
            },
            items: vec![CheckboxItem {
                name: "accept".to_string(),
                label: None,
            }],
        })
    }

    #[test]
    fn unknown_kind_renders_nothing() {
        let mut store = MemoryStore::new();
        let plan = dispatch_one(
            &mut store,
            "mystery",
            &Field::Unknown {
                kind: "bogus".to_string(),
            },
        );
        assert!(plan.is_empty());
        assert!(store.registered().is_empty());
    }

    #[test]
    fn hidden_field_renders_nothing() {
        let mut store = store_with(json!({"age": -1}));
        let plan = dispatch_one(&mut store, "age", &age_gated_number());
        assert!(plan.is_empty());
    }

    #[test]
    fn visible_field_produces_node() {
        let mut store = store_with(json!({"age": 30}));
        let plan = dispatch_one(&mut store, "age", &age_gated_number());
        let RenderPlan::Node(node) = plan else {
            panic!("expected a field node");
        };
        assert_eq!(node.name, "age");
        assert_eq!(node.id, "age");
        assert!(matches!(node.control, ControlNode::Number { .. }));
    }

    #[test]
    fn visibility_is_a_pure_function_of_values() {
        let field = age_gated_number();

        let mut store = store_with(json!({"age": 10}));
        let first = dispatch_one(&mut store, "age", &field);
        let second = dispatch_one(&mut store, "age", &field);
        assert_eq!(first.is_empty(), second.is_empty());

        // An unrelated value the predicate does not read changes nothing.
        store.set("nickname", json!("ada"));
        let third = dispatch_one(&mut store, "age", &field);
        assert!(!third.is_empty());
    }

    #[test]
    fn hidden_fields_are_not_registered() {
        let mut store = store_with(json!({"age": -1}));
        let _plan = dispatch_one(&mut store, "age", &age_gated_number());
        assert!(store.registered().is_empty());

        store.set("age", json!(1));
        let _plan = dispatch_one(&mut store, "age", &age_gated_number());
        assert_eq!(store.registered(), ["age".to_string()]);
    }

    #[test]
    fn predicate_failure_propagates() {
        let field = Field::Text(TextField {
            base: FieldBase {
                display: Some(DisplayRule::try_when(|_| Err("boom".to_string()))),
                ..FieldBase::default()
            },
            ..TextField::default()
        });

        let mut store = MemoryStore::new();
        let styles = StyleCtx::new(None, false);
        let err = Dispatcher::new(&styles, &mut store)
            .dispatch("broken", &field)
            .expect_err("predicate failure must propagate");
        assert_eq!(
            err,
            Error::Predicate {
                field: "broken".to_string(),
                message: "boom".to_string(),
            }
        );
    }

    #[test]
    fn checkbox_items_get_composite_test_ids() {
        let mut store = MemoryStore::new();
        let RenderPlan::Node(node) = dispatch_one(&mut store, "terms", &terms_checkbox()) else {
            panic!("expected a field node");
        };
        let ControlNode::Checkbox { items } = &node.control else {
            panic!("expected a checkbox control");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].test_id, "terms-accept");
        assert_eq!(items[0].label, "accept");
    }

    #[test]
    fn checkbox_registers_item_names() {
        let mut store = MemoryStore::new();
        let _plan = dispatch_one(&mut store, "terms", &terms_checkbox());
        assert_eq!(store.registered(), ["accept".to_string()]);
    }

    #[test]
    fn error_fallback_references_field_name() {
        let mut store = MemoryStore::new();
        store.set_failure("terms", FieldFailure::default());

        let RenderPlan::Node(node) = dispatch_one(&mut store, "terms", &terms_checkbox()) else {
            panic!("expected a field node");
        };
        let error = node.error.expect("failure must resolve to a message");
        assert!(error.contains("terms"), "fallback must reference the name");
    }

    #[test]
    fn explicit_error_message_passes_through() {
        let failure = FieldFailure::message("must be accepted");
        assert_eq!(
            resolve_error("terms", None, Some(&failure)),
            Some("must be accepted".to_string())
        );
    }

    #[test]
    fn fallback_prefers_label_over_name() {
        let bare = FieldFailure::default();
        assert_eq!(
            resolve_error("terms", Some("Terms of Service"), Some(&bare)),
            Some("Terms of Service is invalid".to_string())
        );
        assert_eq!(resolve_error("terms", Some("Terms"), None), None);
    }

    #[test]
    fn custom_renderer_receives_passthrough_props() {
        let field = Field::Custom(CustomField::new(
            |ctx: CustomCtx<'_>| CustomNode::new((ctx.name.to_string(), ctx.props.clone())),
            json!({"label": "React-Select Field", "options": ["a", "b"]}),
        ));

        let mut store = MemoryStore::new();
        let RenderPlan::Custom(custom) = dispatch_one(&mut store, "select", &field) else {
            panic!("expected a custom plan");
        };
        assert_eq!(custom.name, "select");
        let (name, props) = custom
            .node
            .downcast_ref::<(String, Value)>()
            .expect("renderer payload must round-trip");
        assert_eq!(name, "select");
        assert_eq!(
            props,
            &json!({"label": "React-Select Field", "options": ["a", "b"]})
        );
        // Custom fields bypass registration along with the rest of the pipeline.
        assert!(store.registered().is_empty());
    }

    #[test]
    fn object_children_use_dotted_names() {
        let field = Field::Object(ObjectField {
            properties: Schema::new()
                .with("street", Field::Text(TextField::default()))
                .with("city", Field::Text(TextField::default())),
            ..ObjectField::default()
        });

        let mut store = MemoryStore::new();
        let RenderPlan::Node(node) = dispatch_one(&mut store, "address", &field) else {
            panic!("expected a field node");
        };
        let ControlNode::Object { children } = &node.control else {
            panic!("expected an object control");
        };
        let names: Vec<&str> = children.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["street", "city"]);
        assert_eq!(
            store.registered(),
            ["address.street".to_string(), "address.city".to_string()]
        );
    }

    #[test]
    fn array_items_follow_current_value_length() {
        let field = Field::Array(ArrayField {
            base: FieldBase::default(),
            item: Box::new(Field::Text(TextField::default())),
        });

        let mut store = store_with(json!({"tags": ["rust", "forms"]}));
        let RenderPlan::Node(node) = dispatch_one(&mut store, "tags", &field) else {
            panic!("expected a field node");
        };
        let ControlNode::Array { items } = &node.control else {
            panic!("expected an array control");
        };
        assert_eq!(items.len(), 2);
        let RenderPlan::Node(first) = &items[0] else {
            panic!("expected a dispatched element");
        };
        assert_eq!(first.name, "tags[0]");

        // No current value means no elements.
        let mut empty = MemoryStore::new();
        let RenderPlan::Node(node) = dispatch_one(&mut empty, "tags", &field) else {
            panic!("expected a field node");
        };
        let ControlNode::Array { items } = &node.control else {
            panic!("expected an array control");
        };
        assert!(items.is_empty());
    }
}
