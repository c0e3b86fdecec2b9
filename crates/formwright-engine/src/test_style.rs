#[cfg(test)]
mod tests {
    use schema::StyleSheet;
    use serde_json::json;

    use crate::StyleCtx;

    fn global_lg() -> StyleSheet {
        StyleSheet::from_value(json!({
            "textField": {"input": {"size": "lg"}},
        }))
    }

    #[test]
    fn global_overrides_win_over_defaults_per_leaf() {
        let ctx = StyleCtx::new(Some(&global_lg()), false);
        let input = ctx.resolve("textField", None).region("input");

        // Overridden leaf wins; untouched default leaves survive.
        assert_eq!(input.get("size"), Some(&json!("lg")));
        assert_eq!(input.get("variant"), Some(&json!("outline")));
    }

    #[test]
    fn overwrite_excludes_library_defaults() {
        let ctx = StyleCtx::new(Some(&global_lg()), true);
        let input = ctx.resolve("textField", None).region("input");

        assert_eq!(input.get("size"), Some(&json!("lg")));
        assert_eq!(input.get("variant"), None);
        // Components only the library styles are gone entirely.
        assert!(ctx.resolve("checkboxField", None).is_empty());
    }

    #[test]
    fn missing_sheets_are_treated_as_empty() {
        let defaults_only = StyleCtx::new(None, false);
        assert_eq!(
            defaults_only.resolve("textField", None).region("input"),
            json!({"size": "sm", "variant": "outline"})
                .as_object()
                .cloned()
                .unwrap()
        );

        let bare = StyleCtx::new(None, true);
        assert!(bare.resolve("textField", None).is_empty());
        assert!(bare.resolve("form", None).is_empty());
    }

    #[test]
    fn field_local_overrides_merge_over_form_base() {
        let ctx = StyleCtx::new(Some(&global_lg()), false);
        let local = json!({"input": {"size": "xs"}, "label": {"color": "red.500"}});
        let resolved = ctx.resolve("textField", Some(&local));

        assert_eq!(resolved.region("input").get("size"), Some(&json!("xs")));
        assert_eq!(
            resolved.region("input").get("variant"),
            Some(&json!("outline"))
        );
        assert_eq!(
            resolved.region("label").get("color"),
            Some(&json!("red.500"))
        );
    }

    #[test]
    fn field_local_overrides_still_merge_under_overwrite() {
        // The overwrite flag scopes to the form-level cascade only; local
        // overrides always merge over whatever base the form resolved.
        let ctx = StyleCtx::new(Some(&global_lg()), true);
        let local = json!({"input": {"variant": "filled"}});
        let input = ctx.resolve("textField", Some(&local)).region("input");

        assert_eq!(input.get("size"), Some(&json!("lg")));
        assert_eq!(input.get("variant"), Some(&json!("filled")));
    }
}
