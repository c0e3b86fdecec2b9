//! Form orchestration: construction, rendering, submission, and the live
//! session that reacts to value changes.

use std::{fmt, mem, sync::Arc};

use crossbeam_channel::Receiver;
use schema::{Error, ResolvedStyles, Schema, StyleSheet, Values};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    dispatch::Dispatcher,
    plan::RenderPlan,
    store::{FieldChange, FormStore},
    style::StyleCtx,
};

/// Default label for the reset button.
const RESET_LABEL: &str = "Reset";
/// Default label for the submit button.
const SUBMIT_LABEL: &str = "Submit";

/// Submit callback invoked with the validated value snapshot.
///
/// Invoked fire-and-forget: the engine performs no additional validation and
/// does not await any outcome.
pub type SubmitHandler = Arc<dyn Fn(&Values) + Send + Sync>;

/// Configuration for the reset button.
#[derive(Debug, Clone, Default)]
pub struct ResetButton {
    /// Label override; defaults to `"Reset"`.
    pub text: Option<String>,
    /// Hide the reset button entirely.
    pub hidden: bool,
}

/// Configuration for the submit button.
#[derive(Debug, Clone, Default)]
pub struct SubmitButton {
    /// Label override; defaults to `"Submit"`.
    pub text: Option<String>,
}

/// Button configuration for a form.
///
/// Absent configuration defaults to both buttons shown with their default
/// labels.
#[derive(Debug, Clone, Default)]
pub struct Buttons {
    /// Reset button configuration.
    pub reset: ResetButton,
    /// Submit button configuration.
    pub submit: SubmitButton,
}

/// Options applied when a session starts.
#[derive(Debug, Clone, Default)]
pub struct FormOptions {
    /// Values seeded into the store before the first render and restored on
    /// reset.
    pub default_values: Option<Values>,
}

/// Inputs for constructing a [`Form`].
///
/// `schema` and the submit handler are required; everything else is
/// optional with documented defaults.
pub struct FormProps {
    /// Optional form heading.
    pub title: Option<String>,
    /// Field schema, rendered in insertion order.
    pub schema: Schema,
    /// Caller submit callback.
    pub handle_submit: SubmitHandler,
    /// Caller global style overrides.
    pub styles: Option<StyleSheet>,
    /// Use caller styles verbatim, excluding library defaults.
    pub overwrite_default_styles: bool,
    /// Session start options.
    pub form_options: FormOptions,
    /// Button configuration.
    pub buttons: Buttons,
}

impl FormProps {
    /// Props from the required inputs, everything else defaulted.
    pub fn new<F>(schema: Schema, handle_submit: F) -> Self
    where
        F: Fn(&Values) + Send + Sync + 'static,
    {
        Self {
            title: None,
            schema,
            handle_submit: Arc::new(handle_submit),
            styles: None,
            overwrite_default_styles: false,
            form_options: FormOptions::default(),
            buttons: Buttons::default(),
        }
    }
}

impl fmt::Debug for FormProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormProps")
            .field("title", &self.title)
            .field("overwrite_default_styles", &self.overwrite_default_styles)
            .finish_non_exhaustive()
    }
}

/// One configured form instance.
///
/// The style cascade root is resolved once here and shared by every nested
/// dispatch call; the schema is immutable for the form's lifetime.
pub struct Form {
    /// Optional heading.
    title: Option<String>,
    /// Field schema.
    schema: Schema,
    /// Resolved style cascade root.
    styles: StyleCtx,
    /// Submit callback.
    on_submit: SubmitHandler,
    /// Session options.
    options: FormOptions,
    /// Button configuration.
    buttons: Buttons,
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("title", &self.title)
            .field("fields", &self.schema.len())
            .finish_non_exhaustive()
    }
}

impl Form {
    /// Build a form, resolving the style cascade root once.
    pub fn new(props: FormProps) -> Self {
        let styles = StyleCtx::new(props.styles.as_ref(), props.overwrite_default_styles);
        debug!(fields = props.schema.len(), "form constructed");
        Self {
            title: props.title,
            schema: props.schema,
            styles,
            on_submit: props.handle_submit,
            options: props.form_options,
            buttons: props.buttons,
        }
    }

    /// Render one pass against the store's current state.
    ///
    /// Iterates the schema in insertion order. Hidden and unrecognized
    /// fields contribute empty plans that occupy no slot in the body but do
    /// not reorder visible siblings. A validation failure on one field never
    /// blocks other fields from rendering.
    pub fn render<S: FormStore>(&self, store: &mut S) -> Result<FormPlan, Error> {
        let mut dispatcher = Dispatcher::new(&self.styles, store);
        let mut body = Vec::with_capacity(self.schema.len());
        for (name, field) in self.schema.iter() {
            let plan = dispatcher.dispatch(name, field)?;
            if !plan.is_empty() {
                body.push((name.to_string(), plan));
            }
        }
        let active = dispatcher.into_active();
        debug!(
            visible = body.len(),
            total = self.schema.len(),
            "render pass complete"
        );

        let styles = self.styles.resolve("form", None);
        let buttons = self.button_plan(&styles);
        Ok(FormPlan {
            styles,
            title: self.title.clone(),
            body,
            buttons,
            active,
        })
    }

    /// Invoke the submit callback with a validated snapshot, fire-and-forget.
    pub fn submit(&self, values: &Values) {
        (self.on_submit)(values);
    }

    /// Session options.
    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// The resolved style cascade root.
    pub fn styles(&self) -> &StyleCtx {
        &self.styles
    }

    /// Assemble the button row from configuration and defaults.
    fn button_plan(&self, styles: &ResolvedStyles) -> ButtonsPlan {
        let reset = (!self.buttons.reset.hidden).then(|| ButtonPlan {
            label: self
                .buttons
                .reset
                .text
                .clone()
                .unwrap_or_else(|| RESET_LABEL.to_string()),
            styles: styles.region("resetButton"),
        });
        let submit = ButtonPlan {
            label: self
                .buttons
                .submit
                .text
                .clone()
                .unwrap_or_else(|| SUBMIT_LABEL.to_string()),
            styles: styles.region("submitButton"),
        };
        ButtonsPlan { reset, submit }
    }
}

/// The rendered whole-form output.
#[derive(Debug, Clone)]
pub struct FormPlan {
    /// Cascaded styles for the form chrome (container, title, buttons).
    pub styles: ResolvedStyles,
    /// Optional heading text.
    pub title: Option<String>,
    /// Non-empty field plans in schema order.
    pub body: Vec<(String, RenderPlan)>,
    /// Button row.
    pub buttons: ButtonsPlan,
    /// Field names registered during this pass.
    pub active: Vec<String>,
}

/// Rendered button row.
#[derive(Debug, Clone)]
pub struct ButtonsPlan {
    /// Reset button, absent when hidden by configuration.
    pub reset: Option<ButtonPlan>,
    /// Submit button.
    pub submit: ButtonPlan,
}

/// One rendered button.
#[derive(Debug, Clone)]
pub struct ButtonPlan {
    /// Button label.
    pub label: String,
    /// Opaque props for the widget layer.
    pub styles: Map<String, Value>,
}

/// A live form bound to a store.
///
/// Subscribes to the store's change channel at start and re-renders
/// synchronously when notified; fields whose visibility flips off are
/// unregistered. Dropping the session closes its channel, so future
/// notifications simply stop reaching it.
#[derive(Debug)]
pub struct FormSession<S: FormStore> {
    /// The configured form.
    form: Form,
    /// The bound store.
    store: S,
    /// Change notifications from the store.
    changes: Receiver<FieldChange>,
    /// Latest rendered plan.
    plan: FormPlan,
}

impl<S: FormStore> FormSession<S> {
    /// Bind a form to a store, seed default values, and render once.
    pub fn start(form: Form, mut store: S) -> Result<Self, Error> {
        let changes = store.watch();
        if let Some(defaults) = form.options().default_values.clone() {
            for (name, value) in defaults {
                store.set(&name, value);
            }
        }
        let plan = form.render(&mut store)?;
        let mut session = Self {
            form,
            store,
            changes,
            plan,
        };
        // Seeding queued notifications; the first render already saw them.
        session.drain();
        Ok(session)
    }

    /// Latest rendered plan.
    pub fn plan(&self) -> &FormPlan {
        &self.plan
    }

    /// The bound store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the bound store.
    ///
    /// Call [`FormSession::sync`] (for value writes) or
    /// [`FormSession::refresh`] (for failure-record changes) afterwards so
    /// the plan reflects the new state.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Write one value and synchronously re-render.
    pub fn set_value(&mut self, name: &str, value: Value) -> Result<(), Error> {
        self.store.set(name, value);
        self.sync()?;
        Ok(())
    }

    /// Re-render if any change notifications are pending.
    ///
    /// Returns whether a re-render happened.
    pub fn sync(&mut self) -> Result<bool, Error> {
        if !self.drain() {
            return Ok(false);
        }
        self.rerender()?;
        Ok(true)
    }

    /// Re-render unconditionally, picking up failure-record changes that do
    /// not flow through the value channel.
    pub fn refresh(&mut self) -> Result<(), Error> {
        self.drain();
        self.rerender()
    }

    /// Invoke the submit callback with the current snapshot.
    pub fn submit(&self) {
        self.form.submit(self.store.values());
    }

    /// Clear values back to the configured defaults and re-render.
    pub fn reset(&mut self) -> Result<(), Error> {
        self.store.reset();
        if let Some(defaults) = self.form.options().default_values.clone() {
            for (name, value) in defaults {
                self.store.set(&name, value);
            }
        }
        self.drain();
        self.rerender()
    }

    /// Drain pending notifications; returns whether any were queued.
    fn drain(&mut self) -> bool {
        let mut dirty = false;
        while self.changes.try_recv().is_ok() {
            dirty = true;
        }
        dirty
    }

    /// Render a fresh plan and unregister fields that dropped out.
    fn rerender(&mut self) -> Result<(), Error> {
        let previous = mem::take(&mut self.plan.active);
        let plan = self.form.render(&mut self.store)?;
        for name in &previous {
            if !plan.active.contains(name) {
                self.store.unregister(name);
            }
        }
        self.plan = plan;
        Ok(())
    }
}
