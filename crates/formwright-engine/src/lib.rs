//! Schema interpretation engine for formwright.
//!
//! Turns a [`schema::Schema`] into a live, validated, submittable form
//! plan: dispatching field descriptors to rendering strategies, cascading
//! styles, re-evaluating per-field visibility as values change, and
//! deriving user-facing error text from validation state. Concrete widgets
//! and the host UI framework stay external; the engine emits data
//! ([`FormPlan`], [`RenderPlan`]) for them to interpret.
//!
//! All computation runs synchronously on the caller's thread in response to
//! render requests or change notifications delivered through the store's
//! watch channel; the engine performs no asynchronous work and never polls.

mod dispatch;
mod form;
mod message;
mod plan;
mod store;
mod style;
mod visibility;

#[cfg(test)]
mod test_dispatch;
#[cfg(test)]
mod test_style;

pub use dispatch::Dispatcher;
pub use form::{
    ButtonPlan, Buttons, ButtonsPlan, Form, FormOptions, FormPlan, FormProps, FormSession,
    ResetButton, SubmitButton, SubmitHandler,
};
pub use message::resolve_error;
pub use plan::{CheckboxPlanItem, ControlNode, CustomPlan, FieldNode, RenderPlan};
pub use schema::Error;
pub use store::{FieldChange, FieldFailure, FormStore, MemoryStore};
pub use style::StyleCtx;
pub use visibility::is_visible;
