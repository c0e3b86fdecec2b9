//! Error types for schema interpretation.

use thiserror::Error;

/// Errors produced while interpreting a schema during a render pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A visibility predicate reported a failure.
    ///
    /// Predicates are caller code; a failing predicate is a programming
    /// error in the embedding application, so the failure is propagated
    /// rather than recovered. Unrecognized field kinds, by contrast, degrade
    /// to an empty render and never surface here.
    #[error("display predicate failed for field '{field}': {message}")]
    Predicate {
        /// Schema name of the field whose predicate failed.
        field: String,
        /// Human-readable failure message from the predicate.
        message: String,
    },
}
