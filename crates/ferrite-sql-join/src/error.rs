//! Error types for ON-clause construction.

use thiserror::Error;

use crate::expr::ExprKind;

/// Errors that can occur while building a join condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OnClauseError {
    /// A static ON clause was constructed with no predicates.
    #[error("static ON clause requires at least one predicate")]
    MissingPredicates,

    /// The target backend cannot serialize the appended expression.
    #[error("backend `{backend}` cannot serialize {kind} predicates")]
    UnsupportedExpr {
        /// Name of the rejecting backend.
        backend: &'static str,
        /// Kind of the rejected expression.
        kind: ExprKind,
    },

    /// A predicate was appended to a clause that is not dynamic.
    #[error("cannot append to a non-dynamic ON clause")]
    NotDynamic,
}

/// Result type alias for ON-clause operations.
pub type Result<T> = std::result::Result<T, OnClauseError>;
