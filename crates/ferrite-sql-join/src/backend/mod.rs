//! Backend capability support.
//!
//! Different databases accept different expression kinds inside a join
//! condition. This module provides a trait describing what a target backend
//! can serialize, consulted before a dynamic predicate is accepted.

mod generic;

pub use generic::GenericBackend;

use std::fmt;

use crate::expr::ExprKind;

/// Trait describing what a target SQL backend can serialize.
pub trait Backend: fmt::Debug {
    /// Returns the name of the backend.
    fn name(&self) -> &'static str;

    /// Returns whether the backend can serialize predicates of `kind`.
    ///
    /// Defaults to `true` for every kind; restricted backends override this
    /// for the kinds they cannot express.
    fn supports(&self, kind: ExprKind) -> bool {
        let _ = kind;
        true
    }
}
