//! Join condition construction and rendering.
//!
//! An [`OnClause`] holds the boolean predicates of a SQL join's `ON (...)`
//! fragment. Static clauses fix every predicate at construction; dynamic
//! clauses accept further predicates while the query is assembled, each one
//! checked against the target [`Backend`]. Rendering AND-joins all
//! predicates in insertion order.

use tracing::{debug, trace};

use crate::backend::Backend;
use crate::error::{OnClauseError, Result};
use crate::expr::Predicate;

/// A join condition: the `ON (...)` fragment of a SQL join.
///
/// Combines predicates fixed at construction with, for dynamic clauses,
/// predicates appended while the query is built. A clause without any
/// predicate renders to nothing (a cross join).
#[derive(Debug)]
pub struct OnClause {
    predicates: Vec<Box<dyn Predicate>>,
    dynamic: Option<DynamicPredicates>,
}

/// Predicates added to a join condition after construction.
///
/// Owned exclusively by a dynamic [`OnClause`]. Grows through
/// [`OnClause::append`] and is never reordered or truncated.
#[derive(Debug)]
pub struct DynamicPredicates {
    backend: Box<dyn Backend>,
    predicates: Vec<Box<dyn Predicate>>,
}

impl OnClause {
    /// Creates a static join condition from a fixed predicate list.
    ///
    /// # Errors
    ///
    /// Returns [`OnClauseError::MissingPredicates`] if `predicates` is
    /// empty. A join without a condition must be spelled out with
    /// [`Self::unconditional`] instead.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Result<Self> {
        if predicates.is_empty() {
            return Err(OnClauseError::MissingPredicates);
        }
        Ok(Self {
            predicates,
            dynamic: None,
        })
    }

    /// Creates a dynamic join condition for the given backend.
    ///
    /// The static part may be empty; predicates are added later with
    /// [`Self::append`], each checked against `backend`.
    #[must_use]
    pub fn dynamic(predicates: Vec<Box<dyn Predicate>>, backend: impl Backend + 'static) -> Self {
        Self {
            predicates,
            dynamic: Some(DynamicPredicates {
                backend: Box::new(backend),
                predicates: vec![],
            }),
        }
    }

    /// Creates the explicit no-condition variant (cross join).
    ///
    /// Renders to nothing and accepts no appends.
    #[must_use]
    pub const fn unconditional() -> Self {
        Self {
            predicates: Vec::new(),
            dynamic: None,
        }
    }

    /// Appends a predicate to the dynamic part of the condition.
    ///
    /// On success the predicate is placed after all previously appended
    /// ones. A failed append leaves the condition unchanged and usable.
    ///
    /// # Errors
    ///
    /// Returns [`OnClauseError::NotDynamic`] if the condition was not
    /// created with [`Self::dynamic`], or
    /// [`OnClauseError::UnsupportedExpr`] if the backend cannot serialize
    /// the predicate's kind.
    pub fn append(&mut self, predicate: impl Predicate + 'static) -> Result<()> {
        let Some(dynamic) = self.dynamic.as_mut() else {
            debug!("Rejecting append on a non-dynamic ON clause");
            return Err(OnClauseError::NotDynamic);
        };

        let kind = predicate.kind();
        if !dynamic.backend.supports(kind) {
            debug!(
                backend = %dynamic.backend.name(),
                kind = %kind,
                "Rejecting predicate the backend cannot serialize"
            );
            return Err(OnClauseError::UnsupportedExpr {
                backend: dynamic.backend.name(),
                kind,
            });
        }

        trace!(kind = %kind, "Appending dynamic predicate");
        dynamic.predicates.push(Box::new(predicate));
        Ok(())
    }

    /// Writes the rendered condition into `sql`.
    ///
    /// Produces `" ON ( a AND b )"`: static predicates first, dynamic
    /// predicates after, in insertion order, joined by `AND`. A condition
    /// without any predicate writes nothing, leaving `sql` untouched.
    pub fn render_sql(&self, sql: &mut String) {
        if self.is_empty() {
            return;
        }

        sql.push_str(" ON (");

        let appended = self.dynamic.iter().flat_map(|d| d.predicates.iter());
        let mut first = true;
        for predicate in self.predicates.iter().chain(appended) {
            sql.push_str(if first { " " } else { " AND " });
            first = false;
            predicate.render_sql(sql);
        }

        sql.push_str(" )");
    }

    /// Renders the condition and returns the SQL string.
    #[must_use]
    pub fn to_sql(&self) -> String {
        let mut sql = String::new();
        self.render_sql(&mut sql);
        sql
    }

    /// Returns whether predicates may be appended to this condition.
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        self.dynamic.is_some()
    }

    /// Returns whether the condition renders to nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
            && self
                .dynamic
                .as_ref()
                .map_or(true, |d| d.predicates.is_empty())
    }

    /// Returns the predicates fixed at construction.
    #[must_use]
    pub fn predicates(&self) -> &[Box<dyn Predicate>] {
        &self.predicates
    }

    /// Returns the dynamic part, if the condition has one.
    #[must_use]
    pub const fn dynamic_predicates(&self) -> Option<&DynamicPredicates> {
        self.dynamic.as_ref()
    }
}

impl DynamicPredicates {
    /// Returns the backend gating appends to this list.
    #[must_use]
    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    /// Returns the number of appended predicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns whether no predicate has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Returns the appended predicates in append order.
    #[must_use]
    pub fn predicates(&self) -> &[Box<dyn Predicate>] {
        &self.predicates
    }

    /// Iterates over the appended predicates in append order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Predicate> {
        self.predicates.iter().map(|predicate| predicate.as_ref())
    }
}
