//! # ferrite-sql-join
//!
//! Typed construction of SQL join conditions: the `ON (...)` fragment of a
//! join, rendered to exact SQL text.
//!
//! This crate provides:
//! - [`OnClause`], combining predicates fixed at construction with
//!   predicates appended while a query is assembled
//! - A [`Predicate`] trait for the expression nodes supplied by the
//!   surrounding query builder
//! - A [`Backend`] trait gating which expression kinds may be appended
//!
//! ## Building a join condition
//!
//! ```rust
//! use ferrite_sql_join::{GenericBackend, OnClause, raw};
//!
//! let mut on = OnClause::dynamic(
//!     vec![Box::new(raw("u.id = o.user_id"))],
//!     GenericBackend::new(),
//! );
//! on.append(raw("o.deleted_at IS NULL"))?;
//!
//! assert_eq!(on.to_sql(), " ON ( u.id = o.user_id AND o.deleted_at IS NULL )");
//! # Ok::<(), ferrite_sql_join::OnClauseError>(())
//! ```
//!
//! ## Unconditional joins
//!
//! A join with no condition at all (a cross join) renders to nothing:
//!
//! ```rust
//! use ferrite_sql_join::OnClause;
//!
//! assert_eq!(OnClause::unconditional().to_sql(), "");
//! ```

pub mod backend;
pub mod error;
pub mod expr;
pub mod on;

pub use backend::{Backend, GenericBackend};
pub use error::{OnClauseError, Result};
pub use expr::{ExprKind, Predicate, RawSql, raw};
pub use on::{DynamicPredicates, OnClause};
