//! Predicate expression boundary.
//!
//! Join conditions do not model SQL expressions themselves. Any type
//! implementing [`Predicate`] can be placed in an ON clause; the clause only
//! asks it for its [`ExprKind`] and its SQL text. The one implementation
//! shipped here is [`raw`], an opaque passthrough for prebuilt fragments.

use std::fmt;

/// The kind of SQL expression a predicate renders to.
///
/// Backends use the kind to decide whether they can serialize a predicate
/// (see [`Backend::supports`](crate::backend::Backend::supports)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    /// Comparison between two operands (`=`, `<>`, `<`, ...).
    Comparison,
    /// Logical combination (`AND`, `OR`, `NOT`).
    Logical,
    /// `LIKE` pattern match.
    Like,
    /// `BETWEEN` range check.
    Between,
    /// `IN` list membership.
    InList,
    /// `IS NULL` / `IS NOT NULL` check.
    IsNull,
    /// `EXISTS` subquery.
    Exists,
    /// Function call.
    Function,
    /// Raw SQL fragment.
    Raw,
}

impl ExprKind {
    /// Returns a human-readable name for the expression kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Comparison => "comparison",
            Self::Logical => "logical",
            Self::Like => "LIKE",
            Self::Between => "BETWEEN",
            Self::InList => "IN",
            Self::IsNull => "IS NULL",
            Self::Exists => "EXISTS",
            Self::Function => "function",
            Self::Raw => "raw SQL",
        }
    }
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A boolean-valued SQL expression usable inside an `ON (...)` clause.
///
/// Implementors write their own SQL text; the surrounding clause supplies
/// the `ON (` prefix, the `AND` separators and the closing `)`.
pub trait Predicate: fmt::Debug {
    /// Returns the kind of expression this predicate renders to.
    fn kind(&self) -> ExprKind;

    /// Writes the predicate's SQL text into `sql`.
    ///
    /// The text must carry no leading or trailing whitespace.
    fn render_sql(&self, sql: &mut String);
}

impl<P: Predicate + ?Sized> Predicate for Box<P> {
    fn kind(&self) -> ExprKind {
        (**self).kind()
    }

    fn render_sql(&self, sql: &mut String) {
        (**self).render_sql(sql);
    }
}

/// Creates a predicate from a raw SQL fragment.
///
/// **Warning**: Only use this for SQL fragments that don't contain user input.
#[must_use]
pub fn raw(sql: impl Into<String>) -> RawSql {
    RawSql { sql: sql.into() }
}

/// A raw SQL fragment used verbatim as a join predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSql {
    sql: String,
}

impl Predicate for RawSql {
    fn kind(&self) -> ExprKind {
        ExprKind::Raw
    }

    fn render_sql(&self, sql: &mut String) {
        sql.push_str(&self.sql);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expr_kind_names() {
        assert_eq!(ExprKind::Comparison.as_str(), "comparison");
        assert_eq!(ExprKind::Exists.as_str(), "EXISTS");
        assert_eq!(ExprKind::IsNull.to_string(), "IS NULL");
    }

    #[test]
    fn test_raw_renders_verbatim() {
        let predicate = raw("u.id = o.user_id");
        assert_eq!(predicate.kind(), ExprKind::Raw);

        let mut sql = String::new();
        predicate.render_sql(&mut sql);
        assert_eq!(sql, "u.id = o.user_id");
    }

    #[test]
    fn test_boxed_predicate_delegates() {
        let predicate: Box<dyn Predicate> = Box::new(raw("a.x = b.x"));
        assert_eq!(predicate.kind(), ExprKind::Raw);

        let mut sql = String::new();
        predicate.render_sql(&mut sql);
        assert_eq!(sql, "a.x = b.x");
    }
}
