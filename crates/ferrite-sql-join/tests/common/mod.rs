#![allow(dead_code)]

use ferrite_sql_join::{Backend, ExprKind, Predicate};

/// A column-equality predicate, as a join builder would produce.
#[derive(Debug, Clone)]
pub struct ColumnEq {
    left: String,
    right: String,
}

impl Predicate for ColumnEq {
    fn kind(&self) -> ExprKind {
        ExprKind::Comparison
    }

    fn render_sql(&self, sql: &mut String) {
        sql.push_str(&self.left);
        sql.push_str(" = ");
        sql.push_str(&self.right);
    }
}

pub fn col_eq(left: &str, right: &str) -> ColumnEq {
    ColumnEq {
        left: String::from(left),
        right: String::from(right),
    }
}

/// An EXISTS subquery predicate.
#[derive(Debug, Clone)]
pub struct ExistsSubquery {
    subquery: String,
}

impl Predicate for ExistsSubquery {
    fn kind(&self) -> ExprKind {
        ExprKind::Exists
    }

    fn render_sql(&self, sql: &mut String) {
        sql.push_str("EXISTS (");
        sql.push_str(&self.subquery);
        sql.push(')');
    }
}

pub fn exists(subquery: &str) -> ExistsSubquery {
    ExistsSubquery {
        subquery: String::from(subquery),
    }
}

/// A backend that cannot serialize EXISTS predicates.
#[derive(Debug, Clone, Copy)]
pub struct NoSubqueryBackend;

impl Backend for NoSubqueryBackend {
    fn name(&self) -> &'static str {
        "no-subquery"
    }

    fn supports(&self, kind: ExprKind) -> bool {
        kind != ExprKind::Exists
    }
}
