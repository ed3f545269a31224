use super::ColumnIdent;
use crate::expression::Expr;

/// A generated-column definition: the target column and the expression that
/// computes its value from other columns.
///
/// The expression may reference any base column, including columns that are
/// not part of the current insert or update set.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedColumn {
    column: ColumnIdent,
    expr: Expr,
}

impl GeneratedColumn {
    pub fn new(column: ColumnIdent, expr: impl Into<Expr>) -> GeneratedColumn {
        GeneratedColumn {
            column,
            expr: expr.into(),
        }
    }

    pub fn column(&self) -> &ColumnIdent {
        &self.column
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}
