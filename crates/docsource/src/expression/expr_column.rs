use super::Expr;
use crate::metadata::ColumnIdent;

/// A reference to a base column of the target table.
///
/// Resolution to a row-bound evaluator happens at statement construction
/// time through a [`ReferenceResolver`](super::ReferenceResolver).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExprColumn {
    /// The referenced column's identity
    pub column: ColumnIdent,
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}

impl From<ColumnIdent> for ExprColumn {
    fn from(column: ColumnIdent) -> Self {
        ExprColumn { column }
    }
}
