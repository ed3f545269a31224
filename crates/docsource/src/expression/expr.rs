use super::{ExprColumn, ExprExcluded, ExprFunc};
use crate::{doc::Value, metadata::ColumnIdent};

/// A symbolic expression tree produced by the planner.
///
/// The tree is immutable; evaluation never mutates it. Leaves are literal
/// values, base-column references, and `excluded`-row references
/// (upsert-conflict semantics); interior nodes are scalar function
/// applications.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// References a base column of the target table
    Column(ExprColumn),

    /// References a value of the would-be-inserted row in an
    /// `ON CONFLICT .. DO UPDATE` statement
    Excluded(ExprExcluded),

    /// Scalar function call
    Func(ExprFunc),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn column(column: impl Into<ColumnIdent>) -> Self {
        ExprColumn::from(column.into()).into()
    }

    pub fn excluded(index: usize) -> Self {
        ExprExcluded { index }.into()
    }

    pub fn func(name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        ExprFunc::new(name, args).into()
    }

    /// Is a value that evaluates to null
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Returns true if the expression is a constant value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(..))
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, Self::Excluded(..))
    }

    pub fn is_func(&self) -> bool {
        matches!(self, Self::Func(..))
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<ColumnIdent> for Expr {
    fn from(column: ColumnIdent) -> Self {
        Expr::column(column)
    }
}
