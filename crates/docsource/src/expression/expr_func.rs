use super::Expr;

/// A scalar function call expression.
///
/// The name is looked up in the statement's
/// [`Functions`](crate::metadata::Functions) registry when the tree is
/// compiled into inputs; argument count and types were fixed by the planner.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprFunc {
    pub name: String,
    pub args: Vec<Expr>,
}

impl ExprFunc {
    pub fn new(name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> ExprFunc {
        ExprFunc {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
