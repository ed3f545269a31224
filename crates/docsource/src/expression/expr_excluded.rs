use super::Expr;

/// A positional reference into the "excluded" row of an upsert conflict.
///
/// `INSERT .. ON CONFLICT DO UPDATE SET x = excluded.x` exposes the
/// would-be-inserted values to the update assignments; the planner lowers
/// `excluded.x` to an index into that row. Evaluating one outside an
/// upsert-conflict context is an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExprExcluded {
    /// Index into the insert-values row
    pub index: usize,
}

impl From<ExprExcluded> for Expr {
    fn from(value: ExprExcluded) -> Self {
        Self::Excluded(value)
    }
}
