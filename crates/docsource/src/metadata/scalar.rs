use crate::{doc::Value, Result};

/// A named, arity-fixed scalar function.
///
/// Implementations are supplied by the statement's function catalog; this
/// crate consumes the contract but defines no scalars of its own. Argument
/// counts and types are fixed by the planner at construction time; no
/// coercion or arity checking happens here. A failing scalar propagates its
/// error to the caller unchanged.
pub trait Scalar: Send + Sync {
    fn name(&self) -> &str;

    fn evaluate(&self, args: &[Value]) -> Result<Value>;
}
