use super::Input;
use crate::{doc::Value, metadata::Scalar, Result};

use std::sync::Arc;

/// Applies a scalar function to evaluated argument inputs.
///
/// Arguments are evaluated eagerly, left to right, then handed to the scalar
/// in one call. No type coercion, no arity checking; the expression tree is
/// trusted as the planner built it, and a failing scalar propagates its
/// error unchanged.
pub struct FunctionExpression {
    scalar: Arc<dyn Scalar>,
    args: Vec<Box<dyn Input>>,
}

impl FunctionExpression {
    pub fn new(scalar: Arc<dyn Scalar>, args: Vec<Box<dyn Input>>) -> FunctionExpression {
        FunctionExpression { scalar, args }
    }
}

impl Input for FunctionExpression {
    fn value(&self) -> Result<Value> {
        let mut values = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            values.push(arg.value()?);
        }
        self.scalar.evaluate(&values)
    }
}

impl core::fmt::Debug for FunctionExpression {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("FunctionExpression")
            .field("scalar", &self.scalar.name())
            .field("args", &self.args.len())
            .finish()
    }
}
