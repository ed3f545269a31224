use crate::{doc::Value, Result};

/// Zero-argument, on-demand production of a value.
///
/// Evaluation is synchronous and side-effect-free from the caller's
/// perspective, and may be invoked any number of times; nothing is memoized
/// here; callers cache results themselves if they want to.
pub trait Input: core::fmt::Debug {
    fn value(&self) -> Result<Value>;
}

/// A constant is its own input.
impl Input for Value {
    fn value(&self) -> Result<Value> {
        Ok(self.clone())
    }
}
