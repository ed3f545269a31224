use super::Scalar;
use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// The scalar-function registry for a statement's table context.
///
/// Built once per statement and shared read-only across every document that
/// statement processes. A lookup miss is a catalog error at statement
/// construction time, not a per-row condition.
#[derive(Clone, Default)]
pub struct Functions {
    scalars: IndexMap<String, Arc<dyn Scalar>>,
}

impl Functions {
    pub fn new() -> Functions {
        Functions::default()
    }

    /// Registers a scalar under its own name, replacing any previous
    /// implementation with that name.
    pub fn register(&mut self, scalar: impl Scalar + 'static) {
        self.scalars.insert(scalar.name().to_string(), Arc::new(scalar));
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn Scalar>> {
        self.scalars
            .get(name)
            .cloned()
            .ok_or_else(|| Error::unknown_function(name))
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }
}

impl core::fmt::Debug for Functions {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_list().entries(self.scalars.keys()).finish()
    }
}
