use super::Input;
use crate::{doc::Document, doc::Value, Result};

use std::cell::RefCell;
use std::rc::Rc;

/// A row-scoped, rebindable input ("collect expression").
///
/// Rebinding via [`set_next_row`](CollectExpression::set_next_row) is the
/// only permitted mutation; given the bound row, [`Input::value`] is pure.
/// State must never leak across documents: every rebind fully replaces
/// whatever the previous row left behind.
pub trait CollectExpression: Input {
    fn set_next_row(&mut self, row: &Document);
}

/// Shared handle to a collect expression: the per-row cursor.
///
/// Compiled input trees and the context's rebind list both hold handles to
/// the same underlying evaluator, so one `set_next_row` pass rebinds every
/// leaf an expression can reach. The `Rc<RefCell<..>>` makes the handle
/// deliberately not `Send`: each concurrent execution path builds its own
/// evaluator set and reuses it sequentially across that path's documents.
#[derive(Clone)]
pub struct CollectRef {
    inner: Rc<RefCell<Box<dyn CollectExpression>>>,
}

impl CollectRef {
    pub fn new(expr: impl CollectExpression + 'static) -> CollectRef {
        CollectRef {
            inner: Rc::new(RefCell::new(Box::new(expr))),
        }
    }

    pub fn set_next_row(&self, row: &Document) {
        self.inner.borrow_mut().set_next_row(row);
    }
}

impl Input for CollectRef {
    fn value(&self) -> Result<Value> {
        self.inner.borrow().value()
    }
}

impl core::fmt::Debug for CollectRef {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("CollectRef").finish_non_exhaustive()
    }
}
