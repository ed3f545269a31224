use super::{CollectRef, Expr, FunctionExpression, Input, ReferenceResolver};
use crate::{
    doc::{Document, Value},
    metadata::Functions,
    Error, Result,
};

use std::sync::Arc;

/// Compiles planner expression trees into evaluable [`Input`]s.
///
/// Created once per statement around the statement's function catalog; the
/// per-resolver compilation state lives in a [`RefContext`].
#[derive(Clone)]
pub struct InputFactory {
    functions: Arc<Functions>,
}

impl InputFactory {
    pub fn new(functions: Arc<Functions>) -> InputFactory {
        InputFactory { functions }
    }

    /// Opens a compilation context that resolves column references through
    /// `resolver`.
    pub fn ctx_for_refs<'a>(&self, resolver: &'a dyn ReferenceResolver) -> RefContext<'a> {
        RefContext {
            functions: self.functions.clone(),
            resolver,
            expressions: vec![],
        }
    }
}

/// Compilation state for one resolver context.
///
/// Every column leaf resolved through [`add`](RefContext::add) is also
/// recorded in the context's rebind list, so the whole set of leaves feeding
/// the compiled inputs can be rebound to a new row with a single
/// [`set_next_row`](RefContext::set_next_row) call.
pub struct RefContext<'a> {
    functions: Arc<Functions>,
    resolver: &'a dyn ReferenceResolver,
    expressions: Vec<CollectRef>,
}

impl RefContext<'_> {
    /// Compiles `expr` into an input.
    ///
    /// `excluded` references are rejected here; they only make sense with an
    /// insert-values row in scope; see
    /// [`add_with_excluded`](RefContext::add_with_excluded).
    pub fn add(&mut self, expr: &Expr) -> Result<Box<dyn Input>> {
        self.add_inner(expr, None)
    }

    /// Compiles `expr`, resolving `excluded` references to values of the
    /// given would-be-inserted row.
    pub fn add_with_excluded(&mut self, expr: &Expr, excluded: &[Value]) -> Result<Box<dyn Input>> {
        self.add_inner(expr, Some(excluded))
    }

    fn add_inner(&mut self, expr: &Expr, excluded: Option<&[Value]>) -> Result<Box<dyn Input>> {
        match expr {
            Expr::Value(value) => Ok(Box::new(value.clone())),
            Expr::Column(expr_column) => {
                let implementation = self.resolver.get_implementation(&expr_column.column)?;
                self.expressions.push(implementation.clone());
                Ok(Box::new(implementation))
            }
            Expr::Excluded(expr_excluded) => {
                let Some(row) = excluded else {
                    return Err(Error::expression_evaluation_failed(
                        "excluded reference outside an upsert-conflict context",
                    ));
                };
                let Some(value) = row.get(expr_excluded.index) else {
                    return Err(Error::expression_evaluation_failed(format!(
                        "excluded value index {} out of range for insert row of {} values",
                        expr_excluded.index,
                        row.len()
                    )));
                };
                Ok(Box::new(value.clone()))
            }
            Expr::Func(expr_func) => {
                let scalar = self.functions.get(&expr_func.name)?;
                let mut args: Vec<Box<dyn Input>> = Vec::with_capacity(expr_func.args.len());
                for arg in &expr_func.args {
                    args.push(self.add_inner(arg, excluded)?);
                }
                Ok(Box::new(FunctionExpression::new(scalar, args)))
            }
        }
    }

    /// The collect expressions resolved so far.
    pub fn expressions(&self) -> &[CollectRef] {
        &self.expressions
    }

    /// Rebinds every resolved collect expression to `row`.
    pub fn set_next_row(&self, row: &Document) {
        for expression in &self.expressions {
            expression.set_next_row(row);
        }
    }

    /// Consumes the context, keeping only the rebind list.
    pub fn into_expressions(self) -> Vec<CollectRef> {
        self.expressions
    }
}
