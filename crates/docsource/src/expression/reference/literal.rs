use super::ReferenceResolver;
use crate::{
    doc::{Document, Value},
    expression::{CollectExpression, CollectRef, Input},
    metadata::ColumnIdent,
    Result,
};

/// Resolves every column to the same fixed constant, regardless of the row.
///
/// Used for columns whose value is determined outside the row, such as
/// structural or system metadata.
pub struct LiteralResolver {
    value: Value,
}

impl LiteralResolver {
    pub fn new(value: impl Into<Value>) -> LiteralResolver {
        LiteralResolver {
            value: value.into(),
        }
    }
}

impl ReferenceResolver for LiteralResolver {
    fn get_implementation(&self, _column: &ColumnIdent) -> Result<CollectRef> {
        Ok(CollectRef::new(LiteralCollectExpression::new(
            self.value.clone(),
        )))
    }
}

/// A collect expression holding a fixed value; rebinding is a no-op.
#[derive(Debug)]
pub struct LiteralCollectExpression {
    value: Value,
}

impl LiteralCollectExpression {
    pub fn new(value: impl Into<Value>) -> LiteralCollectExpression {
        LiteralCollectExpression {
            value: value.into(),
        }
    }
}

impl CollectExpression for LiteralCollectExpression {
    fn set_next_row(&mut self, _row: &Document) {}
}

impl Input for LiteralCollectExpression {
    fn value(&self) -> Result<Value> {
        Ok(self.value.clone())
    }
}
