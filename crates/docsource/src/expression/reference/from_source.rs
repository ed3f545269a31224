use super::ReferenceResolver;
use crate::{
    doc::{Document, Value},
    expression::{CollectExpression, CollectRef, Input},
    metadata::ColumnIdent,
    Result,
};

/// Resolves every column to path-based extraction from the current source
/// document.
///
/// Used when the candidate values live in the document itself: the raw
/// payload on the insert path, the evolving source on the update path.
pub struct FromSourceResolver;

impl ReferenceResolver for FromSourceResolver {
    fn get_implementation(&self, column: &ColumnIdent) -> Result<CollectRef> {
        Ok(CollectRef::new(FromSourceExpression::new(column.clone())))
    }
}

/// Extracts a column's value from the bound document by root + path.
///
/// The value is re-extracted on every rebind, never cached across rows. An
/// absent path yields null.
#[derive(Debug)]
pub struct FromSourceExpression {
    column: ColumnIdent,
    value: Value,
}

impl FromSourceExpression {
    pub fn new(column: ColumnIdent) -> FromSourceExpression {
        FromSourceExpression {
            column,
            value: Value::Null,
        }
    }
}

impl CollectExpression for FromSourceExpression {
    fn set_next_row(&mut self, row: &Document) {
        self.value = row
            .get_nested(self.column.name(), self.column.path())
            .cloned()
            .unwrap_or(Value::Null);
    }
}

impl Input for FromSourceExpression {
    fn value(&self) -> Result<Value> {
        Ok(self.value.clone())
    }
}
