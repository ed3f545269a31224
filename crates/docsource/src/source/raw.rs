use crate::{
    doc::Document,
    expression::{reference::FromSourceResolver, CollectRef, Input, InputFactory},
    metadata::{ColumnIdent, Functions, GeneratedColumn},
    Result,
};

use indexmap::IndexMap;
use std::sync::Arc;

/// Generates the final source document from a raw insert payload.
///
/// Every generated-column expression is compiled once, bound to the decoded
/// payload per document, and injected only where the payload did not already
/// supply a value. First write wins: a present value, including an explicit
/// null, is never overwritten, which also makes a second pass over its own
/// output a no-op.
///
/// This path performs no validation of supplied values against computed
/// ones; only the update path does.
#[derive(Debug)]
pub struct RawSourceGen {
    generated: IndexMap<ColumnIdent, Box<dyn Input>>,
    expressions: Vec<CollectRef>,
}

impl RawSourceGen {
    pub fn new(
        functions: Arc<Functions>,
        generated_columns: &[GeneratedColumn],
    ) -> Result<RawSourceGen> {
        let input_factory = InputFactory::new(functions);
        let mut ctx = input_factory.ctx_for_refs(&FromSourceResolver);
        let mut generated = IndexMap::with_capacity(generated_columns.len());

        for definition in generated_columns {
            generated.insert(definition.column().clone(), ctx.add(definition.expr())?);
        }

        Ok(RawSourceGen {
            generated,
            expressions: ctx.into_expressions(),
        })
    }

    /// Decodes `raw`, fills in absent generated columns, and re-encodes.
    ///
    /// A malformed payload fails the whole document; no partial document is
    /// ever produced.
    pub fn generate_source(&self, raw: &[u8]) -> Result<Vec<u8>> {
        let mut source = Document::from_json(raw)?;

        for expression in &self.expressions {
            expression.set_next_row(&source);
        }

        for (column, input) in &self.generated {
            if source.get_nested(column.name(), column.path()).is_none() {
                source.merge_into(column.name(), column.path(), input.value()?)?;
            }
        }

        source.to_json()
    }
}
