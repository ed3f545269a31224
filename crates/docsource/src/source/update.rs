use super::{GeneratedColumns, Validation};
use crate::{
    doc::{Document, Value},
    expression::{reference::FromSourceResolver, Expr, InputFactory},
    metadata::{ColumnIdent, Functions, GeneratedColumn},
    Result,
};

use std::sync::Arc;

/// Applies update assignments to an existing source document and produces
/// the new source to store.
///
/// ```text
/// For updates:
///
///   UPDATE t SET x = x + 10
///
///       base document: {x: 20, y: 30}
///       assignment:    x + 10
///       result source: {x: 30, y: 30}
///
/// For ON CONFLICT DO UPDATE:
///
///   INSERT INTO t VALUES (10) ON CONFLICT .. DO UPDATE SET x = x + excluded.x
///
///       base document: {x: 20, y: 30}
///       assignment:    x + excluded.x
///       insert values: [10]
///       result source: {x: 30, y: 30}
/// ```
///
/// Assignments apply sequentially, not as a batch: each one is evaluated
/// against the document as updated by the assignments before it, so
/// `SET a = 1, b = a + 1` sees the new `a`.
pub struct UpdateSourceGen {
    input_factory: InputFactory,
    update_columns: Vec<ColumnIdent>,
    generated_columns: GeneratedColumns,
}

impl UpdateSourceGen {
    pub fn new(
        functions: Arc<Functions>,
        update_columns: Vec<ColumnIdent>,
        generated: &[GeneratedColumn],
    ) -> Result<UpdateSourceGen> {
        let input_factory = InputFactory::new(functions);
        let generated_columns = if generated.is_empty() {
            GeneratedColumns::empty()
        } else {
            GeneratedColumns::new(
                &input_factory,
                Validation::GeneratedValueMatch,
                &FromSourceResolver,
                &update_columns,
                generated,
            )?
        };
        Ok(UpdateSourceGen {
            input_factory,
            update_columns,
            generated_columns,
        })
    }

    /// Applies the assignments to `source` and re-encodes the result.
    ///
    /// `assignments` pairs up with the update columns given at construction;
    /// `insert_values` is the excluded row of an upsert conflict (empty for
    /// plain updates). After each merge the generated-column pipeline is
    /// rebound to the updated document and the target is validated if it is
    /// itself a generated column; once every assignment is applied, the
    /// generated columns outside the update set are computed and merged.
    /// Any failure aborts the whole document.
    pub fn generate_source(
        &self,
        mut source: Document,
        assignments: &[Expr],
        insert_values: &[Value],
    ) -> Result<Vec<u8>> {
        debug_assert_eq!(self.update_columns.len(), assignments.len());

        for (column, assignment) in self.update_columns.iter().zip(assignments) {
            let value = self.eval(assignment, &source, insert_values)?;
            source.merge_into(column.name(), column.path(), value.clone())?;
            self.generated_columns.set_next_row(&source);
            self.generated_columns.validate_value(column, &value)?;
        }

        self.generated_columns.set_next_row(&source);
        for (column, input) in self.generated_columns.to_inject() {
            let value = input.value()?;
            source.merge_into(column.name(), column.path(), value)?;
        }

        source.to_json()
    }

    /// Evaluates one assignment against the current document state.
    ///
    /// Column references bind to `source` as it stands right now, including
    /// the values merged by earlier assignments of the same statement, and
    /// excluded references resolve positionally into `insert_values`.
    fn eval(&self, assignment: &Expr, source: &Document, insert_values: &[Value]) -> Result<Value> {
        let mut ctx = self.input_factory.ctx_for_refs(&FromSourceResolver);
        let input = ctx.add_with_excluded(assignment, insert_values)?;
        ctx.set_next_row(source);
        input.value()
    }
}
