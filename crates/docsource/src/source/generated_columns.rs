use crate::{
    doc::{Document, Value},
    expression::{CollectRef, Input, InputFactory, ReferenceResolver},
    metadata::{ColumnIdent, GeneratedColumn},
    Error, Result,
};

use indexmap::IndexMap;

/// Whether explicitly supplied values for generated columns are checked
/// against the computed ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validation {
    None,
    GeneratedValueMatch,
}

/// The per-statement generated-column pipeline.
///
/// Built once per statement from the table's generated-column definitions
/// and the set of columns the caller explicitly supplies. Each definition's
/// expression is compiled against one shared context, so every generated
/// column sees the same snapshot after a [`set_next_row`](Self::set_next_row)
/// call; evaluation order across generated columns cannot matter except
/// through the evolving document itself.
///
/// Holds per-row cursor state, so one instance belongs to exactly one
/// execution path; it is rebound sequentially across that path's documents.
pub struct GeneratedColumns {
    to_validate: IndexMap<ColumnIdent, Box<dyn Input>>,
    to_inject: IndexMap<ColumnIdent, Box<dyn Input>>,
    expressions: Vec<CollectRef>,
}

impl GeneratedColumns {
    /// The no-op pipeline for tables without generated columns: nothing to
    /// inject, validation never fails. Callers need no special-casing.
    pub fn empty() -> GeneratedColumns {
        GeneratedColumns {
            to_validate: IndexMap::new(),
            to_inject: IndexMap::new(),
            expressions: vec![],
        }
    }

    /// Compiles the generated-column definitions.
    ///
    /// A definition whose target is among `updated_columns` is routed to
    /// validation (under [`Validation::GeneratedValueMatch`]); every other
    /// definition must be injected because the caller did not supply it.
    /// `resolver` must cover every base column referenced anywhere within
    /// the generated expressions, including columns outside the supplied
    /// set.
    pub fn new(
        input_factory: &InputFactory,
        validation: Validation,
        resolver: &dyn ReferenceResolver,
        updated_columns: &[ColumnIdent],
        generated: &[GeneratedColumn],
    ) -> Result<GeneratedColumns> {
        let mut ctx = input_factory.ctx_for_refs(resolver);
        let mut to_validate = IndexMap::new();
        let mut to_inject = IndexMap::new();

        for definition in generated {
            if updated_columns.contains(definition.column()) {
                if validation == Validation::GeneratedValueMatch {
                    to_validate.insert(definition.column().clone(), ctx.add(definition.expr())?);
                }
            } else {
                to_inject.insert(definition.column().clone(), ctx.add(definition.expr())?);
            }
        }

        Ok(GeneratedColumns {
            to_validate,
            to_inject,
            expressions: ctx.into_expressions(),
        })
    }

    /// Rebinds every base-column evaluator to `row`.
    ///
    /// Must be called before evaluating or validating any generated column
    /// for that document.
    pub fn set_next_row(&self, row: &Document) {
        for expression in &self.expressions {
            expression.set_next_row(row);
        }
    }

    /// The generated columns the caller did not supply, paired with their
    /// (lazy) computed values. An input is only forced when consumed.
    pub fn to_inject(&self) -> impl Iterator<Item = (&ColumnIdent, &dyn Input)> {
        self.to_inject
            .iter()
            .map(|(column, input)| (column, input.as_ref()))
    }

    /// Checks an explicitly supplied value for `column` against the value
    /// its generation expression computes for the current row.
    ///
    /// A no-op for columns that are not validated generated targets. A
    /// disagreement is a hard error carrying both values; the supplied value
    /// is never auto-corrected.
    pub fn validate_value(&self, column: &ColumnIdent, supplied: &Value) -> Result<()> {
        let Some(input) = self.to_validate.get(column) else {
            return Ok(());
        };
        let computed = input.value()?;
        if *supplied != computed {
            return Err(Error::generated_value_mismatch(
                column.clone(),
                supplied.clone(),
                computed,
            ));
        }
        Ok(())
    }
}
