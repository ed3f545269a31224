use super::CollectRef;
use crate::{metadata::ColumnIdent, Result};

mod from_source;
pub use from_source::{FromSourceExpression, FromSourceResolver};

mod literal;
pub use literal::{LiteralCollectExpression, LiteralResolver};

mod map_backed;
pub use map_backed::MapBackedResolver;

/// A strategy mapping column identities to freshly bound evaluators.
///
/// One resolver is constructed per statement/table context, is immutable,
/// and is reused across all of that statement's rows. Distinct strategies
/// exist per context (raw-source extraction, fixed literals, static lookup
/// tables), but all share this one contract.
pub trait ReferenceResolver {
    fn get_implementation(&self, column: &ColumnIdent) -> Result<CollectRef>;
}
