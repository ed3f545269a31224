use super::ReferenceResolver;
use crate::{expression::CollectRef, metadata::ColumnIdent, Error, Result};

use indexmap::IndexMap;

/// An immutable lookup table of pre-built evaluators keyed by column
/// identity.
///
/// Built once per context (e.g. per shard, per request) and expected to be
/// exhaustive for every column the statement's expressions can reference: a
/// miss is a construction-time catalog error, never a per-row condition.
/// Handles are shared, not re-created; looking a column up twice yields the
/// same underlying evaluator.
pub struct MapBackedResolver {
    implementations: IndexMap<ColumnIdent, CollectRef>,
}

impl MapBackedResolver {
    pub fn new(implementations: IndexMap<ColumnIdent, CollectRef>) -> MapBackedResolver {
        MapBackedResolver { implementations }
    }

    pub fn len(&self) -> usize {
        self.implementations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.implementations.is_empty()
    }
}

impl ReferenceResolver for MapBackedResolver {
    fn get_implementation(&self, column: &ColumnIdent) -> Result<CollectRef> {
        self.implementations
            .get(column)
            .cloned()
            .ok_or_else(|| Error::unknown_column(column.clone()))
    }
}

impl FromIterator<(ColumnIdent, CollectRef)> for MapBackedResolver {
    fn from_iter<T: IntoIterator<Item = (ColumnIdent, CollectRef)>>(iter: T) -> Self {
        MapBackedResolver::new(iter.into_iter().collect())
    }
}
