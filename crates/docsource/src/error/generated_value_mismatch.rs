use super::Error;
use crate::{doc::Value, metadata::ColumnIdent};

/// Error when an explicitly supplied value for a generated column disagrees
/// with the value its generation expression computes.
///
/// A supplied value is never silently overwritten or auto-corrected; the
/// mismatch fails the whole document.
#[derive(Debug)]
pub(super) struct GeneratedValueMismatch {
    pub(super) column: ColumnIdent,
    pub(super) supplied: Value,
    pub(super) computed: Value,
}

impl std::error::Error for GeneratedValueMismatch {}

impl core::fmt::Display for GeneratedValueMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "given value {:?} for generated column {} does not match calculated value {:?}",
            self.supplied,
            self.column.fqn(),
            self.computed
        )
    }
}

impl Error {
    /// Creates a generated-value mismatch error.
    ///
    /// Carries the column identity and both values for diagnostics.
    pub fn generated_value_mismatch(
        column: ColumnIdent,
        supplied: Value,
        computed: Value,
    ) -> Error {
        Error::from(super::ErrorKind::GeneratedValueMismatch(
            GeneratedValueMismatch {
                column,
                supplied,
                computed,
            },
        ))
    }

    /// Returns `true` if this error is a generated-value mismatch.
    pub fn is_generated_value_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::GeneratedValueMismatch(_))
    }
}
