use super::Error;
use crate::metadata::ColumnIdent;

/// Error when a static-table resolver is asked for a column identity it does
/// not hold.
///
/// The lookup table is expected to be exhaustive for every column the
/// statement's expressions can reference, so this is a catalog/configuration
/// error raised at statement construction time, not a per-row condition.
#[derive(Debug)]
pub(super) struct UnknownColumn {
    column: ColumnIdent,
}

impl std::error::Error for UnknownColumn {}

impl core::fmt::Display for UnknownColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown column: {}", self.column.fqn())
    }
}

impl Error {
    /// Creates an unknown column error.
    pub fn unknown_column(column: ColumnIdent) -> Error {
        Error::from(super::ErrorKind::UnknownColumn(UnknownColumn { column }))
    }

    /// Returns `true` if this error is an unknown column error.
    pub fn is_unknown_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownColumn(_))
    }
}
