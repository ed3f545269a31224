use super::Error;

/// Error when a merge target path traverses a value that is not an object.
#[derive(Debug)]
pub(super) struct PathConflict {
    target: Box<str>,
    segment: Box<str>,
}

impl std::error::Error for PathConflict {}

impl core::fmt::Display for PathConflict {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "path conflict merging `{}`: `{}` is not an object",
            self.target, self.segment
        )
    }
}

impl Error {
    /// Creates a path conflict error.
    ///
    /// `target` is the full dotted path being merged; `segment` is the key
    /// whose existing value blocked the traversal.
    pub fn path_conflict(target: impl Into<String>, segment: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::PathConflict(PathConflict {
            target: target.into().into(),
            segment: segment.into().into(),
        }))
    }

    /// Returns `true` if this error is a path conflict.
    pub fn is_path_conflict(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::PathConflict(_))
    }
}
