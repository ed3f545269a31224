use super::Error;

/// Error when a raw document payload cannot be decoded.
///
/// Fatal for that document; nothing is retried internally.
#[derive(Debug)]
pub(super) struct MalformedDocument {
    source: serde_json::Error,
}

impl std::error::Error for MalformedDocument {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl core::fmt::Display for MalformedDocument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed document: {}", self.source)
    }
}

impl Error {
    /// Creates a malformed document error from a decode failure.
    pub fn malformed_document(source: serde_json::Error) -> Error {
        Error::from(super::ErrorKind::MalformedDocument(MalformedDocument {
            source,
        }))
    }

    /// Returns `true` if this error is a malformed document error.
    pub fn is_malformed_document(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MalformedDocument(_))
    }
}
