use super::Error;

/// Error when the scalar-function registry has no implementation for a name
/// the expression tree references. Raised at statement construction time.
#[derive(Debug)]
pub(super) struct UnknownFunction {
    name: Box<str>,
}

impl std::error::Error for UnknownFunction {}

impl core::fmt::Display for UnknownFunction {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown function: {}", self.name)
    }
}

impl Error {
    /// Creates an unknown function error.
    pub fn unknown_function(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownFunction(UnknownFunction {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown function error.
    pub fn is_unknown_function(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownFunction(_))
    }
}
