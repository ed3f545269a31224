use super::Error;

/// Error when an expression cannot be evaluated in the current context.
///
/// This occurs when:
/// - An `excluded` reference is evaluated outside an upsert-conflict context
/// - An excluded-value index is out of range for the insert row
///
/// These are runtime evaluation failures, not planning errors.
#[derive(Debug)]
pub(super) struct ExpressionEvaluationFailed {
    message: Box<str>,
}

impl std::error::Error for ExpressionEvaluationFailed {}

impl core::fmt::Display for ExpressionEvaluationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "expression evaluation failed: {}", self.message)
    }
}

impl Error {
    /// Creates an expression evaluation failed error.
    pub fn expression_evaluation_failed(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ExpressionEvaluationFailed(
            ExpressionEvaluationFailed {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an expression evaluation failure.
    pub fn is_expression_evaluation_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ExpressionEvaluationFailed(_))
    }
}
