mod adhoc;
mod expression_evaluation_failed;
mod generated_value_mismatch;
mod malformed_document;
mod path_conflict;
mod serialization_failure;
mod unknown_column;
mod unknown_function;

use adhoc::AdhocError;
use expression_evaluation_failed::ExpressionEvaluationFailed;
use generated_value_mismatch::GeneratedValueMismatch;
use malformed_document::MalformedDocument;
use path_conflict::PathConflict;
use serialization_failure::SerializationFailure;
use std::sync::Arc;
use unknown_column::UnknownColumn;
use unknown_function::UnknownFunction;

/// Fail the current document with a formatted ad-hoc error.
///
/// Intended for consumer-supplied scalar implementations and other code that
/// has no structured error kind of its own.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Create an ad-hoc [`Error`](crate::Error) from format arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur during document source generation.
///
/// Every failure aborts the current document as a whole; no partial document
/// is ever handed to serialization.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root
    /// cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let inner = err.inner.as_mut().unwrap();
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::MalformedDocument(err) => Some(err),
            ErrorKind::SerializationFailure(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    ExpressionEvaluationFailed(ExpressionEvaluationFailed),
    GeneratedValueMismatch(GeneratedValueMismatch),
    MalformedDocument(MalformedDocument),
    PathConflict(PathConflict),
    SerializationFailure(SerializationFailure),
    UnknownColumn(UnknownColumn),
    UnknownFunction(UnknownFunction),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            ExpressionEvaluationFailed(err) => core::fmt::Display::fmt(err, f),
            GeneratedValueMismatch(err) => core::fmt::Display::fmt(err, f),
            MalformedDocument(err) => core::fmt::Display::fmt(err, f),
            PathConflict(err) => core::fmt::Display::fmt(err, f),
            SerializationFailure(err) => core::fmt::Display::fmt(err, f),
            UnknownColumn(err) => core::fmt::Display::fmt(err, f),
            UnknownFunction(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown docsource error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
