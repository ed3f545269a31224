pub mod doc;

mod error;
pub use error::Error;

pub mod expression;

pub mod metadata;

pub mod source;

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
