use super::Document;

use serde::{Deserialize, Serialize};

/// A single value inside a [`Document`].
///
/// This is the untyped exchange shape of the storage layer: scalars, nested
/// documents, sequences, and null. Variant order matters for deserialization
/// (`I64` must be tried before `F64`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit floating point number
    F64(f64),

    /// String value
    String(String),

    /// A sequence of values, treated as an opaque unit by path traversal
    List(Vec<Value>),

    /// A nested document
    Map(Document),
}

impl Value {
    /// Returns a value representing null
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the nested document if this value is a map.
    pub fn as_map(&self) -> Option<&Document> {
        match self {
            Self::Map(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Document> {
        match self {
            Self::Map(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src as i64)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<Vec<Value>> for Value {
    fn from(src: Vec<Value>) -> Self {
        Self::List(src)
    }
}

impl From<Document> for Value {
    fn from(src: Document) -> Self {
        Self::Map(src)
    }
}
