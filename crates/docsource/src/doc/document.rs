use super::Value;
use crate::{err, Error, Result};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Upper bound on merge path depth. Planner-level validation is expected to
/// reject deeper paths long before they reach this layer.
const MAX_MERGE_DEPTH: usize = 64;

/// A nested, untyped mapping representing one stored record.
///
/// Keys are plain strings; values are [`Value`]s, so documents nest to
/// arbitrary depth. Insertion order is preserved so that serialization is
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    entries: IndexMap<String, Value>,
}

impl Document {
    pub fn new() -> Document {
        Document::default()
    }

    /// Decodes a raw JSON payload into a document.
    ///
    /// The payload must hold a JSON object at the top level; anything else is
    /// a malformed document.
    pub fn from_json(raw: &[u8]) -> Result<Document> {
        serde_json::from_slice(raw).map_err(Error::malformed_document)
    }

    /// Encodes the document back to a JSON byte buffer.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(Error::serialization_failure)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Reads the value at a dotted path.
    ///
    /// Splits `path` on `'.'`, descends through nested documents for all but
    /// the last segment, stopping early the moment a segment resolves to a
    /// missing or non-document value, then looks up the last segment in the
    /// deepest document reached. Absence is a valid result, never an error.
    pub fn get_by_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let leaf = segments.next_back()?;
        self.descend(segments).entries.get(leaf)
    }

    /// Reads the value at an already-split path rooted at `root`.
    ///
    /// Same traversal as [`get_by_path`](Document::get_by_path), but over the
    /// split representation a column identity carries.
    pub fn get_nested(&self, root: &str, path: &[String]) -> Option<&Value> {
        match path.split_last() {
            None => self.entries.get(root),
            Some((leaf, init)) => self
                .descend(std::iter::once(root).chain(init.iter().map(String::as_str)))
                .entries
                .get(leaf.as_str()),
        }
    }

    fn descend<'a>(&self, segments: impl Iterator<Item = &'a str>) -> &Document {
        let mut map = self;
        for segment in segments {
            match map.entries.get(segment) {
                Some(Value::Map(inner)) => map = inner,
                _ => break,
            }
        }
        map
    }

    /// Deep-merges `value` at `key` + `path`.
    ///
    /// An empty `path` overwrites `self[key]` directly. Otherwise the merge
    /// recurses into an existing nested document at `key`, or synthesizes a
    /// fresh chain of single-entry documents when `key` is absent. Sibling
    /// keys at every level are left untouched; only the addressed leaf is
    /// replaced. An intermediate key bound to a non-document value is a path
    /// conflict.
    pub fn merge_into(&mut self, key: &str, path: &[String], value: Value) -> Result<()> {
        if path.len() >= MAX_MERGE_DEPTH {
            return Err(err!(
                "merge path `{}` exceeds the maximum depth of {MAX_MERGE_DEPTH}",
                fqn(key, path)
            ));
        }
        self.merge_inner(&fqn(key, path), key, path, value)
    }

    fn merge_inner(&mut self, target: &str, key: &str, path: &[String], value: Value) -> Result<()> {
        let Some((head, tail)) = path.split_first() else {
            self.entries.insert(key.to_string(), value);
            return Ok(());
        };

        match self.entries.get_mut(key) {
            Some(Value::Map(inner)) => inner.merge_inner(target, head, tail, value),
            Some(_) => Err(Error::path_conflict(target, key)),
            None => {
                // Synthesize the chain of single-entry documents from the
                // leaf outwards.
                let mut chain = value;
                for segment in path.iter().rev() {
                    let mut inner = Document::new();
                    inner.insert(segment.clone(), chain);
                    chain = Value::Map(inner);
                }
                self.entries.insert(key.to_string(), chain);
                Ok(())
            }
        }
    }
}

fn fqn(key: &str, path: &[String]) -> String {
    let mut out = key.to_string();
    for segment in path {
        out.push('.');
        out.push_str(segment);
    }
    out
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Document {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
