/// Identity of a (possibly nested) column: a root name plus an ordered
/// sequence of nested-path segments.
///
/// Root `obj` with path `["a", "b"]` names `obj['a']['b']`. Two identities
/// are equal iff root and path match element-wise; identities are immutable
/// and usable as map keys. Path segments are plain strings; no dot or
/// bracket syntax is interpreted at this level.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColumnIdent {
    name: String,
    path: Vec<String>,
}

impl ColumnIdent {
    /// Creates a top-level column identity.
    pub fn new(name: impl Into<String>) -> ColumnIdent {
        ColumnIdent::with_path(name, vec![])
    }

    /// Creates a column identity with a nested path below the root.
    pub fn with_path(name: impl Into<String>, path: Vec<String>) -> ColumnIdent {
        let name = name.into();
        debug_assert!(!name.is_empty(), "column root name must not be empty");
        ColumnIdent { name, path }
    }

    /// Parses a dotted form: `"a.b.c"` becomes root `a` with path `[b, c]`.
    pub fn from_path(fqn: &str) -> ColumnIdent {
        let mut segments = fqn.split('.').map(str::to_string);
        let name = segments.next().unwrap_or_default();
        ColumnIdent::with_path(name, segments.collect())
    }

    /// The root name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The nested path below the root; empty for top-level columns.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn is_top_level(&self) -> bool {
        self.path.is_empty()
    }

    /// The dotted form, used for diagnostics.
    pub fn fqn(&self) -> String {
        let mut out = self.name.clone();
        for segment in &self.path {
            out.push('.');
            out.push_str(segment);
        }
        out
    }
}

impl core::fmt::Display for ColumnIdent {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.name)?;
        for segment in &self.path {
            write!(f, ".{segment}")?;
        }
        Ok(())
    }
}
