//! The nested mapping produced by collapsing an options tree.

use indexmap::IndexMap;
use serde::Serialize;

/// A single option value: either a plain string or a nested subcategory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A `key: value` leaf.
    Value(String),
    /// A subcategory and everything nested under it.
    Section(Options),
}

impl OptionValue {
    /// The string value, if this is a leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            Self::Section(_) => None,
        }
    }

    /// The nested mapping, if this is a subcategory.
    pub fn as_section(&self) -> Option<&Options> {
        match self {
            Self::Value(_) => None,
            Self::Section(s) => Some(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<Options> for OptionValue {
    fn from(section: Options) -> Self {
        Self::Section(section)
    }
}

/// Insertion-ordered mapping from option name to [`OptionValue`].
///
/// Re-inserting an existing key replaces its value but keeps the key in its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Options {
    entries: IndexMap<String, OptionValue>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    /// Look up a value by dot-separated path, e.g. `"Car.Make"`.
    ///
    /// Keys that themselves contain `.` are unreachable this way; use
    /// [`get_keys`](Self::get_keys) for those.
    pub fn get_path(&self, path: &str) -> Option<&OptionValue> {
        let keys: Vec<&str> = path.split('.').collect();
        self.get_keys(&keys)
    }

    /// Look up a value by walking one key per nesting level.
    pub fn get_keys(&self, keys: &[&str]) -> Option<&OptionValue> {
        let (first, rest) = keys.split_first()?;
        let mut current = self.get(first)?;
        for key in rest {
            current = current.as_section()?.get(key)?;
        }
        Some(current)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every leaf value together with the chain of keys leading to it, in
    /// traversal order.
    pub fn leaves(&self) -> Vec<(Vec<&str>, &str)> {
        let mut out = Vec::new();
        collect_leaves(self, &mut Vec::new(), &mut out);
        out
    }
}

fn collect_leaves<'a>(
    options: &'a Options,
    prefix: &mut Vec<&'a str>,
    out: &mut Vec<(Vec<&'a str>, &'a str)>,
) {
    for (key, value) in options.iter() {
        prefix.push(key);
        match value {
            OptionValue::Value(v) => out.push((prefix.clone(), v.as_str())),
            OptionValue::Section(section) => collect_leaves(section, prefix, out),
        }
        prefix.pop();
    }
}

impl<K, V> FromIterator<(K, V)> for Options
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Options::new();
        for (k, v) in iter {
            options.insert(k, v);
        }
        options
    }
}

impl IntoIterator for Options {
    type Item = (String, OptionValue);
    type IntoIter = indexmap::map::IntoIter<String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
