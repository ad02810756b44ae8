//! The key-value set driving one substitution pass.

use std::collections::BTreeMap;

/// String-keyed substitution variables, keys unique, order irrelevant.
///
/// Assembled fresh per invocation by the installer layer and consumed by a
/// single [`translate`](crate::domain::translate) pass; never persisted.
#[derive(Debug, Clone, Default)]
pub struct VariableMap {
    entries: BTreeMap<String, String>,
}

impl VariableMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable, replacing any previous value for the same key.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up the value for a variable name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check whether a variable name is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
