//! Category allow-list.
//!
//! Maps category identifiers to human-readable labels. Built once from
//! configuration and only consulted for membership afterwards.

use std::collections::BTreeMap;

/// Immutable mapping of eligible category ids to labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    entries: BTreeMap<String, String>,
}

impl AllowList {
    /// Build from `(id, label)` pairs. Later duplicates replace earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(id, label)| (id.into(), label.into()))
                .collect(),
        }
    }

    /// Whether the id is eligible.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Label configured for the id.
    pub fn label(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Number of eligible ids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is eligible.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(id, label)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
