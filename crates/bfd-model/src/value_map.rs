use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

/// Resolved values for one record, keyed by field identifier.
///
/// Iteration follows first-insertion order, which is the configuration row
/// order. Inserting an existing key replaces the value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValueMap<K: Hash + Eq> {
    values: IndexMap<K, String>,
}

impl<K: Hash + Eq> Default for FieldValueMap<K> {
    fn default() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq> FieldValueMap<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one for the same field.
    pub fn insert(&mut self, field: K, value: impl Into<String>) -> Option<String> {
        self.values.insert(field, value.into())
    }

    pub fn get(&self, field: &K) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &K) -> bool {
        self.values.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &str)> {
        self.values.iter().map(|(field, value)| (field, value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.values.keys()
    }

    pub fn into_inner(self) -> IndexMap<K, String> {
        self.values
    }
}

impl<K: Hash + Eq + fmt::Display> Serialize for FieldValueMap<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.values
                .iter()
                .map(|(field, value)| (field.to_string(), value)),
        )
    }
}
