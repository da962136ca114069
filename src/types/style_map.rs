use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A resolved style mapping from property name to value.
///
/// Produced fresh on every style read and never mutated afterwards; a pure
/// value type with no identity. Equality is key/value set equality, so the
/// order in which properties were observed never matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(HashMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// The resolved value for a property, if present.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<HashMap<String, String>> for StyleMap {
    fn from(properties: HashMap<String, String>) -> Self {
        Self(properties)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
