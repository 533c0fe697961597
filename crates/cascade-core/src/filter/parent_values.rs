use crate::stmt::Value;

use indexmap::IndexMap;

/// The currently selected value of each parent filter, keyed by filter key.
///
/// Built per request from the query string; values stay raw until a
/// dependency constraint casts them to the constrained column's type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParentValues {
    values: IndexMap<String, Value>,
}

impl ParentValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from raw query-string pairs.
    pub fn from_query<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(key, value)| (key.into(), Value::String(value.into())))
            .collect()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns the parent's value if it counts as a selection.
    ///
    /// Missing and blank values (see [`Value::is_blank`]) return `None`.
    pub fn selected(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|value| !value.is_blank())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Query-string pairs for this map. Null renders as an empty string.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ParentValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
