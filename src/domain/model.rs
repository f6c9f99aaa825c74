use serde::{Deserialize, Serialize};
use std::fmt;

/// A single map option value, stringified before it is escaped into the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(value) => write!(f, "{}", value),
            OptionValue::Integer(value) => write!(f, "{}", value),
            OptionValue::Float(value) => write!(f, "{}", value),
            OptionValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Integer(value.into())
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Integer(value.into())
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

/// Map-level options in the order they were supplied.
///
/// Serialization never reorders these; re-inserting a name replaces its value
/// but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapOptions {
    entries: Vec<(String, OptionValue)>,
}

impl MapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + Clone {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MapOptions
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = MapOptions::new();
        for (name, value) in iter {
            options.insert(name, value);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_value_display() {
        assert_eq!(OptionValue::from(false).to_string(), "false");
        assert_eq!(OptionValue::from(10i64).to_string(), "10");
        assert_eq!(OptionValue::from(1.5).to_string(), "1.5");
        assert_eq!(OptionValue::from("Paris").to_string(), "Paris");
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let options = MapOptions::new()
            .with("sensor", false)
            .with("key", "K")
            .with("size", "200x200");
        let names: Vec<&str> = options.names().collect();
        assert_eq!(names, vec!["sensor", "key", "size"]);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let options = MapOptions::new()
            .with("key", "old")
            .with("size", "1x1")
            .with("key", "new");
        assert_eq!(options.len(), 2);
        assert_eq!(options.get("key"), Some(&OptionValue::from("new")));
        assert_eq!(options.names().next(), Some("key"));
    }

    #[test]
    fn test_from_iterator() {
        let options: MapOptions = vec![("key", "K"), ("size", "2x2")].into_iter().collect();
        assert!(options.contains("size"));
        assert!(!options.contains("zoom"));
    }
}
