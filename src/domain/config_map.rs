// SPDX-License-Identifier: Apache-2.0

//! Typed mapping wrapper for parsed configuration and report documents.
//!
//! This module provides the `ConfigMap` type, a thin typed wrapper over a
//! JSON object that gives convenient field access to documents parsed from
//! YAML or JSON files.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A typed key-value mapping parsed from a configuration or report file.
///
/// `ConfigMap` wraps a `serde_json::Map` and provides typed accessors for
/// common value kinds, plus dot-notation lookup into nested mappings. It is
/// the return type of [`read_yaml`](crate::ops::read_yaml) and
/// [`read_json`](crate::ops::read_json), and the input type of
/// [`write_json`](crate::ops::write_json).
///
/// # Examples
///
/// ```
/// use pipekit::domain::config_map::ConfigMap;
///
/// let mut map = ConfigMap::new();
/// map.insert("epochs", 20);
/// map.insert("optimizer", "adam");
/// assert_eq!(map.get_i64("epochs"), Some(20));
/// assert_eq!(map.get_str("optimizer"), Some("adam"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap(Map<String, Value>);

impl ConfigMap {
    /// Creates a new empty mapping.
    pub fn new() -> Self {
        ConfigMap(Map::new())
    }

    /// Inserts a key-value pair, replacing any existing value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the raw value for a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value at a dot-notation path into nested mappings.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipekit::domain::config_map::ConfigMap;
    /// use serde_json::json;
    ///
    /// let map = ConfigMap::from(json!({"model": {"lr": 0.001}}).as_object().unwrap().clone());
    /// assert_eq!(map.get_path("model.lr").and_then(|v| v.as_f64()), Some(0.001));
    /// ```
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut current = self.0.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        Some(current)
    }

    /// Returns the string value for a top-level key, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Returns the integer value for a top-level key, if present and integral.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(Value::as_i64)
    }

    /// Returns the float value for a top-level key, if present and numeric.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// Returns the boolean value for a top-level key, if present and boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Returns the number of top-level keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the mapping has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the top-level keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Returns a reference to the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the wrapper and returns the underlying JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ConfigMap {
    fn from(map: Map<String, Value>) -> Self {
        ConfigMap(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConfigMap {
        let value = json!({
            "name": "cnn-classifier",
            "epochs": 20,
            "learning_rate": 0.001,
            "augment": true,
            "data": {
                "root": "artifacts/data",
                "splits": {"train": 0.8, "val": 0.2}
            }
        });
        ConfigMap::from(value.as_object().unwrap().clone())
    }

    #[test]
    fn test_typed_accessors() {
        let map = sample();
        assert_eq!(map.get_str("name"), Some("cnn-classifier"));
        assert_eq!(map.get_i64("epochs"), Some(20));
        assert_eq!(map.get_f64("learning_rate"), Some(0.001));
        assert_eq!(map.get_bool("augment"), Some(true));
    }

    #[test]
    fn test_accessor_type_mismatch_returns_none() {
        let map = sample();
        assert_eq!(map.get_i64("name"), None);
        assert_eq!(map.get_str("epochs"), None);
        assert_eq!(map.get_bool("learning_rate"), None);
    }

    #[test]
    fn test_get_path_nested() {
        let map = sample();
        assert_eq!(
            map.get_path("data.root").and_then(Value::as_str),
            Some("artifacts/data")
        );
        assert_eq!(
            map.get_path("data.splits.train").and_then(Value::as_f64),
            Some(0.8)
        );
    }

    #[test]
    fn test_get_path_missing() {
        let map = sample();
        assert!(map.get_path("data.missing").is_none());
        assert!(map.get_path("name.not_a_mapping").is_none());
        assert!(map.get_path("absent").is_none());
    }

    #[test]
    fn test_insert_and_len() {
        let mut map = ConfigMap::new();
        assert!(map.is_empty());
        map.insert("accuracy", 0.94);
        map.insert("loss", 0.18);
        assert_eq!(map.len(), 2);
        let keys: Vec<_> = map.keys().cloned().collect();
        assert!(keys.contains(&"accuracy".to_string()));
    }

    #[test]
    fn test_serde_transparent_roundtrip() {
        let map = sample();
        let text = serde_json::to_string(&map).unwrap();
        let back: ConfigMap = serde_json::from_str(&text).unwrap();
        assert_eq!(back, map);
    }
}
