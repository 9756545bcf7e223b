//! Resolved configuration record
//!
//! A `ConfigRecord` maps top-level keys to arbitrary JSON values. Dotted
//! key paths ("exp.sub.dir") address nested records; intermediate records
//! are created on assignment. Insertion order is irrelevant.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key/value record produced by one resolution call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigRecord {
    entries: Map<String, Value>,
}

impl ConfigRecord {
    /// Create a new empty record
    pub fn new() -> Self {
        Self {
            entries: Map::new(),
        }
    }

    /// Get a top-level value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Get a value by dotted key path
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.entries.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Get a string value by dotted key path
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get_path(path).and_then(Value::as_str)
    }

    /// Get a boolean value by dotted key path
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get_path(path).and_then(Value::as_bool)
    }

    /// Whether a top-level key is present, regardless of its value
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Assign a value at a top-level key, overwriting any existing value
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Assign a value at a dotted key path, creating intermediate records as
    /// needed and overwriting any existing value at the final segment.
    ///
    /// Fails with [`ConfigError::EmptyKeyPath`] when the path or any of its
    /// segments is empty, and with [`ConfigError::NotARecord`] when an
    /// intermediate segment holds a non-record value. On failure the record
    /// may be left with freshly created intermediate records; callers are
    /// expected to discard it.
    pub fn set_path(&mut self, path: &str, value: Value) -> Result<(), ConfigError> {
        let segments: Vec<&str> = path.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(ConfigError::EmptyKeyPath {
                path: path.to_string(),
            });
        }

        let (last, intermediate) = match segments.split_last() {
            Some(parts) => parts,
            None => {
                return Err(ConfigError::EmptyKeyPath {
                    path: path.to_string(),
                })
            }
        };
        let mut current = &mut self.entries;
        for segment in intermediate {
            let slot = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            current = match slot {
                Value::Object(map) => map,
                _ => {
                    return Err(ConfigError::NotARecord {
                        path: path.to_string(),
                        segment: segment.to_string(),
                    })
                }
            };
        }

        current.insert(last.to_string(), value);
        Ok(())
    }

    /// Bind `key -> value` only if `key` is wholly absent.
    ///
    /// A key present with `false`, `0`, `""` or `null` counts as present and
    /// is left untouched.
    pub fn set_if_absent(&mut self, key: &str, value: Value) {
        if !self.entries.contains_key(key) {
            self.entries.insert(key.to_string(), value);
        }
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over top-level entries
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

impl From<Map<String, Value>> for ConfigRecord {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}
