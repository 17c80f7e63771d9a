//! Insertion-ordered attribute dictionary and deep merge.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Value;

/// An ordered map of named values.
///
/// Keys keep the position of their first insertion; replacing a value does
/// not move its key. Node attributes and configuration layers both use this
/// type, so serialized output is stable and diffable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dict {
    entries: Vec<(String, Value)>,
}

impl Dict {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert a value, returning the previous value for the key if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Remove a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dict::new();
        for (k, v) in iter {
            dict.insert(k, v);
        }
        dict
    }
}

impl IntoIterator for Dict {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Dict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Dict {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DictVisitor;

        impl<'de> Visitor<'de> for DictVisitor {
            type Value = Dict;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of named values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Dict, A::Error> {
                let mut dict = Dict::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    dict.insert(key, value);
                }
                Ok(dict)
            }
        }

        deserializer.deserialize_map(DictVisitor)
    }
}

/// Deep-merge `overlays` onto `base`, left to right.
///
/// Keys holding a dictionary on both sides merge recursively. Any other
/// overlay value replaces the base value outright; arrays are not
/// concatenated. Keys only present in an overlay are appended.
///
/// # Examples
///
/// ```
/// use unveil::model::{Dict, merge};
///
/// let base = Dict::new()
///     .with("title", "Intro")
///     .with("page", Dict::new().with("width", 16).with("height", 9));
/// let user = Dict::new().with("page", Dict::new().with("height", 10));
///
/// let merged = merge(&base, [&user]);
/// let page = merged.get("page").and_then(|v| v.as_dict()).unwrap();
/// assert_eq!(page.get("width").and_then(|v| v.as_int()), Some(16));
/// assert_eq!(page.get("height").and_then(|v| v.as_int()), Some(10));
/// ```
pub fn merge<'a>(base: &Dict, overlays: impl IntoIterator<Item = &'a Dict>) -> Dict {
    let mut acc = base.clone();
    for overlay in overlays {
        merge_into(&mut acc, overlay);
    }
    acc
}

fn merge_into(acc: &mut Dict, overlay: &Dict) {
    for (key, value) in overlay.iter() {
        let Some(pos) = acc.entries.iter().position(|(k, _)| k == key) else {
            acc.entries.push((key.to_string(), value.clone()));
            continue;
        };
        match (&mut acc.entries[pos].1, value) {
            (Value::Dict(existing), Value::Dict(incoming)) => merge_into(existing, incoming),
            (slot, _) => *slot = value.clone(),
        }
    }
}
