use serde_json::{Map, Value};

/// Leaf keys of a translation document, keyed by their dot-joined path.
///
/// Iteration follows document order. A key that itself contains a `.` is
/// indistinguishable from a nested path once flattened; when two leaves
/// collapse onto the same path the later value wins and the first position
/// is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatKeys {
    entries: Map<String, Value>,
}

impl FlatKeys {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Flatten a nested translation document into its leaf paths.
///
/// Objects are containers and are descended into. Every other value,
/// including `null` and arrays, is a leaf.
pub fn flatten(doc: &Map<String, Value>) -> FlatKeys {
    let mut result = FlatKeys::default();
    flatten_into(doc, "", &mut result.entries);
    result
}

fn flatten_into(map: &Map<String, Value>, prefix: &str, out: &mut Map<String, Value>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(child) => flatten_into(child, &path, out),
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}
