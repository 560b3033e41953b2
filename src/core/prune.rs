use serde_json::{Map, Value};

/// Remove each dot-joined key path from the document.
///
/// Paths whose intermediate segments are missing or are not objects are
/// skipped, so a key listed twice is only removed once. Returns the number
/// of entries actually removed.
pub fn prune<S: AsRef<str>>(doc: &mut Map<String, Value>, key_paths: &[S]) -> usize {
    key_paths
        .iter()
        .filter(|key_path| remove_key_path(doc, key_path.as_ref()))
        .count()
}

/// Remove a single key path (e.g. `"Common.submit"`). Returns whether an
/// entry was removed.
pub fn remove_key_path(doc: &mut Map<String, Value>, key_path: &str) -> bool {
    let parts: Vec<&str> = key_path.split('.').collect();
    let Some((last, parents)) = parts.split_last() else {
        return false;
    };

    let mut current = doc;
    for part in parents {
        match current.get_mut(*part) {
            Some(Value::Object(child)) => current = child,
            _ => return false,
        }
    }

    // shift_remove keeps the remaining keys in document order
    current.shift_remove(*last).is_some()
}

/// Recursively remove objects left empty, bottom-up.
///
/// A container whose only children become empty is removed in the same
/// pass. The root map itself is kept even when empty.
pub fn collapse_empty(doc: &mut Map<String, Value>) {
    for child in doc.values_mut() {
        if let Value::Object(map) = child {
            collapse_empty(map);
        }
    }

    doc.retain(|_, v| !matches!(v, Value::Object(m) if m.is_empty()));
}

/// Prune the given key paths, then collapse the empty containers left behind.
pub fn remove_keys<S: AsRef<str>>(doc: &mut Map<String, Value>, key_paths: &[S]) -> usize {
    let removed = prune(doc, key_paths);
    collapse_empty(doc);
    removed
}
