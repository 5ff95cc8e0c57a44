//! Token-tree helpers: deep merge and path lookup.

use serde_json::Value;

use crate::types::TokenTree;

// ---------------------------------------------------------------------------
// Merge
// ---------------------------------------------------------------------------

/// Deep-merge `overrides` on top of `base` and return the merged tree.
///
/// When both sides hold a JSON object at the same key the objects are
/// merged recursively. Every other override value (string, number, bool,
/// array, `null`) replaces the base value outright. Keys only present in
/// `base` are kept; keys only present in `overrides` are added.
pub fn deep_merge(base: &TokenTree, overrides: &TokenTree) -> TokenTree {
    let mut merged = base.clone();
    for (key, override_value) in overrides {
        let next = match (merged.get(key), override_value) {
            (Some(Value::Object(base_map)), Value::Object(override_map)) => {
                Value::Object(deep_merge(base_map, override_map))
            }
            _ => override_value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    merged
}

// ---------------------------------------------------------------------------
// Inspection
// ---------------------------------------------------------------------------

/// Top-level category names of a tree, in insertion order.
pub fn category_names(tree: &TokenTree) -> Vec<String> {
    tree.keys().cloned().collect()
}

/// Resolve a dotted path such as `"color.palette.primary"`.
///
/// Returns `None` if any segment is missing or traverses a non-object.
pub fn lookup<'a>(tree: &'a TokenTree, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = tree.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Like [`lookup`], but only returns string leaves.
pub fn lookup_str<'a>(tree: &'a TokenTree, path: &str) -> Option<&'a str> {
    lookup(tree, path).and_then(Value::as_str)
}

/// Like [`lookup`], but only returns object nodes.
pub fn lookup_object<'a>(tree: &'a TokenTree, path: &str) -> Option<&'a TokenTree> {
    lookup(tree, path).and_then(Value::as_object)
}

/// Collect every string leaf beneath `tree` together with its dotted path.
///
/// `prefix` is prepended to each path (pass `""` for none).
pub fn string_leaves<'a>(tree: &'a TokenTree, prefix: &str) -> Vec<(String, &'a str)> {
    let mut out = Vec::new();
    collect_string_leaves(tree, prefix, &mut out);
    out
}

fn collect_string_leaves<'a>(tree: &'a TokenTree, prefix: &str, out: &mut Vec<(String, &'a str)>) {
    for (key, value) in tree {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::String(s) => out.push((path, s.as_str())),
            Value::Object(child) => collect_string_leaves(child, &path, out),
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
