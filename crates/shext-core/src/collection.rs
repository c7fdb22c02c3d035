//! Key/value collection formatting.

use std::fmt::{Display, Write};

/// Joins `key{kv_sep}value` pairs with `item_sep`.
///
/// Pairs are written in the iteration order of `items`, so a `HashMap` gives
/// no particular order while a `BTreeMap` or a `Vec` of pairs is stable.
///
/// `collection_to_string([("a", 1), ("b", 2)], "&", "=") == "a=1&b=2"`
pub fn collection_to_string<I, K, V>(items: I, item_sep: &str, kv_sep: &str) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    let mut out = String::new();
    for (i, (key, value)) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(item_sep);
        }
        // Writing to a String never fails.
        let _ = write!(out, "{}{}{}", key, kv_sep, value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn joins_pairs_in_order() {
        let pairs = vec![("host", "example.com"), ("port", "8080")];
        assert_eq!(
            collection_to_string(pairs, "; ", "="),
            "host=example.com; port=8080"
        );
    }

    #[test]
    fn btree_map_is_sorted() {
        let mut map = BTreeMap::new();
        map.insert("b", 2);
        map.insert("a", 1);
        assert_eq!(collection_to_string(&map, "&", "="), "a=1&b=2");
    }

    #[test]
    fn hash_map_contains_every_pair() {
        let mut map = HashMap::new();
        map.insert("x".to_string(), "1".to_string());
        map.insert("y".to_string(), "2".to_string());
        let s = collection_to_string(&map, ",", ":");
        let mut parts: Vec<&str> = s.split(',').collect();
        parts.sort_unstable();
        assert_eq!(parts, vec!["x:1", "y:2"]);
    }

    #[test]
    fn empty_collection() {
        let empty: Vec<(&str, &str)> = Vec::new();
        assert_eq!(collection_to_string(empty, ",", "="), "");
    }
}
