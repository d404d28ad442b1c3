use std::collections::HashMap;

/// One aggregated histogram entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub count: i64,
}

/// Orders aggregated entries by count ascending, then by raw byte order of
/// the key. Keys are unique after aggregation, so this is a strict total
/// order and the result is deterministic.
pub fn rank(counts: HashMap<String, i64>) -> Vec<Entry> {
    let mut entries: Vec<Entry> = counts
        .into_iter()
        .map(|(key, count)| Entry { key, count })
        .collect();
    entries.sort_by(|a, b| a.count.cmp(&b.count).then_with(|| a.key.cmp(&b.key)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_count_then_key() {
        let counts = HashMap::from([
            ("b".to_string(), 2),
            ("a".to_string(), 2),
            ("z".to_string(), -1),
            ("m".to_string(), 10),
        ]);
        let keys: Vec<String> = rank(counts).into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["z", "a", "b", "m"]);
    }

    #[test]
    fn key_ties_break_on_raw_byte_order() {
        let counts = HashMap::from([
            ("What".to_string(), 1),
            ("...".to_string(), 1),
            ("a".to_string(), 1),
        ]);
        let keys: Vec<String> = rank(counts).into_iter().map(|e| e.key).collect();
        // '.' < 'W' < 'a' in byte order.
        assert_eq!(keys, vec!["...", "What", "a"]);
    }
}
