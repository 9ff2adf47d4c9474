//! Optional post-pass keyed on the canonical word.

use std::collections::HashMap;

use crate::types::{DedupePolicy, WordEntry};

/// Collapse duplicate words according to `policy`. Returns the kept entries,
/// in first-occurrence order, and how many were removed.
pub fn dedupe(entries: Vec<WordEntry>, policy: DedupePolicy) -> (Vec<WordEntry>, usize) {
    if policy == DedupePolicy::None {
        return (entries, 0);
    }

    let mut kept: Vec<WordEntry> = Vec::with_capacity(entries.len());
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut removed = 0;

    for entry in entries {
        match index.get(&entry.word) {
            None => {
                index.insert(entry.word.clone(), kept.len());
                kept.push(entry);
            }
            Some(&slot) => {
                removed += 1;
                if policy == DedupePolicy::KeepHighest && entry.level > kept[slot].level {
                    kept[slot] = entry;
                }
            }
        }
    }

    if removed > 0 {
        tracing::info!(removed, %policy, "removed duplicate words");
    }
    (kept, removed)
}
