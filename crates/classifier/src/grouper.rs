use crate::labels::MISC_KEY;
use crate::types::FrameRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

static LEADING_ALPHA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+").expect("static regex is valid"));

/// Result of the automatic pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoGroups {
    /// Groups that met the threshold, keyed and ordered by prefix key
    pub promoted: BTreeMap<String, Vec<FrameRecord>>,

    /// Records of every group below the threshold
    pub unsorted: Vec<FrameRecord>,
}

/// Grouping key: the leading run of ASCII letters, lowercased, or `misc`
#[must_use]
pub fn prefix_key(name: &str) -> String {
    LEADING_ALPHA
        .find(name)
        .map_or_else(|| MISC_KEY.to_string(), |m| m.as_str().to_ascii_lowercase())
}

/// Group leftover records by prefix key, keeping first-seen key order
#[must_use]
pub fn group_by_prefix(records: Vec<FrameRecord>) -> Vec<(String, Vec<FrameRecord>)> {
    let mut groups: Vec<(String, Vec<FrameRecord>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = prefix_key(&record.name);
        match index.get(&key) {
            Some(&slot) => groups[slot].1.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![record]));
            }
        }
    }

    groups
}

/// Promote groups with at least `min_size` records; flatten the rest
#[must_use]
pub fn auto_group(leftover: Vec<FrameRecord>, min_size: usize) -> AutoGroups {
    let mut result = AutoGroups::default();

    for (key, records) in group_by_prefix(leftover) {
        if records.len() >= min_size {
            result.promoted.insert(key, records);
        } else {
            result.unsorted.extend(records);
        }
    }

    log::debug!(
        "automatic pass: {} promoted groups, {} unsorted records",
        result.promoted.len(),
        result.unsorted.len()
    );

    result
}
