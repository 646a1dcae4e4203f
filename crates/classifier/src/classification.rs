use crate::classifier::{classify, ManualSplit};
use crate::grouper::{auto_group, AutoGroups};
use crate::types::{Bucket, CategoryRule, FrameRecord, Placement};
use std::collections::BTreeMap;

/// Outcome of both passes over one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// One bucket per manual rule, in table order
    pub buckets: Vec<Bucket>,

    /// Promoted automatic groups, ascending by prefix key
    pub promoted: BTreeMap<String, Vec<FrameRecord>>,

    /// Catch-all records
    pub unsorted: Vec<FrameRecord>,
}

impl Classification {
    /// Run the manual pass, then group whatever it left over
    #[must_use]
    pub fn run(records: Vec<FrameRecord>, rules: &[CategoryRule], min_group_size: usize) -> Self {
        let ManualSplit { buckets, leftover } = classify(records, rules);
        let AutoGroups { promoted, unsorted } = auto_group(leftover, min_group_size);
        Self {
            buckets,
            promoted,
            unsorted,
        }
    }

    /// Every record paired with where it landed
    pub fn placements(&self) -> impl Iterator<Item = (Placement, &FrameRecord)> {
        let manual = self.buckets.iter().enumerate().flat_map(|(idx, bucket)| {
            bucket
                .records
                .iter()
                .map(move |record| (Placement::Category(idx), record))
        });
        let promoted = self.promoted.iter().flat_map(|(key, records)| {
            records
                .iter()
                .map(move |record| (Placement::AutoGroup(key.clone()), record))
        });
        let unsorted = self
            .unsorted
            .iter()
            .map(|record| (Placement::Unsorted, record));

        manual.chain(promoted).chain(unsorted)
    }

    /// Total number of records across all outcomes
    #[must_use]
    pub fn total(&self) -> usize {
        self.manual_count() + self.auto_count() + self.unsorted.len()
    }

    #[must_use]
    pub fn manual_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.records.len()).sum()
    }

    #[must_use]
    pub fn auto_count(&self) -> usize {
        self.promoted.values().map(Vec::len).sum()
    }
}
