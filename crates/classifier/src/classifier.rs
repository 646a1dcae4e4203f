use crate::types::{Bucket, CategoryRule, FrameRecord};

/// Result of the manual pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualSplit {
    /// One bucket per rule, in rule table order
    pub buckets: Vec<Bucket>,

    /// Records no rule claimed, in input order
    pub leftover: Vec<FrameRecord>,
}

impl ManualSplit {
    /// Records assigned to the named category
    #[must_use]
    pub fn bucket(&self, category: &str) -> Option<&[FrameRecord]> {
        self.buckets
            .iter()
            .find(|bucket| bucket.category == category)
            .map(|bucket| bucket.records.as_slice())
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.records.len()).sum()
    }
}

/// Index of the first rule in table order matching `name`
#[must_use]
pub fn match_rule(name: &str, rules: &[CategoryRule]) -> Option<usize> {
    rules.iter().position(|rule| rule.matches(name))
}

/// Assign each record to the first matching rule; the rest is leftover
#[must_use]
pub fn classify(records: Vec<FrameRecord>, rules: &[CategoryRule]) -> ManualSplit {
    let mut buckets: Vec<Bucket> = rules
        .iter()
        .map(|rule| Bucket {
            category: rule.name,
            records: Vec::new(),
        })
        .collect();
    let mut leftover = Vec::new();

    for record in records {
        match match_rule(&record.name, rules) {
            Some(idx) => buckets[idx].records.push(record),
            None => leftover.push(record),
        }
    }

    log::debug!(
        "manual pass: {} matched across {} rules, {} leftover",
        buckets.iter().map(|b| b.records.len()).sum::<usize>(),
        rules.len(),
        leftover.len()
    );

    ManualSplit { buckets, leftover }
}
