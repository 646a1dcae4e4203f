use serde::{Deserialize, Serialize};

/// Extension of every emitted artifact
pub const ARTIFACT_EXTENSION: &str = "yaml";

/// One UI frame taken from the dump
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameRecord {
    /// Global frame name
    pub name: String,

    /// Widget type (`Frame`, `Button`, `EditBox`, ...)
    #[serde(rename = "type")]
    pub frame_type: String,
}

impl FrameRecord {
    /// Create a new record
    pub fn new(name: impl Into<String>, frame_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frame_type: frame_type.into(),
        }
    }
}

/// A hand-authored category: records whose name starts with any pattern belong here
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CategoryRule {
    /// Unique category name, also the artifact label
    pub name: &'static str,

    /// Case-sensitive name prefixes
    pub patterns: &'static [&'static str],

    /// Human readable description written into the artifact header
    pub description: &'static str,
}

impl CategoryRule {
    /// Check whether `name` starts with any of this rule's patterns
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|pattern| name.starts_with(pattern))
    }
}

/// Records claimed by one manual rule
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Bucket {
    pub category: &'static str,
    pub records: Vec<FrameRecord>,
}

/// Where a single record ended up
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Claimed by the manual rule at this table index
    Category(usize),
    /// Part of a promoted automatic prefix group
    AutoGroup(String),
    /// Neither; lands in the catch-all artifact
    Unsorted,
}

/// One artifact worth of records
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutputUnit {
    pub category_label: String,
    pub description: String,
    pub entries: Vec<FrameRecord>,

    /// 1-based part number, present only when the group was split
    pub part_index: Option<usize>,
}

impl OutputUnit {
    /// Artifact file name: `{label}.yaml` or `{label}_{part}.yaml`
    #[must_use]
    pub fn file_name(&self) -> String {
        match self.part_index {
            Some(part) => format!("{}_{part}.{ARTIFACT_EXTENSION}", self.category_label),
            None => format!("{}.{ARTIFACT_EXTENSION}", self.category_label),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_matches_any_prefix() {
        let rule = CategoryRule {
            name: "mail",
            patterns: &["Mail", "Inbox"],
            description: "Mail",
        };
        assert!(rule.matches("MailFrame"));
        assert!(rule.matches("InboxPrevPageButton"));
        assert!(!rule.matches("mailFrame"));
        assert!(!rule.matches("OpenMailFrame"));
    }

    #[test]
    fn test_file_name_with_and_without_part() {
        let mut unit = OutputUnit {
            category_label: "chat".to_string(),
            description: String::new(),
            entries: Vec::new(),
            part_index: None,
        };
        assert_eq!(unit.file_name(), "chat.yaml");

        unit.part_index = Some(2);
        assert_eq!(unit.file_name(), "chat_2.yaml");
    }

    #[test]
    fn test_record_serializes_type_field() {
        let record = FrameRecord::new("ChatFrame1", "Frame");
        let value = toml::Value::try_from(&record).unwrap();
        assert_eq!(value["type"].as_str(), Some("Frame"));
        assert_eq!(value["name"].as_str(), Some("ChatFrame1"));
    }
}
