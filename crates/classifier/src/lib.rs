//! # framedoc classifier
//!
//! Sorts a dump of UI frames into documented YAML categories.
//!
//! ## Architecture
//!
//! ```text
//! Frame dump (Lua table text)
//!     │
//!     ├──> Record extraction (drop diagnostic / incomplete blocks)
//!     │
//!     ├──> Manual pass: first matching rule in table order
//!     │    └─> leftover
//!     │
//!     ├──> Automatic pass: group leftover by leading letters
//!     │    ├─> groups >= min size → named groups (label overrides)
//!     │    └─> everything else   → unsorted
//!     │
//!     └──> Emit
//!          ├─> sort by name, split at the per-file cap
//!          └─> write one YAML document per unit
//! ```
//!
//! ## Example
//!
//! ```rust
//! use framedoc_classifier::{extract_records, Classification, build_plan, MANUAL_RULES};
//!
//! let dump = r#"{
//! ["name"] = "ChatFrame1",
//! ["type"] = "Frame",
//! }"#;
//!
//! let records = extract_records(dump);
//! let classification = Classification::run(records, MANUAL_RULES, 10);
//! let plan = build_plan(classification, MANUAL_RULES, 500);
//! assert_eq!(plan[0].file_name(), "chat.yaml");
//! assert_eq!(plan[0].entries.len(), 1);
//! ```

mod classification;
mod classifier;
mod config;
mod emit;
mod error;
mod extract;
mod grouper;
mod labels;
mod rules;
mod types;
mod writer;

use serde::Serialize;
use std::path::PathBuf;

pub use classification::Classification;
pub use classifier::{classify, match_rule, ManualSplit};
pub use config::{
    GeneratorConfig, AUTO_MIN_GROUP_SIZE, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, MAX_ENTRIES_PER_FILE,
};
pub use emit::{
    auto_description, build_plan, chunk_records, colliding_file_names, emit_group, sort_records,
    UNSORTED_DESCRIPTION, UNSORTED_LABEL,
};
pub use error::{FrameDocError, Result};
pub use extract::{extract_records, extract_with_stats, read_source, ExtractStats, EXCLUSION_MARKER};
pub use grouper::{auto_group, group_by_prefix, prefix_key, AutoGroups};
pub use labels::{resolve_label, MISC_KEY};
pub use rules::{rule_by_name, MANUAL_RULES};
pub use types::{Bucket, CategoryRule, FrameRecord, OutputUnit, Placement, ARTIFACT_EXTENSION};
pub use writer::{escape_key, YamlWriter};

/// Everything a run would write, computed without touching the output directory
#[derive(Debug, Clone)]
pub struct Plan {
    pub stats: ExtractStats,
    pub manual_records: usize,
    pub auto_records: usize,
    pub auto_groups: usize,
    pub units: Vec<OutputUnit>,
}

/// One artifact in a run report
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArtifactSummary {
    pub file_name: String,
    pub category: String,
    pub entries: usize,
    pub part: Option<usize>,
}

impl From<&OutputUnit> for ArtifactSummary {
    fn from(unit: &OutputUnit) -> Self {
        Self {
            file_name: unit.file_name(),
            category: unit.category_label.clone(),
            entries: unit.len(),
            part: unit.part_index,
        }
    }
}

/// Summary of a plan or a completed run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub extract: ExtractStats,
    pub manual_records: usize,
    pub auto_records: usize,
    pub auto_groups: usize,
    pub unsorted_records: usize,
    pub written: bool,
    pub artifacts: Vec<ArtifactSummary>,
}

/// Drives extract → classify → emit → write for one configuration
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator; fails on invalid configuration
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Plan the artifacts for already-loaded dump text
    #[must_use]
    pub fn plan_text(&self, text: &str) -> Plan {
        let (records, stats) = extract_with_stats(text);
        log::debug!(
            "extracted {} records from {} blocks ({} excluded, {} incomplete)",
            stats.records,
            stats.blocks,
            stats.excluded,
            stats.incomplete
        );

        let classification = Classification::run(records, MANUAL_RULES, self.config.min_group_size);
        let manual_records = classification.manual_count();
        let auto_records = classification.auto_count();
        let auto_groups = classification.promoted.len();

        let units = build_plan(
            classification,
            MANUAL_RULES,
            self.config.max_entries_per_file,
        );

        Plan {
            stats,
            manual_records,
            auto_records,
            auto_groups,
            units,
        }
    }

    /// Read the configured input and plan the artifacts
    pub fn plan(&self) -> Result<Plan> {
        let text = read_source(&self.config.input)?;
        Ok(self.plan_text(&text))
    }

    /// Writer configured for this run
    #[must_use]
    pub fn writer(&self) -> YamlWriter {
        YamlWriter::new(
            &self.config.output_dir,
            self.config.input.display().to_string(),
            self.config.source_name(),
        )
    }

    /// Full run. Input is read completely before the first artifact is written.
    pub fn run(&self) -> Result<RunReport> {
        let plan = self.plan()?;
        self.writer().write_all(&plan.units)?;
        let report = self.report(&plan, true);
        log::info!(
            "wrote {} artifacts to {} ({} manual, {} auto in {} groups, {} unsorted)",
            report.artifacts.len(),
            report.output_dir.display(),
            report.manual_records,
            report.auto_records,
            report.auto_groups,
            report.unsorted_records
        );
        Ok(report)
    }

    /// Summarise a plan
    #[must_use]
    pub fn report(&self, plan: &Plan, written: bool) -> RunReport {
        let unsorted_records = plan
            .units
            .last()
            .filter(|unit| unit.category_label == UNSORTED_LABEL)
            .map_or(0, OutputUnit::len);

        RunReport {
            input: self.config.input.clone(),
            output_dir: self.config.output_dir.clone(),
            extract: plan.stats,
            manual_records: plan.manual_records,
            auto_records: plan.auto_records,
            auto_groups: plan.auto_groups,
            unsorted_records,
            written,
            artifacts: plan.units.iter().map(ArtifactSummary::from).collect(),
        }
    }
}
