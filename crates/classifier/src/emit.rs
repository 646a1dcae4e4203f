use crate::classification::Classification;
use crate::labels::resolve_label;
use crate::types::{CategoryRule, FrameRecord, OutputUnit};
use std::collections::HashMap;

/// Label of the catch-all artifact
pub const UNSORTED_LABEL: &str = "unsorted";

/// Description of the catch-all artifact
pub const UNSORTED_DESCRIPTION: &str = "Entries without a dominant prefix grouping (<=500).";

/// Header description of a promoted automatic group
#[must_use]
pub fn auto_description(key: &str) -> String {
    format!("Auto-generated group for prefix \"{key}\".")
}

/// Stable sort by full name, case-sensitive
pub fn sort_records(records: &mut [FrameRecord]) {
    records.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Split into contiguous chunks of at most `max_size` records
#[must_use]
pub fn chunk_records(records: Vec<FrameRecord>, max_size: usize) -> Vec<Vec<FrameRecord>> {
    let max_size = max_size.max(1);
    let mut chunks = Vec::with_capacity(records.len().div_ceil(max_size));
    let mut iter = records.into_iter().peekable();

    while iter.peek().is_some() {
        chunks.push(iter.by_ref().take(max_size).collect());
    }

    chunks
}

/// Sort a group and emit its units; numbered parts only when it needs more than one
#[must_use]
pub fn emit_group(
    label: &str,
    description: &str,
    mut records: Vec<FrameRecord>,
    max_entries: usize,
) -> Vec<OutputUnit> {
    sort_records(&mut records);
    let mut chunks = chunk_records(records, max_entries);

    if chunks.len() <= 1 {
        return vec![OutputUnit {
            category_label: label.to_string(),
            description: description.to_string(),
            entries: chunks.pop().unwrap_or_default(),
            part_index: None,
        }];
    }

    chunks
        .into_iter()
        .enumerate()
        .map(|(idx, entries)| OutputUnit {
            category_label: label.to_string(),
            description: description.to_string(),
            entries,
            part_index: Some(idx + 1),
        })
        .collect()
}

/// Order all units: manual categories, promoted groups by key, then `unsorted`
#[must_use]
pub fn build_plan(
    classification: Classification,
    rules: &[CategoryRule],
    max_entries: usize,
) -> Vec<OutputUnit> {
    let Classification {
        buckets,
        promoted,
        mut unsorted,
    } = classification;
    let mut plan = Vec::new();

    for bucket in buckets {
        let description = rules
            .iter()
            .find(|rule| rule.name == bucket.category)
            .map_or("", |rule| rule.description);
        plan.extend(emit_group(
            bucket.category,
            description,
            bucket.records,
            max_entries,
        ));
    }

    for (key, records) in promoted {
        let label = resolve_label(&key);
        plan.extend(emit_group(
            &label,
            &auto_description(&key),
            records,
            max_entries,
        ));
    }

    if unsorted.len() > max_entries {
        log::warn!(
            "{UNSORTED_LABEL} holds {} records, above the per-file cap of {max_entries}; writing it unsplit",
            unsorted.len()
        );
    }
    sort_records(&mut unsorted);
    plan.push(OutputUnit {
        category_label: UNSORTED_LABEL.to_string(),
        description: UNSORTED_DESCRIPTION.to_string(),
        entries: unsorted,
        part_index: None,
    });

    warn_on_collisions(&plan);
    plan
}

/// Artifact names claimed by more than one unit (later units overwrite earlier ones)
#[must_use]
pub fn colliding_file_names(plan: &[OutputUnit]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for unit in plan {
        *seen.entry(unit.file_name()).or_default() += 1;
    }
    let mut dupes: Vec<String> = seen
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect();
    dupes.sort();
    dupes
}

fn warn_on_collisions(plan: &[OutputUnit]) {
    for name in colliding_file_names(plan) {
        log::warn!("artifact {name} is produced by more than one group; the last one wins");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::MANUAL_RULES;
    use pretty_assertions::assert_eq;

    fn records(prefix: &str, count: usize) -> Vec<FrameRecord> {
        (0..count)
            .map(|i| FrameRecord::new(format!("{prefix}{i:04}"), "Frame"))
            .collect()
    }

    #[test]
    fn sort_is_case_sensitive_and_stable() {
        let mut items = vec![
            FrameRecord::new("b", "1"),
            FrameRecord::new("B", "2"),
            FrameRecord::new("a", "3"),
            FrameRecord::new("B", "4"),
        ];
        sort_records(&mut items);
        let got: Vec<_> = items
            .iter()
            .map(|r| (r.name.as_str(), r.frame_type.as_str()))
            .collect();
        assert_eq!(got, vec![("B", "2"), ("B", "4"), ("a", "3"), ("b", "1")]);
    }

    #[test]
    fn chunking_sizes() {
        assert!(chunk_records(Vec::new(), 500).is_empty());
        let sizes: Vec<_> = chunk_records(records("X", 1001), 500)
            .iter()
            .map(Vec::len)
            .collect();
        assert_eq!(sizes, vec![500, 500, 1]);
    }

    #[test]
    fn exactly_cap_is_a_single_unsuffixed_unit() {
        let units = emit_group("chat", "d", records("Chat", 500), 500);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].part_index, None);
        assert_eq!(units[0].file_name(), "chat.yaml");
    }

    #[test]
    fn one_over_cap_splits_into_numbered_parts() {
        let units = emit_group("chat", "d", records("Chat", 501), 500);
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].len(), 500);
        assert_eq!(units[1].len(), 1);
        assert_eq!(units[0].file_name(), "chat_1.yaml");
        assert_eq!(units[1].file_name(), "chat_2.yaml");
        assert!(units[0].entries.last().unwrap().name < units[1].entries[0].name);
    }

    #[test]
    fn empty_group_still_emits_placeholder() {
        let units = emit_group("mail", "Mail", Vec::new(), 500);
        assert_eq!(units.len(), 1);
        assert!(units[0].is_empty());
        assert_eq!(units[0].part_index, None);
    }

    #[test]
    fn plan_order_is_manual_then_auto_then_unsorted() {
        let mut input = vec![FrameRecord::new("ZephyrThing", "Frame")];
        input.extend(records("Zebra", 10));
        input.extend(records("StaticPopup", 10));
        input.push(FrameRecord::new("ChatFrameEditBox", "EditBox"));
        input.push(FrameRecord::new("ChatFrame", "Frame"));

        let classification = Classification::run(input, MANUAL_RULES, 10);
        let plan = build_plan(classification, MANUAL_RULES, 500);

        let names: Vec<_> = plan.iter().map(OutputUnit::file_name).collect();
        assert_eq!(names.len(), MANUAL_RULES.len() + 3);
        assert_eq!(names[0], "chat.yaml");
        assert_eq!(names[MANUAL_RULES.len()], "static_popup_dialogs.yaml");
        assert_eq!(names[MANUAL_RULES.len() + 1], "zebra.yaml");
        assert_eq!(names[MANUAL_RULES.len() + 2], "unsorted.yaml");

        let chat: Vec<_> = plan[0].entries.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(chat, vec!["ChatFrame", "ChatFrameEditBox"]);

        let auto = &plan[MANUAL_RULES.len()];
        assert_eq!(
            auto.description,
            "Auto-generated group for prefix \"staticpopup\"."
        );

        let unsorted = plan.last().unwrap();
        assert_eq!(
            unsorted.entries,
            vec![FrameRecord::new("ZephyrThing", "Frame")]
        );
        assert_eq!(unsorted.description, UNSORTED_DESCRIPTION);
    }

    #[test]
    fn unsorted_is_never_split() {
        let leftover: Vec<_> = (0..600)
            .map(|i| FrameRecord::new(format!("Q{i}x{}", "y".repeat(i % 7)), "Frame"))
            .collect();
        let classification = Classification {
            buckets: Vec::new(),
            promoted: Default::default(),
            unsorted: leftover,
        };
        let plan = build_plan(classification, &[], 500);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].len(), 600);
        assert_eq!(plan[0].part_index, None);
    }

    #[test]
    fn detects_file_name_collisions() {
        let unit = |label: &str| OutputUnit {
            category_label: label.to_string(),
            description: String::new(),
            entries: Vec::new(),
            part_index: None,
        };
        let plan = vec![unit("chat"), unit("map"), unit("chat")];
        assert_eq!(colliding_file_names(&plan), vec!["chat.yaml".to_string()]);
    }
}
