//! Record extraction from the Lua table dump.
//!
//! The dump is a flat sequence of blocks:
//!
//! ```text
//! {
//! ["name"] = "ChatFrame1",
//! ["type"] = "Frame",
//! },
//! {
//! ["name"] = "Minimap",
//! ...
//! }
//! ```

use crate::error::{FrameDocError, Result};
use crate::types::FrameRecord;
use std::path::Path;

/// Blocks carrying this field are diagnostic dumps, not frames
pub const EXCLUSION_MARKER: &str = "frameDumpText";

const ENTRY_SEPARATOR: &str = "},\n{";
const NAME_FIELD: &str = "[\"name\"]";
const TYPE_FIELD: &str = "[\"type\"]";

/// Counters describing what extraction kept and dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ExtractStats {
    pub blocks: usize,
    pub excluded: usize,
    pub incomplete: usize,
    pub records: usize,
}

/// Read the dump as a whole buffer. Invalid UTF-8 bytes are dropped, never fatal.
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| FrameDocError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    Ok(text)
}

/// Extract records in source order
#[must_use]
pub fn extract_records(text: &str) -> Vec<FrameRecord> {
    extract_with_stats(text).0
}

/// Extract records in source order, reporting what was dropped
#[must_use]
pub fn extract_with_stats(text: &str) -> (Vec<FrameRecord>, ExtractStats) {
    let normalized = text.replace("\r\n", "\n");
    let mut stats = ExtractStats::default();
    let mut records = Vec::new();

    for raw in split_entries(&normalized) {
        stats.blocks += 1;
        if raw.contains(EXCLUSION_MARKER) {
            stats.excluded += 1;
            continue;
        }
        match parse_entry(raw) {
            Some(record) => records.push(record),
            None => stats.incomplete += 1,
        }
    }

    stats.records = records.len();
    (records, stats)
}

/// Split the dump into raw block bodies
fn split_entries(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let trimmed = trimmed.strip_prefix('{').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('}').unwrap_or(trimmed);
    trimmed.split(ENTRY_SEPARATOR).collect()
}

/// Build a record from one block; `None` when name or type is missing
fn parse_entry(raw: &str) -> Option<FrameRecord> {
    let mut name: Option<&str> = None;
    let mut frame_type: Option<&str> = None;

    for line in raw.lines() {
        let line = line.trim();
        if name.is_none() && line.starts_with(NAME_FIELD) {
            name = field_value(line);
        } else if frame_type.is_none() && line.starts_with(TYPE_FIELD) {
            frame_type = field_value(line);
        }
    }

    Some(FrameRecord::new(name?, frame_type?))
}

/// Value of a `["key"] = "value",` line, or `None` for malformed lines
fn field_value(line: &str) -> Option<&str> {
    let (_, value) = line.split_once('=')?;
    let value = value.trim().trim_matches(',').trim_matches('"');
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DUMP: &str = r#"{
["name"] = "ChatFrame1",
["type"] = "Frame",
["shown"] = true,
},
{
["name"] = "DebugDump",
["frameDumpText"] = "...",
["type"] = "Frame",
},
{
["name"] = "NoTypeFrame",
},
{
["type"] = "Button",
["name"] = "MinimapZoomIn",
}"#;

    #[test]
    fn extracts_complete_blocks_in_order() {
        let (records, stats) = extract_with_stats(DUMP);
        assert_eq!(
            records,
            vec![
                FrameRecord::new("ChatFrame1", "Frame"),
                FrameRecord::new("MinimapZoomIn", "Button"),
            ]
        );
        assert_eq!(
            stats,
            ExtractStats {
                blocks: 4,
                excluded: 1,
                incomplete: 1,
                records: 2,
            }
        );
    }

    #[test]
    fn skips_malformed_lines_without_dropping_block() {
        let dump =
            "{\n[\"name\"]\n[\"name\"] = \"Real\",\n[\"type\"] = ,\n[\"type\"] = \"Frame\",\n}";
        assert_eq!(
            extract_records(dump),
            vec![FrameRecord::new("Real", "Frame")]
        );
    }

    #[test]
    fn first_field_value_wins() {
        let dump =
            "{\n[\"name\"] = \"First\",\n[\"name\"] = \"Second\",\n[\"type\"] = \"Frame\",\n}";
        assert_eq!(
            extract_records(dump),
            vec![FrameRecord::new("First", "Frame")]
        );
    }

    #[test]
    fn handles_crlf_and_keeps_duplicates() {
        let dump = "{\r\n[\"name\"] = \"Dup\",\r\n[\"type\"] = \"Frame\",\r\n},\r\n{\r\n[\"name\"] = \"Dup\",\r\n[\"type\"] = \"Frame\",\r\n}";
        assert_eq!(
            extract_records(dump),
            vec![
                FrameRecord::new("Dup", "Frame"),
                FrameRecord::new("Dup", "Frame"),
            ]
        );
    }

    #[test]
    fn value_keeps_inner_equals_and_quotes() {
        assert_eq!(field_value(r#"["name"] = "a=b","#), Some("a=b"));
        assert_eq!(field_value(r#"["name"] = "It's""#), Some("It's"));
        assert_eq!(field_value(r#"["type"] = Frame"#), Some("Frame"));
        assert_eq!(field_value(r#"["type"] = "","#), None);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let (records, stats) = extract_with_stats("  \n ");
        assert!(records.is_empty());
        assert_eq!(stats.blocks, 0);
    }

    #[test]
    fn read_source_reports_missing_file() {
        let err = read_source("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, FrameDocError::ReadInput { .. }));
    }

    #[test]
    fn read_source_drops_invalid_utf8_bytes() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("dump.txt");
        std::fs::write(
            &path,
            b"{\n[\"name\"] = \"Chat\xffFrame\",\n[\"type\"] = \"Frame\",\n}",
        )
        .unwrap();

        let text = read_source(&path).unwrap();
        assert_eq!(
            extract_records(&text),
            vec![FrameRecord::new("ChatFrame", "Frame")]
        );
    }
}
