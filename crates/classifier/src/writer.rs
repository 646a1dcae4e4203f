use crate::error::{FrameDocError, Result};
use crate::types::OutputUnit;
use std::path::PathBuf;

/// Renders units as YAML documents and writes them to disk
#[derive(Debug, Clone)]
pub struct YamlWriter {
    output_dir: PathBuf,
    header_source: String,
    source_name: String,
}

impl YamlWriter {
    /// `header_source` goes into the generation banner, `source_name` into every record
    pub fn new(
        output_dir: impl Into<PathBuf>,
        header_source: impl Into<String>,
        source_name: impl Into<String>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            header_source: header_source.into(),
            source_name: source_name.into(),
        }
    }

    /// Target path of a unit
    #[must_use]
    pub fn path_for(&self, unit: &OutputUnit) -> PathBuf {
        self.output_dir.join(unit.file_name())
    }

    /// Document text for a unit
    #[must_use]
    pub fn render(&self, unit: &OutputUnit) -> String {
        let mut lines: Vec<String> = vec![
            format!("# Auto-generated from {}", self.header_source),
            format!("# Category: {}", unit.category_label),
            format!("# Description: {}", unit.description),
            String::new(),
        ];

        for record in &unit.entries {
            lines.push(format!("'{}':", escape_key(&record.name)));
            lines.push(format!("  type: {}", record.frame_type));
            lines.push("  description: ''".to_string());
            lines.push(format!("  source: {}", self.source_name));
        }
        lines.push(String::new());

        lines.join("\n")
    }

    /// Write one unit, creating the output directory first
    pub fn write_unit(&self, unit: &OutputUnit) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| FrameDocError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self.path_for(unit);
        std::fs::write(&path, self.render(unit)).map_err(|source| {
            FrameDocError::WriteArtifact {
                path: path.clone(),
                source,
            }
        })?;
        log::debug!("wrote {} ({} entries)", path.display(), unit.len());
        Ok(path)
    }

    /// Write units in order; stops at the first failure, earlier files stay on disk
    pub fn write_all(&self, units: &[OutputUnit]) -> Result<Vec<PathBuf>> {
        units.iter().map(|unit| self.write_unit(unit)).collect()
    }
}

/// Single-quoted YAML scalar body: quotes are doubled
#[must_use]
pub fn escape_key(name: &str) -> String {
    name.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FrameRecord;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tempfile::tempdir;

    fn unit(entries: Vec<FrameRecord>) -> OutputUnit {
        OutputUnit {
            category_label: "chat".to_string(),
            description: "Chat panels.".to_string(),
            entries,
            part_index: None,
        }
    }

    fn writer(dir: &Path) -> YamlWriter {
        YamlWriter::new(dir, "DOCU/dump.txt", "dump.txt")
    }

    #[test]
    fn renders_header_and_record_blocks() {
        let text = writer(Path::new("out")).render(&unit(vec![
            FrameRecord::new("ChatFrame", "Frame"),
            FrameRecord::new("Bob's Frame", "Button"),
        ]));

        let expected = "\
# Auto-generated from DOCU/dump.txt
# Category: chat
# Description: Chat panels.

'ChatFrame':
  type: Frame
  description: ''
  source: dump.txt
'Bob''s Frame':
  type: Button
  description: ''
  source: dump.txt
";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_unit_is_header_only() {
        let text = writer(Path::new("out")).render(&unit(Vec::new()));
        assert_eq!(
            text,
            "# Auto-generated from DOCU/dump.txt\n# Category: chat\n# Description: Chat panels.\n\n"
        );
    }

    #[test]
    fn writes_into_nested_missing_directory() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("docu/ui_frames");
        let mut second = unit(vec![FrameRecord::new("ChatFrame", "Frame")]);
        second.part_index = Some(2);

        let paths = writer(&out)
            .write_all(&[unit(Vec::new()), second])
            .unwrap();

        assert_eq!(paths, vec![out.join("chat.yaml"), out.join("chat_2.yaml")]);
        let written = std::fs::read_to_string(out.join("chat_2.yaml")).unwrap();
        assert!(written.contains("'ChatFrame':\n  type: Frame\n"));
    }

    #[test]
    fn unwritable_directory_is_an_error() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let err = writer(&blocker.join("sub"))
            .write_unit(&unit(Vec::new()))
            .unwrap_err();
        assert!(matches!(err, FrameDocError::CreateDir { .. }));
        assert_eq!(err.path(), Some(blocker.join("sub").as_path()));
    }
}
