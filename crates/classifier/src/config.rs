use crate::error::{FrameDocError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the frame dump
pub const DEFAULT_INPUT: &str = "DOCU/NOD_Konzept_Funktionsliste.txt";

/// Default directory receiving the YAML artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "docu/ui_frames";

/// Minimum leftover group size promoted to its own artifact
pub const AUTO_MIN_GROUP_SIZE: usize = 10;

/// Maximum records per artifact before a group is split into parts
pub const MAX_ENTRIES_PER_FILE: usize = 500;

/// Configuration for a generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Frame dump to read
    pub input: PathBuf,

    /// Directory receiving the YAML artifacts
    pub output_dir: PathBuf,

    /// Leftover groups at least this large become named artifacts
    pub min_group_size: usize,

    /// Hard cap on records per artifact (the unsorted artifact is exempt)
    pub max_entries_per_file: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            min_group_size: AUTO_MIN_GROUP_SIZE,
            max_entries_per_file: MAX_ENTRIES_PER_FILE,
        }
    }
}

impl GeneratorConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)
            .map_err(|err| FrameDocError::invalid_config(format!("TOML parse error: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            FrameDocError::invalid_config(format!("cannot read {}: {err}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_group_size == 0 {
            return Err(FrameDocError::invalid_config("min_group_size must be > 0"));
        }

        if self.max_entries_per_file == 0 {
            return Err(FrameDocError::invalid_config("max_entries_per_file must be > 0"));
        }

        Ok(())
    }

    /// File name of the input, written into every record's `source` field
    #[must_use]
    pub fn source_name(&self) -> String {
        self.input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}
