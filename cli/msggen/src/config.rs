//! `msggen.toml` configuration parsing.
//!
//! Configuration is optional: without a file the built-in defaults apply,
//! and a CLI flag always wins over the file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use msggen_emit::{KNOWN_ENUMS, RESERVED_MESSAGES};

/// Top-level configuration for a msggen run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MsggenConfig {
    /// Generator settings.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// The `[generator]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory to write msg files to.
    #[serde(default = "default_msg_dir", rename = "msg-dir")]
    pub msg_dir: String,
    /// Enum names expected in the source header.
    #[serde(default = "default_known_enums", rename = "known-enums")]
    pub known_enums: Vec<String>,
    /// Message names that must never be generated.
    #[serde(default = "default_reserved")]
    pub reserved: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            msg_dir: default_msg_dir(),
            known_enums: default_known_enums(),
            reserved: default_reserved(),
        }
    }
}

fn default_msg_dir() -> String {
    "msg".to_string()
}

fn default_known_enums() -> Vec<String> {
    KNOWN_ENUMS.iter().map(|s| s.to_string()).collect()
}

fn default_reserved() -> Vec<String> {
    RESERVED_MESSAGES.iter().map(|s| s.to_string()).collect()
}

impl MsggenConfig {
    /// Search upward from `start_dir` for a `msggen.toml` file, parse and
    /// return it. Returns `None` when no file exists anywhere up the tree.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<Self>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join("msggen.toml");
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let config: MsggenConfig = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some(config));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a configuration from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing msggen.toml")
    }

    /// Resolve the msg directory: CLI flag over config over default.
    pub fn resolve_msg_dir(&self, flag: Option<&str>) -> String {
        match flag {
            Some(dir) => dir.to_string(),
            None => self.generator.msg_dir.clone(),
        }
    }
}
