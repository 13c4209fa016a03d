//! Configuration file parsing and validation

use crate::codegen::GenerateOptions;
use crate::logging::is_known_level;
use crate::output::DEFAULT_OUTPUT_DIR;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file read from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "doctypegen.toml";

/// doctypegen.toml structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Directory models are written to
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Emit descriptions as doc comments
    #[serde(default = "default_doc_comments")]
    pub doc_comments: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_doc_comments() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            doc_comments: default_doc_comments(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse config from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Resolve the config for a run
    ///
    /// An explicit path must exist. Without one, `doctypegen.toml` in the
    /// working directory is used if present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<()> {
        if self.output.dir.as_os_str().is_empty() {
            anyhow::bail!("Output directory cannot be empty");
        }

        if !is_known_level(&self.logging.level) {
            anyhow::bail!(
                "Unknown log level '{}' (expected trace, debug, info, warn, error or off)",
                self.logging.level
            );
        }

        Ok(())
    }

    /// Generator options derived from the config
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            doc_comments: self.output.doc_comments,
        }
    }
}
