pub mod file;
pub mod subsystems;

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use crate::error::Result;
use log::{warn, trace};

pub use self::file::{FileConfig, InputFormat, OutputFormat};
pub use self::subsystems::{AlignerConfig, ProcessorConfig};

pub trait FromIni {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlignableConfig {
    // Input/output locations and formats
    pub files: file::FileConfig,

    // Subsystem configs
    pub aligner: subsystems::AlignerConfig,
    pub processor: subsystems::ProcessorConfig,
}

impl AlignableConfig {
    pub fn validate(&self) -> Result<()> {
        self.files.validate()?;
        self.aligner.validate()?;
        self.processor.validate()?;
        Ok(())
    }

    pub fn from_ini<P: AsRef<Path>>(path: P) -> Result<Self> {
        trace!("Loading configuration from: {:?}", path.as_ref());
        let content = fs::read_to_string(&path)?;
        let config = Self::from_ini_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse INI text on top of the defaults. Unknown keys and invalid values
    /// are reported and skipped; the caller validates the result.
    pub fn from_ini_str(content: &str) -> Result<Self> {
        let mut config = Self::default();
        let mut current_section = String::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current_section = line[1..line.len()-1].trim().to_string();
                trace!("  Line {}: Found section: [{}]", line_num + 1, current_section);
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                // Delegate to appropriate subsystem config
                let handled = match current_section.as_str() {
                    "files" => config.files.from_ini_section(&current_section, key, value),
                    "aligner" => config.aligner.from_ini_section(&current_section, key, value),
                    "processor" => config.processor.from_ini_section(&current_section, key, value),
                    _ => None,
                };

                match handled {
                    Some(Err(e)) => warn!("Error processing config key {}={}: {}", key, value, e),
                    Some(Ok(())) => {},
                    None => warn!("Unrecognized config key: {}={} in section [{}]", key, value, current_section),
                }
            } else {
                warn!("Ignoring malformed config line {}: {}", line_num + 1, line);
            }
        }

        Ok(config)
    }
}
