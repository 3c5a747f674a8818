// src/config/subsystems/processor.rs

use serde::{Serialize, Deserialize};
use std::path::PathBuf;
use log::LevelFilter;
use crate::error::{Error, Result};
use crate::config::FromIni;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    // Score source rows on the rayon pool
    pub parallel_scoring: bool,
    // 0 = rayon's global pool
    pub thread_count: usize,

    // Logging
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            parallel_scoring: true,
            thread_count: 0,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

fn level_from_str(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        "none" => Some(LevelFilter::Off),
        _ => None,
    }
}

impl FromIni for ProcessorConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "processor" {
            return None;
        }

        match key {
            "parallel_scoring" => {
                match value.parse() {
                    Ok(flag) => {
                        self.parallel_scoring = flag;
                        Some(Ok(()))
                    },
                    Err(_) => Some(Err(Error::Config(
                        format!("Invalid parallel_scoring value (must be true/false): {}", value)
                    ))),
                }
            },
            "thread_count" => {
                match value.parse() {
                    Ok(count) => {
                        self.thread_count = count;
                        Some(Ok(()))
                    },
                    Err(_) => Some(Err(Error::Config(
                        format!("Invalid thread_count: {}", value)
                    ))),
                }
            },
            "log_level" => {
                let level_str = value.trim().to_lowercase();
                Some(match level_from_str(&level_str) {
                    Some(_) => {
                        self.log_level = level_str;
                        Ok(())
                    },
                    None => Err(Error::Config(
                        format!("Invalid log level '{}'. Must be one of: none, error, warn, info, debug, trace", value)
                    )),
                })
            },
            "log_file" => {
                let path = value.trim_matches('"');
                self.log_file = if path.is_empty() { None } else { Some(PathBuf::from(path)) };
                Some(Ok(()))
            },
            _ => None,
        }
    }
}

impl ProcessorConfig {
    pub fn get_log_level(&self) -> LevelFilter {
        level_from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn validate(&self) -> Result<()> {
        if level_from_str(&self.log_level).is_none() {
            return Err(Error::Config(
                format!("Invalid log level '{}'", self.log_level)
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_round_trip() {
        let mut config = ProcessorConfig::default();
        assert_eq!(config.get_log_level(), LevelFilter::Info);
        assert!(config.from_ini_section("processor", "log_level", "DEBUG").unwrap().is_ok());
        assert_eq!(config.get_log_level(), LevelFilter::Debug);
        assert!(config.from_ini_section("processor", "log_level", "loud").unwrap().is_err());
        assert_eq!(config.log_level, "debug");
    }
}
