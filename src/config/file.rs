// src/config/file.rs

use serde::{Serialize, Deserialize};
use std::path::PathBuf;
use regex::Regex;
use crate::error::{Error, Result};
use super::FromIni;

/// Textual layout of the sentence files read from `input_dir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputFormat {
    /// One sentence per line.
    Txt,
    /// `<s id="...">` tagged sentences.
    Arc,
    Ces,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Txt => "txt",
            InputFormat::Arc => "arc",
            InputFormat::Ces => "ces",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim_matches('"').to_lowercase().as_str() {
            "txt" => Some(Self::Txt),
            "arc" => Some(Self::Arc),
            "ces" => Some(Self::Ces),
            _ => None,
        }
    }

    /// File extension the input files carry.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl Default for InputFormat {
    fn default() -> Self {
        Self::Txt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    Txt,
    Ces,
    Arc,
    /// One JSON object per interval, both sides in a single file.
    Jsonl,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Ces => "ces",
            OutputFormat::Arc => "arc",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim_matches('"').to_lowercase().as_str() {
            "txt" => Some(Self::Txt),
            "ces" => Some(Self::Ces),
            "arc" => Some(Self::Arc),
            "jsonl" | "json" => Some(Self::Jsonl),
            _ => None,
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Ces
    }
}

pub const DEFAULT_FILE_PATTERN: &str = r"(.*)[.]\w\w[.]\w+$";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    // ISO codes, e.g. "en" / "fr"
    pub source_lang: String,
    pub target_lang: String,
    // First capture group must hold the name shared by both files of a pair
    pub file_pattern: String,
    pub input_format: InputFormat,
    pub output_format: OutputFormat,
    // Dump point and interval data for plotting
    pub plot: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("./alignable"),
            source_lang: "en".to_string(),
            target_lang: "fr".to_string(),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            input_format: InputFormat::default(),
            output_format: OutputFormat::default(),
            plot: false,
        }
    }
}

impl FromIni for FileConfig {
    fn from_ini_section(&mut self, _section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        match key {
            "input_dir" => {
                self.input_dir = PathBuf::from(value.trim_matches('"'));
                Some(Ok(()))
            },
            "output_dir" => {
                self.output_dir = PathBuf::from(value.trim_matches('"'));
                Some(Ok(()))
            },
            "source_lang" | "l1" => {
                self.source_lang = value.trim_matches('"').to_string();
                Some(Ok(()))
            },
            "target_lang" | "l2" => {
                self.target_lang = value.trim_matches('"').to_string();
                Some(Ok(()))
            },
            "file_pattern" => {
                self.file_pattern = value.trim_matches('"').to_string();
                Some(Ok(()))
            },
            "input_format" => match InputFormat::from_str(value) {
                Some(format) => {
                    self.input_format = format;
                    Some(Ok(()))
                },
                None => Some(Err(Error::Config(
                    format!("Invalid input_format (must be txt, arc or ces): {}", value)
                ))),
            },
            "output_format" => match OutputFormat::from_str(value) {
                Some(format) => {
                    self.output_format = format;
                    Some(Ok(()))
                },
                None => Some(Err(Error::Config(
                    format!("Invalid output_format (must be txt, ces, arc or jsonl): {}", value)
                ))),
            },
            "plot" => match value.parse::<bool>() {
                Ok(flag) => {
                    self.plot = flag;
                    Some(Ok(()))
                },
                Err(_) => Some(Err(Error::Config(
                    format!("Invalid plot value (must be true/false): {}", value)
                ))),
            },
            _ => None,
        }
    }
}

impl FileConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.input_dir.exists() {
            return Err(Error::Config(
                format!("Input directory does not exist: {:?}", self.input_dir)
            ));
        }
        if self.source_lang.is_empty() || self.target_lang.is_empty() {
            return Err(Error::config("source_lang and target_lang must not be empty"));
        }
        if self.source_lang == self.target_lang {
            return Err(Error::Config(
                format!("source_lang and target_lang are both '{}'", self.source_lang)
            ));
        }
        let pattern = Regex::new(&self.file_pattern)?;
        if pattern.captures_len() < 2 {
            return Err(Error::Config(
                format!("file_pattern needs a capturing group for the document name: {}", self.file_pattern)
            ));
        }
        Ok(())
    }
}
