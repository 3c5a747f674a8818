use std::fs;
use std::path::PathBuf;
use log::{debug, info, warn};
use regex::Regex;

use crate::config::FileConfig;
use crate::error::Result;

/// Source and target files of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPair {
    /// Name shared by both files, captured by the file pattern.
    pub name: String,
    pub source_path: PathBuf,
    pub target_path: PathBuf,
}

/// List the document pairs of `input_dir`, sorted by file name.
///
/// A source file matches `file_pattern` and ends with `.<l1>.<ext>`
/// (case-insensitive); its target is `<name>.<l2>.<ext>` in the same
/// directory. Sources without a target are skipped.
pub fn find_document_pairs(config: &FileConfig) -> Result<Vec<DocumentPair>> {
    let pattern = Regex::new(&config.file_pattern)?;
    let extension = config.input_format.extension();
    let source_suffix = format!(".{}.{}", config.source_lang, extension).to_lowercase();

    let mut file_names: Vec<String> = fs::read_dir(&config.input_dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .collect();
    file_names.sort();

    let mut pairs = Vec::new();
    for file_name in file_names {
        if !file_name.to_lowercase().ends_with(&source_suffix) {
            continue;
        }
        let Some(name) = pattern.captures(&file_name)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
        else {
            debug!("{} does not match the file pattern", file_name);
            continue;
        };

        let target_path = config.input_dir.join(format!("{}.{}.{}", name, config.target_lang, extension));
        if !target_path.is_file() {
            warn!("No {} counterpart for {} (expected {:?}), skipping", config.target_lang, file_name, target_path);
            continue;
        }

        pairs.push(DocumentPair {
            source_path: config.input_dir.join(&file_name),
            target_path,
            name,
        });
    }

    info!("Found {} document pairs in {:?}", pairs.len(), config.input_dir);
    Ok(pairs)
}
