// Reader for `<s id="...">` tagged sentence files (arc / ces)

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::error::{Error, Result};
use super::{RawSentence, SentenceReader};

lazy_static! {
    static ref SENTENCE_TAG: Regex = Regex::new(r#"<s\s+id="([^"]*)"[^>]*>"#).unwrap();
}

/// A line holding `<s id="X">` opens a sentence; the next non-tag line is
/// its text. Text written on the tag line itself is accepted too. All other
/// markup lines are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaggedReader;

impl SentenceReader for TaggedReader {
    fn read_sentences(&self, content: &str) -> Result<Vec<RawSentence>> {
        let mut sentences = Vec::new();
        let mut pending_id: Option<String> = None;
        let mut saw_tag = false;

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            if let Some(caps) = SENTENCE_TAG.captures(line) {
                saw_tag = true;
                if let Some(previous) = &pending_id {
                    warn!("Line {}: sentence {} has no text", line_num + 1, previous);
                }
                let id = caps.get(1).map_or("", |m| m.as_str());
                pending_id = if id.is_empty() { None } else { Some(id.to_string()) };

                // <s id="X">text</s> on a single line
                let rest = line[caps.get(0).map_or(line.len(), |m| m.end())..]
                    .trim_end_matches("</s>")
                    .trim();
                if !rest.is_empty() {
                    if let Some(id) = pending_id.take() {
                        sentences.push(RawSentence { text: rest.to_string(), id: Some(id) });
                    }
                }
                continue;
            }

            if line.is_empty() || (line.starts_with('<') && line.ends_with('>')) {
                continue;
            }
            if let Some(id) = pending_id.take() {
                sentences.push(RawSentence { text: line.to_string(), id: Some(id) });
            }
        }

        if !saw_tag && !content.trim().is_empty() {
            return Err(Error::parse("no <s id=\"...\"> sentence tags found"));
        }
        Ok(sentences)
    }
}
