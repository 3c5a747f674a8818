pub mod tagged;

use std::fs;
use std::path::Path;
use log::debug;

use crate::config::InputFormat;
use crate::error::Result;
use crate::ngram::NGramIndexer;
use crate::types::Corpus;

/// Sentence text with the identifier the input format carried, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSentence {
    pub text: String,
    pub id: Option<String>,
}

pub trait SentenceReader: Sync + Send {
    /// Split file content into sentences, in document order.
    fn read_sentences(&self, content: &str) -> Result<Vec<RawSentence>>;
}

/// One sentence per line, surrounding blanks removed. Every line counts so
/// that sentence indices match line numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineReader;

impl SentenceReader for LineReader {
    fn read_sentences(&self, content: &str) -> Result<Vec<RawSentence>> {
        Ok(content
            .lines()
            .map(|line| RawSentence { text: line.trim().to_string(), id: None })
            .collect())
    }
}

pub use self::tagged::TaggedReader;

pub fn reader_for(format: InputFormat) -> Box<dyn SentenceReader> {
    match format {
        InputFormat::Txt => Box::new(LineReader),
        InputFormat::Arc | InputFormat::Ces => Box::new(TaggedReader),
    }
}

/// Read one side of a document pair and index it.
pub fn read_corpus<P: AsRef<Path>>(path: P, format: InputFormat, indexer: &NGramIndexer) -> Result<Corpus> {
    let content = fs::read_to_string(&path)?;
    let sentences = reader_for(format).read_sentences(&content)?;
    debug!("Read {} sentences from {:?}", sentences.len(), path.as_ref());
    Ok(indexer.corpus(sentences.into_iter().map(|s| (s.text, s.id))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_trimmed_and_kept() {
        let sentences = LineReader.read_sentences("  first line \n\nthird\n").unwrap();
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["first line", "", "third"]);
        assert!(sentences.iter().all(|s| s.id.is_none()));
    }
}
