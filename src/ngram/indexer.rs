// src/ngram/indexer.rs

use ahash::AHashMap;
use log::trace;

use crate::error::{Error, Result};
use crate::types::{Corpus, Sentence};

/// Character n-gram multiset of one sentence.
#[derive(Debug, Clone, Default)]
pub struct NGramProfile {
    counts: AHashMap<String, usize>,
    // Number of n-gram windows in the sentence, degenerate ones included.
    raw_count: usize,
}

impl NGramProfile {
    pub fn counts(&self) -> &AHashMap<String, usize> {
        &self.counts
    }

    pub fn count(&self, ngram: &str) -> usize {
        self.counts.get(ngram).copied().unwrap_or(0)
    }

    /// `len(text) - n + 1`, floored at 0.
    pub fn raw_count(&self) -> usize {
        self.raw_count
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Multiset intersection size: `sum over shared g of min(count1, count2)`.
    pub fn common_count(&self, other: &NGramProfile) -> usize {
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (&self.counts, &other.counts)
        } else {
            (&other.counts, &self.counts)
        };
        small.iter()
            .filter_map(|(ngram, &count)| large.get(ngram).map(|&other_count| count.min(other_count)))
            .sum()
    }
}

/// An n-gram made of a single repeated character (runs of blanks,
/// punctuation, ...). These produce spurious matches and are never indexed.
pub fn is_degenerate(ngram: &[char]) -> bool {
    match ngram.split_first() {
        Some((first, rest)) => !rest.is_empty() && rest.iter().all(|c| c == first),
        None => false,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NGramIndexer {
    ngram_size: usize,
}

impl NGramIndexer {
    pub fn new(ngram_size: usize) -> Result<Self> {
        if ngram_size == 0 {
            return Err(Error::InvalidNgramSize(
                "ngram size must be greater than 0".to_string()
            ));
        }
        Ok(Self { ngram_size })
    }

    pub fn ngram_size(&self) -> usize {
        self.ngram_size
    }

    pub fn profile(&self, text: &str) -> NGramProfile {
        let chars: Vec<char> = text.chars().collect();
        let char_count = chars.len();

        if char_count < self.ngram_size {
            trace!("Text too short for ngram size {} (length: {})", self.ngram_size, char_count);
            return NGramProfile::default();
        }

        let total_windows = char_count - self.ngram_size + 1;
        let mut counts = AHashMap::with_capacity(total_windows);
        let mut text_buffer = String::with_capacity(self.ngram_size * 4);

        for window in chars.windows(self.ngram_size) {
            if is_degenerate(window) {
                continue;
            }
            text_buffer.clear();
            text_buffer.extend(window.iter());
            match counts.get_mut(text_buffer.as_str()) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(text_buffer.clone(), 1);
                }
            }
        }

        NGramProfile {
            counts,
            raw_count: total_windows,
        }
    }

    pub fn sentence(&self, text: String, id: Option<String>) -> Sentence {
        let profile = self.profile(&text);
        Sentence { text, id, profile }
    }

    /// Index a whole side of a document pair.
    pub fn corpus<I>(&self, sentences: I) -> Corpus
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        Corpus::new(
            sentences.into_iter()
                .map(|(text, id)| self.sentence(text, id))
                .collect(),
            self.ngram_size,
        )
    }

    /// Convenience for id-less input such as raw text lines.
    pub fn corpus_from_texts<I, S>(&self, texts: I) -> Corpus
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.corpus(texts.into_iter().map(|t| (t.into(), None)))
    }
}
