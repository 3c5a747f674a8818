use serde::{Serialize, Deserialize};

use crate::ngram::NGramProfile;

/// One sentence of a corpus together with its n-gram profile.
#[derive(Debug, Clone)]
pub struct Sentence {
    pub text: String,
    /// Identifier carried by tagged input formats (`<s id="...">`).
    pub id: Option<String>,
    pub profile: NGramProfile,
}

impl Sentence {
    /// Identifier used when writing tagged output: the preserved one, or
    /// the 1-based position in the corpus.
    pub fn output_id(&self, index: usize) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => (index + 1).to_string(),
        }
    }
}

/// Ordered sentences of one language side. Length is fixed once built.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    sentences: Vec<Sentence>,
    ngram_size: usize,
}

impl Corpus {
    pub fn new(sentences: Vec<Sentence>, ngram_size: usize) -> Self {
        Self { sentences, ngram_size }
    }

    /// N-gram size the sentence profiles were built with.
    pub fn ngram_size(&self) -> usize {
        self.ngram_size
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }
}

/// Scored (source, target) pair produced while scanning the band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub dice: f64,
    pub source_index: usize,
    pub target_index: usize,
}

/// Confirmed coordinate in the source x target sentence matrix.
/// Ordered by source index, then target index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub i: usize,
    pub j: usize,
}

impl Point {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let di = self.i as f64 - other.i as f64;
        let dj = self.j as f64 - other.j as f64;
        (di * di + dj * dj).sqrt()
    }
}

/// Inclusive block `[begin.i, end.i] x [begin.j, end.j]` of mutually
/// translated sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub begin: Point,
    pub end: Point,
}

impl Interval {
    pub fn new(begin: Point, end: Point) -> Self {
        Self { begin, end }
    }

    pub fn source_range(&self) -> std::ops::RangeInclusive<usize> {
        self.begin.i..=self.end.i
    }

    pub fn target_range(&self) -> std::ops::RangeInclusive<usize> {
        self.begin.j..=self.end.j
    }

    /// Horizontal extent, `end.i - begin.i`.
    pub fn width(&self) -> usize {
        self.end.i - self.begin.i
    }
}
