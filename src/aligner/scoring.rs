use std::ops::Range;
use rayon::prelude::*;
use log::{debug, trace};

use crate::config::AlignerConfig;
use crate::ngram::NGramProfile;
use crate::types::{Candidate, Corpus};

/// Scores sentence pairs with the Dice coefficient on n-gram multiplicities
/// and keeps those above the configured threshold.
pub struct CandidateScorer<'a> {
    config: &'a AlignerConfig,
}

impl<'a> CandidateScorer<'a> {
    pub fn new(config: &'a AlignerConfig) -> Self {
        Self { config }
    }

    /// Dice score of two sentences, or `None` when their lengths are too small
    /// or too different to be worth comparing.
    pub fn dice(&self, source: &NGramProfile, target: &NGramProfile) -> Option<f64> {
        let nb1 = source.raw_count().max(1);
        let nb2 = target.raw_count().max(1);

        if nb1 <= self.config.min_sent_length || nb2 <= self.config.min_sent_length {
            return None;
        }
        let ratio = nb1 as f64 / nb2 as f64;
        let min_ratio = self.config.min_sent_length_ratio;
        if ratio < min_ratio || 1.0 / ratio < min_ratio {
            return None;
        }

        let common = source.common_count(target);
        Some(2.0 * common as f64 / (nb1 + nb2) as f64)
    }

    /// Target indices examined for source row `i`.
    pub fn target_band(&self, i: usize, source_len: usize, target_len: usize) -> Range<usize> {
        let width = self.config.diag_width;
        // A band at least twice the target length covers every row.
        if width == 0 || source_len == 0 || width >= target_len.saturating_mul(2) {
            return 0..target_len;
        }
        let start = (i as f64 * target_len as f64 / source_len as f64 - width as f64 / 2.0) as i64;
        let end = (start + width as i64).clamp(0, target_len as i64);
        let start = start.clamp(0, end);
        start as usize..end as usize
    }

    /// Candidates of one source row, in ascending target order.
    pub fn score_row(&self, i: usize, source: &Corpus, target: &Corpus) -> Vec<Candidate> {
        let Some(sentence) = source.get(i) else {
            return Vec::new();
        };
        let targets = target.sentences();

        self.target_band(i, source.len(), target.len())
            .filter_map(|j| {
                let dice = self.dice(&sentence.profile, &targets[j].profile)?;
                if dice > self.config.dice_threshold {
                    trace!("Candidate ({}, {}) dice={:.4}", i, j, dice);
                    Some(Candidate { dice, source_index: i, target_index: j })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Score every source row. Rows are independent; with `parallel` they are
    /// spread over the current rayon pool and collected back in row order, so
    /// the result does not depend on scheduling.
    pub fn score(&self, source: &Corpus, target: &Corpus, parallel: bool) -> Vec<Vec<Candidate>> {
        let rows: Vec<Vec<Candidate>> = if parallel {
            (0..source.len())
                .into_par_iter()
                .map(|i| self.score_row(i, source, target))
                .collect()
        } else {
            (0..source.len())
                .map(|i| self.score_row(i, source, target))
                .collect()
        };

        debug!(
            "Scored {} x {} sentences: {} candidates",
            source.len(),
            target.len(),
            rows.iter().map(Vec::len).sum::<usize>()
        );
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ngram::NGramIndexer;

    fn config() -> AlignerConfig {
        AlignerConfig { ngram_size: 3, ..AlignerConfig::default() }
    }

    #[test]
    fn identical_sentences_score_one() {
        let config = config();
        let scorer = CandidateScorer::new(&config);
        let indexer = NGramIndexer::new(3).unwrap();
        let p = indexer.profile("the quick brown fox");
        assert_eq!(scorer.dice(&p, &p), Some(1.0));
    }

    #[test]
    fn dice_is_symmetric() {
        let config = config();
        let scorer = CandidateScorer::new(&config);
        let indexer = NGramIndexer::new(3).unwrap();
        let a = indexer.profile("Paris est la capitale de la France");
        let b = indexer.profile("Paris is the capital of France");
        let ab = scorer.dice(&a, &b).unwrap();
        let ba = scorer.dice(&b, &a).unwrap();
        assert_eq!(ab, ba);
        assert!(ab > 0.0 && ab < 1.0);
    }

    #[test]
    fn length_pruning() {
        let config = config();
        let scorer = CandidateScorer::new(&config);
        let indexer = NGramIndexer::new(3).unwrap();
        // Three windows vs one: nb2 is not above min_sent_length.
        assert_eq!(scorer.dice(&indexer.profile("abcde"), &indexer.profile("abc")), None);
        // 2 windows vs 20: ratio 0.1 < 0.2.
        let short = indexer.profile("abcd");
        let long = indexer.profile("abcdefghijklmnopqrstuv");
        assert_eq!(scorer.dice(&short, &long), None);
        assert_eq!(scorer.dice(&long, &short), None);
    }

    #[test]
    fn full_band_covers_target_side() {
        let config = config();
        let scorer = CandidateScorer::new(&config);
        assert_eq!(scorer.target_band(3, 10, 7), 0..7);
    }

    #[test]
    fn fixed_band_follows_linear_mapping() {
        let config = AlignerConfig { diag_width: 4, ..config() };
        let scorer = CandidateScorer::new(&config);
        // j0 = 5 * 20 / 10 - 2 = 8
        assert_eq!(scorer.target_band(5, 10, 20), 8..12);
        // Negative start is skipped, the window is not shifted.
        assert_eq!(scorer.target_band(0, 10, 20), 0..2);
        // Clamped at the end of the target side.
        assert_eq!(scorer.target_band(9, 10, 10), 7..10);
    }

    #[test]
    fn oversized_band_scans_everything() {
        let config = AlignerConfig { diag_width: usize::MAX, ..config() };
        let scorer = CandidateScorer::new(&config);
        assert_eq!(scorer.target_band(5, 10, 20), 0..20);
        assert_eq!(scorer.target_band(9, 10, 20), 0..20);

        // Just below the threshold the band is still computed.
        let config = AlignerConfig { diag_width: 39, ..self::config() };
        let scorer = CandidateScorer::new(&config);
        assert_eq!(scorer.target_band(0, 10, 20), 0..20);
        assert_eq!(scorer.target_band(5, 10, 20), 0..20);
    }

    #[test]
    fn rows_are_merged_in_order() {
        let config = AlignerConfig { ngram_size: 3, dice_threshold: 0.1, ..AlignerConfig::default() };
        let scorer = CandidateScorer::new(&config);
        let indexer = NGramIndexer::new(3).unwrap();
        let texts = ["alpha beta gamma", "delta epsilon zeta", "theta iota kappa"];
        let corpus = indexer.corpus_from_texts(texts);

        let sequential = scorer.score(&corpus, &corpus, false);
        let parallel = scorer.score(&corpus, &corpus, true);
        assert_eq!(sequential, parallel);
        for (i, row) in sequential.iter().enumerate() {
            assert!(row.iter().all(|c| c.source_index == i));
            assert!(row.iter().any(|c| c.target_index == i && c.dice == 1.0));
        }
    }
}
