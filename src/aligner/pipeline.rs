use std::sync::Arc;
use std::time::Instant;
use log::{info, debug};
use serde::{Serialize, Deserialize};

use crate::config::{AlignerConfig, ProcessorConfig};
use crate::error::{Error, Result};
use crate::ngram::NGramIndexer;
use crate::types::{Corpus, Interval};
use super::density::LocalDensityEstimator;
use super::filter::{ConflictResolver, DensityFilter};
use super::intervals::IntervalBuilder;
use super::points::PointSet;
use super::scoring::CandidateScorer;
use super::selection::MutualKBestSelector;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignmentStats {
    pub candidates: usize,
    pub selected_points: usize,
    pub average_density: f64,
    pub density_filtered: usize,
    pub conflicts_removed: usize,
    pub intervals: usize,
    /// Sum of `end.i - begin.i` over the intervals.
    pub total_interval_length: usize,
}

/// Outcome of aligning one document pair.
#[derive(Debug, Clone, Default)]
pub struct Alignment {
    /// Points confirmed by mutual k-best selection, before any filtering.
    pub selected: PointSet,
    /// One-to-one points left after density filtering and conflict resolution.
    pub points: PointSet,
    pub intervals: Vec<Interval>,
    pub stats: AlignmentStats,
}

impl Alignment {
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

/// Runs the stages on a document pair: scoring, mutual k-best selection,
/// density filtering, conflict resolution and interval extraction.
pub struct Aligner {
    config: AlignerConfig,
    indexer: NGramIndexer,
    parallel: bool,
    thread_pool: Option<Arc<rayon::ThreadPool>>,
}

impl Aligner {
    pub fn new(config: AlignerConfig, processor: &ProcessorConfig) -> Result<Self> {
        config.validate()?;
        let indexer = NGramIndexer::new(config.ngram_size)?;

        // Initialize thread pool if thread count specified
        let thread_pool = if processor.parallel_scoring && processor.thread_count > 0 {
            Some(Arc::new(rayon::ThreadPoolBuilder::new()
                .num_threads(processor.thread_count)
                .build()?))
        } else {
            None // Use rayon's default thread pool
        };

        Ok(Self {
            config,
            indexer,
            parallel: processor.parallel_scoring,
            thread_pool,
        })
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    /// Indexer matching the configured n-gram size; corpora handed to
    /// [`Aligner::align`] must be built with it.
    pub fn indexer(&self) -> &NGramIndexer {
        &self.indexer
    }

    fn check_corpus(&self, side: &str, corpus: &Corpus) -> Result<()> {
        if !corpus.is_empty() && corpus.ngram_size() != self.config.ngram_size {
            return Err(Error::InvalidNgramSize(format!(
                "{} corpus indexed with {}-grams, aligner expects {}-grams",
                side, corpus.ngram_size(), self.config.ngram_size
            )));
        }
        Ok(())
    }

    /// Run `op` on the dedicated pool when one was built, so that every
    /// parallel stage honours `thread_count`.
    fn install<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.thread_pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    pub fn align(&self, source: &Corpus, target: &Corpus) -> Result<Alignment> {
        self.check_corpus("source", source)?;
        self.check_corpus("target", target)?;
        let start_time = Instant::now();

        let scorer = CandidateScorer::new(&self.config);
        let rows = self.install(|| scorer.score(source, target, self.parallel));
        let mut stats = AlignmentStats {
            candidates: rows.iter().map(Vec::len).sum(),
            ..AlignmentStats::default()
        };

        let mut selector = MutualKBestSelector::new(self.config.k_best);
        for row in &rows {
            selector.record_all(row);
        }
        let selected = selector.select();
        stats.selected_points = selected.len();

        if selected.is_empty() {
            debug!("No candidate point survived selection");
            return Ok(Alignment { stats, ..Alignment::default() });
        }

        let estimator = LocalDensityEstimator::new(
            self.config.delta_x,
            self.config.delta_y,
            source.len(),
            target.len(),
        );

        let mut points = selected.clone();
        let density_filter = DensityFilter::new(&estimator, self.config.min_density_ratio);
        let (density_filtered, average_density) =
            self.install(|| density_filter.apply(&mut points, self.parallel));
        stats.density_filtered = density_filtered;
        stats.average_density = average_density;
        stats.conflicts_removed = ConflictResolver::new(&estimator).apply(&mut points);

        let intervals = IntervalBuilder::new(&self.config, &estimator).build(&points);
        stats.intervals = intervals.len();
        stats.total_interval_length = intervals.iter().map(Interval::width).sum();

        info!(
            "Aligned {} x {} sentences: {} candidates, {} points, {} removed by density, {} conflicts, {} intervals (total length {}) in {:.2?}",
            source.len(),
            target.len(),
            stats.candidates,
            stats.selected_points,
            stats.density_filtered,
            stats.conflicts_removed,
            stats.intervals,
            stats.total_interval_length,
            start_time.elapsed()
        );

        Ok(Alignment { selected, points, intervals, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn mismatched_ngram_size_is_an_error() {
        let aligner = Aligner::new(AlignerConfig::default(), &ProcessorConfig::default()).unwrap();
        let corpus = NGramIndexer::new(3).unwrap().corpus_from_texts(["some sentence here"]);
        assert!(matches!(aligner.align(&corpus, &corpus), Err(Error::InvalidNgramSize(_))));
    }

    #[test]
    fn empty_sides_give_empty_alignment() {
        let aligner = Aligner::new(AlignerConfig::default(), &ProcessorConfig::default()).unwrap();
        let empty = aligner.indexer().corpus_from_texts(Vec::<String>::new());
        let other = aligner.indexer().corpus_from_texts(["one sentence", "another sentence"]);
        assert!(aligner.align(&empty, &other).unwrap().is_empty());
        assert!(aligner.align(&other, &empty).unwrap().is_empty());
    }

    #[test]
    fn dedicated_thread_pool() {
        let processor = ProcessorConfig { thread_count: 2, ..ProcessorConfig::default() };
        let aligner = Aligner::new(AlignerConfig::default(), &processor).unwrap();
        let texts = [
            "The committee met on Monday morning.",
            "Rainfall totals exceeded forecasts.",
            "Seven bridges cross the river here.",
        ];
        let corpus = aligner.indexer().corpus_from_texts(texts);
        let alignment = aligner.align(&corpus, &corpus).unwrap();
        assert_eq!(alignment.intervals, vec![Interval::new(Point::new(0, 0), Point::new(2, 2))]);
        assert_eq!(alignment.stats.total_interval_length, 2);
    }

    #[test]
    fn parallel_stages_run_on_the_dedicated_pool() {
        let processor = ProcessorConfig { thread_count: 3, ..ProcessorConfig::default() };
        let aligner = Aligner::new(AlignerConfig::default(), &processor).unwrap();
        assert_eq!(aligner.install(rayon::current_num_threads), 3);

        let aligner = Aligner::new(AlignerConfig::default(), &ProcessorConfig::default()).unwrap();
        assert_eq!(aligner.install(rayon::current_num_threads), rayon::current_num_threads());
    }
}
