mod common;

use alignable::config::{AlignerConfig, ProcessorConfig};
use alignable::{Aligner, Corpus, Interval, Point};
use common::{synthetic_sentences, ENGLISH, FRENCH};

fn aligner(config: AlignerConfig) -> Aligner {
    Aligner::new(config, &ProcessorConfig::default()).unwrap()
}

fn corpus<S: AsRef<str>>(aligner: &Aligner, texts: &[S]) -> Corpus {
    aligner.indexer().corpus_from_texts(texts.iter().map(|t| t.as_ref().to_string()))
}

fn interval(bi: usize, bj: usize, ei: usize, ej: usize) -> Interval {
    Interval::new(Point::new(bi, bj), Point::new(ei, ej))
}

fn assert_well_formed(intervals: &[Interval]) {
    for interval in intervals {
        assert!(interval.begin.i < interval.end.i);
        assert!(interval.begin.j < interval.end.j);
    }
    for pair in intervals.windows(2) {
        assert!(pair[0].end.i < pair[1].begin.i, "{:?} overlaps {:?}", pair[0], pair[1]);
    }
}

#[test]
fn identical_corpora_form_one_interval() {
    let aligner = aligner(AlignerConfig::default());
    let sentences = synthetic_sentences(40, 7);
    let source = corpus(&aligner, &sentences);
    let target = corpus(&aligner, &sentences);

    let alignment = aligner.align(&source, &target).unwrap();
    assert_eq!(alignment.stats.candidates, 40);
    assert_eq!(alignment.stats.selected_points, 40);
    assert_eq!(alignment.intervals, vec![interval(0, 0, 39, 39)]);
    assert_eq!(alignment.stats.total_interval_length, 39);
    assert!(alignment.points.iter().all(|p| p.i == p.j));
}

#[test]
fn no_shared_ngrams_means_no_interval() {
    let aligner = aligner(AlignerConfig::default());
    let source = corpus(&aligner, &ENGLISH[..3]);
    let target = corpus(&aligner, &[
        "Ο ήλιος δύει πίσω από τα βουνά.",
        "Η θάλασσα είναι ήσυχη απόψε.",
        "Τα παιδιά παίζουν στην αυλή.",
    ]);

    let alignment = aligner.align(&source, &target).unwrap();
    assert_eq!(alignment.stats.candidates, 0);
    assert!(alignment.selected.is_empty());
    assert!(alignment.is_empty());
}

#[test]
fn inserted_block_splits_the_alignment() {
    let aligner = aligner(AlignerConfig::default());
    let sentences = synthetic_sentences(60, 7);
    let inserted = synthetic_sentences(20, 99);
    let mut target_texts = sentences[..30].to_vec();
    target_texts.extend(inserted);
    target_texts.extend_from_slice(&sentences[30..]);

    let source = corpus(&aligner, &sentences);
    let target = corpus(&aligner, &target_texts);
    let alignment = aligner.align(&source, &target).unwrap();

    assert_eq!(alignment.intervals, vec![
        interval(0, 0, 29, 29),
        interval(30, 50, 59, 79),
    ]);
    assert_well_formed(&alignment.intervals);
}

#[test]
fn deleted_block_splits_the_alignment() {
    let aligner = aligner(AlignerConfig::default());
    let sentences = synthetic_sentences(60, 7);
    let mut target_texts = sentences[..20].to_vec();
    target_texts.extend_from_slice(&sentences[35..]);

    let alignment = aligner
        .align(&corpus(&aligner, &sentences), &corpus(&aligner, &target_texts))
        .unwrap();
    assert_eq!(alignment.intervals, vec![
        interval(0, 0, 19, 19),
        interval(35, 20, 59, 44),
    ]);
}

#[test]
fn translations_align_on_trigrams() {
    let config = AlignerConfig { ngram_size: 3, ..AlignerConfig::default() };
    let aligner = aligner(config);
    let source = corpus(&aligner, &ENGLISH);
    let target = corpus(&aligner, &FRENCH);

    let alignment = aligner.align(&source, &target).unwrap();
    assert_eq!(alignment.intervals, vec![interval(0, 0, 23, 23)]);

    // One target per source sentence after conflict resolution
    let mut sources: Vec<usize> = alignment.points.iter().map(|p| p.i).collect();
    sources.dedup();
    assert_eq!(sources.len(), alignment.points.len());
    assert!(alignment.points.len() <= alignment.selected.len());
}

#[test]
fn band_scan_matches_full_scan_near_the_diagonal() {
    let full = aligner(AlignerConfig { ngram_size: 3, ..AlignerConfig::default() });
    let banded = aligner(AlignerConfig { ngram_size: 3, diag_width: 6, ..AlignerConfig::default() });
    let source = corpus(&full, &ENGLISH);
    let target = corpus(&full, &FRENCH);

    let full_alignment = full.align(&source, &target).unwrap();
    let band_alignment = banded.align(&source, &target).unwrap();
    assert!(band_alignment.stats.candidates < full_alignment.stats.candidates);
    assert_eq!(band_alignment.intervals, full_alignment.intervals);
}

#[test]
fn results_do_not_depend_on_threads() {
    let sentences = synthetic_sentences(60, 7);
    let mut target_texts = sentences[..30].to_vec();
    target_texts.extend(synthetic_sentences(20, 99));
    target_texts.extend_from_slice(&sentences[30..]);

    let configs = [
        ProcessorConfig { parallel_scoring: false, ..ProcessorConfig::default() },
        ProcessorConfig::default(),
        ProcessorConfig { thread_count: 1, ..ProcessorConfig::default() },
        ProcessorConfig { thread_count: 4, ..ProcessorConfig::default() },
    ];
    let alignments: Vec<_> = configs
        .iter()
        .map(|processor| {
            let aligner = Aligner::new(AlignerConfig::default(), processor).unwrap();
            let source = corpus(&aligner, &sentences);
            let target = corpus(&aligner, &target_texts);
            aligner.align(&source, &target).unwrap()
        })
        .collect();

    for alignment in &alignments[1..] {
        assert_eq!(alignment.intervals, alignments[0].intervals);
        assert_eq!(alignment.points.to_vec(), alignments[0].points.to_vec());
        assert_eq!(alignment.stats, alignments[0].stats);
    }
}

#[test]
fn rerunning_is_deterministic() {
    let aligner = aligner(AlignerConfig::default());
    let source = corpus(&aligner, &ENGLISH);
    let target = corpus(&aligner, &FRENCH);

    let first = aligner.align(&source, &target).unwrap();
    let second = aligner.align(&source, &target).unwrap();
    assert_eq!(first.intervals, second.intervals);
    assert_eq!(first.selected.to_vec(), second.selected.to_vec());
    assert_eq!(first.stats, second.stats);
    assert_well_formed(&first.intervals);
}
