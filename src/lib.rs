//! alignable selects the alignable parts of parallel text pairs.
//! Sentences of a document and of its translation are matched through
//! shared character n-grams, and only the spans that follow a dense
//! diagonal of matches are kept for the next alignment step.

// Module declarations
pub mod error;
pub mod types;
pub mod config;
pub mod ngram;
pub mod aligner;
pub mod parser;
pub mod output;
pub mod utils;

// Re-exports
pub use error::{Error, Result};
pub use aligner::{Aligner, Alignment, AlignmentStats, PointSet};
pub use ngram::NGramIndexer;
pub use types::{Corpus, Interval, Point, Sentence};

// Re-export the config from config module
pub use config::AlignableConfig;
