//! Alignment engine: finds the spans of two sentence sequences that are
//! translations of each other.

pub mod points;
pub mod scoring;
pub mod selection;
pub mod density;
pub mod filter;
pub mod intervals;
pub mod pipeline;

pub use self::points::PointSet;
pub use self::scoring::CandidateScorer;
pub use self::selection::MutualKBestSelector;
pub use self::density::LocalDensityEstimator;
pub use self::filter::{DensityFilter, ConflictResolver};
pub use self::intervals::IntervalBuilder;
pub use self::pipeline::{Aligner, Alignment, AlignmentStats};
