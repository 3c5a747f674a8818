pub mod indexer;

pub use self::indexer::{NGramIndexer, NGramProfile, is_degenerate};

pub use crate::error::{Error, Result};
