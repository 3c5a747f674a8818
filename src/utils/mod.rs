pub mod logger;
pub mod pairs;

pub use self::logger::init_logging;
pub use self::pairs::{find_document_pairs, DocumentPair};
