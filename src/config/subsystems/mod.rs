pub mod aligner;
pub mod processor;

pub use aligner::AlignerConfig;
pub use processor::ProcessorConfig;
