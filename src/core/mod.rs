//! Core extraction pipeline.
//!
//! ## Module Structure
//!
//! - `loader`: File reading (percent-decoded paths) and single-line normalization
//! - `finder`: Source file discovery per project type
//! - `extractor`: Pattern-based translation key extraction
//! - `processor`: Find → extract → union orchestration per project type
//! - `registry`: Project-type identifier dispatch
//! - `result`: Extraction result and per-file outcomes

pub mod extractor;
pub mod finder;
pub mod loader;
pub mod processor;
pub mod registry;
pub mod result;

pub use extractor::{I18nextKeyExtractor, KeyExtractor};
pub use finder::{FileFinder, FinderOutput, SourceFileFinder};
pub use processor::{ExtractionProcessor, I18nextProcessor, Processor};
pub use registry::{ProcessorRegistry, extract_keys};
pub use result::{ExtractionResult, FileOutcome, SkippedPath};
