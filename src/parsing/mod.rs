//! Parser method extraction
//!
//! Scans a parser's interface (header) and implementation (source) text for
//! snake_case method signatures. This is line-oriented pattern matching, not
//! a C++ front end: a signature must fit on one line unless the multi-line
//! joiner is enabled, and anything that deviates from the expected shape is
//! silently skipped.

mod joiner;
mod method_extractor;
mod signature;

pub use joiner::join_multiline_signatures;
pub use method_extractor::{MethodSets, ParserMethodExtractor};
pub use signature::{SignaturePatterns, SignatureStyle};
