//! Grammar/parser drift detection.
//!
//! Compares the rules of a grammar file against the methods of a
//! hand-written recursive-descent parser and suggests stubs for what is
//! missing:
//!
//! ```text
//! grammar text ──▶ grammar ──▶ rules ─┐
//!                                     ├─▶ analysis ──▶ synthesis ──▶ report
//! header + source ──▶ parsing ────────┘
//! ```

pub mod analysis;
pub mod config;
pub mod display;
pub mod error;
pub mod grammar;
pub mod io;
pub mod naming;
pub mod parsing;
pub mod pipeline;
pub mod report;
pub mod synthesis;

pub use analysis::{DiscrepancyReport, analyze};
pub use config::Settings;
pub use error::{DriftError, DriftResult};
pub use grammar::{GrammarSymbol, GrammarSymbolExtractor, GrammarSymbols, SymbolKind};
pub use naming::{to_pascal_case, to_snake_case};
pub use parsing::{MethodSets, ParserMethodExtractor, SignatureStyle};
pub use pipeline::{DriftAnalyzer, InputPaths};
pub use report::DriftReport;
pub use synthesis::{StubFragment, StubKind, StubSynthesizer};
