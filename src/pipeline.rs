//! End-to-end analysis: read inputs, extract, diff, synthesize.

use crate::analysis::analyze;
use crate::config::Settings;
use crate::error::{DriftError, DriftResult};
use crate::grammar::{GrammarSymbolExtractor, GrammarSymbols};
use crate::parsing::{MethodSets, ParserMethodExtractor};
use crate::report::{DriftReport, SymbolCounts};
use crate::synthesis::StubSynthesizer;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Resolved input locations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub grammar: PathBuf,
    pub header: PathBuf,
    pub source: PathBuf,
}

impl InputPaths {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            grammar: settings.grammar_path(),
            header: settings.header_path(),
            source: settings.source_path(),
        }
    }
}

/// Runs the extraction/diff/synthesis stages with one set of settings.
#[derive(Debug, Clone)]
pub struct DriftAnalyzer {
    grammar: GrammarSymbolExtractor,
    methods: ParserMethodExtractor,
    synthesizer: StubSynthesizer,
}

impl DriftAnalyzer {
    pub fn new(settings: &Settings) -> DriftResult<Self> {
        let style = settings.extraction.signature_style;
        let stubs = &settings.stubs;
        let methods = ParserMethodExtractor::new(style, &stubs.owning_pointer, &stubs.scope)?
            .with_multiline_joining(settings.extraction.join_multiline_signatures);

        Ok(Self {
            grammar: GrammarSymbolExtractor::new(),
            methods,
            synthesizer: StubSynthesizer::new(&settings.stubs, style),
        })
    }

    /// Grammar symbols of the grammar file at `path`.
    pub fn grammar_symbols(&self, path: &Path) -> DriftResult<GrammarSymbols> {
        let grammar = read_grammar(path)?;
        Ok(self.grammar.extract(&grammar))
    }

    /// Read all three inputs and build the report.
    ///
    /// The grammar is read first; if it is missing nothing else is touched.
    pub fn run(&self, paths: &InputPaths) -> DriftResult<DriftReport> {
        tracing::info!("analyzing {}", paths.grammar.display());

        let grammar = read_grammar(&paths.grammar)?;
        let header = read_input(&paths.header)?;
        let source = read_input(&paths.source)?;

        let mut report = self.analyze_text(&grammar, &header, &source);
        report.grammar_path = paths.grammar.display().to_string();
        report.header_path = paths.header.display().to_string();
        report.source_path = paths.source.display().to_string();

        tracing::info!(
            "{} missing declarations, {} missing implementations",
            report.discrepancies.missing_declarations.len(),
            report.discrepancies.missing_implementations.len()
        );
        Ok(report)
    }

    /// Run the pipeline on in-memory text. Paths in the report are left empty.
    pub fn analyze_text(&self, grammar: &str, header: &str, source: &str) -> DriftReport {
        let symbols = self.grammar.extract(grammar);
        if symbols.rules.is_empty() {
            tracing::warn!("grammar contains no rule definitions");
        }

        let MethodSets {
            declared,
            implemented,
        } = self.methods.extract(header, source);

        let discrepancies = analyze(&symbols.rules, &declared, &implemented);
        let stubs = self.synthesizer.synthesize(&discrepancies);

        DriftReport {
            grammar_path: String::new(),
            header_path: String::new(),
            source_path: String::new(),
            counts: SymbolCounts {
                rules: symbols.rules.len(),
                tokens: symbols.tokens.len(),
                declared: declared.len(),
                implemented: implemented.len(),
            },
            discrepancies,
            stubs,
        }
    }
}

fn read_grammar(path: &Path) -> DriftResult<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => DriftError::GrammarNotFound {
            path: path.to_path_buf(),
        },
        _ if path.is_dir() => DriftError::GrammarNotFound {
            path: path.to_path_buf(),
        },
        _ => DriftError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn read_input(path: &Path) -> DriftResult<String> {
    std::fs::read_to_string(path).map_err(|source| DriftError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
