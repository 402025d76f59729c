//! Rule and token extraction

use super::{GrammarSymbols, strip_comments};
use crate::naming::to_snake_case;
use regex::Regex;
use std::sync::LazyLock;

/// A rule definition: lowercase-initial name at line start, then a colon.
/// Whitespace (a newline included) may sit between the name and the colon,
/// matching the ANTLR habit of putting `:` on the next line.
static RULE_DEFINITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*([a-z][a-zA-Z_]*)\s*:").expect("Invalid regex"));

/// A token definition: uppercase/underscore name at line start, then a colon.
static TOKEN_DEFINITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*([A-Z_]+)\s*:").expect("Invalid regex"));

/// Extracts grammar symbols from raw grammar text.
///
/// Stateless; the same input always yields the same sets.
#[derive(Debug, Default, Clone, Copy)]
pub struct GrammarSymbolExtractor;

impl GrammarSymbolExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Strip comments, then collect token names (verbatim) and rule names
    /// (snake_case). Both sets collapse duplicates.
    pub fn extract(&self, grammar: &str) -> GrammarSymbols {
        let source = strip_comments(grammar);
        let mut symbols = GrammarSymbols::default();

        for caps in RULE_DEFINITION.captures_iter(&source) {
            symbols.rules.insert(to_snake_case(&caps[1]));
        }

        for caps in TOKEN_DEFINITION.captures_iter(&source) {
            symbols.tokens.insert(caps[1].to_string());
        }

        tracing::debug!(
            "extracted {} rules and {} tokens from grammar",
            symbols.rules.len(),
            symbols.tokens.len()
        );

        symbols
    }
}

/// Convenience wrapper around [`GrammarSymbolExtractor::extract`].
pub fn extract_symbols(grammar: &str) -> GrammarSymbols {
    GrammarSymbolExtractor::new().extract(grammar)
}
