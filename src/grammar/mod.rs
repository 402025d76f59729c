//! Grammar symbol extraction
//!
//! Pulls rule and token names out of a grammar file (ANTLR `.g4` style)
//! without parsing the grammar itself. Rules are normalized to snake_case so
//! they can be compared against parser method names; tokens are kept verbatim.

mod comments;
mod extractor;

pub use comments::strip_comments;
pub use extractor::{GrammarSymbolExtractor, extract_symbols};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Kind of a grammar symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SymbolKind {
    /// Production with a lowercase-initial name
    Rule,
    /// Terminal with an uppercase/underscore name
    Token,
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolKind::Rule => write!(f, "rule"),
            SymbolKind::Token => write!(f, "token"),
        }
    }
}

/// A named grammar symbol. Identity is the (normalized) name plus kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GrammarSymbol {
    pub name: String,
    pub kind: SymbolKind,
}

impl GrammarSymbol {
    pub fn rule(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Rule,
        }
    }

    pub fn token(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Token,
        }
    }
}

/// Deduplicated token and rule names extracted from one grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarSymbols {
    /// Token names, verbatim
    pub tokens: BTreeSet<String>,
    /// Rule names, snake_case
    pub rules: BTreeSet<String>,
}

impl GrammarSymbols {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.rules.is_empty()
    }

    /// All symbols tagged with their kind, rules first, each group sorted.
    pub fn symbols(&self) -> Vec<GrammarSymbol> {
        self.rules
            .iter()
            .map(GrammarSymbol::rule)
            .chain(self.tokens.iter().map(GrammarSymbol::token))
            .collect()
    }
}
