//! Declared/implemented method discovery

use super::{SignaturePatterns, SignatureStyle, join_multiline_signatures};
use crate::error::DriftResult;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Method names found in a parser's interface and implementation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSets {
    /// Methods declared in the interface (header)
    pub declared: BTreeSet<String>,
    /// Methods defined in the implementation (source)
    pub implemented: BTreeSet<String>,
}

/// Pattern-based extractor for parser method names.
#[derive(Debug, Clone)]
pub struct ParserMethodExtractor {
    patterns: SignaturePatterns,
    join_multiline: bool,
}

impl ParserMethodExtractor {
    pub fn new(style: SignatureStyle, owning_pointer: &str, scope: &str) -> DriftResult<Self> {
        Ok(Self {
            patterns: SignaturePatterns::new(style, owning_pointer, scope)?,
            join_multiline: false,
        })
    }

    /// Extractor for `std::unique_ptr<T> name(...)` declarations and
    /// `Parser::name(...)` definitions.
    pub fn with_defaults() -> DriftResult<Self> {
        Self::new(SignatureStyle::Leading, "std::unique_ptr", "Parser")
    }

    /// Fold signatures split across lines before matching.
    pub fn with_multiline_joining(mut self, enabled: bool) -> Self {
        self.join_multiline = enabled;
        self
    }

    /// Extract both method sets.
    pub fn extract(&self, header: &str, source: &str) -> MethodSets {
        let sets = MethodSets {
            declared: self.declared_methods(header),
            implemented: self.implemented_methods(source),
        };

        tracing::debug!(
            "found {} declared and {} implemented parser methods",
            sets.declared.len(),
            sets.implemented.len()
        );

        sets
    }

    /// Snake_case names of methods declared in interface text.
    pub fn declared_methods(&self, header: &str) -> BTreeSet<String> {
        collect_names(&self.prepare(header), &self.patterns.declarations)
    }

    /// Snake_case names of methods defined in implementation text.
    pub fn implemented_methods(&self, source: &str) -> BTreeSet<String> {
        collect_names(&self.prepare(source), &self.patterns.definitions)
    }

    fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.join_multiline {
            Cow::Owned(join_multiline_signatures(text))
        } else {
            Cow::Borrowed(text)
        }
    }
}

fn collect_names(text: &str, patterns: &[Regex]) -> BTreeSet<String> {
    patterns
        .iter()
        .flat_map(|pattern| pattern.captures_iter(text))
        .map(|caps| caps[1].to_string())
        .collect()
}
