//! Identifier case conversion between grammar and parser naming conventions.
//!
//! Grammar rules are written in camelCase (`exprStatement`), parser methods in
//! snake_case (`expr_statement`) and AST node types in PascalCase
//! (`ExprStatement`). The conversions here are deterministic but not exact
//! inverses: acronym runs such as `parseHTTPHeader` collapse to
//! `parse_http_header` and come back as `ParseHttpHeader`.

use regex::Regex;
use std::sync::LazyLock;

/// Boundary before a capitalized word: `HTTPServer` -> `HTTP_Server`.
static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("Invalid regex"));

/// Boundary between a lowercase letter or digit and an uppercase letter.
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("Invalid regex"));

/// Convert a camelCase or PascalCase identifier to snake_case.
///
/// Two passes are needed. A single lower/upper boundary pass would turn
/// `HTTPServer` into `httpserver`; the capitalized-word pass first splits off
/// `Server` so the boundary lands before the last capital of the run.
pub fn to_snake_case(identifier: &str) -> String {
    let split_words = CAPITALIZED_WORD.replace_all(identifier, "${1}_${2}");
    LOWER_UPPER
        .replace_all(&split_words, "${1}_${2}")
        .to_lowercase()
}

/// Convert a snake_case identifier to PascalCase.
///
/// Each underscore-separated segment gets its first character uppercased and
/// the segments are concatenated. Empty segments (`__`, leading `_`) vanish.
pub fn to_pascal_case(identifier: &str) -> String {
    identifier
        .split('_')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .concat()
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
