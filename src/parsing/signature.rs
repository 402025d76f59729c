//! Signature shapes recognized in parser sources

use crate::error::{DriftError, DriftResult};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How parser methods spell their return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureStyle {
    /// `std::unique_ptr<Node> name(...)`
    #[default]
    Leading,
    /// `auto name(...) -> std::unique_ptr<Node>`
    Trailing,
    /// Either of the above
    Any,
}

impl SignatureStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureStyle::Leading => "leading",
            SignatureStyle::Trailing => "trailing",
            SignatureStyle::Any => "any",
        }
    }

    fn includes_leading(&self) -> bool {
        matches!(self, SignatureStyle::Leading | SignatureStyle::Any)
    }

    fn includes_trailing(&self) -> bool {
        matches!(self, SignatureStyle::Trailing | SignatureStyle::Any)
    }
}

impl std::str::FromStr for SignatureStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "leading" => Ok(SignatureStyle::Leading),
            "trailing" => Ok(SignatureStyle::Trailing),
            "any" => Ok(SignatureStyle::Any),
            other => Err(format!(
                "unknown signature style '{other}', expected leading, trailing or any"
            )),
        }
    }
}

impl std::fmt::Display for SignatureStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiled declaration and definition patterns.
///
/// Every pattern captures the snake_case method name in group 1.
#[derive(Debug, Clone)]
pub struct SignaturePatterns {
    pub declarations: Vec<Regex>,
    pub definitions: Vec<Regex>,
}

impl SignaturePatterns {
    /// Build patterns for an owning-pointer marker (e.g. `std::unique_ptr`)
    /// and the scope that qualifies out-of-line definitions (e.g. `Parser`).
    pub fn new(style: SignatureStyle, owning_pointer: &str, scope: &str) -> DriftResult<Self> {
        let pointer = regex::escape(owning_pointer);
        let scope = regex::escape(scope);

        let mut declarations = Vec::new();
        let mut definitions = Vec::new();

        if style.includes_leading() {
            declarations.push(compile(
                "leading declaration",
                &format!(r"{pointer}<\w+>\s+([a-z_]+)\(.*\)"),
            )?);
            definitions.push(compile(
                "leading definition",
                &format!(r"{scope}::([a-z_]+)\(.*\)"),
            )?);
        }

        if style.includes_trailing() {
            declarations.push(compile(
                "trailing declaration",
                &format!(r"auto\s+([a-z_]+)\(.*\)\s*->\s*{pointer}<\w+>"),
            )?);
            definitions.push(compile(
                "trailing definition",
                &format!(r"auto\s+{scope}::([a-z_]+)\(.*\)\s*->"),
            )?);
        }

        Ok(Self {
            declarations,
            definitions,
        })
    }
}

fn compile(name: &str, pattern: &str) -> DriftResult<Regex> {
    Regex::new(pattern).map_err(|source| DriftError::InvalidPattern {
        name: name.to_string(),
        source,
    })
}
