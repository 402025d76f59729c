//! Stub synthesis for missing parser methods
//!
//! Every stub uses the owning pointer to the rule's PascalCase node type as
//! its return type (`block` -> `std::unique_ptr<Block>`). Real parsers often
//! return a base type such as `Statement` instead, so stubs are suggestions
//! that need review before they are pasted in.

use crate::analysis::DiscrepancyReport;
use crate::config::StubsConfig;
use crate::naming::to_pascal_case;
use crate::parsing::SignatureStyle;
use serde::{Deserialize, Serialize};

/// What a stub is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StubKind {
    /// One-line declaration for the interface
    Declaration,
    /// Method body with a placeholder return for the implementation
    Implementation,
}

/// A generated block of code for one missing rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StubFragment {
    pub rule: String,
    pub type_name: String,
    pub kind: StubKind,
    pub text: String,
}

/// Renders C++ stubs from the configured pointer type, scope and style.
#[derive(Debug, Clone)]
pub struct StubSynthesizer {
    owning_pointer: String,
    scope: String,
    placeholder_return: String,
    indent: String,
    style: SignatureStyle,
}

impl Default for StubSynthesizer {
    fn default() -> Self {
        Self::new(&StubsConfig::default(), SignatureStyle::default())
    }
}

impl StubSynthesizer {
    pub fn new(config: &StubsConfig, style: SignatureStyle) -> Self {
        Self {
            owning_pointer: config.owning_pointer.clone(),
            scope: config.scope.clone(),
            placeholder_return: config.placeholder_return.clone(),
            indent: " ".repeat(config.indent),
            style,
        }
    }

    /// Declaration stubs for `missing_declarations` followed by
    /// implementation stubs for `missing_implementations`, each sorted.
    pub fn synthesize(&self, report: &DiscrepancyReport) -> Vec<StubFragment> {
        let declarations = report
            .missing_declarations
            .iter()
            .map(|rule| self.declaration(rule));
        let implementations = report
            .missing_implementations
            .iter()
            .map(|rule| self.implementation(rule));
        declarations.chain(implementations).collect()
    }

    pub fn declaration(&self, rule: &str) -> StubFragment {
        let type_name = to_pascal_case(rule);
        let return_type = self.return_type(&type_name);
        let text = match self.style {
            SignatureStyle::Trailing => format!("{}auto {rule}() -> {return_type};", self.indent),
            SignatureStyle::Leading | SignatureStyle::Any => {
                format!("{}{return_type} {rule}();", self.indent)
            }
        };

        StubFragment {
            rule: rule.to_string(),
            type_name,
            kind: StubKind::Declaration,
            text,
        }
    }

    pub fn implementation(&self, rule: &str) -> StubFragment {
        let type_name = to_pascal_case(rule);
        let return_type = self.return_type(&type_name);
        let scope = &self.scope;
        let header = match self.style {
            SignatureStyle::Trailing => format!("auto {scope}::{rule}() -> {return_type} {{"),
            SignatureStyle::Leading | SignatureStyle::Any => {
                format!("{return_type} {scope}::{rule}() {{")
            }
        };
        let text = format!(
            "{header}\n{indent}// TODO: Implement parsing logic for {rule}\n{indent}return {placeholder};\n}}",
            indent = self.indent,
            placeholder = self.placeholder_return,
        );

        StubFragment {
            rule: rule.to_string(),
            type_name,
            kind: StubKind::Implementation,
            text,
        }
    }

    fn return_type(&self, type_name: &str) -> String {
        format!("{}<{type_name}>", self.owning_pointer)
    }
}
