//! Drift report model and text rendering

use crate::analysis::DiscrepancyReport;
use crate::synthesis::{StubFragment, StubKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message printed when nothing is missing
pub const IN_SYNC_MESSAGE: &str =
    "The parser appears to be in sync with the grammar. No missing items found.";

/// Symbol counts seen while analyzing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolCounts {
    pub rules: usize,
    pub tokens: usize,
    pub declared: usize,
    pub implemented: usize,
}

/// Everything one analysis run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftReport {
    pub grammar_path: String,
    pub header_path: String,
    pub source_path: String,
    pub counts: SymbolCounts,
    pub discrepancies: DiscrepancyReport,
    pub stubs: Vec<StubFragment>,
}

impl DriftReport {
    pub fn is_in_sync(&self) -> bool {
        self.discrepancies.is_in_sync()
    }

    pub fn declaration_stubs(&self) -> impl Iterator<Item = &StubFragment> {
        self.stubs
            .iter()
            .filter(|stub| stub.kind == StubKind::Declaration)
    }

    pub fn implementation_stubs(&self) -> impl Iterator<Item = &StubFragment> {
        self.stubs
            .iter()
            .filter(|stub| stub.kind == StubKind::Implementation)
    }
}

impl fmt::Display for DriftReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_in_sync() {
            return writeln!(f, "{IN_SYNC_MESSAGE}");
        }

        writeln!(f, "---Analysis Complete---")?;
        writeln!(f)?;
        writeln!(
            f,
            "The following are suggestions for what might be missing from your parser."
        )?;
        writeln!(
            f,
            "Please review them carefully before adding to your code."
        )?;
        writeln!(f)?;

        if !self.discrepancies.missing_declarations.is_empty() {
            writeln!(
                f,
                "---Missing Method Declarations (for {})---",
                self.header_path
            )?;
            for stub in self.declaration_stubs() {
                writeln!(f, "{}", stub.text)?;
            }
            writeln!(f)?;
        }

        if !self.discrepancies.missing_implementations.is_empty() {
            writeln!(
                f,
                "---Missing Method Implementations (for {})---",
                self.source_path
            )?;
            for stub in self.implementation_stubs() {
                writeln!(f, "{}", stub.text)?;
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::StubSynthesizer;

    fn report_for(missing_decl: &[&str], missing_impl: &[&str]) -> DriftReport {
        let discrepancies = DiscrepancyReport {
            missing_declarations: missing_decl.iter().map(|s| s.to_string()).collect(),
            missing_implementations: missing_impl.iter().map(|s| s.to_string()).collect(),
        };
        let stubs = StubSynthesizer::default().synthesize(&discrepancies);
        DriftReport {
            grammar_path: "grammar/Zephyr.g4".to_string(),
            header_path: "include/Parser.h".to_string(),
            source_path: "src/Parser.cpp".to_string(),
            counts: SymbolCounts::default(),
            discrepancies,
            stubs,
        }
    }

    #[test]
    fn test_in_sync_text() {
        let report = report_for(&[], &[]);
        assert_eq!(report.to_string(), format!("{IN_SYNC_MESSAGE}\n"));
    }

    #[test]
    fn test_full_report_text() {
        let report = report_for(&["block"], &["expr_statement", "block"]);
        let expected = "\
---Analysis Complete---

The following are suggestions for what might be missing from your parser.
Please review them carefully before adding to your code.

---Missing Method Declarations (for include/Parser.h)---
    std::unique_ptr<Block> block();

---Missing Method Implementations (for src/Parser.cpp)---
std::unique_ptr<Block> Parser::block() {
    // TODO: Implement parsing logic for block
    return nullptr;
}

std::unique_ptr<ExprStatement> Parser::expr_statement() {
    // TODO: Implement parsing logic for expr_statement
    return nullptr;
}

";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_only_implementations_missing_skips_declaration_section() {
        let report = report_for(&[], &["block"]);
        let text = report.to_string();
        assert!(!text.contains("Missing Method Declarations"));
        assert!(text.contains("---Missing Method Implementations (for src/Parser.cpp)---"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let a = report_for(&["b", "a"], &["c", "a"]).to_string();
        let b = report_for(&["a", "b"], &["a", "c"]).to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn test_report_serializes_stub_kinds() {
        let report = report_for(&["block"], &[]);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""kind":"declaration""#));
        assert!(json.contains(r#""missing_declarations":["block"]"#));
    }
}
