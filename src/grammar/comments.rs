//! Comment removal for grammar sources

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Matches, leftmost first: a single-line quoted literal (kept), a line
/// comment, a closed block comment, or an unterminated block comment running
/// to end of input.
static COMMENT_OR_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)(?P<literal>'(?:[^'\\\n]|\\.)*'|"(?:[^"\\\n]|\\.)*")|//[^\n]*|/\*.*?\*/|/\*.*"#,
    )
    .expect("Invalid regex")
});

/// Remove `//` line comments and `/* */` block comments from grammar text.
///
/// Quoted literals are left untouched, so lexer rules like
/// `LINE_COMMENT: '//' ~[\r\n]* -> skip;` survive intact. Newlines inside a
/// block comment are kept so that a definition following the comment still
/// starts its own line.
pub fn strip_comments(source: &str) -> Cow<'_, str> {
    COMMENT_OR_LITERAL.replace_all(source, |caps: &Captures<'_>| {
        if let Some(literal) = caps.name("literal") {
            return literal.as_str().to_string();
        }
        caps[0].chars().filter(|c| *c == '\n').collect::<String>()
    })
}
