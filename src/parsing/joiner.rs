//! Optional pass that folds multi-line signatures onto one line

/// Upper bound on physical lines folded into a single logical line.
const MAX_JOINED_LINES: usize = 8;

/// Join a line whose parentheses are unbalanced (more `(` than `)`) with the
/// following lines until the parentheses balance, so that
///
/// ```text
/// std::unique_ptr<Call> call_expression(
///     std::unique_ptr<Expr> callee);
/// ```
///
/// becomes one line the signature patterns can see. At most
/// `MAX_JOINED_LINES` physical lines are folded; past that the lines are
/// emitted unchanged.
pub fn join_multiline_signatures(source: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let mut out = Vec::with_capacity(lines.len());
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];
        let mut depth = paren_balance(line);

        if depth <= 0 {
            out.push(line.to_string());
            index += 1;
            continue;
        }

        let mut joined = line.trim_end().to_string();
        let mut end = index + 1;
        while depth > 0 && end < lines.len() && end - index < MAX_JOINED_LINES {
            let next = lines[end].trim();
            if !next.is_empty() {
                joined.push(' ');
                joined.push_str(next);
            }
            depth += paren_balance(next);
            end += 1;
        }

        if depth > 0 {
            out.push(line.to_string());
            index += 1;
        } else {
            out.push(joined);
            index = end;
        }
    }

    out.join("\n")
}

fn paren_balance(line: &str) -> i32 {
    line.chars().fold(0, |depth, c| match c {
        '(' => depth + 1,
        ')' => depth - 1,
        _ => depth,
    })
}
