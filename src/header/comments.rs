//! Comment handling shared by every header scanner. C++ headers mix `//`
//! lines, `/* ... */` blocks, and declarations commented out wholesale; the
//! scanners need to know which lines are live code.

/// Returns true if the line is a comment line (C++ or C style).
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
}

/// Advances the running block-comment flag across one line.
///
/// The flag reflects the state at the END of the line: a block opened and
/// closed on the same line leaves the flag clear, so the positions of the
/// last `/*` and `*/` decide.
pub fn update_block_comment(line: &str, active: bool) -> bool {
    match (line.rfind("/*"), line.rfind("*/")) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => active,
    }
}
