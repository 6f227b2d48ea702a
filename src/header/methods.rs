//! Extraction of plain method declarations from the class body.

use regex::Regex;

use super::{comments, keywords, normalize_return_type, MethodSig};

/// Matches a method declaration: optional `virtual`, a return type that may
/// span several words and end in `*`/`&`, the method name, a parameter list,
/// an optional trailing `const`, and the terminating semicolon. Members
/// defined in the header (a body instead of `;`) never match.
fn declaration_pattern() -> Regex {
    Regex::new(
        r"^\s*(virtual\s+)?((?:[A-Za-z_]\w*[*&]*\s+)+(?:[*&]+\s*)?)([A-Za-z_]\w*)\s*(\([^)]*\))\s*(const)?\s*;",
    )
    .expect("method declaration pattern")
}

pub fn extract_methods(source: &str) -> Vec<MethodSig> {
    let pattern = declaration_pattern();
    let inline = Regex::new(r"\binline\b").expect("inline pattern");

    let mut result = Vec::new();
    let mut in_block_comment = false;

    for line in source.lines() {
        in_block_comment = comments::update_block_comment(line, in_block_comment);

        if line.trim_start().starts_with('#') {
            continue;
        }

        // Inline members live in the header; nothing to generate.
        if inline.is_match(line) {
            continue;
        }

        let in_comment = comments::is_comment_line(line) || in_block_comment;
        let text = strip_line_comment_marker(line);

        let Some(caps) = pattern.captures(text) else {
            continue;
        };

        let name = caps[3].to_string();
        if keywords::is_reserved_word(&name) {
            continue;
        }

        result.push(MethodSig {
            return_type: normalize_return_type(&caps[2]),
            name,
            parameters: caps[4].to_string(),
            is_virtual: caps.get(1).is_some(),
            is_const: caps.get(5).is_some(),
            in_comment,
        });
    }

    result
}

/// Drops a leading `//` so a commented-out declaration still matches the
/// anchored pattern (it is flagged via `in_comment` instead of skipped).
fn strip_line_comment_marker(line: &str) -> &str {
    let trimmed = line.trim_start();
    trimmed.strip_prefix("//").unwrap_or(trimmed)
}
