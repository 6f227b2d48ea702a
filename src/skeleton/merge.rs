//! Recovery of implementations the user already wrote in the definition
//! file. A preserved block is carried into the regenerated file verbatim in
//! place of a stub.

use crate::header::comments;

/// Finds the implementation block for the given out-of-line signature, if
/// present. Matching is whitespace-insensitive so formatting differences
/// between the expected signature and the user's code do not matter; the
/// block runs until the braces balance. A block living inside a block
/// comment is returned wrapped in `/*` and `*/` so it stays commented out.
pub fn find_implementation(definition: &str, signature: &str) -> Option<Vec<String>> {
    let key = squash(signature);
    if key.is_empty() {
        return None;
    }

    let lines: Vec<&str> = definition.lines().collect();
    let mut in_block_comment = false;

    for (index, line) in lines.iter().enumerate() {
        in_block_comment = comments::update_block_comment(line, in_block_comment);

        if !signature_matches(line, &key) {
            continue;
        }

        return Some(collect_block(&lines, index, in_block_comment));
    }

    None
}

/// A line carries the signature if, with all whitespace removed, it starts
/// with the squashed signature and continues only with the opening brace.
/// The exact-remainder rule keeps a `const` overload from being mistaken
/// for its non-const sibling.
fn signature_matches(line: &str, key: &str) -> bool {
    let squashed = squash(line);
    match squashed.strip_prefix(key) {
        Some(rest) => rest.is_empty() || rest.starts_with('{'),
        None => false,
    }
}

fn collect_block(lines: &[&str], start: usize, in_block_comment: bool) -> Vec<String> {
    let mut result = Vec::new();
    if in_block_comment {
        result.push("/*".to_string());
    }

    let mut balance: i32 = 0;
    let mut seen_open = false;
    let mut block_flag = in_block_comment;

    for line in &lines[start..] {
        block_flag = comments::update_block_comment(line, block_flag);

        // Comment lines are carried through without counting their braces.
        if comments::is_comment_line(line) {
            result.push(line.to_string());
            continue;
        }

        for c in line.chars() {
            match c {
                '{' => {
                    balance += 1;
                    seen_open = true;
                }
                '}' => balance -= 1,
                _ => {}
            }
        }

        result.push(line.to_string());

        if seen_open && balance == 0 {
            if block_flag {
                result.push("*/".to_string());
            }
            return result;
        }
    }

    result
}

fn squash(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
