//! Destructor detection.

use regex::Regex;

use super::{comments, is_identifier};

/// Returns true if the line contains a tilde followed by the class name and
/// an empty parameter list.
pub fn contains_destructor(line: &str, class_name: &str) -> bool {
    if !is_identifier(class_name) {
        return false;
    }
    let re = Regex::new(&format!(r"~\s*{class_name}\s*\(\s*\)")).expect("destructor pattern");
    re.is_match(line)
}

/// Scans the header for a destructor declaration, ignoring comments.
pub fn has_destructor(source: &str, class_name: &str) -> bool {
    let mut in_block_comment = false;

    for line in source.lines() {
        in_block_comment = comments::update_block_comment(line, in_block_comment);

        if comments::is_comment_line(line) || in_block_comment {
            continue;
        }

        if contains_destructor(line, class_name) {
            return true;
        }
    }

    false
}
