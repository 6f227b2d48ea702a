//! Detection of default and parameterized constructors.

use regex::Regex;

use super::{comments, destructor, is_identifier, CtorSig};

/// Returns true if the line contains the class name directly followed by an
/// empty parameter list. Destructor lines also satisfy this; callers filter
/// them out with the destructor check.
pub fn contains_default_ctor(line: &str, class_name: &str) -> bool {
    if !is_identifier(class_name) {
        return false;
    }
    let re = Regex::new(&format!(r"\b{class_name}\s*\(\s*\)")).expect("default ctor pattern");
    re.is_match(line)
}

/// Scans the header for a default-constructor declaration, ignoring comment
/// lines, block comments, and the destructor.
pub fn has_default_constructor(source: &str, class_name: &str) -> bool {
    let mut in_block_comment = false;

    for line in source.lines() {
        in_block_comment = comments::update_block_comment(line, in_block_comment);

        if comments::is_comment_line(line)
            || in_block_comment
            || destructor::contains_destructor(line, class_name)
        {
            continue;
        }

        if contains_default_ctor(line, class_name) {
            return true;
        }
    }

    false
}

/// Collects the parameterized constructors in declaration order. Inline
/// constructors are skipped; commented-out ones are flagged.
pub fn extract_param_constructors(source: &str, class_name: &str) -> Vec<CtorSig> {
    if !is_identifier(class_name) {
        return Vec::new();
    }

    let ctor = Regex::new(&format!(r"\b{class_name}\s*(\([^)]+\))")).expect("ctor pattern");
    let inline = Regex::new(r"\binline\b").expect("inline pattern");

    let mut result = Vec::new();
    let mut in_block_comment = false;

    for line in source.lines() {
        in_block_comment = comments::update_block_comment(line, in_block_comment);

        if destructor::contains_destructor(line, class_name) {
            continue;
        }

        let Some(caps) = ctor.captures(line) else {
            continue;
        };

        if inline.is_match(line) {
            continue;
        }

        result.push(CtorSig {
            parameters: caps[1].to_string(),
            in_comment: comments::is_comment_line(line) || in_block_comment,
        });
    }

    result
}
