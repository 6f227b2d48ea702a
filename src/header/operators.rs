//! Extraction of operator-overload declarations.

use regex::Regex;

use super::{comments, normalize_return_type, OperatorSig};

/// Operator symbols the generator recognizes, longest alternatives first so
/// `==` is not read as two `=`.
const SYMBOLS: &str = r"==|!=|<=|>=|\+\+|--|\+=|-=|\*=|/=|%=|<<|>>|=|<|>|!";

fn declaration_pattern() -> Regex {
    Regex::new(&format!(
        r"(?:virtual\s+)?((?:[A-Za-z_]\w*[*&]*\s+)+(?:[*&]+\s*)?)operator\s*({SYMBOLS})\s*(\([^)]*\))\s*(const)?"
    ))
    .expect("operator declaration pattern")
}

pub fn extract_operators(source: &str) -> Vec<OperatorSig> {
    let pattern = declaration_pattern();
    let inline = Regex::new(r"\binline\b").expect("inline pattern");

    let mut result = Vec::new();
    let mut in_block_comment = false;

    for line in source.lines() {
        in_block_comment = comments::update_block_comment(line, in_block_comment);

        if line.trim_start().starts_with('#') {
            continue;
        }

        if !line.contains("operator") || inline.is_match(line) {
            continue;
        }

        let Some(caps) = pattern.captures(line) else {
            continue;
        };

        result.push(OperatorSig {
            return_type: normalize_return_type(&caps[1]),
            symbol: caps[2].to_string(),
            parameters: strip_default_values(&caps[3]),
            is_const: caps.get(4).is_some(),
            in_comment: comments::is_comment_line(line) || in_block_comment,
        });
    }

    result
}

/// Removes default values from a parameter list; the out-of-line definition
/// must not repeat them. `(int a = 5, int b)` becomes `(int a, int b)`.
fn strip_default_values(parameters: &str) -> String {
    if !parameters.contains('=') {
        return parameters.to_string();
    }

    let inner = parameters
        .trim_start_matches('(')
        .trim_end_matches(')')
        .split(',')
        .map(|param| param.split('=').next().unwrap_or(param).trim())
        .collect::<Vec<_>>()
        .join(", ");

    format!("({inner})")
}
