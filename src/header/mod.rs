//! Line-based analysis of a C++ header into the data the skeleton assembly
//! works from: class name, method signatures, constructors, destructor, and
//! operator overloads.

pub mod comments;
pub mod constructors;
pub mod destructor;
pub mod keywords;
pub mod methods;
pub mod operators;

use anyhow::{anyhow, Result};
use log::debug;
use regex::Regex;
use serde::Serialize;

/// One method declaration lifted from the class body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSig {
    pub return_type: String,
    pub name: String,
    /// Parameter list including the surrounding parentheses, as written.
    pub parameters: String,
    pub is_virtual: bool,
    pub is_const: bool,
    /// The declaration sits on a commented-out line. No stub is generated
    /// for it, but an existing implementation is still preserved.
    pub in_comment: bool,
}

/// A constructor taking parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtorSig {
    pub parameters: String,
    pub in_comment: bool,
}

/// One operator-overload declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorSig {
    pub return_type: String,
    pub symbol: String,
    pub parameters: String,
    pub is_const: bool,
    pub in_comment: bool,
}

/// Everything the generator needs to know about a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderInfo {
    pub class_name: String,
    pub has_default_constructor: bool,
    pub constructors: Vec<CtorSig>,
    pub has_destructor: bool,
    pub methods: Vec<MethodSig>,
    pub operators: Vec<OperatorSig>,
}

/// Extracts the name of the first class declared in the file.
pub fn class_name(source: &str) -> Option<String> {
    let re = Regex::new(r"class\s+([A-Za-z_][A-Za-z0-9_]*)").expect("class pattern");
    re.captures(source).map(|c| c[1].to_string())
}

/// Parses a header into a [`HeaderInfo`]. A file without a class declaration
/// is an error: every downstream signature needs the class name.
pub fn parse(source: &str) -> Result<HeaderInfo> {
    let Some(class_name) = class_name(source) else {
        return Err(anyhow!("No class declaration found in header"));
    };

    let info = HeaderInfo {
        has_default_constructor: constructors::has_default_constructor(source, &class_name),
        constructors: constructors::extract_param_constructors(source, &class_name),
        has_destructor: destructor::has_destructor(source, &class_name),
        methods: methods::extract_methods(source),
        operators: operators::extract_operators(source),
        class_name,
    };

    debug!(
        "Parsed class {}: {} methods, {} constructors, {} operators",
        info.class_name,
        info.methods.len(),
        info.constructors.len(),
        info.operators.len()
    );

    Ok(info)
}

/// Class names get interpolated into scan patterns, so they must be plain
/// identifiers.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Collapses a raw return-type chunk to canonical form: single spaces between
/// words, any pointer/reference symbols gathered at the end (`unsigned int *`).
pub(crate) fn normalize_return_type(raw: &str) -> String {
    let mut words: Vec<&str> = Vec::new();
    let mut symbols = String::new();
    for token in raw.split_whitespace() {
        let stripped = token.trim_end_matches(['*', '&']);
        symbols.push_str(&token[stripped.len()..]);
        if !stripped.is_empty() {
            words.push(stripped);
        }
    }
    let mut out = words.join(" ");
    if !symbols.is_empty() {
        out.push(' ');
        out.push_str(&symbols);
    }
    out
}
