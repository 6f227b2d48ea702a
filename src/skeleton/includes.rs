//! The include section at the top of the generated definition file.

use regex::Regex;

/// Lifts `#include` and `using` lines out of the existing definition file.
pub fn extract_includes(definition: &str) -> Vec<String> {
    let include = Regex::new(r#"^\s*(#include\s*<[^>]*>|#include\s*"[^"]*")\s*$"#)
        .expect("include pattern");
    let using = Regex::new(r"^\s*using\b").expect("using pattern");

    definition
        .lines()
        .filter(|line| include.is_match(line) || using.is_match(line))
        .map(str::to_string)
        .collect()
}

/// Builds the include section: whatever the existing definition file already
/// pulls in, or the default block for a fresh file.
pub fn include_section(definition: &str, file_stem: &str) -> String {
    let found = extract_includes(definition);

    if found.is_empty() {
        format!("#include \"{file_stem}.h\"\n#include <iostream>\nusing namespace std;\n\n")
    } else {
        let mut section = found.join("\n");
        section.push_str("\n\n");
        section
    }
}
