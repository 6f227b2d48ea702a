/// C++ keywords that can appear inside a declaration but never name a member.
pub const RESERVED_WORDS: &[&str] = &[
    "void", "auto", "int", "char", "float", "double", "short", "long", "unsigned", "signed",
    "const", "volatile", "inline", "virtual",
];

pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}
