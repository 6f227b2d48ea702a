/// File extension a header must carry before it is accepted for generation.
pub const HEADER_EXTENSION: &str = "h";

/// File extension of the generated definition file.
pub const DEFINITION_EXTENSION: &str = "cpp";

/// Indentation used inside generated stub bodies.
pub const STUB_INDENT: &str = "\t";
