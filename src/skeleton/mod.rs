//! Assembly of the definition-file content from a parsed header and the
//! current contents of the definition file.

pub mod includes;
pub mod merge;

use crate::config::STUB_INDENT;
use crate::header::{HeaderInfo, MethodSig, OperatorSig};

/// The assembled definition file plus counts for the tool report.
#[derive(Debug)]
pub struct Skeleton {
    pub content: String,
    /// Members that received a fresh TODO stub.
    pub generated: usize,
    /// Members whose existing implementation was carried over.
    pub preserved: usize,
}

/// Builds the definition file. Fixed order: include section, default
/// constructor, destructor, parameterized constructors, methods, operators.
pub fn build(header: &HeaderInfo, definition: &str, file_stem: &str) -> Skeleton {
    let class = &header.class_name;
    let mut assembler = Assembler::new(definition);

    assembler
        .out
        .push_str(&includes::include_section(definition, file_stem));

    if header.has_default_constructor {
        assembler.member(
            &format!("{class}::{class}()"),
            "// TODO : implement the default constructor",
            false,
        );
    }

    if header.has_destructor {
        assembler.member(
            &format!("{class}::~{class}()"),
            "// TODO : implement the destructor",
            false,
        );
    }

    for ctor in &header.constructors {
        assembler.member(
            &format!("{class}::{class}{}", ctor.parameters),
            "// TODO : implement the constructor with parameters",
            ctor.in_comment,
        );
    }

    for method in &header.methods {
        assembler.member(
            &method_signature(class, method),
            &format!("// TODO : implement the method : {}", method.name),
            method.in_comment,
        );
    }

    for op in &header.operators {
        assembler.member(
            &operator_signature(class, op),
            &format!("// TODO : implement the operator : {}", op.symbol),
            op.in_comment,
        );
    }

    assembler.finish()
}

/// The out-of-line signature for a method. `virtual` is dropped (it only
/// belongs in the class body); a trailing `const` is kept.
fn method_signature(class: &str, method: &MethodSig) -> String {
    let mut signature = format!(
        "{}{}{class}::{}{}",
        method.return_type,
        return_type_separator(&method.return_type),
        method.name,
        method.parameters
    );
    if method.is_const {
        signature.push_str(" const");
    }
    signature
}

fn operator_signature(class: &str, op: &OperatorSig) -> String {
    let mut signature = format!(
        "{}{}{class}::operator{}{}",
        op.return_type,
        return_type_separator(&op.return_type),
        op.symbol,
        op.parameters
    );
    if op.is_const {
        signature.push_str(" const");
    }
    signature
}

/// `unsigned int *Test::add(...)` rather than `unsigned int * Test::add(...)`.
fn return_type_separator(return_type: &str) -> &'static str {
    if return_type.ends_with('*') || return_type.ends_with('&') {
        ""
    } else {
        " "
    }
}

struct Assembler<'a> {
    definition: &'a str,
    out: String,
    generated: usize,
    preserved: usize,
}

impl<'a> Assembler<'a> {
    fn new(definition: &'a str) -> Self {
        Self {
            definition,
            out: String::new(),
            generated: 0,
            preserved: 0,
        }
    }

    /// Emits one member: the preserved implementation when the definition
    /// file already has it, otherwise a TODO stub. A member whose
    /// declaration is commented out gets no stub.
    fn member(&mut self, signature: &str, todo_comment: &str, declaration_commented: bool) {
        if let Some(block) = merge::find_implementation(self.definition, signature) {
            for line in block {
                self.out.push_str(&line);
                self.out.push('\n');
            }
            self.out.push('\n');
            self.preserved += 1;
        } else if !declaration_commented {
            self.out.push_str(signature);
            self.out.push_str("\n{\n");
            self.out.push_str(STUB_INDENT);
            self.out.push_str(todo_comment);
            self.out.push_str("\n}\n\n");
            self.generated += 1;
        }
    }

    fn finish(self) -> Skeleton {
        let mut content = self.out.trim_end().to_string();
        content.push('\n');
        Skeleton {
            content,
            generated: self.generated,
            preserved: self.preserved,
        }
    }
}
