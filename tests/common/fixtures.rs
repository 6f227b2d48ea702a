use anyhow::Result;
use std::fs;
use std::path::Path;

/// The demo header the generator's docs are built around.
pub const DEMO_HEADER: &str = include_str!("../../test-project/test.h");

/// A definition file with two members already implemented.
pub const PARTIAL_DEFINITION: &str = include_str!("../../test-project/test.cpp");

/// A small header with one class, no destructor, and a live operator.
pub const GREETER_HEADER: &str = r#"#if !defined(GREETER_H)
#define GREETER_H

class Greeter
{
public:
    Greeter();
    Greeter(int volume);
    void greet();
    int volume() const;
    Greeter &operator+=(int boost);

private:
    int level;
};
#endif // GREETER_H
"#;

/// Files that make up an on-disk fixture project.
#[derive(Debug)]
pub struct HeaderProject {
    files: Vec<(&'static str, &'static str)>,
}

impl HeaderProject {
    /// The demo header alone; the definition file does not exist yet.
    pub fn fresh() -> Self {
        Self {
            files: vec![("test.h", DEMO_HEADER)],
        }
    }

    /// The demo header next to a partially implemented definition file.
    pub fn partially_implemented() -> Self {
        Self {
            files: vec![("test.h", DEMO_HEADER), ("test.cpp", PARTIAL_DEFINITION)],
        }
    }

    pub fn create_in(&self, dir: &Path) -> Result<()> {
        for (name, content) in &self.files {
            fs::write(dir.join(name), content)?;
        }
        Ok(())
    }
}
