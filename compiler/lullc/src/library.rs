//! Library modules embedded in the binary.

use lull_eval::{ModuleSource, SourceProvider};

use crate::providers::module_file_name;

/// Directory of bundled modules inside a [`Library`].
pub const LIBRARY_DIR: &str = "std";

/// One bundled source file, named relative to the bundle root
/// (`std/std.ll`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryFile {
    pub file_name: String,
    pub content: String,
}

impl LibraryFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        LibraryFile {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// A set of bundled modules, consulted after the filesystem.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Library {
    pub files: Vec<LibraryFile>,
}

impl Library {
    /// The standard library shipped with the interpreter.
    pub fn default_libraries() -> Self {
        Library {
            files: vec![LibraryFile::new(
                "std/std.ll",
                include_str!("../library/std/std.ll"),
            )],
        }
    }

    pub fn find(&self, file_name: &str) -> Option<&LibraryFile> {
        self.files.iter().find(|file| file.file_name == file_name)
    }
}

impl SourceProvider for Library {
    fn fetch(&self, module: &str) -> Option<ModuleSource> {
        let file_name = format!("{LIBRARY_DIR}/{}", module_file_name(module));
        self.find(&file_name).map(|file| ModuleSource {
            code: file.content.clone(),
            label: format!("bundle:{file_name}"),
        })
    }
}
