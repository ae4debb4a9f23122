//! Filesystem module lookup.

use std::io;
use std::path::PathBuf;

use lull_eval::{ModuleSource, SourceProvider};

/// File run when a directory is given.
pub const ENTRY_FILE: &str = "main.ll";

pub const MODULE_EXTENSION: &str = "ll";

/// Fallback directory searched after the program root, relative to the
/// working directory.
pub const RESOURCE_DIR: &str = "resource";

/// `std` becomes `std.ll`.
pub fn module_file_name(module: &str) -> String {
    format!("{module}.{MODULE_EXTENSION}")
}

/// Finds `<m>.ll` in the program root, then in the resource directory.
///
/// Module names are identifiers, so they never contain separators.
#[derive(Clone, Debug)]
pub struct FsSourceProvider {
    root: PathBuf,
    resource_dir: PathBuf,
}

impl FsSourceProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsSourceProvider {
            root: root.into(),
            resource_dir: PathBuf::from(RESOURCE_DIR),
        }
    }

    #[must_use]
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = dir.into();
        self
    }
}

impl SourceProvider for FsSourceProvider {
    fn fetch(&self, module: &str) -> Option<ModuleSource> {
        let file_name = module_file_name(module);
        for path in [self.root.join(&file_name), self.resource_dir.join(&file_name)] {
            match std::fs::read_to_string(&path) {
                Ok(code) => {
                    tracing::debug!(module, path = %path.display(), "found module source");
                    return Some(ModuleSource {
                        code,
                        label: path.display().to_string(),
                    });
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => {
                    tracing::warn!(%err, path = %path.display(), "failed to read module source");
                }
            }
        }
        None
    }
}
