//! Source access abstraction.
//!
//! Tree construction never touches the filesystem directly; it goes
//! through [`SourceAccess`], which supplies the two operations resolution
//! needs: an existence test and a full-content read. The default
//! implementation is [`FsAccess`]; [`MemorySources`] serves embedded
//! stylesheets and tests.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::paths::lexical_normalize;

/// Capability to locate and read stylesheet sources by name.
pub trait SourceAccess {
    /// Check whether `path` names a readable source.
    fn exists(&self, path: &Path) -> bool;

    /// Read the full text content of `path`.
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Filesystem-backed source access.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAccess;

impl SourceAccess for FsAccess {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// In-memory source access backed by a map of path to content.
///
/// Lookups normalize `.` and `..` components the same way dependency
/// identity does, so `./a.less` and `a.less` hit the same entry.
///
/// # Example
///
/// ```ignore
/// let mut sources = MemorySources::new();
/// sources.insert("main.less", "@import \"a.less\";");
/// sources.insert("a.less", "body { color: red; }");
///
/// let engine = InlineEngine::with_access(sources);
/// let output = engine.inline("main.less")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySources {
    sources: HashMap<PathBuf, String>,
}

impl MemorySources {
    /// Create an empty source map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source under `path`, replacing any previous content.
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.sources
            .insert(lexical_normalize(&path.into()), content.into());
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Check whether no sources are registered.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl SourceAccess for MemorySources {
    fn exists(&self, path: &Path) -> bool {
        self.sources.contains_key(&lexical_normalize(path))
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        self.sources
            .get(&lexical_normalize(path))
            .cloned()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no registered source '{}'", path.display()),
                )
            })
    }
}
