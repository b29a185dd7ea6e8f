//! Top-level resolve-and-compose orchestration.

use std::path::Path;

use crate::Result;
use crate::access::{FsAccess, SourceAccess};
use crate::resolve::{compose, dedupe, flatten};
use crate::tree::SourceNode;

/// Resolves `@import` graphs and composes self-contained stylesheets.
///
/// The engine holds no state besides the source collaborator, so
/// independent inline calls share nothing and may run from multiple
/// threads when the collaborator allows it. Callers processing a batch of
/// destinations should isolate failures per destination; one failed
/// resolution says nothing about its siblings.
///
/// # Example
///
/// ```ignore
/// let engine = InlineEngine::new();
/// let output = engine.inline("styles/main.less")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct InlineEngine<A: SourceAccess = FsAccess> {
    access: A,
}

impl InlineEngine<FsAccess> {
    /// Create a filesystem-backed engine.
    pub fn new() -> Self {
        Self { access: FsAccess }
    }
}

impl<A: SourceAccess> InlineEngine<A> {
    /// Create an engine over a custom source collaborator.
    pub fn with_access(access: A) -> Self {
        Self { access }
    }

    /// The underlying source collaborator.
    pub fn access(&self) -> &A {
        &self.access
    }

    /// Resolve `source` and return the composed document with every
    /// import inlined.
    ///
    /// `source` may name a readable file or be raw stylesheet text.
    /// Fails if any transitive import is missing, unreadable, or cyclic;
    /// no partial output is produced.
    pub fn inline(&self, source: &str) -> Result<String> {
        let root = SourceNode::build(source, &self.access)?;
        let flattened = flatten(&root);
        let unique = dedupe(&flattened);

        tracing::debug!(
            "composing {}: {} dependencies, {} unique",
            root.identity(),
            flattened.len(),
            unique.len()
        );

        Ok(compose(&root, &flattened, &unique))
    }

    /// Inline several independent top-level files into one document.
    ///
    /// Builds a synthetic root importing each path in order, then inlines
    /// it. Paths are written into synthetic directives verbatim and so
    /// must not contain whitespace or quote characters.
    pub fn inline_paths(&self, paths: &[impl AsRef<Path>]) -> Result<String> {
        let mut synthetic = String::new();
        for path in paths {
            synthetic.push_str(&format!("@import \"{}\";\n", path.as_ref().display()));
        }
        self.inline(&synthetic)
    }
}
