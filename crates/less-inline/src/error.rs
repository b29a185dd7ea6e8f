//! Error types for import resolution.

use std::path::PathBuf;

/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving an import tree.
///
/// All of these abort the build of the tree they occur in; flattening,
/// deduplication, and composition operate on an already-valid tree and do
/// not fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Empty or blank source handed to tree construction.
    #[error("invalid source: {0}")]
    InvalidSource(String),

    /// An import names a file that does not exist.
    #[error("import '{}' not found (imported from {importer})", .path.display())]
    MissingImport { importer: String, path: PathBuf },

    /// An import names a file that exists but cannot be read.
    #[error("failed to read '{}' (imported from {importer}): {source}", .path.display())]
    Read {
        importer: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file transitively imports itself.
    #[error("cyclic import of '{}': {chain}", .path.display())]
    CyclicImport { path: PathBuf, chain: String },

    /// An import directive matched without an extractable filename.
    ///
    /// The recognition grammar guarantees the filename is present whenever
    /// a statement matches, so this indicates a logic error rather than
    /// bad input.
    #[error("malformed import statement: {0}")]
    MalformedStatement(String),
}

impl Error {
    /// Create a missing-import error.
    pub fn missing_import(importer: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::MissingImport {
            importer: importer.into(),
            path: path.into(),
        }
    }

    /// Create a read error.
    pub fn read(
        importer: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Read {
            importer: importer.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a cyclic-import error from the in-progress resolution stack.
    pub fn cyclic(path: impl Into<PathBuf>, in_progress: &[PathBuf]) -> Self {
        let path = path.into();
        let chain = in_progress
            .iter()
            .map(|p| p.display().to_string())
            .chain(std::iter::once(path.display().to_string()))
            .collect::<Vec<_>>()
            .join(" -> ");
        Self::CyclicImport { path, chain }
    }
}
