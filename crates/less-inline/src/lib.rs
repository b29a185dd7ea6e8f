//! LESS `@import` inlining.
//!
//! This crate resolves a stylesheet's `@import` dependency graph and
//! flattens it into a single self-contained document, featuring:
//!
//! - **Statement parsing**: recognize `@import` directives, their
//!   `(less)`/`(css)` options, and trailing media queries
//! - **Recursive resolution**: eagerly build the full import tree,
//!   resolving every target relative to its importing file
//! - **Ordered flattening**: post-order traversal keeps every dependency
//!   ahead of the files that import it
//! - **Duplicate collapsing**: repeated imports of the same file resolve
//!   through a fixed precedence policy
//! - **Composition**: each surviving import statement is substituted with
//!   its resolved content; dropped duplicates are deleted
//!
//! # Example
//!
//! ```ignore
//! use less_inline::prelude::*;
//!
//! let engine = InlineEngine::new();
//! let output = engine.inline("styles/main.less")?;
//! std::fs::write("dist/main.less", output)?;
//! ```

pub mod access;
pub mod resolve;
pub mod statement;
pub mod tree;

mod error;
mod paths;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::access::{FsAccess, MemorySources, SourceAccess};
    pub use crate::resolve::{Dependency, InlineEngine, compose, dedupe, flatten};
    pub use crate::statement::{ImportKind, ImportStatement, StatementParser};
    pub use crate::tree::{ResolvedImport, SourceNode};
}
