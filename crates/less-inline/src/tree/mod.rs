//! Recursive source tree construction.

mod node;

pub use node::{ResolvedImport, SourceNode};
