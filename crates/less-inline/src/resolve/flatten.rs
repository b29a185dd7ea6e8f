//! Post-order linearization of a source tree.

use std::path::PathBuf;

use crate::statement::{ImportKind, ImportStatement};
use crate::tree::SourceNode;

/// A flattened, resolved reference to one imported source.
///
/// Created during flattening; afterwards only filtered and reordered,
/// never mutated.
#[derive(Debug, Clone)]
pub struct Dependency {
    /// The directive that caused inclusion.
    pub statement: ImportStatement,
    /// The filename the directive resolved to.
    pub path: PathBuf,
    /// The imported source's full content.
    pub content: String,
}

impl Dependency {
    /// Routing classification carried by the originating statement.
    pub fn kind(&self) -> ImportKind {
        self.statement.kind
    }
}

/// Linearize `root`'s dependencies, deepest first.
///
/// Pure function of the tree. For each import (in order of appearance in
/// the importing source), the import's own subtree is emitted before the
/// import itself, so everything a file depends on appears before that
/// file's entry and sibling subtrees keep their left-to-right order. The
/// root is the composition destination, not a dependency of itself, and
/// is never emitted.
pub fn flatten(root: &SourceNode) -> Vec<Dependency> {
    let mut records = vec![];
    collect(root, &mut records);
    records
}

fn collect(node: &SourceNode, records: &mut Vec<Dependency>) {
    for import in &node.imports {
        collect(&import.node, records);
        records.push(Dependency {
            statement: import.statement.clone(),
            path: import.path.clone(),
            content: import.node.content.clone(),
        });
    }
}
