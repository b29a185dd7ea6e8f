//! Final text composition.

use crate::resolve::Dependency;
use crate::tree::SourceNode;

/// Merge a resolved tree into one self-contained document.
///
/// Starts from the root's own content. Unique records are substituted in
/// reverse flatten order, nearest the root first, so each parent's
/// inlined content exposes its children's statements before those
/// children are processed; substitution replaces the first textual
/// occurrence of the statement's raw text with the record's content.
/// Afterwards the full flattened list is walked and one remaining
/// occurrence of each record's statement is deleted, clearing out the
/// duplicates that lost deduplication.
///
/// No import statement from the transitive source set survives in the
/// output: each is either replaced by content or deleted.
pub fn compose(root: &SourceNode, flattened: &[Dependency], unique: &[Dependency]) -> String {
    let mut output = root.content.clone();

    for record in unique.iter().rev() {
        replace_first(&mut output, &record.statement.raw, &record.content);
    }

    for record in flattened {
        replace_first(&mut output, &record.statement.raw, "");
    }

    output
}

/// Replace the first occurrence of `needle` in `text`, if any.
fn replace_first(text: &mut String, needle: &str, replacement: &str) {
    if let Some(start) = text.find(needle) {
        text.replace_range(start..start + needle.len(), replacement);
    }
}
