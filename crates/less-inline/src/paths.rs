//! Path normalization used for dependency identity.

use std::path::{Component, Path, PathBuf};

/// Normalize `.` and `..` components lexically, without touching the
/// filesystem.
///
/// Two import targets that denote the same file through different spellings
/// (`./a.less` vs `a.less`, `sub/../a.less` vs `a.less`) normalize to the
/// same path. Leading `..` components that cannot be resolved are kept.
pub(crate) fn lexical_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}
