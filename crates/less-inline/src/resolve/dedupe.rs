//! Duplicate-dependency resolution.

use crate::paths::lexical_normalize;
use crate::resolve::Dependency;
use crate::statement::ImportKind;

/// Collapse duplicate dependencies, preserving first-seen order.
///
/// Two records are duplicates when their resolved paths denote the same
/// file (after `.`/`..` normalization, so `./a` and `a` compare equal)
/// and their contents are identical.
///
/// Conflicts resolve by a fixed precedence:
///
/// 1. an unconditional import replaces an accepted media-qualified import
///    of the same file, in place;
/// 2. a media-qualified import never displaces an accepted unconditional
///    one;
/// 3. two media-qualified imports of the same file coexist, since they
///    apply under distinct conditions;
/// 4. with no media on either side, a stylesheet import replaces an
///    accepted plain-CSS import;
/// 5. with no media on either side, a plain-CSS import never displaces an
///    accepted stylesheet import;
/// 6. otherwise the earlier record wins.
///
/// The result is deterministic and order-stable: the same input list
/// always collapses to the same output, and a record that wins keeps the
/// position of the record it displaced.
pub fn dedupe(records: &[Dependency]) -> Vec<Dependency> {
    let mut accepted: Vec<Dependency> = Vec::with_capacity(records.len());

    'records: for record in records {
        for existing in accepted.iter_mut() {
            if !is_duplicate(existing, record) {
                continue;
            }

            match (
                existing.statement.media.is_some(),
                record.statement.media.is_some(),
            ) {
                (true, false) => {
                    tracing::debug!(
                        "unconditional import of '{}' replaces media-qualified one",
                        record.path.display()
                    );
                    *existing = record.clone();
                    continue 'records;
                }
                (false, true) => {
                    tracing::debug!(
                        "dropping media-qualified duplicate of '{}'",
                        record.path.display()
                    );
                    continue 'records;
                }
                // Distinct conditions coexist; keep scanning in case an
                // unconditional duplicate was accepted further on.
                (true, true) => continue,
                (false, false) => {
                    if existing.kind() == ImportKind::Css && record.kind() == ImportKind::Less {
                        tracing::debug!(
                            "stylesheet import of '{}' replaces plain-CSS one",
                            record.path.display()
                        );
                        *existing = record.clone();
                    } else {
                        tracing::debug!("dropping duplicate import of '{}'", record.path.display());
                    }
                    continue 'records;
                }
            }
        }

        accepted.push(record.clone());
    }

    accepted
}

fn is_duplicate(a: &Dependency, b: &Dependency) -> bool {
    a.content == b.content && lexical_normalize(&a.path) == lexical_normalize(&b.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::ImportStatement;
    use std::path::PathBuf;

    fn record(raw: &str, path: &str, kind: ImportKind, media: Option<&str>) -> Dependency {
        Dependency {
            statement: ImportStatement {
                raw: raw.to_string(),
                target: path.to_string(),
                kind,
                media: media.map(str::to_string),
            },
            path: PathBuf::from(path),
            content: ".shared {}".to_string(),
        }
    }

    fn less(path: &str, media: Option<&str>) -> Dependency {
        let raw = match media {
            Some(m) => format!("@import \"{path}\" {m};"),
            None => format!("@import \"{path}\";"),
        };
        record(&raw, path, ImportKind::Less, media)
    }

    fn css(path: &str) -> Dependency {
        record(&format!("@import \"{path}\";"), path, ImportKind::Css, None)
    }

    #[test]
    fn distinct_files_all_survive() {
        let records = [less("a.less", None), less("b.less", None)];
        assert_eq!(dedupe(&records).len(), 2);
    }

    #[test]
    fn same_path_different_content_is_not_a_duplicate() {
        let mut other = less("a.less", None);
        other.content = ".other {}".to_string();

        let records = [less("a.less", None), other];
        assert_eq!(dedupe(&records).len(), 2);
    }

    #[test]
    fn path_spellings_compare_equivalent() {
        let records = [less("a.less", None), less("./a.less", None)];
        let unique = dedupe(&records);

        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].path, PathBuf::from("a.less"));
    }

    #[test]
    fn unconditional_replaces_media_qualified() {
        let records = [less("a.less", Some("print")), less("a.less", None)];
        let unique = dedupe(&records);

        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].statement.media, None);
    }

    #[test]
    fn media_qualified_never_displaces_unconditional() {
        let records = [less("a.less", None), less("a.less", Some("print"))];
        let unique = dedupe(&records);

        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].statement.media, None);
    }

    #[test]
    fn distinct_media_conditions_coexist() {
        let records = [less("a.less", Some("print")), less("a.less", Some("screen"))];
        let unique = dedupe(&records);

        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].statement.media.as_deref(), Some("print"));
        assert_eq!(unique[1].statement.media.as_deref(), Some("screen"));
    }

    #[test]
    fn stylesheet_replaces_plain_css() {
        let records = [css("a.css"), record("@import (less) \"a.css\";", "a.css", ImportKind::Less, None)];
        let unique = dedupe(&records);

        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].kind(), ImportKind::Less);
        assert_eq!(unique[0].statement.raw, "@import (less) \"a.css\";");
    }

    #[test]
    fn plain_css_never_displaces_stylesheet() {
        let records = [record("@import (less) \"a.css\";", "a.css", ImportKind::Less, None), css("a.css")];
        let unique = dedupe(&records);

        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].kind(), ImportKind::Less);
    }

    #[test]
    fn first_occurrence_wins_for_plain_repeats() {
        let records = [less("a.less", None), less("a.less", None), less("a.less", None)];
        assert_eq!(dedupe(&records).len(), 1);
    }

    #[test]
    fn replacement_keeps_first_seen_position() {
        let records = [
            less("a.less", Some("print")),
            less("b.less", None),
            less("a.less", None),
        ];
        let unique = dedupe(&records);

        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].path, PathBuf::from("a.less"));
        assert_eq!(unique[0].statement.media, None);
        assert_eq!(unique[1].path, PathBuf::from("b.less"));
    }

    #[test]
    fn dedupe_is_deterministic() {
        let records = [
            less("a.less", Some("print")),
            less("a.less", Some("screen")),
            less("b.less", None),
            less("a.less", None),
        ];
        let first = dedupe(&records);
        let second = dedupe(&records);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.statement, b.statement);
            assert_eq!(a.path, b.path);
        }
    }
}
