//! Source nodes and eager tree building.

use std::path::{Path, PathBuf};

use crate::access::SourceAccess;
use crate::paths::lexical_normalize;
use crate::statement::{ImportStatement, StatementParser};
use crate::{Error, Result};

/// Identity shown for a node that wraps raw text rather than a file.
const INLINE_SOURCE: &str = "<inline>";

/// Importer shown when the root file itself cannot be read.
const ROOT_SOURCE: &str = "<root>";

/// One resolved import edge: the directive, the path it resolved to, and
/// the fully built subtree behind that path.
#[derive(Debug, Clone)]
pub struct ResolvedImport {
    /// The directive as it appeared in the importing source.
    pub statement: ImportStatement,
    /// The directive's resolved filename, joined onto the importing
    /// file's directory.
    pub path: PathBuf,
    /// The imported source, fully resolved.
    pub node: SourceNode,
}

/// One resolved stylesheet source and its transitive imports.
///
/// A node is fully resolved on construction: content read and every
/// import recursively built before [`SourceNode::build`] returns. The
/// root exclusively owns its subtree; nothing is shared or mutated after
/// the build.
#[derive(Debug, Clone)]
pub struct SourceNode {
    /// Path of the backing file; `None` when built from raw text.
    pub path: Option<PathBuf>,
    /// Containing directory; child imports resolve relative to it.
    pub dir: PathBuf,
    /// Full source text.
    pub content: String,
    /// One entry per import directive in `content`, in order of
    /// appearance.
    pub imports: Vec<ResolvedImport>,
}

impl SourceNode {
    /// Build a source tree from `source`.
    ///
    /// `source` may name a readable file, or be raw stylesheet text. Raw
    /// text yields a node without identity whose imports resolve against
    /// the written paths as-is; this supports a synthetic root importing
    /// several independent top-level files.
    ///
    /// Construction is eager: the entire transitive import closure is
    /// resolved before the root returns. A missing or unreadable import
    /// anywhere in the closure aborts the whole build, as does an import
    /// cycle.
    pub fn build(source: &str, access: &impl SourceAccess) -> Result<Self> {
        if source.trim().is_empty() {
            return Err(Error::InvalidSource("empty source".into()));
        }

        let parser = StatementParser::new();
        let mut in_progress = vec![];
        let source_path = Path::new(source);

        if access.exists(source_path) {
            Self::build_file(source_path, ROOT_SOURCE, access, &parser, &mut in_progress)
        } else {
            Self::from_content(
                None,
                PathBuf::new(),
                source.to_string(),
                access,
                &parser,
                &mut in_progress,
            )
        }
    }

    /// Display identity of this node for diagnostics.
    pub fn identity(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => INLINE_SOURCE.to_string(),
        }
    }

    fn build_file(
        path: &Path,
        importer: &str,
        access: &impl SourceAccess,
        parser: &StatementParser,
        in_progress: &mut Vec<PathBuf>,
    ) -> Result<Self> {
        let normalized = lexical_normalize(path);
        if in_progress.contains(&normalized) {
            return Err(Error::cyclic(path, in_progress));
        }

        let content = access
            .read(path)
            .map_err(|e| Error::read(importer, path, e))?;
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        in_progress.push(normalized);
        let node = Self::from_content(
            Some(path.to_path_buf()),
            dir,
            content,
            access,
            parser,
            in_progress,
        );
        in_progress.pop();

        node
    }

    fn from_content(
        path: Option<PathBuf>,
        dir: PathBuf,
        content: String,
        access: &impl SourceAccess,
        parser: &StatementParser,
        in_progress: &mut Vec<PathBuf>,
    ) -> Result<Self> {
        let identity = match &path {
            Some(p) => p.display().to_string(),
            None => INLINE_SOURCE.to_string(),
        };

        let statements = parser.parse(&content)?;
        let mut imports = Vec::with_capacity(statements.len());

        for statement in statements {
            let child_path = dir.join(statement.resolved_target());
            if !access.exists(&child_path) {
                return Err(Error::missing_import(&identity, child_path));
            }

            let node = Self::build_file(&child_path, &identity, access, parser, in_progress)?;
            imports.push(ResolvedImport {
                statement,
                path: child_path,
                node,
            });
        }

        tracing::debug!("resolved {} ({} imports)", identity, imports.len());

        Ok(Self {
            path,
            dir,
            content,
            imports,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::MemorySources;

    fn sources(entries: &[(&str, &str)]) -> MemorySources {
        let mut sources = MemorySources::new();
        for (path, content) in entries {
            sources.insert(*path, *content);
        }
        sources
    }

    #[test]
    fn empty_source_is_rejected() {
        let err = SourceNode::build("  \n", &MemorySources::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidSource(_)));
    }

    #[test]
    fn leaf_file_has_no_imports() {
        let access = sources(&[("a.less", "body { color: red; }")]);
        let node = SourceNode::build("a.less", &access).unwrap();

        assert_eq!(node.path.as_deref(), Some(Path::new("a.less")));
        assert_eq!(node.content, "body { color: red; }");
        assert!(node.imports.is_empty());
    }

    #[test]
    fn raw_text_root_has_no_identity() {
        let access = sources(&[("a.less", "body {}")]);
        let node = SourceNode::build("@import \"a.less\";", &access).unwrap();

        assert_eq!(node.path, None);
        assert_eq!(node.dir, PathBuf::new());
        assert_eq!(node.imports.len(), 1);
        assert_eq!(node.imports[0].node.content, "body {}");
    }

    #[test]
    fn children_resolve_relative_to_importing_file() {
        let access = sources(&[
            ("main.less", "@import \"sub/a.less\";"),
            ("sub/a.less", "@import \"b.less\";"),
            ("sub/b.less", ".b {}"),
        ]);
        let node = SourceNode::build("main.less", &access).unwrap();

        let a = &node.imports[0];
        assert_eq!(a.path, Path::new("sub/a.less"));
        let b = &a.node.imports[0];
        assert_eq!(b.path, Path::new("sub/b.less"));
        assert_eq!(b.node.content, ".b {}");
    }

    #[test]
    fn extensionless_import_gains_stylesheet_extension() {
        let access = sources(&[
            ("main.less", "@import \"sub/dir/file\";"),
            ("sub/dir/file.less", ".f {}"),
        ]);
        let node = SourceNode::build("main.less", &access).unwrap();

        assert_eq!(node.imports[0].path, Path::new("sub/dir/file.less"));
    }

    #[test]
    fn missing_import_names_importer_and_path() {
        let access = sources(&[("main.less", "@import \"gone.less\";")]);
        let err = SourceNode::build("main.less", &access).unwrap_err();

        match err {
            Error::MissingImport { importer, path } => {
                assert_eq!(importer, "main.less");
                assert_eq!(path, Path::new("gone.less"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn transitive_missing_import_aborts_build() {
        let access = sources(&[
            ("main.less", "@import \"a.less\";"),
            ("a.less", "@import \"gone.less\";"),
        ]);
        let err = SourceNode::build("main.less", &access).unwrap_err();

        match err {
            Error::MissingImport { importer, .. } => assert_eq!(importer, "a.less"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn self_import_is_a_cycle() {
        let access = sources(&[("a.less", "@import \"a.less\";")]);
        let err = SourceNode::build("a.less", &access).unwrap_err();

        assert!(matches!(err, Error::CyclicImport { .. }));
    }

    #[test]
    fn mutual_imports_are_a_cycle() {
        let access = sources(&[
            ("a.less", "@import \"b.less\";"),
            ("b.less", "@import \"a.less\";"),
        ]);
        let err = SourceNode::build("a.less", &access).unwrap_err();

        match err {
            Error::CyclicImport { path, chain } => {
                assert_eq!(path, Path::new("a.less"));
                assert_eq!(chain, "a.less -> b.less -> a.less");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn repeated_import_is_not_a_cycle() {
        // A diamond revisits a path after it finished resolving, which is
        // legal; only in-progress paths constitute a cycle.
        let access = sources(&[
            ("main.less", "@import \"a.less\";\n@import \"b.less\";"),
            ("a.less", "@import \"shared.less\";"),
            ("b.less", "@import \"shared.less\";"),
            ("shared.less", ".s {}"),
        ]);
        let node = SourceNode::build("main.less", &access).unwrap();

        assert_eq!(node.imports.len(), 2);
        assert_eq!(node.imports[0].node.imports[0].node.content, ".s {}");
        assert_eq!(node.imports[1].node.imports[0].node.content, ".s {}");
    }
}
