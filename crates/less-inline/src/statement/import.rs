//! Import statement values and classification.

use std::path::Path;

/// Extension appended to extensionless stylesheet imports.
pub const STYLESHEET_EXTENSION: &str = "less";

/// Extension that marks an import as plain CSS.
pub const PLAIN_TEXT_EXTENSION: &str = "css";

/// How an imported source is routed downstream.
///
/// The kind feeds the duplicate-resolution policy and composition; it
/// never gates recursion, so a `Css` import's target is still scanned for
/// further directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    /// A LESS stylesheet.
    Less,
    /// Plain CSS, inlined literally.
    Css,
}

impl ImportKind {
    /// Classify from an explicit option token or the filename extension.
    ///
    /// An explicit `(less)`/`(css)` option fully determines the kind.
    /// Without one, a `.css` target is plain CSS and anything else
    /// (including no extension) is a stylesheet.
    pub(crate) fn classify(option: Option<&str>, target: &str) -> Self {
        match option {
            Some(PLAIN_TEXT_EXTENSION) => Self::Css,
            Some(_) => Self::Less,
            None => {
                let is_css = Path::new(target)
                    .extension()
                    .is_some_and(|ext| ext == PLAIN_TEXT_EXTENSION);
                if is_css { Self::Css } else { Self::Less }
            }
        }
    }
}

/// One `@import` directive extracted from source text.
///
/// Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    /// Exact matched substring; the textual search/replace key used
    /// during composition.
    pub raw: String,
    /// Quoted filename as written, quotes stripped.
    pub target: String,
    /// Routing classification.
    pub kind: ImportKind,
    /// Trailing media query or conditional selector, trimmed; `None` when
    /// the import is unconditional.
    pub media: Option<String>,
}

impl ImportStatement {
    /// Filename used for lookup and dependency identity.
    ///
    /// This is the written target, gaining the default stylesheet
    /// extension when a stylesheet import carries no extension at all.
    pub fn resolved_target(&self) -> String {
        let has_extension = Path::new(&self.target).extension().is_some();
        if self.kind == ImportKind::Less && !has_extension {
            format!("{}.{}", self.target, STYLESHEET_EXTENSION)
        } else {
            self.target.clone()
        }
    }
}
