//! Recognition of `@import` directives in raw source text.

use regex::Regex;

use crate::statement::{ImportKind, ImportStatement};
use crate::{Error, Result};

/// One import directive: the `@import` keyword, an optional
/// `(less)`/`(css)` option token, a quoted filename without internal
/// whitespace, any non-semicolon trailer, and the terminating semicolon.
const IMPORT_PATTERN: &str = r#"@import\s*(?:\((less|css)\))?\s*("[^"\s]+"|'[^'\s]+')([^;]*);"#;

/// Extracts import directives from stylesheet text.
///
/// The recognition pattern is compiled once per parser; statements are
/// matched globally and non-overlapping, left to right.
#[derive(Debug, Clone)]
pub struct StatementParser {
    pattern: Regex,
}

impl StatementParser {
    /// Create a parser with the recognition pattern compiled.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(IMPORT_PATTERN).expect("import pattern compiles"),
        }
    }

    /// Extract all import directives from `source`, in order of first
    /// character position.
    ///
    /// Returns [`Error::MalformedStatement`] if a matched directive has no
    /// extractable filename; the pattern guarantees the filename group, so
    /// this indicates a logic error rather than bad input.
    pub fn parse(&self, source: &str) -> Result<Vec<ImportStatement>> {
        let mut statements = vec![];

        for captures in self.pattern.captures_iter(source) {
            let raw = captures[0].to_string();

            let quoted = captures
                .get(2)
                .ok_or_else(|| Error::MalformedStatement(raw.clone()))?
                .as_str();
            let target = quoted[1..quoted.len() - 1].to_string();

            let option = captures.get(1).map(|m| m.as_str());
            let kind = ImportKind::classify(option, &target);

            let media = captures
                .get(3)
                .map(|m| m.as_str().trim())
                .filter(|trailer| !trailer.is_empty())
                .map(str::to_string);

            tracing::trace!("import statement: {}", raw);

            statements.push(ImportStatement {
                raw,
                target,
                kind,
                media,
            });
        }

        Ok(statements)
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}
