use glob::{MatchOptions, Pattern};

use crate::errors::{Error, ErrorKind, Result};

/// Options used for every path match.
///
/// `*` and `?` are allowed to cross `/`, so `*/dogs/jerry` matches
/// `/characters/dogs/jerry`. Matching is case sensitive and anchored at
/// both ends.
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Check if a pattern contains glob wildcards (`*`, `?` or `[`).
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// A compiled glob pattern for matching component source paths.
///
/// Patterns without wildcards are kept as literal paths and compared
/// directly.
#[derive(Debug, Clone)]
pub enum GlobMatcher {
    Literal(String),
    Pattern(Pattern),
}

impl GlobMatcher {
    pub fn new(glob: &str) -> Result<Self> {
        if !is_glob_pattern(glob) {
            return Ok(GlobMatcher::Literal(glob.to_string()));
        }
        let pattern = Pattern::new(glob).map_err(|e| {
            Error::new(
                ErrorKind::PatternInvalid,
                format!("Invalid glob pattern \"{}\": {}", glob, e.msg),
            )
        })?;
        Ok(GlobMatcher::Pattern(pattern))
    }

    pub fn is_match(&self, path: &str) -> bool {
        match self {
            GlobMatcher::Literal(literal) => literal == path,
            GlobMatcher::Pattern(pattern) => pattern.matches_with(path, MATCH_OPTIONS),
        }
    }
}
