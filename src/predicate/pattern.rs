use super::Predicate;
use crate::error::FinderError;
use crate::types::Candidate;
use globset::{Glob, GlobMatcher};
use regex::Regex;

/// Accepts paths that a regular expression matches from the first character.
///
/// The match is anchored at the start only: `dir` accepts `dir2/file6.log`.
/// Append `$` to require a full match.
#[derive(Debug, Clone)]
pub struct RegexMatch {
    pattern: String,
    regex: Regex,
}

impl RegexMatch {
    pub fn new(pattern: &str) -> Result<Self, FinderError> {
        let regex = Regex::new(&format!("^(?:{})", pattern))
            .map_err(|e| FinderError::invalid_pattern(pattern, e))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Predicate for RegexMatch {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        Ok(self.regex.is_match(&candidate.as_str()))
    }
}

/// Accepts paths matching a shell wildcard pattern (`*`, `?`, `[...]`).
///
/// `*` also matches path separators, so `*.txt` accepts `dir1/file4.txt`.
/// Matching is case-sensitive.
#[derive(Debug, Clone)]
pub struct GlobMatch {
    matcher: GlobMatcher,
}

impl GlobMatch {
    pub fn new(pattern: &str) -> Result<Self, FinderError> {
        let glob = Glob::new(pattern).map_err(|e| FinderError::invalid_pattern(pattern, e))?;
        Ok(Self {
            matcher: glob.compile_matcher(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.matcher.glob().glob()
    }
}

impl Predicate for GlobMatch {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        Ok(self.matcher.is_match(candidate.path()))
    }
}
