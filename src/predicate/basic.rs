use super::{And, Predicate, RegexMatch};
use crate::error::FinderError;
use crate::types::Candidate;
use std::fs;
use std::path::MAIN_SEPARATOR_STR;
use std::sync::LazyLock;

/// Accepts every path.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysAccept;

impl Predicate for AlwaysAccept {
    fn accepts(&self, _candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        Ok(true)
    }
}

/// Accepts paths that are directories when tested.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsDirectory;

impl Predicate for IsDirectory {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        Ok(candidate.full_path().is_dir())
    }
}

/// Accepts paths that are regular files when tested.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsFile;

impl Predicate for IsFile {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        Ok(candidate.full_path().is_file())
    }
}

/// Final path component begins with a period.
static DOT_DIRECTORY: LazyLock<And> = LazyLock::new(|| {
    let sep = regex::escape(MAIN_SEPARATOR_STR);
    let name = RegexMatch::new(&format!(r"(?:.*{sep})?\.[^{sep}]*$"))
        .expect("DOT_DIRECTORY regex is invalid");
    And::new(vec![Box::new(IsDirectory), Box::new(name)])
});

/// Accepts directories whose name starts with a period, such as `.git`.
///
/// Mostly useful as an ignore predicate, to prune hidden directory trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotDirectoryFilter;

impl DotDirectoryFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Predicate for DotDirectoryFilter {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        DOT_DIRECTORY.accepts(candidate)
    }
}

/// Accepts regular files whose size lies within an inclusive byte range.
///
/// The lower bound defaults to 0 and the upper bound to unbounded, so
/// `SizeFilter::default()` accepts every regular file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeFilter {
    min_bytes: u64,
    max_bytes: Option<u64>,
}

impl SizeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn between(min_bytes: u64, max_bytes: u64) -> Self {
        Self {
            min_bytes,
            max_bytes: Some(max_bytes),
        }
    }

    pub fn min_bytes(mut self, bytes: u64) -> Self {
        self.min_bytes = bytes;
        self
    }

    pub fn max_bytes(mut self, bytes: u64) -> Self {
        self.max_bytes = Some(bytes);
        self
    }

    fn in_range(&self, len: u64) -> bool {
        len >= self.min_bytes && self.max_bytes.is_none_or(|max| len <= max)
    }
}

impl Predicate for SizeFilter {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        let path = candidate.full_path();
        if !path.is_file() {
            return Ok(false);
        }
        let metadata = fs::metadata(&path).map_err(|e| FinderError::io(&*path, e))?;
        Ok(self.in_range(metadata.len()))
    }
}
