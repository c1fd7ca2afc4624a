use crate::error::FinderError;
use crate::options::{FindOptions, WalkOptions};
use crate::predicate::{AlwaysAccept, GlobMatch, IsDirectory, IsFile, Predicate, RegexMatch};
use crate::types::{Candidate, normalize};
use ignore::WalkBuilder;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use std::sync::Arc;
#[derive(Debug, Default)]
struct Listing {
    dirs: Vec<Subdir>,
    files: Vec<OsString>,
}
#[derive(Debug)]
struct Subdir {
    name: OsString,
    descend: bool,
}
/// Lists one directory level, sorted by file name, with every ignore-file and
/// hidden-file rule switched off. Symlinked directories are listed as directories
/// but marked so they are never descended into.
fn list_level(dir: &Path) -> Result<Listing, FinderError> {
    let mut builder = WalkBuilder::new(dir);
    builder
        .standard_filters(false)
        .max_depth(Some(1))
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    let mut listing = Listing::default();
    for result in builder.build() {
        let entry = result.map_err(|e| FinderError::Walk(e.to_string()))?;
        if entry.depth() == 0 {
            continue;
        }
        let name = entry.file_name().to_os_string();
        if entry.path().is_dir() {
            listing.dirs.push(Subdir {
                name,
                descend: !entry.path_is_symlink(),
            });
        } else {
            listing.files.push(name);
        }
    }
    Ok(listing)
}
fn resolve_base(root: &Path) -> Result<PathBuf, FinderError> {
    if !root.exists() {
        return Err(FinderError::PathNotFound(root.to_path_buf()));
    }
    if root.is_dir() {
        Ok(normalize(root))
    } else {
        Ok(normalize(root.parent().unwrap_or(Path::new(""))))
    }
}
#[derive(Debug)]
struct PendingDir {
    relative: PathBuf,
    level: usize,
}
/// Lazy, pre-order walk that yields the paths accepted by a predicate.
///
/// Within each directory, subdirectories are tested in reverse name order, then
/// files in name order; the walk then descends into the surviving subdirectories in
/// that same reversed order. Paths come out as `base/relative`, or absolute and
/// normalized when [`WalkOptions::absolute`] is set.
///
/// The first error ends the walk: it is yielded once and the iterator is then
/// exhausted. Construct a new `Walk` to walk again.
pub struct Walk<'p> {
    base: PathBuf,
    predicate: Box<dyn Predicate + 'p>,
    ignore: Option<Box<dyn Predicate + 'p>>,
    options: WalkOptions,
    pending: Vec<PendingDir>,
    ready: VecDeque<PathBuf>,
    finished: bool,
}
impl<'p> Walk<'p> {
    /// Prepares a walk of `root`. When `root` is a file, its parent directory is
    /// walked instead.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::PathNotFound`] if `root` does not exist.
    pub fn new(root: impl AsRef<Path>, predicate: impl Predicate + 'p) -> Result<Self, FinderError> {
        let base = resolve_base(root.as_ref())?;
        #[cfg(feature = "logging")]
        tracing::debug!("Starting walk with base: {}", base.display());
        Ok(Self {
            base,
            predicate: Box::new(predicate),
            ignore: None,
            options: WalkOptions::default(),
            pending: vec![PendingDir {
                relative: PathBuf::new(),
                level: 0,
            }],
            ready: VecDeque::new(),
            finished: false,
        })
    }
    /// Prunes every directory and skips every file this predicate accepts.
    pub fn with_ignore(mut self, ignore: impl Predicate + 'p) -> Self {
        self.ignore = Some(Box::new(ignore));
        self
    }
    pub fn with_options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }
    /// The directory the walk runs from.
    pub fn base(&self) -> &Path {
        &self.base
    }
    fn is_ignored(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        match &self.ignore {
            Some(ignore) => ignore.accepts(candidate),
            None => Ok(false),
        }
    }
    fn output_path(&self, relative: &Path) -> Result<PathBuf, FinderError> {
        let joined = self.base.join(relative);
        if !self.options.absolute {
            return Ok(joined);
        }
        let absolute = std::path::absolute(&joined).map_err(|e| FinderError::io(&joined, e))?;
        Ok(normalize(&absolute))
    }
    fn visit(&mut self, dir: PendingDir) -> Result<(), FinderError> {
        if self.options.max_depth.is_some_and(|max| dir.level >= max) {
            return Ok(());
        }
        let path = if dir.relative.as_os_str().is_empty() {
            self.base.clone()
        } else {
            self.base.join(&dir.relative)
        };
        #[cfg(feature = "logging")]
        tracing::trace!("Visiting {} at level {}", path.display(), dir.level);
        let listing = list_level(&path)?;
        let mut emitted = Vec::new();
        let mut descend = Vec::new();
        for subdir in listing.dirs.into_iter().rev() {
            let relative = dir.relative.join(&subdir.name);
            let candidate = Candidate::new(&self.base, &relative);
            if self.is_ignored(&candidate)? {
                #[cfg(feature = "logging")]
                tracing::debug!("Pruning ignored directory: {}", relative.display());
                continue;
            }
            if self.predicate.accepts(&candidate)? {
                emitted.push(self.output_path(&relative)?);
            }
            if subdir.descend {
                descend.push(relative);
            }
        }
        for name in listing.files {
            let relative = dir.relative.join(&name);
            let candidate = Candidate::new(&self.base, &relative);
            if self.is_ignored(&candidate)? {
                continue;
            }
            if self.predicate.accepts(&candidate)? {
                emitted.push(self.output_path(&relative)?);
            }
        }
        let level = dir.level + 1;
        self.pending.extend(
            descend
                .into_iter()
                .rev()
                .map(|relative| PendingDir { relative, level }),
        );
        self.ready.extend(emitted);
        Ok(())
    }
}
impl Iterator for Walk<'_> {
    type Item = Result<PathBuf, FinderError>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(path) = self.ready.pop_front() {
                return Some(Ok(path));
            }
            if self.finished {
                return None;
            }
            let Some(dir) = self.pending.pop() else {
                self.finished = true;
                return None;
            };
            if let Err(e) = self.visit(dir) {
                #[cfg(feature = "logging")]
                tracing::debug!("Walk aborted: {}", e);
                self.finished = true;
                self.pending.clear();
                return Some(Err(e));
            }
        }
    }
}
impl FusedIterator for Walk<'_> {}
/// Walks `root` and collects every path `predicate` accepts.
///
/// Fails without partial results if the root is missing or any predicate or
/// directory listing fails along the way.
pub fn walk<P: Predicate + ?Sized>(
    root: impl AsRef<Path>,
    predicate: &P,
    ignore: Option<&dyn Predicate>,
    options: &WalkOptions,
) -> Result<Vec<PathBuf>, FinderError> {
    let mut walker = Walk::new(root, predicate)?.with_options(*options);
    if let Some(ignore) = ignore {
        walker = walker.with_ignore(ignore);
    }
    walker.collect()
}
/// Picks the accept predicate for a find. The first shorthand set wins:
/// `just_dirs`, `just_files`, `regex`, `glob`, then the explicit predicate, then
/// [`AlwaysAccept`].
fn select_predicate(options: &FindOptions) -> Result<Arc<dyn Predicate>, FinderError> {
    if options.just_dirs {
        return Ok(Arc::new(IsDirectory));
    }
    if options.just_files {
        return Ok(Arc::new(IsFile));
    }
    if let Some(pattern) = options.regex.as_deref().filter(|p| !p.is_empty()) {
        return Ok(Arc::new(RegexMatch::new(pattern)?));
    }
    if let Some(pattern) = options.glob.as_deref().filter(|p| !p.is_empty()) {
        return Ok(Arc::new(GlobMatch::new(pattern)?));
    }
    if let Some(predicate) = &options.predicate {
        return Ok(Arc::clone(predicate));
    }
    Ok(Arc::new(AlwaysAccept))
}
/// Lazy form of [`find`]. Patterns are compiled and the root checked before this
/// returns.
pub fn find_iter(options: FindOptions) -> Result<Walk<'static>, FinderError> {
    let predicate = select_predicate(&options)?;
    let mut walker = Walk::new(&options.root, predicate)?.with_options(options.walk_options());
    if let Some(ignore) = options.ignore {
        walker = walker.with_ignore(ignore);
    }
    Ok(walker)
}
pub fn find(options: FindOptions) -> Result<Vec<PathBuf>, FinderError> {
    find_iter(options)?.collect()
}
