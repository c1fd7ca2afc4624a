use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// A path under test, as handed to a [`Predicate`](crate::Predicate).
///
/// During a walk every candidate carries the walk base and the entry's path relative
/// to it. Pattern predicates match against the relative path, so a regex such as
/// `.*2.*` sees `dir2/file6.log` no matter where the tree lives on disk. Predicates
/// that touch the filesystem use [`Candidate::full_path`].
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    base: &'a Path,
    relative: &'a Path,
}

impl<'a> Candidate<'a> {
    /// Creates a candidate for `relative` beneath `base`.
    pub fn new(base: &'a Path, relative: &'a Path) -> Self {
        Self { base, relative }
    }

    /// Creates a candidate for a standalone path, with no walk base.
    ///
    /// Pattern predicates then match against `path` exactly as given.
    pub fn from_path(path: &'a Path) -> Self {
        Self {
            base: Path::new(""),
            relative: path,
        }
    }

    /// The base directory of the walk this candidate belongs to.
    pub fn base(&self) -> &'a Path {
        self.base
    }

    /// The path relative to the walk base.
    pub fn path(&self) -> &'a Path {
        self.relative
    }

    /// The relative path as a string, for pattern matching.
    pub fn as_str(&self) -> Cow<'a, str> {
        self.relative.to_string_lossy()
    }

    /// The path to use for filesystem access.
    pub fn full_path(&self) -> Cow<'a, Path> {
        if self.base.as_os_str().is_empty() {
            Cow::Borrowed(self.relative)
        } else {
            Cow::Owned(self.base.join(self.relative))
        }
    }
}

/// Lexically normalizes a path: drops `.` components and folds `..` into the
/// preceding normal component. An empty result becomes `.`.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir | Component::Normal(_) => {
                components.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(..)) => {}
                _ => components.push(component),
            },
        }
    }
    if components.is_empty() {
        return PathBuf::from(".");
    }
    components.into_iter().collect()
}
