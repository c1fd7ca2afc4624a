//! Path predicates and the algebra for composing them.
//!
//! Every filter implements [`Predicate`]. Leaves test one property of a
//! [`Candidate`]; [`And`], [`Or`] and [`Not`] combine them. All predicate types in
//! this crate also support the `&`, `|` and `!` operators:
//!
//! ```no_run
//! use pathfinder::{GlobMatch, IsDirectory, PredicateExt, RegexMatch};
//!
//! let logs_or_dirs = IsDirectory | GlobMatch::new("*.log")?;
//! let paths = logs_or_dirs.find("/var/tmp")?;
//!
//! let dirs_with_2 = IsDirectory & RegexMatch::new(".*2.*")?;
//! # Ok::<(), pathfinder::FinderError>(())
//! ```

mod basic;
mod combinator;
#[cfg(feature = "images")]
mod imaging;
mod pattern;

use crate::error::FinderError;
use crate::options::WalkOptions;
use crate::types::Candidate;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use basic::{AlwaysAccept, DotDirectoryFilter, IsDirectory, IsFile, SizeFilter};
pub use combinator::{And, Not, Or};
#[cfg(feature = "images")]
pub use imaging::{
    ColorImageFilter, GreyscaleImageFilter, ImageDimensionFilter, ImageFilter,
    channel_deviation, is_greyscale_deviation, is_greyscale_palette,
};
pub use pattern::{GlobMatch, RegexMatch};

/// A boolean test over a path.
///
/// Implementations must not depend on traversal position and must be safe to call
/// repeatedly and from several threads. Any filesystem or decode failure is returned
/// as an error, which aborts the walk that asked.
pub trait Predicate: fmt::Debug + Send + Sync {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError>;

    /// Tests a standalone path, outside any walk.
    fn accepts_path(&self, path: &Path) -> Result<bool, FinderError> {
        self.accepts(&Candidate::from_path(path))
    }
}

impl<P: Predicate + ?Sized> Predicate for &P {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        (**self).accepts(candidate)
    }
}

impl<P: Predicate + ?Sized> Predicate for Box<P> {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        (**self).accepts(candidate)
    }
}

impl<P: Predicate + ?Sized> Predicate for Arc<P> {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        (**self).accepts(candidate)
    }
}

/// Fluent composition for any [`Predicate`], including ones defined outside this
/// crate.
pub trait PredicateExt: Predicate + Sized + 'static {
    fn and<P: Predicate + 'static>(self, other: P) -> And {
        And::new(vec![Box::new(self), Box::new(other)])
    }

    fn or<P: Predicate + 'static>(self, other: P) -> Or {
        Or::new(vec![Box::new(self), Box::new(other)])
    }

    fn not(self) -> Not {
        Not::new(self)
    }

    fn boxed(self) -> Box<dyn Predicate> {
        Box::new(self)
    }

    /// Walks `root` with this predicate as the acceptor and no ignore predicate.
    fn find(&self, root: impl AsRef<Path>) -> Result<Vec<PathBuf>, FinderError> {
        crate::engine::walk(root, self, None, &WalkOptions::default())
    }
}

impl<T: Predicate + Sized + 'static> PredicateExt for T {}

macro_rules! impl_predicate_ops {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<R: Predicate + 'static> std::ops::BitAnd<R> for $ty {
                type Output = And;
                fn bitand(self, rhs: R) -> And {
                    PredicateExt::and(self, rhs)
                }
            }
            impl<R: Predicate + 'static> std::ops::BitOr<R> for $ty {
                type Output = Or;
                fn bitor(self, rhs: R) -> Or {
                    PredicateExt::or(self, rhs)
                }
            }
            impl std::ops::Not for $ty {
                type Output = Not;
                fn not(self) -> Not {
                    Not::new(self)
                }
            }
        )*
    };
}
impl_predicate_ops!(
    AlwaysAccept,
    IsDirectory,
    IsFile,
    RegexMatch,
    GlobMatch,
    SizeFilter,
    DotDirectoryFilter,
    Not,
);

#[cfg(feature = "images")]
impl_predicate_ops!(
    ImageFilter,
    ImageDimensionFilter,
    GreyscaleImageFilter,
    ColorImageFilter,
);
