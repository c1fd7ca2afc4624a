//! # Pathfinder
//!
//! `pathfinder` walks a directory tree and returns the paths accepted by a
//! composable [`Predicate`]. Predicates cover entry type, regular expressions, shell
//! globs, file size and (with the `images` feature) image extension, dimensions and
//! tone, and combine with [`And`], [`Or`] and [`Not`] or the `&`, `|` and `!`
//! operators.
//!
//! A second, optional predicate ignores entries: an ignored directory is pruned
//! together with everything beneath it.
//!
//! Both an eager API ([`walk`], [`find`]) and a lazy iterator ([`Walk`],
//! [`find_iter`]) are provided; they yield the same paths in the same order.
//!
//! # Features
//!
//! - `images` (default): image predicates backed by the `image` crate.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use pathfinder::{DotDirectoryFilter, FindBuilder, find};
//!
//! let options = FindBuilder::new(".")
//!     .glob("*.rs")
//!     .ignore(DotDirectoryFilter::new())
//!     .max_depth(3)
//!     .build();
//!
//! let paths = find(options).expect("Failed to walk directory");
//! for path in paths {
//!     println!("{}", path.display());
//! }
//! ```

mod engine;
mod error;
mod options;
pub mod output;
pub mod predicate;
mod types;

pub use engine::{Walk, find, find_iter, walk};
pub use error::FinderError;
pub use options::{FindBuilder, FindOptions, WalkOptions};
#[cfg(feature = "images")]
pub use predicate::{ColorImageFilter, GreyscaleImageFilter, ImageDimensionFilter, ImageFilter};
pub use predicate::{
    AlwaysAccept, And, DotDirectoryFilter, GlobMatch, IsDirectory, IsFile, Not, Or, Predicate,
    PredicateExt, RegexMatch, SizeFilter,
};
pub use types::Candidate;
