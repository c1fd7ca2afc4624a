use crate::predicate::Predicate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkOptions {
    pub absolute: bool,
    pub max_depth: Option<usize>,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindOptions {
    pub root: PathBuf,
    pub just_dirs: bool,
    pub just_files: bool,
    pub regex: Option<String>,
    pub glob: Option<String>,
    #[serde(skip)]
    pub predicate: Option<Arc<dyn Predicate>>,
    #[serde(skip)]
    pub ignore: Option<Arc<dyn Predicate>>,
    pub absolute: bool,
    pub max_depth: Option<usize>,
}
impl Default for FindOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            just_dirs: false,
            just_files: false,
            regex: None,
            glob: None,
            predicate: None,
            ignore: None,
            absolute: false,
            max_depth: None,
        }
    }
}
impl FindOptions {
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            absolute: self.absolute,
            max_depth: self.max_depth,
        }
    }
}
#[derive(Debug, Default)]
pub struct FindBuilder {
    options: FindOptions,
}
impl FindBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: FindOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn just_dirs(mut self, yes: bool) -> Self {
        self.options.just_dirs = yes;
        self
    }
    pub fn just_files(mut self, yes: bool) -> Self {
        self.options.just_files = yes;
        self
    }
    pub fn regex(mut self, pattern: impl Into<String>) -> Self {
        self.options.regex = Some(pattern.into());
        self
    }
    pub fn glob(mut self, pattern: impl Into<String>) -> Self {
        self.options.glob = Some(pattern.into());
        self
    }
    pub fn predicate(mut self, predicate: impl Predicate + 'static) -> Self {
        self.options.predicate = Some(Arc::new(predicate));
        self
    }
    pub fn ignore(mut self, predicate: impl Predicate + 'static) -> Self {
        self.options.ignore = Some(Arc::new(predicate));
        self
    }
    pub fn absolute(mut self, yes: bool) -> Self {
        self.options.absolute = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn build(self) -> FindOptions {
        self.options
    }
}
