use super::{Predicate, PredicateExt};
use crate::error::FinderError;
use crate::types::Candidate;
use std::ops::{BitAnd, BitOr};

/// Accepts when every child accepts. Children run left to right and evaluation
/// stops at the first rejection. With no children it accepts everything.
#[derive(Debug, Default)]
pub struct And(Vec<Box<dyn Predicate>>);

impl And {
    pub fn new(children: Vec<Box<dyn Predicate>>) -> Self {
        Self(children)
    }

    pub fn push(&mut self, child: impl Predicate + 'static) {
        self.0.push(Box::new(child));
    }

    pub fn children(&self) -> &[Box<dyn Predicate>] {
        &self.0
    }
}

impl Predicate for And {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        for child in &self.0 {
            if !child.accepts(candidate)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Accepts when any child accepts. Children run left to right and evaluation stops
/// at the first acceptance. With no children it accepts nothing.
#[derive(Debug, Default)]
pub struct Or(Vec<Box<dyn Predicate>>);

impl Or {
    pub fn new(children: Vec<Box<dyn Predicate>>) -> Self {
        Self(children)
    }

    pub fn push(&mut self, child: impl Predicate + 'static) {
        self.0.push(Box::new(child));
    }

    pub fn children(&self) -> &[Box<dyn Predicate>] {
        &self.0
    }
}

impl Predicate for Or {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        for child in &self.0 {
            if child.accepts(candidate)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Inverts its child.
#[derive(Debug)]
pub struct Not(Box<dyn Predicate>);

impl Not {
    pub fn new(child: impl Predicate + 'static) -> Self {
        Self(Box::new(child))
    }
}

impl Predicate for Not {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        Ok(!self.0.accepts(candidate)?)
    }
}

// `a & b & c` grows one And instead of nesting.
impl<R: Predicate + 'static> BitAnd<R> for And {
    type Output = And;
    fn bitand(mut self, rhs: R) -> And {
        self.push(rhs);
        self
    }
}

impl<R: Predicate + 'static> BitOr<R> for And {
    type Output = Or;
    fn bitor(self, rhs: R) -> Or {
        PredicateExt::or(self, rhs)
    }
}

impl std::ops::Not for And {
    type Output = Not;
    fn not(self) -> Not {
        Not::new(self)
    }
}

impl<R: Predicate + 'static> BitOr<R> for Or {
    type Output = Or;
    fn bitor(mut self, rhs: R) -> Or {
        self.push(rhs);
        self
    }
}

impl<R: Predicate + 'static> BitAnd<R> for Or {
    type Output = And;
    fn bitand(self, rhs: R) -> And {
        PredicateExt::and(self, rhs)
    }
}

impl std::ops::Not for Or {
    type Output = Not;
    fn not(self) -> Not {
        Not::new(self)
    }
}
