//! The default element type produced by `zip`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable `(left, right)` pair with structural equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZippedPair<L, R> {
    left: L,
    right: R,
}

impl<L, R> ZippedPair<L, R> {
    pub fn of(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn into_tuple(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> From<(L, R)> for ZippedPair<L, R> {
    fn from((left, right): (L, R)) -> Self {
        Self::of(left, right)
    }
}

impl<L, R> From<ZippedPair<L, R>> for (L, R) {
    fn from(pair: ZippedPair<L, R>) -> Self {
        pair.into_tuple()
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for ZippedPair<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}
