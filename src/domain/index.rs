//! Display index into the filtered view.

use std::fmt;

/// A position in the currently displayed list.
///
/// Users see one-based numbers; code indexes zero-based. Construction from a
/// one-based number rejects zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    /// `None` when `one_based` is zero.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self)
    }

    pub fn from_zero_based(zero_based: usize) -> Self {
        Self(zero_based)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
