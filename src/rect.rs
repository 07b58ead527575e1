//! The rectangle value type.

use crate::traits::Dimension;

/// An axis-aligned rectangle that cannot be rotated.
///
/// Field order matters: the derived `Ord` compares `width` first and
/// `height` second, which is the sort order the frontier filter relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rectangle<T> {
    pub width: T,
    pub height: T,
}

impl<T: Dimension> Rectangle<T> {
    #[inline]
    pub fn new(width: T, height: T) -> Self {
        Self { width, height }
    }

    /// Both sides strictly positive.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width.is_positive() && self.height.is_positive()
    }

    /// True if `other` is at least as large on both sides.
    ///
    /// A dominated rectangle can join any group containing `other` at no
    /// extra cost.
    #[inline]
    pub fn is_dominated_by(&self, other: &Self) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

impl<T: Dimension> From<(T, T)> for Rectangle<T> {
    fn from((width, height): (T, T)) -> Self {
        Self::new(width, height)
    }
}
