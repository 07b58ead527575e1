//! Groups of the reconstructed optimal partition.
//!
//! Each `Group` covers a contiguous range [start, end) of the filtered
//! frontier. Because the frontier is a staircase, the group's widest member
//! is its last rectangle and its tallest member is its first.

/// A contiguous run of frontier rectangles grouped together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group<T, L> {
    /// Inclusive start index into the frontier.
    pub start: usize,
    /// Exclusive end index; the group covers [start, end).
    pub end: usize,
    /// Width of the group, i.e. the width of `frontier[end - 1]`.
    pub width: T,
    /// Height of the group, i.e. the height of `frontier[start]`.
    pub height: T,
    /// `width * height`.
    pub cost: L,
}

impl<T, L> Group<T, L> {
    /// Number of frontier rectangles in the group.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the group covers no rectangle.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether frontier index `index` belongs to this group.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }
}
