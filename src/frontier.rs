//! Pareto-frontier filter.
//!
//! A rectangle whose width *and* height are both `<=` those of another
//! rectangle can be merged into that rectangle's group for free, so it never
//! affects the optimum. After removing every such rectangle the survivors,
//! sorted by width, form a staircase: widths strictly increase and heights
//! strictly decrease. The optimizer relies on that shape to insert lines in
//! decreasing-slope order.

use crate::rect::Rectangle;
use crate::traits::Dimension;

/// Sort `rectangles` by `(width, height)` and drop every dominated one, in
/// place.
///
/// Runs in O(n log n) for the sort plus one O(n) compaction pass: each
/// rectangle is written once and popped at most once. An empty input stays
/// empty; any non-empty input keeps at least its widest-then-tallest element.
pub fn filter<T: Dimension>(rectangles: &mut Vec<Rectangle<T>>) {
    #[cfg(feature = "tracing")]
    let before = rectangles.len();

    sort(rectangles);

    let mut kept = 0usize;
    for index in 0..rectangles.len() {
        let current = rectangles[index];
        // Widths are non-decreasing here, so `<=` on height means dominated.
        while kept > 0 && rectangles[kept - 1].height <= current.height {
            kept -= 1;
        }
        rectangles[kept] = current;
        kept += 1;
    }
    rectangles.truncate(kept);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        input = before,
        frontier = kept,
        dominated = before - kept,
        "filtered rectangle frontier"
    );
}

/// Owning variant of [`filter`].
pub fn filtered<T: Dimension>(mut rectangles: Vec<Rectangle<T>>) -> Vec<Rectangle<T>> {
    filter(&mut rectangles);
    rectangles
}

/// First index `i > 0` at which `rectangles[i]` does not strictly extend the
/// staircase formed by `rectangles[..i]`, if any.
pub fn first_violation<T: Dimension>(rectangles: &[Rectangle<T>]) -> Option<usize> {
    rectangles
        .windows(2)
        .position(|w| !(w[0].width < w[1].width && w[0].height > w[1].height))
        .map(|i| i + 1)
}

/// True if `rectangles` is strictly increasing in width and strictly
/// decreasing in height.
pub fn is_frontier<T: Dimension>(rectangles: &[Rectangle<T>]) -> bool {
    first_violation(rectangles).is_none()
}

#[cfg(feature = "parallel")]
fn sort<T: Dimension>(rectangles: &mut [Rectangle<T>]) {
    use rayon::slice::ParallelSliceMut;
    // Equal keys are identical rectangles, so stability is irrelevant.
    rectangles.par_sort_unstable();
}

#[cfg(not(feature = "parallel"))]
fn sort<T: Dimension>(rectangles: &mut [Rectangle<T>]) {
    rectangles.sort_unstable();
}
