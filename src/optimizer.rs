//! Grouping optimizer driving the convex-hull-trick DP.
//!
//! On a staircase frontier `r[0..n)` (widths increasing, heights decreasing)
//! the optimal groups are contiguous ranges, and the group `r[j..=i]` costs
//! `r[i].width * r[j].height`. With `cost[0] = 0` this gives
//!
//! ```text
//! cost[i + 1] = min_{j <= i} ( cost[j] + height[j] * width[i] )
//! ```
//!
//! i.e. the minimum over lines `y = height[j] * x + cost[j]` evaluated at
//! `x = width[i]`. Slopes arrive in decreasing order and query points in
//! increasing order, so each step is one [`LowerEnvelope::add_line`] followed
//! by one [`LowerEnvelope::query`], amortised O(1).
//!
//! The engine is generic over the side type `T` and the accumulator `L`.

use std::marker::PhantomData;

use crate::envelope::{LowerEnvelope, QueryCursor};
use crate::error::{GroupingError, Result};
use crate::frontier;
use crate::groups::Group;
use crate::rect::Rectangle;
use crate::traits::{Accumulator, Dimension};
use crate::utils::mul;

/// Minimum grouping cost of an already filtered frontier.
///
/// # Errors
/// - [`GroupingError::EmptyInput`] if `frontier` is empty,
/// - [`GroupingError::NonPositiveDimension`] for a zero or negative side,
/// - [`GroupingError::NotAFrontier`] if widths do not strictly increase or
///   heights do not strictly decrease,
/// - [`GroupingError::Overflow`] if `L` is too narrow for the input.
pub fn optimize<T, L>(frontier: &[Rectangle<T>]) -> Result<L>
where
    T: Dimension,
    L: Accumulator + From<T>,
{
    validate(frontier)?;
    if let Some(index) = frontier::first_violation(frontier) {
        return Err(GroupingError::NotAFrontier { index });
    }
    sweep(frontier, None)
}

/// Minimum grouping cost of an arbitrary non-empty rectangle collection.
///
/// Every side must be positive. A rectangle with a zero or negative side is
/// rejected with [`GroupingError::NonPositiveDimension`] before filtering,
/// even when some other rectangle would dominate it.
///
/// ```
/// use rect_cht::{min_grouping_cost, Rectangle};
///
/// let rects = vec![Rectangle::new(1, 4), Rectangle::new(2, 6)];
/// let cost: i64 = min_grouping_cost(rects).unwrap();
/// assert_eq!(cost, 12);
/// ```
pub fn min_grouping_cost<T, L>(rectangles: Vec<Rectangle<T>>) -> Result<L>
where
    T: Dimension,
    L: Accumulator + From<T>,
{
    GroupingOptimizer::<T, L>::new(rectangles)?.cost()
}

/// Grouping optimizer over an owned, validated frontier.
///
/// Typical usage:
/// ```
/// use rect_cht::{GroupingOptimizer, Rectangle};
///
/// let rects = vec![
///     Rectangle::new(1u32, 100),
///     Rectangle::new(2, 90),
///     Rectangle::new(100, 1),
///     Rectangle::new(50, 1),
/// ];
/// let optimizer = GroupingOptimizer::<u32, i64>::new(rects).unwrap();
/// let (cost, groups) = optimizer.run().unwrap();
/// assert_eq!(cost, 2 * 100 + 100 * 1);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(optimizer.dominated(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GroupingOptimizer<T, L> {
    frontier: Vec<Rectangle<T>>,
    dominated: usize,
    reconstruct: bool,
    _accumulator: PhantomData<L>,
}

impl<T, L> GroupingOptimizer<T, L>
where
    T: Dimension,
    L: Accumulator + From<T>,
{
    /// Validate `rectangles`, then sort and filter them into a frontier.
    pub fn new(rectangles: Vec<Rectangle<T>>) -> Result<Self> {
        validate(&rectangles)?;
        let input = rectangles.len();
        let frontier = frontier::filtered(rectangles);
        let dominated = input - frontier.len();
        Ok(Self::from_parts(frontier, dominated))
    }

    /// Use `frontier` as is; it must already be a strict staircase.
    pub fn from_frontier(frontier: Vec<Rectangle<T>>) -> Result<Self> {
        validate(&frontier)?;
        if let Some(index) = frontier::first_violation(&frontier) {
            return Err(GroupingError::NotAFrontier { index });
        }
        Ok(Self::from_parts(frontier, 0))
    }

    fn from_parts(frontier: Vec<Rectangle<T>>, dominated: usize) -> Self {
        Self {
            frontier,
            dominated,
            reconstruct: true,
            _accumulator: PhantomData,
        }
    }

    /// Enable or disable recording of the optimal partition in [`run`](Self::run).
    pub fn with_group_reconstruction(mut self, reconstruct: bool) -> Self {
        self.reconstruct = reconstruct;
        self
    }

    /// The filtered frontier the optimizer runs on.
    pub fn frontier(&self) -> &[Rectangle<T>] {
        &self.frontier
    }

    /// Number of input rectangles removed as dominated.
    pub fn dominated(&self) -> usize {
        self.dominated
    }

    /// Whether [`run`](Self::run) reconstructs groups.
    pub fn reconstructs_groups(&self) -> bool {
        self.reconstruct
    }

    /// Minimum total cost only.
    pub fn cost(&self) -> Result<L> {
        #[cfg(feature = "tracing")]
        let _enter = tracing::debug_span!(
            "optimize",
            frontier = self.frontier.len(),
            dominated = self.dominated
        )
        .entered();
        sweep(&self.frontier, None)
    }

    /// Minimum total cost and, when reconstruction is enabled, the optimal
    /// groups in frontier order.
    ///
    /// The groups tile `0..frontier().len()` and their costs sum to the
    /// returned total.
    pub fn run(&self) -> Result<(L, Vec<Group<T, L>>)> {
        if !self.reconstruct {
            return Ok((self.cost()?, Vec::new()));
        }

        #[cfg(feature = "tracing")]
        let _enter = tracing::debug_span!(
            "optimize",
            frontier = self.frontier.len(),
            dominated = self.dominated,
            reconstruct = true
        )
        .entered();

        let mut starts = Vec::with_capacity(self.frontier.len());
        let cost = sweep(&self.frontier, Some(&mut starts))?;
        let groups = collect_groups(&self.frontier, &starts)?;
        Ok((cost, groups))
    }
}

fn validate<T: Dimension>(rectangles: &[Rectangle<T>]) -> Result<()> {
    if rectangles.is_empty() {
        return Err(GroupingError::EmptyInput);
    }
    match rectangles.iter().position(|r| !r.is_valid()) {
        Some(index) => Err(GroupingError::NonPositiveDimension { index }),
        None => Ok(()),
    }
}

/// Run the insert-then-query loop over `frontier`.
///
/// When `starts` is given, `starts[i]` receives the index of the first
/// rectangle of the last group in an optimal covering of `frontier[..=i]`.
fn sweep<T, L>(frontier: &[Rectangle<T>], mut starts: Option<&mut Vec<usize>>) -> Result<L>
where
    T: Dimension,
    L: Accumulator + From<T>,
{
    let mut envelope = LowerEnvelope::with_capacity(frontier.len());
    let mut cursor = QueryCursor::new();
    let mut cost = L::ZERO;

    for rect in frontier {
        // Hypothesis: a new group opens at `rect`, which is taller than
        // everything after it.
        envelope.add_line(L::from(rect.height), cost)?;
        let (next, group_start) = envelope.query(L::from(rect.width), &mut cursor)?;
        check_cost_increases(cost, next)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            step = envelope.inserted(),
            group_start,
            cost = ?next,
            cursor = cursor.index(),
            lines = envelope.len(),
            "dp step"
        );

        if let Some(starts) = starts.as_deref_mut() {
            starts.push(group_start);
        }
        cost = next;
    }

    Ok(cost)
}

#[cfg(debug_assertions)]
#[inline]
fn check_cost_increases<L: Accumulator>(previous: L, next: L) -> Result<()> {
    if next > previous {
        Ok(())
    } else {
        Err(GroupingError::InternalConsistency(
            "running cost did not increase",
        ))
    }
}

#[cfg(not(debug_assertions))]
#[inline(always)]
fn check_cost_increases<L: Accumulator>(_previous: L, _next: L) -> Result<()> {
    Ok(())
}

/// Walk the recorded group starts back from the end of the frontier.
fn collect_groups<T, L>(frontier: &[Rectangle<T>], starts: &[usize]) -> Result<Vec<Group<T, L>>>
where
    T: Dimension,
    L: Accumulator + From<T>,
{
    let mut groups = Vec::new();
    let mut end = frontier.len();
    while end > 0 {
        let start = starts[end - 1];
        if start >= end {
            return Err(GroupingError::InternalConsistency(
                "group start lies after its end",
            ));
        }
        let width = frontier[end - 1].width;
        let height = frontier[start].height;
        let cost = mul(L::from(width), L::from(height), "computing a group cost")?;
        groups.push(Group {
            start,
            end,
            width,
            height,
            cost,
        });
        end = start;
    }
    groups.reverse();
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rects(pairs: &[(i32, i32)]) -> Vec<Rectangle<i32>> {
        pairs.iter().map(|&(w, h)| Rectangle::new(w, h)).collect()
    }

    #[test]
    fn sweep_records_one_start_per_rectangle() {
        let frontier = rects(&[(1, 50), (2, 48), (30, 3), (31, 2), (60, 1)]);
        let mut starts = Vec::new();
        let cost: i64 = sweep(&frontier, Some(&mut starts)).unwrap();
        assert_eq!(cost, 253);
        // Groups: {0, 1}, {2, 3}, {4}.
        assert_eq!(starts, vec![0, 0, 2, 2, 4]);
    }

    #[test]
    fn single_rectangle_costs_its_area() {
        let cost: i64 = optimize(&rects(&[(7, 3)])).unwrap();
        assert_eq!(cost, 21);
    }

    #[test]
    fn dominated_pair_collapses() {
        let cost: i64 = min_grouping_cost(rects(&[(1, 4), (2, 6)])).unwrap();
        assert_eq!(cost, 12);
    }

    #[test]
    fn wide_and_tall_are_kept_apart() {
        // Together: 10 * 10 = 100. Apart: 10 * 1 + 1 * 10 = 20.
        let cost: i64 = min_grouping_cost(rects(&[(10, 1), (1, 10)])).unwrap();
        assert_eq!(cost, 20);
    }

    #[test]
    fn similar_rectangles_are_merged() {
        // Together: 3 * 3 = 9. Apart: 2 * 3 + 3 * 2 = 12.
        let cost: i64 = min_grouping_cost(rects(&[(2, 3), (3, 2)])).unwrap();
        assert_eq!(cost, 9);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(
            optimize::<i32, i64>(&[]),
            Err(GroupingError::EmptyInput)
        );
        assert_eq!(
            min_grouping_cost::<i32, i64>(Vec::new()),
            Err(GroupingError::EmptyInput)
        );
    }

    #[test]
    fn non_positive_side_is_rejected() {
        let err = min_grouping_cost::<i32, i64>(rects(&[(3, 3), (0, 1)])).unwrap_err();
        assert_eq!(err, GroupingError::NonPositiveDimension { index: 1 });
    }

    #[test]
    fn unfiltered_input_to_optimize_is_rejected() {
        let err = optimize::<i32, i64>(&rects(&[(1, 4), (2, 6)])).unwrap_err();
        assert_eq!(err, GroupingError::NotAFrontier { index: 1 });
    }

    #[test]
    fn narrow_accumulator_overflows() {
        let err = min_grouping_cost::<i32, i32>(rects(&[(i32::MAX, 2)])).unwrap_err();
        assert!(matches!(err, GroupingError::Overflow { .. }));
    }

    #[test]
    fn groups_tile_the_frontier_and_sum_to_cost() {
        let optimizer =
            GroupingOptimizer::<i32, i64>::new(rects(&[(1, 50), (2, 48), (30, 3), (31, 2), (60, 1)]))
                .unwrap();
        let (cost, groups) = optimizer.run().unwrap();
        assert_eq!(groups.first().map(|g| g.start), Some(0));
        assert_eq!(groups.last().map(|g| g.end), Some(optimizer.frontier().len()));
        for pair in groups.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(groups.iter().map(|g| g.cost).sum::<i64>(), cost);
    }

    #[test]
    fn reconstruction_can_be_disabled() {
        let optimizer = GroupingOptimizer::<i32, i64>::new(rects(&[(2, 3), (3, 2)]))
            .unwrap()
            .with_group_reconstruction(false);
        let (cost, groups) = optimizer.run().unwrap();
        assert_eq!(cost, 9);
        assert!(groups.is_empty());
        assert!(!optimizer.reconstructs_groups());
    }
}
