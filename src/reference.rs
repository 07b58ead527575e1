//! Reference solvers used to cross-validate the envelope-based optimizer.
//!
//! - [`brute_force`] enumerates every split of the sorted input into
//!   contiguous groups: O(2^n · n), only for small inputs.
//! - [`quadratic_dp`] evaluates the same recurrence as the optimizer by
//!   scanning every group start: O(n²), usable up to a few thousand
//!   rectangles.
//!
//! Neither depends on the envelope, so agreement is meaningful evidence.

use crate::error::{GroupingError, Result};
use crate::frontier;
use crate::rect::Rectangle;
use crate::traits::{Accumulator, Dimension};
use crate::utils::{add, group_cost, mul};

/// Largest input accepted by [`brute_force`].
pub const BRUTE_FORCE_LIMIT: usize = 24;

/// True minimum by exhaustive search over contiguous splits of the
/// `(width, height)`-sorted input. Dominated rectangles are kept.
///
/// # Panics
/// Panics if `rectangles.len() > BRUTE_FORCE_LIMIT`.
pub fn brute_force<T, L>(rectangles: &[Rectangle<T>]) -> Result<L>
where
    T: Dimension,
    L: Accumulator + From<T>,
{
    assert!(
        rectangles.len() <= BRUTE_FORCE_LIMIT,
        "brute force is limited to {BRUTE_FORCE_LIMIT} rectangles"
    );
    if rectangles.is_empty() {
        return Err(GroupingError::EmptyInput);
    }
    let mut sorted = rectangles.to_vec();
    sorted.sort_unstable();

    let n = sorted.len();
    let mut best: Option<L> = None;
    // Bit i of `mask` set means a group ends right after position i.
    for mask in 0u32..(1u32 << (n - 1)) {
        let mut total = L::ZERO;
        let mut start = 0usize;
        for end in 1..=n {
            let closes = end == n || mask & (1 << (end - 1)) != 0;
            if !closes {
                continue;
            }
            let cost = group_cost::<T, L>(&sorted[start..end]).ok_or(
                GroupingError::InternalConsistency("empty group during enumeration"),
            )??;
            total = add(total, cost, "summing group costs")?;
            start = end;
        }
        best = Some(best.map_or(total, |b| b.min(total)));
    }
    best.ok_or(GroupingError::EmptyInput)
}

/// Minimum via the direct O(n²) recurrence over the filtered frontier.
pub fn quadratic_dp<T, L>(rectangles: &[Rectangle<T>]) -> Result<L>
where
    T: Dimension,
    L: Accumulator + From<T>,
{
    if rectangles.is_empty() {
        return Err(GroupingError::EmptyInput);
    }
    let frontier = frontier::filtered(rectangles.to_vec());

    let mut best = Vec::with_capacity(frontier.len() + 1);
    best.push(L::ZERO);
    for i in 0..frontier.len() {
        let width = L::from(frontier[i].width);
        let mut cell: Option<L> = None;
        for (j, rect) in frontier[..=i].iter().enumerate() {
            let span = mul(L::from(rect.height), width, "computing a group cost")?;
            let candidate = add(best[j], span, "summing group costs")?;
            cell = Some(cell.map_or(candidate, |c| c.min(candidate)));
        }
        best.push(cell.ok_or(GroupingError::InternalConsistency("no group start"))?);
    }
    Ok(best[frontier.len()])
}
