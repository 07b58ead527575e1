//! Checked arithmetic helpers shared by the envelope, optimizer and reference
//! solvers.

use crate::error::{GroupingError, Result};
use crate::rect::Rectangle;
use crate::traits::{Accumulator, Dimension};

#[inline]
pub(crate) fn add<L: Accumulator>(a: L, b: L, operation: &'static str) -> Result<L> {
    a.checked_add(b).ok_or(GroupingError::Overflow { operation })
}

#[inline]
pub(crate) fn sub<L: Accumulator>(a: L, b: L, operation: &'static str) -> Result<L> {
    a.checked_sub(b).ok_or(GroupingError::Overflow { operation })
}

#[inline]
pub(crate) fn mul<L: Accumulator>(a: L, b: L, operation: &'static str) -> Result<L> {
    a.checked_mul(b).ok_or(GroupingError::Overflow { operation })
}

/// Cost of a single group: `max width * max height` over its members.
///
/// Returns `None` for an empty slice.
pub fn group_cost<T, L>(members: &[Rectangle<T>]) -> Option<Result<L>>
where
    T: Dimension,
    L: Accumulator + From<T>,
{
    let first = members.first()?;
    let (width, height) = members
        .iter()
        .fold((first.width, first.height), |(w, h), r| {
            (w.max(r.width), h.max(r.height))
        });
    Some(mul(L::from(width), L::from(height), "computing a group cost"))
}
