//! Lower envelope of lines for the monotonic convex hull trick.
//!
//! Lines `y = slope * x + intercept` are appended with strictly decreasing
//! slopes and queried at non-decreasing `x`. Under those two orders the
//! envelope is a flat vector (neighbours are adjacent indices) and the best
//! line for successive queries only ever moves to the right, so both
//! operations are amortised O(1) without any search.
//!
//! ```text
//!   y
//!   |  \ L0 (steepest, inserted first)
//!   |   \      L1
//!   |    \ ___/____ L2 (flattest, inserted last)
//!   |     X   X
//!   +-----------------> x      queries sweep left to right
//! ```
//!
//! All arithmetic is checked: the crossover comparison multiplies two
//! differences of already wide values and is the first place an undersized
//! accumulator overflows.

use crate::error::{GroupingError, Result};
use crate::traits::Accumulator;
use crate::utils::{add, mul, sub};

/// A candidate cost function `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<L> {
    pub slope: L,
    pub intercept: L,
    /// Insertion ordinal within the owning envelope.
    pub origin: usize,
}

impl<L: Accumulator> Line<L> {
    /// Evaluate the line at `x`.
    #[inline]
    pub fn value_at(&self, x: L) -> Result<L> {
        let product = mul(self.slope, x, "evaluating a line")?;
        add(product, self.intercept, "evaluating a line")
    }
}

/// Index of the best line for the most recent query.
///
/// Persisted by the caller across [`LowerEnvelope::query_min`] calls. It only
/// moves forward, except that it snaps back to the last line when the lines
/// it pointed at have been removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryCursor {
    index: usize,
}

impl QueryCursor {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Monotone lower envelope stored as a contiguous vector.
#[derive(Clone, Debug, Default)]
pub struct LowerEnvelope<L> {
    lines: Vec<Line<L>>,
    inserted: usize,
}

impl<L: Accumulator> LowerEnvelope<L> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            inserted: 0,
        }
    }

    /// Pre-allocate room for `capacity` lines.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
            inserted: 0,
        }
    }

    /// Number of lines currently on the envelope.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of `add_line` calls so far; always `>= len()`.
    #[inline]
    pub fn inserted(&self) -> usize {
        self.inserted
    }

    /// Lines in insertion (decreasing slope) order.
    #[inline]
    pub fn lines(&self) -> &[Line<L>] {
        &self.lines
    }

    /// Append a line whose slope is strictly lower than every slope added
    /// before, then drop middle lines that can no longer be minimal.
    ///
    /// Let `L1, L2, L3` be the last three lines. `L2` is useless once the
    /// crossover of `L1` and `L3` lies at or left of the crossover of `L1`
    /// and `L2`. With `k1 > k2 > k3` both crossovers have positive
    /// denominators, so
    ///
    /// ```text
    /// (b3 - b1) / (k1 - k3) <= (b2 - b1) / (k1 - k2)
    ///   <=>  (b3 - b1) * (k1 - k2) <= (b2 - b1) * (k1 - k3)
    /// ```
    ///
    /// which stays in integers.
    pub fn add_line(&mut self, slope: L, intercept: L) -> Result<()> {
        debug_assert!(
            self.lines.last().map_or(true, |last| slope < last.slope),
            "slopes must strictly decrease"
        );

        self.lines.push(Line {
            slope,
            intercept,
            origin: self.inserted,
        });
        self.inserted += 1;

        while self.lines.len() >= 3 {
            let n = self.lines.len();
            if !middle_is_useless(&self.lines[n - 3], &self.lines[n - 2], &self.lines[n - 1])? {
                break;
            }
            self.lines.remove(n - 2);
        }
        Ok(())
    }

    /// Minimum over all lines at `x`.
    ///
    /// `x` must not be smaller than the `x` of any earlier query made with
    /// the same cursor.
    #[inline]
    pub fn query_min(&self, x: L, cursor: &mut QueryCursor) -> Result<L> {
        self.query(x, cursor).map(|(value, _origin)| value)
    }

    /// Like [`query_min`](Self::query_min) but also returns the
    /// [`origin`](Line::origin) of the minimising line.
    pub fn query(&self, x: L, cursor: &mut QueryCursor) -> Result<(L, usize)> {
        let last = self
            .lines
            .len()
            .checked_sub(1)
            .ok_or(GroupingError::EmptyEnvelope)?;

        if cursor.index > last {
            // Everything from the cursor on was removed by later insertions;
            // the newest line survived and is minimal for the largest x so far.
            cursor.index = last;
        } else {
            let mut current = self.lines[cursor.index].value_at(x)?;
            while cursor.index < last {
                let next = self.lines[cursor.index + 1].value_at(x)?;
                if next > current {
                    break;
                }
                current = next;
                cursor.index += 1;
            }
            return Ok((current, self.lines[cursor.index].origin));
        }

        let line = &self.lines[cursor.index];
        Ok((line.value_at(x)?, line.origin))
    }
}

fn middle_is_useless<L: Accumulator>(l1: &Line<L>, l2: &Line<L>, l3: &Line<L>) -> Result<bool> {
    const OP: &str = "comparing line crossovers";
    let intercept31 = sub(l3.intercept, l1.intercept, OP)?;
    let intercept21 = sub(l2.intercept, l1.intercept, OP)?;
    let slope12 = sub(l1.slope, l2.slope, OP)?;
    let slope13 = sub(l1.slope, l3.slope, OP)?;
    Ok(mul(intercept31, slope12, OP)? <= mul(intercept21, slope13, OP)?)
}
