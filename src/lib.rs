//! Minimum-cost rectangle grouping with a monotonic convex hull trick.
//!
//! Given rectangles `(width, height)` that cannot be rotated, partition them
//! into groups so that the sum over groups of
//! `max width in group * max height in group` is minimal.
//!
//! ## Core idea
//! 1. Drop every rectangle that is no larger than some other rectangle on
//!    both sides ([`frontier`]). The survivors form a staircase: widths
//!    strictly increase while heights strictly decrease.
//! 2. On a staircase the optimal groups are contiguous ranges, and the DP
//!    `cost[i + 1] = min_{j <= i} cost[j] + height[j] * width[i]` is a minimum
//!    of lines evaluated at `width[i]`.
//! 3. Slopes arrive in decreasing order and query points in increasing order,
//!    so a [`LowerEnvelope`] with a forward-only [`QueryCursor`] answers every
//!    step in amortised O(1) ([`optimizer`]).
//!
//! Total cost is O(n log n), dominated by the sort.
//!
//! ## Quick start
//! ```
//! use rect_cht::{GroupingOptimizer, Rectangle};
//!
//! let rects = vec![
//!     Rectangle::new(1, 4),
//!     Rectangle::new(2, 6),
//!     Rectangle::new(10, 1),
//! ];
//! let (cost, groups) = GroupingOptimizer::<i32, i64>::new(rects)
//!     .unwrap()
//!     .run()
//!     .unwrap();
//! assert_eq!(cost, 2 * 6 + 10 * 1);
//! assert_eq!(groups.len(), 2);
//! ```
//!
//! ## Numeric types
//! Sides use any [`Dimension`] (`i8`..`i64`, `u8`..`u64`); costs use a signed
//! [`Accumulator`] (`i32`, `i64`, `i128`) with `L: From<T>`. Arithmetic is
//! checked, so an accumulator that is too narrow yields
//! [`GroupingError::Overflow`] rather than a wrong answer.
//!
//! ## Cargo features
//! - `parallel`: sort the frontier with rayon.
//! - `tracing`: emit spans and events through `tracing`.
//! - `heavy`: enable long-running stress tests.

pub mod builder;
pub mod envelope;
pub mod error;
pub mod frontier;
pub mod groups;
pub mod optimizer;
pub mod rect;
pub mod reference;
pub mod traits;
pub mod utils;

pub use crate::builder::OptimizerBuilder;
pub use crate::envelope::{Line, LowerEnvelope, QueryCursor};
pub use crate::error::{GroupingError, Result};
pub use crate::groups::Group;
pub use crate::optimizer::{min_grouping_cost, optimize, GroupingOptimizer};
pub use crate::rect::Rectangle;
pub use crate::traits::{Accumulator, Dimension};
