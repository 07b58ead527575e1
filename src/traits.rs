//! Numeric traits for rectangle sides and cost accumulators.
//!
//! The optimizer is generic over two integer types:
//! - `T: Dimension`, the type of a rectangle side,
//! - `L: Accumulator`, a wider type holding products of sides and sums of
//!   such products.
//!
//! Every public entry point bounds `L: From<T>`. The standard library only
//! provides `From` for lossless widenings, so pairing `T = i64` with
//! `L = i32` is rejected at compile time. Whether `L` is wide *enough* for a
//! given input (products of two cost differences appear in the envelope
//! maintenance) is checked at runtime: all accumulator arithmetic goes through
//! the checked operations below and overflow is reported as
//! [`GroupingError::Overflow`](crate::error::GroupingError::Overflow).

use std::fmt::Debug;

/// Integer type of a rectangle side.
pub trait Dimension: Copy + Ord + Debug + Send + Sync {
    /// Additive identity; sides must compare strictly greater than this.
    const ZERO: Self;

    /// Returns true if the side is strictly positive.
    #[inline]
    fn is_positive(self) -> bool {
        self > Self::ZERO
    }
}

/// Signed integer type used for slopes, intercepts and running costs.
///
/// Signedness matters: the envelope compares differences of intercepts and
/// slopes, and those differences are only guaranteed non-negative for inputs
/// produced by the optimizer.
pub trait Accumulator: Copy + Ord + Debug {
    /// Additive identity; the cost of an empty prefix.
    const ZERO: Self;

    /// `self + rhs`, or `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, or `None` on overflow.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// `self * rhs`, or `None` on overflow.
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_dimension {
    ($($t:ty),* $(,)?) => {
        $(
            impl Dimension for $t {
                const ZERO: Self = 0;
            }
        )*
    };
}

macro_rules! impl_accumulator {
    ($($t:ty),* $(,)?) => {
        $(
            impl Accumulator for $t {
                const ZERO: Self = 0;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }
            }
        )*
    };
}

impl_dimension!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_accumulator!(i32, i64, i128);
