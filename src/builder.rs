use crate::error::Result;
use crate::optimizer::GroupingOptimizer;
use crate::rect::Rectangle;
use crate::traits::{Accumulator, Dimension};

/// Configures a [`GroupingOptimizer`].
///
/// ```
/// use rect_cht::{OptimizerBuilder, Rectangle};
///
/// let optimizer = OptimizerBuilder::new(vec![Rectangle::new(3u16, 1), Rectangle::new(1, 3)])
///     .with_group_reconstruction(false)
///     .build::<i32>()
///     .unwrap();
/// assert_eq!(optimizer.cost().unwrap(), 6);
/// ```
pub struct OptimizerBuilder<T> {
    rectangles: Vec<Rectangle<T>>,
    presorted: bool,
    reconstruct: bool,
}

impl<T: Dimension> OptimizerBuilder<T> {
    pub fn new(rectangles: Vec<Rectangle<T>>) -> Self {
        Self {
            rectangles,
            presorted: false,
            reconstruct: true,
        }
    }

    /// Treat the input as an already filtered frontier: skip sorting and
    /// filtering, and reject it if it is not a strict staircase.
    pub fn presorted_frontier(mut self, presorted: bool) -> Self {
        self.presorted = presorted;
        self
    }

    pub fn with_group_reconstruction(mut self, reconstruct: bool) -> Self {
        self.reconstruct = reconstruct;
        self
    }

    pub fn build<L: Accumulator + From<T>>(self) -> Result<GroupingOptimizer<T, L>> {
        let optimizer = if self.presorted {
            GroupingOptimizer::from_frontier(self.rectangles)?
        } else {
            GroupingOptimizer::new(self.rectangles)?
        };
        Ok(optimizer.with_group_reconstruction(self.reconstruct))
    }
}
