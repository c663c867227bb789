// ABOUTME: The measure/arrange capability every grid child provides.
// ABOUTME: Includes a fixed-size item for hosts that already know their sizes.

use colgrid_core::{Rect, Size};

/// A child the grid can measure and place.
///
/// The protocol is two-phase: `measure` records a desired size, which the
/// arrangement pass later reads back through `desired_size` before calling
/// `arrange` with the item's final rectangle.
pub trait LayoutItem {
    /// Measure against `constraint`, remember the result, and return it.
    fn measure(&mut self, constraint: Size) -> Size;

    /// Size recorded by the last call to `measure`
    fn desired_size(&self) -> Size;

    /// Accept a final placement
    fn arrange(&mut self, rect: Rect);
}

impl<T: LayoutItem + ?Sized> LayoutItem for Box<T> {
    fn measure(&mut self, constraint: Size) -> Size {
        (**self).measure(constraint)
    }

    fn desired_size(&self) -> Size {
        (**self).desired_size()
    }

    fn arrange(&mut self, rect: Rect) {
        (**self).arrange(rect)
    }
}

/// An item with a known intrinsic size. It ignores the constraint it is
/// measured against and remembers where it was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedItem {
    intrinsic: Size,
    desired: Size,
    bounds: Option<Rect>,
    measure_count: usize,
}

impl FixedItem {
    pub fn new(intrinsic: Size) -> Self {
        Self {
            intrinsic,
            desired: Size::ZERO,
            bounds: None,
            measure_count: 0,
        }
    }

    pub fn intrinsic_size(&self) -> Size {
        self.intrinsic
    }

    /// Rectangle from the last arrangement, if any
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn measure_count(&self) -> usize {
        self.measure_count
    }
}

impl LayoutItem for FixedItem {
    fn measure(&mut self, _constraint: Size) -> Size {
        self.measure_count += 1;
        self.desired = self.intrinsic;
        self.desired
    }

    fn desired_size(&self) -> Size {
        self.desired
    }

    fn arrange(&mut self, rect: Rect) {
        self.bounds = Some(rect);
    }
}
