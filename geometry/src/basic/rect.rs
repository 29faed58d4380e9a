// turtleworld/geometry/src/basic/rect.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! 2D axis-aligned rectangles.

use crate::basic::point::Point2DI32;

/// An inclusive integer rectangle, stored as its two corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RectI32 {
    origin: Point2DI32,
    lower_right: Point2DI32,
}

impl RectI32 {
    #[inline]
    pub fn from_points(origin: Point2DI32, lower_right: Point2DI32) -> RectI32 {
        RectI32 { origin, lower_right }
    }

    #[inline]
    pub fn origin(&self) -> Point2DI32 {
        self.origin
    }

    #[inline]
    pub fn lower_right(&self) -> Point2DI32 {
        self.lower_right
    }

    #[inline]
    pub fn union_rect(&self, other: RectI32) -> RectI32 {
        RectI32::from_points(
            self.origin.min(other.origin),
            self.lower_right.max(other.lower_right),
        )
    }
}

#[cfg(test)]
mod test {
    use super::RectI32;
    use crate::basic::point::Point2DI32;

    #[test]
    fn test_union() {
        let a = RectI32::from_points(Point2DI32::new(0, 0), Point2DI32::new(5, 5));
        let b = RectI32::from_points(Point2DI32::new(-3, 2), Point2DI32::new(-1, 12));
        let union = a.union_rect(b);
        assert_eq!(union.origin(), Point2DI32::new(-3, 0));
        assert_eq!(union.lower_right(), Point2DI32::new(5, 12));
    }
}
