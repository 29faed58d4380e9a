// turtleworld/geometry/src/basic/line_segment.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Line segment types.

use crate::basic::point::Point2DI32;
use crate::basic::rect::RectI32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineSegmentI32 {
    pub from: Point2DI32,
    pub to: Point2DI32,
}

impl LineSegmentI32 {
    #[inline]
    pub fn new(from: &Point2DI32, to: &Point2DI32) -> LineSegmentI32 {
        LineSegmentI32 { from: *from, to: *to }
    }

    #[inline]
    pub fn from(&self) -> Point2DI32 {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point2DI32 {
        self.to
    }

    #[inline]
    pub fn bounds(&self) -> RectI32 {
        RectI32::from_points(self.from.min(self.to), self.from.max(self.to))
    }
}

#[cfg(test)]
mod test {
    use super::LineSegmentI32;
    use crate::basic::point::Point2DI32;

    #[test]
    fn test_bounds_are_ordered() {
        let segment = LineSegmentI32::new(&Point2DI32::new(10, -2), &Point2DI32::new(4, 8));
        let bounds = segment.bounds();
        assert_eq!(bounds.origin(), Point2DI32::new(4, -2));
        assert_eq!(bounds.lower_right(), Point2DI32::new(10, 8));
    }
}
