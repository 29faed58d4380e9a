// turtleworld/geometry/src/basic/point.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A SIMD-free 2D point type.

use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::{Add, Sub};

/// A point in device space. Turtles live on whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Point2DI32 {
    pub x: i32,
    pub y: i32,
}

impl Point2DI32 {
    #[inline]
    pub fn new(x: i32, y: i32) -> Point2DI32 {
        Point2DI32 { x, y }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn min(&self, other: Point2DI32) -> Point2DI32 {
        Point2DI32::new(self.x.min(other.x), self.y.min(other.y))
    }

    #[inline]
    pub fn max(&self, other: Point2DI32) -> Point2DI32 {
        Point2DI32::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Display for Point2DI32 {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        write!(formatter, "{},{}", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Point2DF32 {
    pub x: f32,
    pub y: f32,
}

impl Point2DF32 {
    #[inline]
    pub fn new(x: f32, y: f32) -> Point2DF32 {
        Point2DF32 { x, y }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn approx_eq(&self, other: &Point2DF32, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add<Point2DF32> for Point2DF32 {
    type Output = Point2DF32;
    #[inline]
    fn add(self, other: Point2DF32) -> Point2DF32 {
        Point2DF32::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub<Point2DF32> for Point2DF32 {
    type Output = Point2DF32;
    #[inline]
    fn sub(self, other: Point2DF32) -> Point2DF32 {
        Point2DF32::new(self.x - other.x, self.y - other.y)
    }
}
