// turtleworld/turtle/src/pose.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Position and heading math.
//!
//! Headings are radians. Heading 0 faces +x, and positive headings sweep
//! counter-clockwise on screen: y grows downward, so motion along the
//! heading uses `sin(-heading)` for the y component.

use turtleworld_geometry::basic::point::{Point2DF32, Point2DI32};
use turtleworld_geometry::basic::transform2d::Transform2DF32;

const MARKER_HALF_BASE: f64 = 5.0;
const MARKER_HEIGHT: f64 = 12.0;

/// Adds one half and truncates toward zero. Negative values therefore round
/// up as well: `-4.5` becomes `-4`, and so does `-4.7 + 0.5`.
#[inline]
pub fn round_pixel(value: f64) -> i32 {
    (value + 0.5) as i32
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Point2DI32,
    pub heading: f64,
}

impl Pose {
    #[inline]
    pub fn new(position: Point2DI32, heading: f64) -> Pose {
        Pose { position, heading }
    }

    /// The pixel `distance` units ahead along the heading.
    pub fn ahead(&self, distance: f64) -> Point2DI32 {
        Point2DI32::new(
            round_pixel(self.position.x() as f64 + distance * self.heading.cos()),
            round_pixel(self.position.y() as f64 + distance * (-self.heading).sin()),
        )
    }

    /// Whether the heading rounds to exactly 90 or 270 degrees. Text
    /// advances along y only in that case.
    pub fn is_vertical(&self) -> bool {
        let degrees = round_pixel(self.heading.to_degrees());
        degrees == 90 || degrees == 270
    }

    /// The heading folded into `[0, 2π)` for finite headings that are not
    /// exactly 360 degrees.
    ///
    /// Headings above 360 degrees are negated first, then anything negative
    /// is lifted by half turns. 370 degrees therefore reads as 170, not 10.
    pub fn look_direction(&self) -> f64 {
        let mut direction = self.heading;
        if direction.to_degrees() > 360.0 {
            direction = -direction;
        }
        while direction.to_degrees() < 0.0 {
            direction += 180f64.to_radians();
        }
        direction
    }

    /// The direction marker: a triangle with its apex on the turtle and its
    /// base below it, turned about its centre so the apex points along the
    /// heading.
    pub fn marker(&self) -> [Point2DF32; 3] {
        // f64, so positions at the i32 limits cannot overflow.
        let (x, y) = (self.position.x() as f64, self.position.y() as f64);
        let points = [
            (x, y),
            (x - MARKER_HALF_BASE, y + MARKER_HEIGHT),
            (x + MARKER_HALF_BASE, y + MARKER_HEIGHT),
        ];

        // Centre of the bounding box, pixel-rounded like every position.
        let center = Point2DF32::new(
            (x + 0.5).trunc() as f32,
            (y + MARKER_HEIGHT / 2.0 + 0.5).trunc() as f32,
        );

        let theta = -self.heading + 90f64.to_radians();
        let transform = Transform2DF32::from_rotation_about(theta as f32, &center);
        let vertex = |(x, y): (f64, f64)| {
            transform.transform_point(&Point2DF32::new(x as f32, y as f32))
        };
        [vertex(points[0]), vertex(points[1]), vertex(points[2])]
    }
}
