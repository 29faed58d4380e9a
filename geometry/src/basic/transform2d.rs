// turtleworld/geometry/src/basic/transform2d.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! 2D affine transforms.

use crate::basic::point::Point2DF32;

/// A 2x2 matrix, in column-major order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2x2F32 {
    pub m11: f32,
    pub m12: f32,
    pub m21: f32,
    pub m22: f32,
}

impl Matrix2x2F32 {
    /// Rotation in device space, where positive angles sweep from +x
    /// towards +y (clockwise on screen).
    #[inline]
    pub fn from_rotation(theta: f32) -> Matrix2x2F32 {
        let (sin_theta, cos_theta) = theta.sin_cos();
        Matrix2x2F32 { m11: cos_theta, m12: -sin_theta, m21: sin_theta, m22: cos_theta }
    }

    #[inline]
    pub fn transform_point(&self, point: &Point2DF32) -> Point2DF32 {
        Point2DF32::new(
            self.m11 * point.x() + self.m12 * point.y(),
            self.m21 * point.x() + self.m22 * point.y(),
        )
    }
}

/// An affine transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2DF32 {
    pub matrix: Matrix2x2F32,
    pub vector: Point2DF32,
}

impl Transform2DF32 {
    /// Rotates about `anchor` instead of the origin.
    #[inline]
    pub fn from_rotation_about(theta: f32, anchor: &Point2DF32) -> Transform2DF32 {
        let matrix = Matrix2x2F32::from_rotation(theta);
        let vector = *anchor - matrix.transform_point(anchor);
        Transform2DF32 { matrix, vector }
    }

    #[inline]
    pub fn transform_point(&self, point: &Point2DF32) -> Point2DF32 {
        self.matrix.transform_point(point) + self.vector
    }
}

#[cfg(test)]
mod test {
    use super::Transform2DF32;
    use crate::basic::point::Point2DF32;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rotation_about_anchor() {
        let anchor = Point2DF32::new(10.0, 10.0);
        let transform = Transform2DF32::from_rotation_about(FRAC_PI_2, &anchor);
        let rotated = transform.transform_point(&Point2DF32::new(15.0, 10.0));
        assert!(rotated.approx_eq(&Point2DF32::new(10.0, 15.0), 1e-4));
        assert!(transform.transform_point(&anchor).approx_eq(&anchor, 1e-4));
    }
}
