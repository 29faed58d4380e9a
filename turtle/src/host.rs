// turtleworld/turtle/src/host.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The surface turtles draw into.

use turtleworld_geometry::basic::line_segment::LineSegmentI32;
use turtleworld_geometry::basic::point::{Point2DF32, Point2DI32};
use turtleworld_geometry::color::ColorU;

/// A raster owned by a window (or by a test). Turtles paint into it and ask
/// for redraws; the world paints the direction markers on top.
pub trait CanvasHost {
    fn draw_line(&mut self, segment: LineSegmentI32, color: ColorU);

    /// Draws `text` with its baseline starting at `origin`, rotated by
    /// `rotation` radians about `origin`. The rotation applies to this call
    /// only.
    fn draw_text(&mut self, text: &str, origin: Point2DI32, rotation: f64, color: ColorU);

    /// Advance width of `c` in the current font.
    fn char_width(&self, c: char) -> i32;

    fn fill_polygon(&mut self, points: &[Point2DF32], color: ColorU);

    /// Drops the overlays of the previous render pass.
    fn clear_overlays(&mut self) {}

    fn request_redraw(&mut self);
}
