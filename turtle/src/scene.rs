// turtleworld/turtle/src/scene.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A canvas host that records what was drawn instead of rasterizing it.

use crate::host::CanvasHost;
use std::collections::HashMap;
use turtleworld_geometry::basic::line_segment::LineSegmentI32;
use turtleworld_geometry::basic::point::{Point2DF32, Point2DI32};
use turtleworld_geometry::basic::rect::RectI32;
use turtleworld_geometry::color::ColorU;

pub const DEFAULT_GLYPH_WIDTH: i32 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PaintId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Paint {
    pub color: ColorU,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneObject {
    Line {
        segment: LineSegmentI32,
        paint: PaintId,
    },
    Text {
        text: String,
        origin: Point2DI32,
        rotation: f64,
        paint: PaintId,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub points: Vec<Point2DF32>,
    pub paint: PaintId,
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub paints: Vec<Paint>,
    pub objects: Vec<SceneObject>,
    pub overlays: Vec<Overlay>,
    pub bounds: Option<RectI32>,
    paint_ids: HashMap<Paint, PaintId>,
    glyph_width: i32,
    redraw_count: usize,
}

impl Default for Scene {
    fn default() -> Scene {
        Scene::new()
    }
}

impl Scene {
    #[inline]
    pub fn new() -> Scene {
        Scene::with_glyph_width(DEFAULT_GLYPH_WIDTH)
    }

    /// A scene whose font is monospaced with the given advance. Control
    /// characters have no width.
    pub fn with_glyph_width(glyph_width: i32) -> Scene {
        Scene {
            paints: vec![],
            objects: vec![],
            overlays: vec![],
            bounds: None,
            paint_ids: HashMap::new(),
            glyph_width,
            redraw_count: 0,
        }
    }

    pub fn push_paint(&mut self, paint: &Paint) -> PaintId {
        if let Some(&id) = self.paint_ids.get(paint) {
            return id;
        }
        let id = PaintId(self.paints.len());
        self.paints.push(*paint);
        self.paint_ids.insert(*paint, id);
        id
    }

    #[inline]
    pub fn paint(&self, id: PaintId) -> &Paint {
        &self.paints[id.0]
    }

    #[inline]
    pub fn redraw_count(&self) -> usize {
        self.redraw_count
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineSegmentI32, ColorU)> + '_ {
        self.objects.iter().filter_map(move |object| match *object {
            SceneObject::Line { segment, paint } => Some((segment, self.paint(paint).color)),
            SceneObject::Text { .. } => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point2DI32, f64)> + '_ {
        self.objects.iter().filter_map(|object| match *object {
            SceneObject::Text { ref text, origin, rotation, .. } => {
                Some((text.as_str(), origin, rotation))
            }
            SceneObject::Line { .. } => None,
        })
    }

    /// All text drawn so far, in order.
    pub fn text(&self) -> String {
        self.texts().map(|(text, _, _)| text).collect()
    }

    fn update_bounds(&mut self, rect: RectI32) {
        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.union_rect(rect),
            None => rect,
        });
    }
}

impl CanvasHost for Scene {
    fn draw_line(&mut self, segment: LineSegmentI32, color: ColorU) {
        let paint = self.push_paint(&Paint { color });
        self.update_bounds(segment.bounds());
        self.objects.push(SceneObject::Line { segment, paint });
    }

    fn draw_text(&mut self, text: &str, origin: Point2DI32, rotation: f64, color: ColorU) {
        let paint = self.push_paint(&Paint { color });
        self.update_bounds(RectI32::from_points(origin, origin));
        self.objects.push(SceneObject::Text { text: text.to_owned(), origin, rotation, paint });
    }

    fn char_width(&self, c: char) -> i32 {
        if c.is_control() {
            0
        } else {
            self.glyph_width
        }
    }

    fn fill_polygon(&mut self, points: &[Point2DF32], color: ColorU) {
        let paint = self.push_paint(&Paint { color });
        self.overlays.push(Overlay { points: points.to_vec(), paint });
    }

    fn clear_overlays(&mut self) {
        self.overlays.clear();
    }

    fn request_redraw(&mut self) {
        self.redraw_count += 1;
    }
}
