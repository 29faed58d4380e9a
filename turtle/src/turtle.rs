// turtleworld/turtle/src/turtle.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-turtle state. Everything here is read-only outside the crate; the
//! world hands out `TurtleHandle`s for mutation.

use crate::error::{Result, TurtleError};
use crate::pose::{round_pixel, Pose};
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::time::Duration;
use turtleworld_geometry::basic::point::{Point2DF32, Point2DI32};
use turtleworld_geometry::color::ColorU;

/// 1-based position in the world's registry, in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TurtleId(pub u32);

impl TurtleId {
    #[inline]
    pub(crate) fn index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl Display for TurtleId {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct SpawnState {
    pose: Pose,
    color: ColorU,
    animation_speed: i32,
}

#[derive(Clone, Debug)]
pub struct Turtle {
    id: TurtleId,
    pose: Pose,
    color: ColorU,
    should_draw: bool,
    animation_speed: i32,
    spawned: SpawnState,
}

impl Turtle {
    /// Headings are given in degrees. A negative heading is stored as
    /// `360 + heading`, but the heading restored by `reset_angle` is the
    /// one given.
    pub(crate) fn new(
        id: TurtleId,
        position: Point2DI32,
        heading_degrees: f64,
        color: ColorU,
        animation_speed: i32,
    ) -> Turtle {
        let mut heading = heading_degrees.to_radians();
        if heading_degrees < 0.0 {
            heading = (360.0 + heading_degrees).to_radians();
        }
        Turtle {
            id,
            pose: Pose::new(position, heading),
            color,
            should_draw: true,
            animation_speed,
            spawned: SpawnState {
                pose: Pose::new(position, heading_degrees.to_radians()),
                color,
                animation_speed,
            },
        }
    }

    #[inline]
    pub fn id(&self) -> TurtleId {
        self.id
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    #[inline]
    pub fn point(&self) -> Point2DI32 {
        self.pose.position
    }

    /// The raw heading in radians, without any folding.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.pose.heading
    }

    #[inline]
    pub fn look_direction(&self) -> f64 {
        self.pose.look_direction()
    }

    #[inline]
    pub fn color(&self) -> ColorU {
        self.color
    }

    #[inline]
    pub fn should_draw(&self) -> bool {
        self.should_draw
    }

    #[inline]
    pub fn animation_speed(&self) -> i32 {
        self.animation_speed
    }

    /// How long an animated command pauses between frames.
    #[inline]
    pub fn pause_duration(&self) -> Duration {
        Duration::from_millis((1000 / self.animation_speed.max(1)) as u64)
    }

    #[inline]
    pub fn marker(&self) -> [Point2DF32; 3] {
        self.pose.marker()
    }

    #[inline]
    pub(crate) fn set_position(&mut self, position: Point2DI32) {
        self.pose.position = position;
    }

    #[inline]
    pub(crate) fn set_heading(&mut self, heading: f64) {
        self.pose.heading = heading;
    }

    #[inline]
    pub(crate) fn rotate(&mut self, radians: f64) {
        self.pose.heading += radians;
    }

    #[inline]
    pub(crate) fn set_color(&mut self, color: ColorU) {
        self.color = color;
    }

    #[inline]
    pub(crate) fn set_should_draw(&mut self, should_draw: bool) {
        self.should_draw = should_draw;
    }

    pub(crate) fn set_animation_speed(&mut self, speed: i32) -> Result<()> {
        if speed <= 0 {
            return Err(TurtleError::InvalidAnimationSpeed(speed));
        }
        self.animation_speed = speed;
        Ok(())
    }

    pub(crate) fn reset_position(&mut self) {
        self.pose.position = self.spawned.pose.position;
    }

    pub(crate) fn reset_angle(&mut self) {
        self.pose.heading = self.spawned.pose.heading;
    }

    pub(crate) fn reset_color(&mut self) {
        self.color = self.spawned.color;
    }

    pub(crate) fn reset_animation_speed(&mut self) {
        self.animation_speed = self.spawned.animation_speed;
    }
}

impl Display for Turtle {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        write!(
            formatter,
            "TurtleID: {}\n\tPosition: {}\n\tDirection: {} degrees\n\tColor: {}",
            self.id,
            self.pose.position,
            round_pixel(self.look_direction().to_degrees()).abs(),
            self.color
        )
    }
}
