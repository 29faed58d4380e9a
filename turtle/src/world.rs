// turtleworld/turtle/src/world.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The turtle registry and the command driver.

use crate::clock::{Clock, SystemClock};
use crate::config::WorldConfig;
use crate::error::{Result, TurtleError};
use crate::host::CanvasHost;
use crate::pose::round_pixel;
use crate::steps::{Action, Frame, MoveSteps, TextAdvance, TextSteps, Turn, TurnSteps};
use crate::turtle::{Turtle, TurtleId};
use log::{debug, trace, warn};
use std::ops::Deref;
use std::slice;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use turtleworld_geometry::basic::line_segment::LineSegmentI32;
use turtleworld_geometry::basic::point::Point2DI32;
use turtleworld_geometry::color::ColorU;

/// Stops the animated command in progress at its next frame. Requests made
/// while no animated command runs are dropped when the next one starts.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

pub struct World<H, C = SystemClock> {
    host: Option<H>,
    clock: C,
    turtles: Vec<Turtle>,
    config: WorldConfig,
    cancel: CancelHandle,
}

impl<H> World<H, SystemClock>
where
    H: CanvasHost,
{
    pub fn new(host: H) -> World<H, SystemClock> {
        World::with_clock(host, SystemClock, WorldConfig::default())
    }
}

impl<H, C> World<H, C>
where
    H: CanvasHost,
    C: Clock,
{
    pub fn with_clock(host: H, clock: C, config: WorldConfig) -> World<H, C> {
        let mut world = World::detached(clock, config);
        world.host = Some(host);
        world
    }

    /// A world whose canvas is not up yet. Turtles can't be spawned until a
    /// host is attached.
    pub fn detached(clock: C, config: WorldConfig) -> World<H, C> {
        World { host: None, clock, turtles: vec![], config, cancel: CancelHandle::default() }
    }

    /// Attaches the canvas. A world keeps its first host for good, so this
    /// hands `host` back if one is already attached.
    pub fn attach_host(&mut self, host: H) -> std::result::Result<(), H> {
        if self.host.is_some() {
            return Err(host);
        }
        self.host = Some(host);
        Ok(())
    }

    #[inline]
    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    #[inline]
    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    #[inline]
    pub fn animations_enabled(&self) -> bool {
        self.config.animations_enabled
    }

    /// Applies to commands issued through handles obtained afterwards.
    pub fn set_animations_enabled(&mut self, enabled: bool) {
        self.config.animations_enabled = enabled;
    }

    #[inline]
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Creates a turtle at `(x, y)` facing `heading_degrees` and returns its
    /// id, which is the registry size after insertion.
    pub fn spawn(&mut self, x: i32, y: i32, heading_degrees: f64, color: ColorU) -> Result<TurtleId> {
        if self.host.is_none() {
            return Err(TurtleError::MissingHost);
        }
        if self.config.animation_speed <= 0 {
            return Err(TurtleError::InvalidAnimationSpeed(self.config.animation_speed));
        }

        let id = TurtleId(self.turtles.len() as u32 + 1);
        let turtle = Turtle::new(
            id,
            Point2DI32::new(x, y),
            heading_degrees,
            color,
            self.config.animation_speed,
        );
        debug!("spawned turtle {} at {},{} facing {} degrees", id, x, y, heading_degrees);
        self.turtles.push(turtle);
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.turtles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.turtles.is_empty()
    }

    /// Read-only view of the registry, in creation order.
    #[inline]
    pub fn turtles(&self) -> slice::Iter<'_, Turtle> {
        self.turtles.iter()
    }

    pub fn get(&self, id: TurtleId) -> Option<&Turtle> {
        id.index().and_then(|index| self.turtles.get(index))
    }

    /// Borrows a turtle for issuing commands.
    pub fn turtle(&mut self, id: TurtleId) -> Result<TurtleHandle<'_, H, C>> {
        let animated = self.config.animations_enabled;
        let host = self.host.as_mut().ok_or(TurtleError::MissingHost)?;
        let turtles = &mut self.turtles;
        let turtle = id
            .index()
            .and_then(move |index| turtles.get_mut(index))
            .ok_or(TurtleError::UnknownTurtle(id))?;
        Ok(TurtleHandle {
            turtle,
            host,
            clock: &mut self.clock,
            cancel: &self.cancel,
            animated,
        })
    }

    /// Paints every turtle's direction marker over the canvas, in creation
    /// order and in the turtle's color, replacing the previous pass.
    pub fn render_markers(&mut self) -> Result<()> {
        let host = self.host.as_mut().ok_or(TurtleError::SurfaceUnavailable)?;
        host.clear_overlays();
        for turtle in &self.turtles {
            host.fill_polygon(&turtle.marker(), turtle.color());
        }
        Ok(())
    }
}

/// Mutable access to one turtle together with the canvas it draws on.
///
/// Motion, turning and text run either instantly or as animated frames,
/// depending on the world's animation setting at the time the handle was
/// taken, or on `animated()`.
pub struct TurtleHandle<'a, H, C> {
    turtle: &'a mut Turtle,
    host: &'a mut H,
    clock: &'a mut C,
    cancel: &'a CancelHandle,
    animated: bool,
}

impl<'a, H, C> Deref for TurtleHandle<'a, H, C> {
    type Target = Turtle;

    fn deref(&self) -> &Turtle {
        &*self.turtle
    }
}

impl<'a, H, C> TurtleHandle<'a, H, C>
where
    H: CanvasHost,
    C: Clock,
{
    /// Overrides the animation setting for commands issued through this
    /// handle.
    pub fn animated(mut self, animated: bool) -> TurtleHandle<'a, H, C> {
        self.animated = animated;
        self
    }

    #[inline]
    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
    }

    #[inline]
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    pub fn turn_left(&mut self, degrees: f64) {
        self.drive(TurnSteps::new(Turn::Left, degrees, self.animated));
    }

    pub fn turn_right(&mut self, degrees: f64) {
        self.drive(TurnSteps::new(Turn::Right, degrees, self.animated));
    }

    pub fn move_forward(&mut self, amount: i32) {
        self.drive(MoveSteps::new(amount, self.animated));
    }

    /// Draws `message` at the turtle, turned to its heading. Paints even with
    /// the pen up. With `moves`, the turtle ends up after the text.
    pub fn draw_string(&mut self, message: &str, moves: bool) {
        self.drive(TextSteps::new(message, moves, self.animated));
    }

    /// Teleports without painting.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.turtle.set_position(Point2DI32::new(x, y));
    }

    pub fn set_rotation(&mut self, degrees: f64) {
        self.turtle.set_heading(degrees.to_radians());
    }

    pub(crate) fn set_heading(&mut self, radians: f64) {
        self.turtle.set_heading(radians);
    }

    pub fn set_color(&mut self, color: ColorU) {
        self.turtle.set_color(color);
    }

    pub fn set_should_draw(&mut self, should_draw: bool) {
        self.turtle.set_should_draw(should_draw);
    }

    pub fn set_animation_speed(&mut self, speed: i32) -> Result<()> {
        self.turtle.set_animation_speed(speed)
    }

    pub fn reset_position(&mut self) {
        self.turtle.reset_position();
    }

    pub fn reset_angle(&mut self) {
        self.turtle.reset_angle();
    }

    pub fn reset_color(&mut self) {
        self.turtle.reset_color();
    }

    pub fn reset_animation_speed(&mut self) {
        self.turtle.reset_animation_speed();
    }

    /// Restores position, heading, color and animation speed. The pen state
    /// is left alone.
    pub fn reset(&mut self) {
        self.reset_position();
        self.reset_angle();
        self.reset_color();
        self.reset_animation_speed();
        debug!("reset turtle {}", self.turtle.id());
    }

    fn drive<I>(&mut self, frames: I)
    where
        I: Iterator<Item = Frame>,
    {
        if self.animated {
            self.cancel.take();
        }
        for (index, frame) in frames.enumerate() {
            if index > 0 && self.cancel.take() {
                debug!("turtle {}: animation cancelled after {} frames", self.turtle.id(), index);
                break;
            }
            trace!("turtle {}: {:?}", self.turtle.id(), frame.action);
            self.apply(frame.action);
            if frame.pause {
                self.pause();
            }
            self.host.request_redraw();
        }
    }

    fn pause(&mut self) {
        let duration = self.turtle.pause_duration();
        if let Err(err) = self.clock.sleep(duration) {
            warn!("turtle {}: {}", self.turtle.id(), err);
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Rotate(radians) => self.turtle.rotate(radians),
            Action::Advance(distance) => {
                let from = self.turtle.point();
                let to = self.turtle.pose().ahead(distance as f64);
                if self.turtle.should_draw() {
                    self.host.draw_line(LineSegmentI32::new(&from, &to), self.turtle.color());
                }
                self.turtle.set_position(to);
            }
            Action::Text { text, advance } => {
                let pose = self.turtle.pose();
                if !text.is_empty() {
                    self.host.draw_text(&text, pose.position, -pose.heading, self.turtle.color());
                }

                let (x, y) = (pose.position.x() as f64, pose.position.y() as f64);
                let position = match advance {
                    TextAdvance::Stay => return,
                    TextAdvance::Measured => {
                        let host = &*self.host;
                        let width: i32 = text.chars().map(|c| host.char_width(c)).sum();
                        pose.ahead(width as f64)
                    }
                    TextAdvance::Glyph => {
                        let width = text.chars().next().map_or(0, |c| self.host.char_width(c));
                        if pose.is_vertical() {
                            Point2DI32::new(
                                pose.position.x(),
                                round_pixel(y + width as f64 * (-pose.heading).sin()),
                            )
                        } else {
                            pose.ahead(width as f64)
                        }
                    }
                    TextAdvance::Trailing if text.is_empty() => return,
                    TextAdvance::Trailing => {
                        let width = self.host.char_width('\0') as f64;
                        if pose.is_vertical() {
                            Point2DI32::new(
                                pose.position.x(),
                                round_pixel(y + width * (-pose.heading).sin()),
                            )
                        } else {
                            Point2DI32::new(
                                round_pixel(x + width * pose.heading.cos()),
                                pose.position.y(),
                            )
                        }
                    }
                };
                self.turtle.set_position(position);
            }
        }
    }
}
