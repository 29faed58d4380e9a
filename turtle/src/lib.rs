// turtleworld/turtle/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Turtle graphics on a canvas host.
//!
//! A `World` owns the canvas and an append-only registry of turtles. Each
//! turtle moves, turns and writes text either instantly or as animated
//! frames with a pause between them; see `steps` for how commands are
//! broken up.

#[macro_use]
extern crate bitflags;

pub mod clock;
pub mod config;
pub mod error;
pub mod host;
pub mod pose;
pub mod scene;
pub mod script;
pub mod steps;
pub mod turtle;
pub mod world;

pub use crate::clock::{Clock, SleepInterrupted, SystemClock, VirtualClock};
pub use crate::config::{WorldConfig, DEFAULT_ANIMATION_SPEED};
pub use crate::error::{Result, TurtleError};
pub use crate::host::CanvasHost;
pub use crate::pose::Pose;
pub use crate::scene::Scene;
pub use crate::script::{RunResultFlags, ScriptRun};
pub use crate::turtle::{Turtle, TurtleId};
pub use crate::world::{CancelHandle, TurtleHandle, World};

pub use turtleworld_geometry::basic::point::{Point2DF32, Point2DI32};
pub use turtleworld_geometry::color::ColorU;
