// turtleworld/turtle/src/error.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::turtle::TurtleId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TurtleError {
    #[error("couldn't get a canvas for the turtles; attach a canvas host to the world first")]
    MissingHost,
    #[error("the canvas surface is not available for rendering")]
    SurfaceUnavailable,
    #[error("no turtle with id {0}")]
    UnknownTurtle(TurtleId),
    #[error("animation speed must be positive, got {0}")]
    InvalidAnimationSpeed(i32),
    #[error("failed to parse turtle script: {0}")]
    Script(#[from] uturtle::ParseError),
}

pub type Result<T> = std::result::Result<T, TurtleError>;
