// turtleworld/uturtle/src/ast.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Inspiration for the commands are from https://docs.kde.org/trunk5/en/kdeedu/kturtle/commands.html

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Reset,
    PenUp,
    PenDown,
    TurnLeft(f64),  // Degrees.
    TurnRight(f64), // Degrees.
    Forward(i32),
    Direction(f64),
    Go(i32, i32),
    GoX(i32),
    GoY(i32),
    PenColor(u8, u8, u8), // RGB color.
    Print(String),
    Write(String),
    Speed(i32),
    Animate(bool),
    PushLoc,
    PopLoc,
    PushRot,
    PopRot,
}

pub type Program = Vec<Command>;
