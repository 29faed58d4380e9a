// turtleworld/turtle/src/script.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runs `uturtle` programs against a turtle.

use crate::clock::Clock;
use crate::error::Result;
use crate::host::CanvasHost;
use crate::turtle::TurtleId;
use crate::world::{TurtleHandle, World};
use log::warn;
use smallvec::SmallVec;
use std::fmt::{Display, Formatter, Result as FormatResult};
use turtleworld_geometry::basic::point::Point2DI32;
use turtleworld_geometry::color::ColorU;
use uturtle::ast::Command;

bitflags! {
    // NB: If you change this, make sure to update the `Display`
    // implementation as well.
    pub struct RunResultFlags: u16 {
        const ERR_POPLOC_EMPTY_STACK       = 0x0001;
        const ERR_POPROT_EMPTY_STACK       = 0x0002;
        const ERR_INVALID_SPEED            = 0x0004;
    }
}

impl Display for RunResultFlags {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        if self.is_empty() {
            return Ok(());
        }

        let mut first = true;
        for (bit, name) in NAMES.iter().enumerate() {
            if (self.bits() >> bit) & 1 == 0 {
                continue;
            }
            if !first {
                formatter.write_str(", ")?;
            } else {
                first = false;
            }
            formatter.write_str(name)?;
        }

        return Ok(());

        // Must match the order in `RunResultFlags`.
        static NAMES: &'static [&'static str] = &[
            "poploc on empty stack",
            "poprot on empty stack",
            "non-positive animation speed",
        ];
    }
}

/// The outcome of running a program. Problems that don't stop the program
/// are collected in `result_flags`.
#[derive(Debug)]
pub struct ScriptRun {
    pub result_flags: RunResultFlags,
    positions: SmallVec<[Point2DI32; 8]>,
    headings: SmallVec<[f64; 8]>,
}

impl Default for ScriptRun {
    fn default() -> ScriptRun {
        ScriptRun::new()
    }
}

impl ScriptRun {
    pub fn new() -> ScriptRun {
        ScriptRun {
            result_flags: RunResultFlags::empty(),
            positions: SmallVec::new(),
            headings: SmallVec::new(),
        }
    }

    pub fn run<H, C>(handle: &mut TurtleHandle<H, C>, program: &[Command]) -> ScriptRun
    where
        H: CanvasHost,
        C: Clock,
    {
        let mut run = ScriptRun::new();
        run.process_program(handle, program);
        run
    }

    fn process_program<H, C>(&mut self, handle: &mut TurtleHandle<H, C>, program: &[Command])
    where
        H: CanvasHost,
        C: Clock,
    {
        for cmd in program {
            match cmd {
                Command::Reset => {
                    handle.reset();
                    self.positions.clear();
                    self.headings.clear();
                    self.result_flags = RunResultFlags::empty();
                }
                Command::PenUp => handle.set_should_draw(false),
                Command::PenDown => handle.set_should_draw(true),
                Command::TurnLeft(deg) => handle.turn_left(*deg),
                Command::TurnRight(deg) => handle.turn_right(*deg),
                Command::Forward(amount) => handle.move_forward(*amount),
                Command::Direction(deg) => handle.set_rotation(*deg),
                Command::Go(x, y) => handle.set_position(*x, *y),
                Command::GoX(x) => {
                    let y = handle.point().y();
                    handle.set_position(*x, y);
                }
                Command::GoY(y) => {
                    let x = handle.point().x();
                    handle.set_position(x, *y);
                }
                Command::PenColor(r, g, b) => handle.set_color(ColorU::rgb(*r, *g, *b)),
                Command::Print(text) => handle.draw_string(text, false),
                Command::Write(text) => handle.draw_string(text, true),
                Command::Speed(speed) => {
                    if let Err(err) = handle.set_animation_speed(*speed) {
                        warn!("turtle {}: {}", handle.id(), err);
                        self.result_flags.insert(RunResultFlags::ERR_INVALID_SPEED);
                    }
                }
                Command::Animate(animated) => handle.set_animated(*animated),
                Command::PushLoc => self.positions.push(handle.point()),
                Command::PopLoc => match self.positions.pop() {
                    Some(position) => handle.set_position(position.x(), position.y()),
                    None => {
                        // NOOP.
                        warn!("turtle {}: poploc on empty stack", handle.id());
                        self.result_flags.insert(RunResultFlags::ERR_POPLOC_EMPTY_STACK);
                    }
                },
                Command::PushRot => self.headings.push(handle.heading()),
                Command::PopRot => match self.headings.pop() {
                    Some(heading) => handle.set_heading(heading),
                    None => {
                        // NOOP.
                        warn!("turtle {}: poprot on empty stack", handle.id());
                        self.result_flags.insert(RunResultFlags::ERR_POPROT_EMPTY_STACK);
                    }
                },
            }
        }
    }
}

impl<H, C> World<H, C>
where
    H: CanvasHost,
    C: Clock,
{
    /// Parses `source` and runs it against turtle `id`.
    pub fn run_script(&mut self, id: TurtleId, source: &str) -> Result<ScriptRun> {
        let program = uturtle::parse(source)?;
        let mut handle = self.turtle(id)?;
        Ok(ScriptRun::run(&mut handle, &program))
    }
}

#[cfg(test)]
mod test {
    use super::RunResultFlags;

    #[test]
    fn test_flags_display() {
        assert_eq!(RunResultFlags::empty().to_string(), "");
        assert_eq!(
            (RunResultFlags::ERR_POPLOC_EMPTY_STACK | RunResultFlags::ERR_INVALID_SPEED).to_string(),
            "poploc on empty stack, non-positive animation speed"
        );
    }
}
