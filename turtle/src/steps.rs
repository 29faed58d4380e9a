// turtleworld/turtle/src/steps.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decomposes turtle commands into frames.
//!
//! An instant command is a single frame. An animated command is a run of
//! unit frames, each followed by a pause, and one closing frame without a
//! pause. Frames only describe what to do; the world applies them.

use std::str::Chars;

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub action: Action,
    /// Whether the driver pauses after applying this frame.
    pub pause: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Add this many radians to the heading.
    Rotate(f64),
    /// Move this many units along the heading, painting if the pen is down.
    Advance(i32),
    /// Paint text at the current position.
    Text { text: String, advance: TextAdvance },
}

/// How the position moves after a piece of text has been painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAdvance {
    Stay,
    /// By the summed widths of the text, along the heading.
    Measured,
    /// By the width of the painted glyph. Vertical headings move along y
    /// only.
    Glyph,
    /// By the width of the NUL glyph: along y only for vertical headings,
    /// along x only otherwise.
    Trailing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

impl Turn {
    #[inline]
    fn sign(self) -> f64 {
        match self {
            Turn::Left => 1.0,
            Turn::Right => -1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TurnSteps {
    sign: f64,
    remaining: f64,
    animated: bool,
    done: bool,
}

impl TurnSteps {
    pub fn new(turn: Turn, degrees: f64, animated: bool) -> TurnSteps {
        TurnSteps { sign: turn.sign(), remaining: degrees, animated, done: false }
    }
}

impl Iterator for TurnSteps {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.done {
            return None;
        }
        if self.animated && self.remaining > 0.0 {
            self.remaining -= 1.0;
            return Some(Frame { action: Action::Rotate(self.sign * 1f64.to_radians()), pause: true });
        }
        // Whatever is left, possibly fractional or negative, in one go.
        self.done = true;
        Some(Frame { action: Action::Rotate(self.sign * self.remaining.to_radians()), pause: false })
    }
}

/// Forward motion. Animated motion takes one more unit step than asked
/// for: `amount` paused steps and then a closing unit step.
#[derive(Clone, Debug)]
pub struct MoveSteps {
    remaining: i32,
    animated: bool,
    done: bool,
}

impl MoveSteps {
    pub fn new(amount: i32, animated: bool) -> MoveSteps {
        MoveSteps { remaining: amount, animated, done: false }
    }
}

impl Iterator for MoveSteps {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.done {
            return None;
        }
        if !self.animated {
            self.done = true;
            return Some(Frame { action: Action::Advance(self.remaining), pause: false });
        }
        if self.remaining > 0 {
            self.remaining -= 1;
            return Some(Frame { action: Action::Advance(1), pause: true });
        }
        self.done = true;
        Some(Frame { action: Action::Advance(1), pause: false })
    }
}

/// Expands tabs the way text is laid out on the canvas.
pub fn expand_tabs(message: &str) -> String {
    message.replace('\t', "    ")
}

/// Text drawing: the whole string at once, or one glyph per frame.
#[derive(Clone, Debug)]
pub struct TextSteps {
    text: String,
    offset: usize,
    moves: bool,
    animated: bool,
    done: bool,
}

impl TextSteps {
    pub fn new(message: &str, moves: bool, animated: bool) -> TextSteps {
        TextSteps { text: expand_tabs(message), offset: 0, moves, animated, done: false }
    }

    fn rest(&self) -> Chars<'_> {
        self.text[self.offset..].chars()
    }
}

impl Iterator for TextSteps {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.done {
            return None;
        }
        if !self.animated {
            self.done = true;
            let advance = if self.moves { TextAdvance::Measured } else { TextAdvance::Stay };
            let text = std::mem::replace(&mut self.text, String::new());
            return Some(Frame { action: Action::Text { text, advance }, pause: false });
        }

        let mut rest = self.rest();
        let glyph = rest.next();
        let last = rest.next().is_none();
        match glyph {
            Some(glyph) if !last => {
                self.offset += glyph.len_utf8();
                let advance = if self.moves { TextAdvance::Glyph } else { TextAdvance::Stay };
                Some(Frame { action: Action::Text { text: glyph.to_string(), advance }, pause: true })
            }
            glyph => {
                self.done = true;
                let advance = if self.moves { TextAdvance::Trailing } else { TextAdvance::Stay };
                let text = glyph.map(|glyph| glyph.to_string()).unwrap_or_default();
                Some(Frame { action: Action::Text { text, advance }, pause: false })
            }
        }
    }
}
