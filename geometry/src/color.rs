// turtleworld/geometry/src/color.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use serde_derive::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display, Formatter};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub struct ColorU {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorU {
    pub const BLACK: ColorU = ColorU::rgb(0, 0, 0);
    pub const WHITE: ColorU = ColorU::rgb(255, 255, 255);
    pub const RED: ColorU = ColorU::rgb(255, 0, 0);
    pub const GREEN: ColorU = ColorU::rgb(0, 255, 0);
    pub const BLUE: ColorU = ColorU::rgb(0, 0, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> ColorU {
        ColorU { r, g, b, a: 255 }
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a == !0
    }
}

impl Display for ColorU {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        if self.is_opaque() {
            write!(formatter, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(formatter, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl Debug for ColorU {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}
