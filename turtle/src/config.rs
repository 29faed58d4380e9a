// turtleworld/turtle/src/config.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use serde_derive::{Deserialize, Serialize};

/// Steps per nominal time unit. A pause lasts `1000 / speed` milliseconds.
pub const DEFAULT_ANIMATION_SPEED: i32 = 100;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Whether commands are decomposed into animated unit steps.
    pub animations_enabled: bool,
    /// Animation speed given to newly spawned turtles, and restored by
    /// `reset_animation_speed`.
    pub animation_speed: i32,
}

impl Default for WorldConfig {
    fn default() -> WorldConfig {
        WorldConfig { animations_enabled: false, animation_speed: DEFAULT_ANIMATION_SPEED }
    }
}
