// turtleworld/turtle/src/clock.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pauses between animation frames.

use std::thread;
use std::time::Duration;
use thiserror::Error;

/// A pause that ended early. Stepping carries on regardless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("pause of {requested:?} interrupted")]
pub struct SleepInterrupted {
    pub requested: Duration,
}

pub trait Clock {
    fn sleep(&mut self, duration: Duration) -> Result<(), SleepInterrupted>;
}

/// Blocks the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) -> Result<(), SleepInterrupted> {
        thread::sleep(duration);
        Ok(())
    }
}

/// Records pauses instead of sleeping.
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    elapsed: Duration,
    pauses: Vec<Duration>,
    interrupt_every: Option<usize>,
}

impl VirtualClock {
    pub fn new() -> VirtualClock {
        VirtualClock::default()
    }

    /// Makes every `n`th pause report an interruption.
    pub fn interrupting_every(n: usize) -> VirtualClock {
        VirtualClock { interrupt_every: Some(n.max(1)), ..VirtualClock::default() }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    pub fn pause_count(&self) -> usize {
        self.pauses.len()
    }
}

impl Clock for VirtualClock {
    fn sleep(&mut self, duration: Duration) -> Result<(), SleepInterrupted> {
        self.elapsed += duration;
        self.pauses.push(duration);
        match self.interrupt_every {
            Some(n) if self.pauses.len() % n == 0 => Err(SleepInterrupted { requested: duration }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Clock, SleepInterrupted, VirtualClock};
    use std::time::Duration;

    #[test]
    fn test_virtual_clock_accumulates() {
        let mut clock = VirtualClock::new();
        clock.sleep(Duration::from_millis(10)).unwrap();
        clock.sleep(Duration::from_millis(5)).unwrap();
        assert_eq!(clock.elapsed(), Duration::from_millis(15));
        assert_eq!(clock.pause_count(), 2);
    }

    #[test]
    fn test_virtual_clock_interrupts() {
        let mut clock = VirtualClock::interrupting_every(2);
        assert!(clock.sleep(Duration::from_millis(1)).is_ok());
        assert_eq!(
            clock.sleep(Duration::from_millis(2)),
            Err(SleepInterrupted { requested: Duration::from_millis(2) })
        );
        assert!(clock.sleep(Duration::from_millis(3)).is_ok());
        assert_eq!(clock.elapsed(), Duration::from_millis(6));
    }
}
