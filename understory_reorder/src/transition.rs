// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset transitions recorded for renderers.
//!
//! The list never animates anything itself. Whenever it moves a displaced
//! neighbour or drops the active item it records a [`Transition`] and updates
//! the item's offset to the transition's target immediately. Renderers drain
//! the pending transitions with
//! [`ReorderList::drain_transitions`](crate::ReorderList::drain_transitions),
//! start their own clocks, and sample [`Transition::value_at`] each frame.
//!
//! A transition is purely cosmetic: reading it back never influences ordering.

use core::time::Duration;

/// A fire-and-forget animation of one item's vertical offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition<K> {
    /// Item being animated.
    pub id: K,
    /// Offset at the start of the animation.
    pub from: f64,
    /// Offset at the end of the animation; already applied to the item.
    pub to: f64,
    /// Length of the animation.
    pub duration: Duration,
}

impl<K> Transition<K> {
    /// Linear progress in `0.0..=1.0` after `elapsed`.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if elapsed >= self.duration {
            return 1.0;
        }
        elapsed.as_secs_f64() / self.duration.as_secs_f64()
    }

    /// Eased offset after `elapsed`.
    #[must_use]
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let t = ease_in_out_quad(self.progress(elapsed));
        self.from + (self.to - self.from) * t
    }

    /// Returns `true` once `elapsed` has reached the duration.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}
