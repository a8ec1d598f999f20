// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan sampling: turn pointer positions into the translation/velocity samples
//! a [`ReorderList`](crate::ReorderList) consumes.
//!
//! Hosts whose gesture system already reports a translation and a velocity
//! can call [`ReorderList::update_drag`](crate::ReorderList::update_drag)
//! directly. Hosts that only see raw pointer moves feed them through a
//! [`PanTracker`].
//!
//! ## Usage
//!
//! 1) Call [`PanTracker::start`] with the pointer position and a timestamp when the drag begins.
//! 2) On each move, call [`PanTracker::update`] and forward the returned [`PanSample`].
//! 3) Call [`PanTracker::end`] on release.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_reorder::gesture::PanTracker;
//! use understory_reorder::{ReorderConfig, ReorderList};
//!
//! let mut list = ReorderList::new([1_u32, 2, 3], ReorderConfig::new(60.0));
//! let mut pan = PanTracker::default();
//!
//! list.begin_drag(1);
//! pan.start(Point::new(10.0, 30.0), 1_000);
//!
//! // 50px down in 100ms: 500px/s.
//! let sample = pan.update(Point::new(10.0, 80.0), 1_100).unwrap();
//! assert_eq!(sample.translation.y, 50.0);
//! assert_eq!(sample.velocity.y, 500.0);
//!
//! list.update_drag_with(1, sample);
//! pan.end();
//! assert_eq!(list.end_drag(1).unwrap().order, [2, 1, 3]);
//! ```

use kurbo::{Point, Vec2};

/// One movement sample of a pan gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanSample {
    /// Total movement since the pan started.
    pub translation: Vec2,
    /// Instantaneous velocity in logical pixels per second.
    pub velocity: Vec2,
}

/// Tracks a pointer pan and derives translation and velocity from raw positions.
///
/// Timestamps are in milliseconds from any monotonic origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanTracker {
    /// Position and time at which the pan started.
    pub start: Option<(Point, u64)>,
    /// Most recent position and time.
    pub last: Option<(Point, u64)>,
    /// Most recently computed velocity.
    pub velocity: Vec2,
}

impl PanTracker {
    /// Start tracking a new pan from the given position.
    pub fn start(&mut self, pos: Point, time_ms: u64) {
        self.start = Some((pos, time_ms));
        self.last = Some((pos, time_ms));
        self.velocity = Vec2::ZERO;
    }

    /// Records a pointer move and returns the resulting sample.
    ///
    /// Returns `None` if no pan is active. Moves reported with the same (or an
    /// earlier) timestamp as the previous one keep the previous velocity.
    pub fn update(&mut self, pos: Point, time_ms: u64) -> Option<PanSample> {
        let (start_pos, _) = self.start?;
        if let Some((last_pos, last_time)) = self.last {
            if time_ms > last_time {
                let per_second = 1000.0 / (time_ms - last_time) as f64;
                self.velocity = (pos - last_pos) * per_second;
            }
        }
        self.last = Some((pos, time_ms));
        Some(PanSample {
            translation: pos - start_pos,
            velocity: self.velocity,
        })
    }

    /// End the current pan and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a pan is active.
    pub fn is_panning(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_is_not_panning() {
        let pan = PanTracker::default();
        assert!(!pan.is_panning());
        assert!(pan.last.is_none());
    }

    #[test]
    fn update_without_start_returns_none() {
        let mut pan = PanTracker::default();
        assert_eq!(pan.update(Point::new(5.0, 5.0), 10), None);
        assert!(pan.last.is_none());
    }

    #[test]
    fn translation_is_measured_from_start() {
        let mut pan = PanTracker::default();
        pan.start(Point::new(10.0, 20.0), 0);
        pan.update(Point::new(12.0, 35.0), 16);
        let sample = pan.update(Point::new(11.0, 50.0), 32).unwrap();
        assert_eq!(sample.translation, Vec2::new(1.0, 30.0));
    }

    #[test]
    fn velocity_uses_the_latest_interval() {
        let mut pan = PanTracker::default();
        pan.start(Point::new(0.0, 100.0), 1_000);

        let down = pan.update(Point::new(0.0, 110.0), 1_010).unwrap();
        assert_eq!(down.velocity, Vec2::new(0.0, 1_000.0));

        let up = pan.update(Point::new(0.0, 105.0), 1_030).unwrap();
        assert_eq!(up.velocity, Vec2::new(0.0, -250.0));
    }

    #[test]
    fn repeated_timestamp_keeps_previous_velocity() {
        let mut pan = PanTracker::default();
        pan.start(Point::ZERO, 0);
        pan.update(Point::new(0.0, 20.0), 20);
        let sample = pan.update(Point::new(0.0, 40.0), 20).unwrap();
        assert_eq!(sample.velocity, Vec2::new(0.0, 1_000.0));
        assert_eq!(sample.translation, Vec2::new(0.0, 40.0));
    }

    #[test]
    fn stationary_pointer_has_zero_velocity() {
        let mut pan = PanTracker::default();
        pan.start(Point::new(3.0, 3.0), 0);
        let sample = pan.update(Point::new(3.0, 3.0), 16).unwrap();
        assert_eq!(sample.velocity, Vec2::ZERO);
        assert_eq!(sample.translation, Vec2::ZERO);
    }

    #[test]
    fn end_resets_state() {
        let mut pan = PanTracker::default();
        pan.start(Point::new(1.0, 1.0), 0);
        pan.update(Point::new(1.0, 9.0), 8);
        pan.end();
        assert!(!pan.is_panning());
        assert_eq!(pan.velocity, Vec2::ZERO);
        assert_eq!(pan.update(Point::new(1.0, 20.0), 16), None);
    }
}
