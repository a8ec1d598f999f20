// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry and timing parameters for a [`ReorderList`](crate::ReorderList).

use core::time::Duration;

/// Fixed parameters of a reorderable list.
///
/// All ratios are fractions of [`item_height`](Self::item_height) measured from
/// the top edge of the neighbour being tested:
///
/// - The insert line appears once the dragged item crosses
///   [`insert_line_ratio`](Self::insert_line_ratio) (the neighbour's midpoint
///   by default).
/// - A downward drag pushes a neighbour up once the dragged item's bottom edge
///   crosses [`down_commit_ratio`](Self::down_commit_ratio).
/// - An upward drag pushes a neighbour down once the dragged item's top edge
///   crosses [`up_commit_ratio`](Self::up_commit_ratio).
///
/// Keeping the commit ratios on the far side of the insert-line ratio gives the
/// preview some hysteresis: the line shows up at the midpoint, the actual swap
/// happens a little later.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReorderConfig {
    item_height: f64,
    insert_line_ratio: f64,
    down_commit_ratio: f64,
    up_commit_ratio: f64,
    transition_duration: Duration,
}

impl ReorderConfig {
    /// Item height used by [`Default`], in logical pixels.
    pub const DEFAULT_ITEM_HEIGHT: f64 = 60.0;
    /// Default insert-line threshold.
    pub const DEFAULT_INSERT_LINE_RATIO: f64 = 0.5;
    /// Default commit threshold for downward drags.
    pub const DEFAULT_DOWN_COMMIT_RATIO: f64 = 0.7;
    /// Default commit threshold for upward drags.
    pub const DEFAULT_UP_COMMIT_RATIO: f64 = 0.3;
    /// Default duration of offset transitions.
    pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(200);

    /// Creates a configuration with the given item height and default thresholds.
    ///
    /// `item_height` must be finite and strictly positive.
    #[must_use]
    pub fn new(item_height: f64) -> Self {
        debug_assert!(
            item_height.is_finite() && item_height > 0.0,
            "item height must be finite and positive, got {item_height}"
        );
        Self {
            item_height,
            insert_line_ratio: Self::DEFAULT_INSERT_LINE_RATIO,
            down_commit_ratio: Self::DEFAULT_DOWN_COMMIT_RATIO,
            up_commit_ratio: Self::DEFAULT_UP_COMMIT_RATIO,
            transition_duration: Self::DEFAULT_TRANSITION_DURATION,
        }
    }

    /// Sets the insert-line threshold.
    #[must_use]
    pub fn with_insert_line_ratio(mut self, ratio: f64) -> Self {
        debug_assert_ratio(ratio);
        self.insert_line_ratio = ratio;
        self
    }

    /// Sets the commit threshold for downward drags.
    #[must_use]
    pub fn with_down_commit_ratio(mut self, ratio: f64) -> Self {
        debug_assert_ratio(ratio);
        self.down_commit_ratio = ratio;
        self
    }

    /// Sets the commit threshold for upward drags.
    #[must_use]
    pub fn with_up_commit_ratio(mut self, ratio: f64) -> Self {
        debug_assert_ratio(ratio);
        self.up_commit_ratio = ratio;
        self
    }

    /// Sets the duration of offset transitions.
    #[must_use]
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    /// Height of every item, in logical pixels.
    #[must_use]
    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    /// Fraction of the item height at which the insert line appears.
    #[must_use]
    pub fn insert_line_ratio(&self) -> f64 {
        self.insert_line_ratio
    }

    /// Fraction of the item height a downward drag must cross to displace a neighbour.
    #[must_use]
    pub fn down_commit_ratio(&self) -> f64 {
        self.down_commit_ratio
    }

    /// Fraction of the item height an upward drag must cross to displace a neighbour.
    #[must_use]
    pub fn up_commit_ratio(&self) -> f64 {
        self.up_commit_ratio
    }

    /// Duration of the offset transitions recorded for displaced and dropped items.
    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        self.transition_duration
    }

    /// Resting offset of the item at `rank`.
    #[must_use]
    pub fn rank_offset(&self, rank: usize) -> f64 {
        rank as f64 * self.item_height
    }
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ITEM_HEIGHT)
    }
}

fn debug_assert_ratio(ratio: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&ratio),
        "threshold ratios are fractions of the item height, got {ratio}"
    );
}
