// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning displacement markers into a committed order.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use super::{DragSession, ReorderList};
use crate::{Displacement, InsertLine};

/// Result of a finished drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reordered<K> {
    /// The item that was dragged and is no longer active.
    pub item: K,
    /// Rank of the item before the drag.
    pub from: usize,
    /// Rank of the item after the drag.
    pub to: usize,
    /// All ids in their new rank order.
    pub order: Vec<K>,
}

impl<K> Reordered<K> {
    /// Returns `true` if the drag left the order unchanged.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    /// Applies the same move to `items`, which must be in the order the list
    /// had before the drag.
    ///
    /// ```rust
    /// use understory_reorder::Reordered;
    ///
    /// let reordered = Reordered { item: 1, from: 0, to: 2, order: vec![2, 3, 1] };
    /// let mut labels = ["one", "two", "three", "four"];
    /// reordered.apply_to(&mut labels);
    /// assert_eq!(labels, ["two", "three", "one", "four"]);
    /// ```
    ///
    /// # Panics
    ///
    /// If `items` is shorter than the list, so that `from` or `to` is out of bounds.
    pub fn apply_to<T>(&self, items: &mut [T]) {
        if self.from < self.to {
            items[self.from..=self.to].rotate_left(1);
        } else if self.to < self.from {
            items[self.to..=self.from].rotate_right(1);
        }
    }
}

/// Picks the rank the active item lands on, given every item's displacement in
/// rank order.
///
/// The first marked item tells the drag direction. A downward drag lands on
/// the far end of the block of items pushed up; an upward drag lands on the
/// near end of the block of items pushed down. Without any marker the item
/// returns to `start_rank`.
pub(super) fn destination_index(start_rank: usize, displacements: &[Displacement]) -> usize {
    let Some(first) = displacements.iter().position(|d| !d.is_none()) else {
        return start_rank;
    };
    match displacements[first] {
        Displacement::ShiftedUp => {
            if displacements.last() == Some(&Displacement::ShiftedUp) {
                displacements.len() - 1
            } else {
                displacements
                    .iter()
                    .rposition(|d| !d.is_none())
                    .unwrap_or(first)
            }
        }
        Displacement::ShiftedDown => {
            if displacements.first() == Some(&Displacement::ShiftedDown) {
                0
            } else {
                first
            }
        }
        Displacement::None => start_rank,
    }
}

impl<K> ReorderList<K>
where
    K: Copy + Eq + Hash + Debug,
{
    /// Commits the drag described by `session` and returns to idle.
    pub(super) fn finalize(&mut self, session: DragSession) -> Reordered<K> {
        let displacements: Vec<Displacement> = self
            .by_rank
            .iter()
            .map(|&slot| self.items[slot].displacement)
            .collect();
        let to = destination_index(session.rank, &displacements);

        self.animate_offset(session.slot, self.config.rank_offset(to));

        let moved = self.by_rank.remove(session.rank);
        self.by_rank.insert(to, moved);
        for (rank, &slot) in self.by_rank.iter().enumerate() {
            let item = &mut self.items[slot];
            item.rank = rank;
            item.displacement = Displacement::None;
            item.insert_line = InsertLine::None;
        }

        // Passive items only drift from their slot when the drag skipped
        // over neighbours in a single sample.
        let drifted: Vec<(usize, f64)> = self
            .by_rank
            .iter()
            .enumerate()
            .map(|(rank, &slot)| (slot, self.config.rank_offset(rank)))
            .filter(|&(slot, resting)| slot != session.slot && self.items[slot].offset != resting)
            .collect();
        for (slot, resting) in drifted {
            self.animate_offset(slot, resting);
        }

        self.session = None;
        self.bump_revision();

        #[cfg(debug_assertions)]
        self.debug_assert_permutation();

        let item = self.items[session.slot].id;

        #[cfg(feature = "tracing")]
        tracing::debug!(item = ?item, from = session.rank, to, "reorder drag finished");

        Reordered {
            item,
            from: session.rank,
            to,
            order: self.ordered_ids(),
        }
    }

    #[cfg(debug_assertions)]
    fn debug_assert_permutation(&self) {
        let mut seen = alloc::vec![false; self.items.len()];
        for item in &self.items {
            debug_assert!(
                item.rank < seen.len() && !seen[item.rank],
                "ranks must form a permutation, rank {} is out of range or repeated",
                item.rank
            );
            seen[item.rank] = true;
        }
        for (rank, &slot) in self.by_rank.iter().enumerate() {
            debug_assert_eq!(
                self.items[slot].rank, rank,
                "rank index is out of sync with item records"
            );
        }
    }
}
