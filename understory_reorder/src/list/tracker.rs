// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-sample neighbour displacement.

use core::fmt::Debug;
use core::hash::Hash;

use super::{DragSession, ReorderList};
use crate::{DragDirection, InsertLine};

impl<K> ReorderList<K>
where
    K: Copy + Eq + Hash + Debug,
{
    /// Applies one drag sample to the active item and its neighbours.
    pub(super) fn track(&mut self, session: DragSession, translation_y: f64, velocity_y: f64) {
        debug_assert!(
            translation_y.is_finite(),
            "drag translation must be finite, got {translation_y}"
        );

        let offset = session.base_offset + translation_y;
        let active = &mut self.items[session.slot];
        let mut changed = active.offset != offset;
        active.offset = offset;

        let direction = DragDirection::from_velocity(velocity_y);

        #[cfg(feature = "tracing")]
        tracing::trace!(item = ?active.id, translation_y, ?direction, "reorder drag sample");

        if let Some(direction) = direction {
            let (target, lines_changed) = self.scan(session, offset, direction);
            changed |= lines_changed;
            if let Some(slot) = target {
                self.displace(slot, direction);
                changed = true;
            }
        }

        if changed {
            self.bump_revision();
        }
    }

    /// Looks for the neighbour the active item has crossed, updating insert
    /// lines on the way.
    ///
    /// Items are visited in rank order. Untouched items on the far side of the
    /// drag origin are ignored, as are items already pushed in the current
    /// direction; the first item whose commit boundary has been crossed wins.
    ///
    /// Returns the slot of that item, if any, and whether any insert line changed.
    fn scan(
        &mut self,
        session: DragSession,
        y: f64,
        direction: DragDirection,
    ) -> (Option<usize>, bool) {
        let height = self.config.item_height();
        let insert_line_at = height * self.config.insert_line_ratio();
        let pushed = direction.displacement();
        let mut lines_changed = false;

        for &slot in &self.by_rank {
            if slot == session.slot {
                continue;
            }
            let item = &mut self.items[slot];
            if item.displacement == pushed {
                continue;
            }
            let untouched = item.displacement.is_none();

            let (line, crosses_line, crosses_commit) = match direction {
                DragDirection::Down => {
                    if untouched && item.rank < session.rank {
                        continue;
                    }
                    let bottom = y + height;
                    (
                        InsertLine::Below,
                        bottom > item.offset + insert_line_at,
                        bottom > item.offset + height * self.config.down_commit_ratio(),
                    )
                }
                DragDirection::Up => {
                    if untouched && item.rank > session.rank {
                        continue;
                    }
                    (
                        InsertLine::Above,
                        y < item.offset + insert_line_at,
                        y < item.offset + height * self.config.up_commit_ratio(),
                    )
                }
            };

            if crosses_line && item.insert_line != line {
                item.insert_line = line;
                lines_changed = true;
            }
            if crosses_commit {
                return (Some(slot), lines_changed);
            }
        }

        (None, lines_changed)
    }

    /// Pushes the item at `slot` one slot out of the way, or back if it had
    /// been pushed the other way.
    fn displace(&mut self, slot: usize, direction: DragDirection) {
        for item in &mut self.items {
            item.insert_line = InsertLine::None;
        }

        let height = self.config.item_height();
        let item = &mut self.items[slot];
        item.displacement = item.displacement.toggled(direction);
        let to = match direction {
            DragDirection::Down => item.offset - height,
            DragDirection::Up => item.offset + height,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            item = ?item.id,
            displacement = ?item.displacement,
            offset = to,
            "reorder neighbour displaced"
        );

        self.animate_offset(slot, to);
    }
}
