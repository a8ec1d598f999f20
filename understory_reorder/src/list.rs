// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reorderable list state and its drag-session entry points.

mod finalize;
mod tracker;

use alloc::vec::{Drain, Vec};
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::{Displacement, InsertLine, ItemView, ReorderConfig, ReorderError, Transition};

pub use finalize::Reordered;

/// Mutable state of one item.
#[derive(Clone, Debug)]
struct ItemState<K> {
    id: K,
    rank: usize,
    offset: f64,
    displacement: Displacement,
    insert_line: InsertLine,
}

/// Values captured when a drag starts; fixed for the whole gesture.
#[derive(Clone, Copy, Debug)]
struct DragSession {
    /// Slot of the active item in `items`.
    slot: usize,
    /// Rank of the active item at drag start.
    rank: usize,
    /// Resting offset of the active item at drag start.
    base_offset: f64,
}

/// Drag-to-reorder state for a vertical list of fixed-height items.
///
/// The list owns one record per item (rank, offset, displacement marker,
/// insert-line hint) and runs at most one drag session at a time:
///
/// 1. [`begin_drag`](Self::begin_drag) when the host recognises a long-press.
/// 2. [`update_drag`](Self::update_drag) for every movement sample, in
///    arrival order. Neighbours crossed by the dragged item are displaced one
///    slot out of its way; crossing back undoes the displacement.
/// 3. [`end_drag`](Self::end_drag) on release. The displacement markers are
///    turned into a destination rank, every rank is reassigned, and the new
///    order is returned.
///
/// Renderers read [`items`](Self::items) or [`item`](Self::item) after each
/// call and drain [`drain_transitions`](Self::drain_transitions) to animate
/// offsets that jumped.
///
/// Each entry point comes in a checked `try_*` flavour returning
/// [`ReorderError`] and an unchecked flavour that treats violations as bugs:
/// it panics in debug builds and leaves the state untouched in release builds.
///
/// ```rust
/// use understory_reorder::{InsertLine, ReorderConfig, ReorderList};
///
/// let mut list = ReorderList::new(['a', 'b', 'c'], ReorderConfig::new(60.0));
///
/// list.begin_drag('a');
/// // Half way over `b`: only the preview changes.
/// list.update_drag('a', 35.0, 1.0);
/// assert_eq!(list.insert_line(&'b'), Some(InsertLine::Below));
/// // Far enough to push `b` up.
/// list.update_drag('a', 45.0, 1.0);
/// assert_eq!(list.offset(&'b'), Some(0.0));
///
/// let reordered = list.end_drag('a').unwrap();
/// assert_eq!(reordered.order, ['b', 'a', 'c']);
/// assert_eq!((reordered.from, reordered.to), (0, 1));
/// ```
#[derive(Clone, Debug)]
pub struct ReorderList<K> {
    config: ReorderConfig,
    items: Vec<ItemState<K>>,
    slots: HashMap<K, usize>,
    by_rank: Vec<usize>,
    session: Option<DragSession>,
    transitions: Vec<Transition<K>>,
    revision: u64,
}

impl<K> ReorderList<K>
where
    K: Copy + Eq + Hash + Debug,
{
    /// Creates a list whose initial order is the order of `ids`.
    ///
    /// Ids must be unique. Duplicates panic in debug builds and are skipped in
    /// release builds; use [`try_new`](Self::try_new) to detect them.
    pub fn new(ids: impl IntoIterator<Item = K>, config: ReorderConfig) -> Self {
        let mut list = Self::empty(config);
        for id in ids {
            if let Err(err) = list.push(id) {
                debug_assert!(false, "ReorderList::new: {err}");
            }
        }
        list
    }

    /// Creates a list whose initial order is the order of `ids`, rejecting duplicates.
    pub fn try_new(
        ids: impl IntoIterator<Item = K>,
        config: ReorderConfig,
    ) -> Result<Self, ReorderError<K>> {
        let mut list = Self::empty(config);
        for id in ids {
            list.push(id)?;
        }
        Ok(list)
    }

    fn empty(config: ReorderConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            slots: HashMap::new(),
            by_rank: Vec::new(),
            session: None,
            transitions: Vec::new(),
            revision: 0,
        }
    }

    fn push(&mut self, id: K) -> Result<(), ReorderError<K>> {
        let slot = self.items.len();
        match self.slots.entry(id) {
            Entry::Occupied(_) => return Err(ReorderError::DuplicateItem(id)),
            Entry::Vacant(entry) => {
                entry.insert(slot);
            }
        }
        self.items.push(ItemState {
            id,
            rank: slot,
            offset: self.config.rank_offset(slot),
            displacement: Displacement::None,
            insert_line: InsertLine::None,
        });
        self.by_rank.push(slot);
        Ok(())
    }

    /// Returns the configuration the list was built with.
    #[must_use]
    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total height of the list: item count times item height.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.config.rank_offset(self.items.len())
    }

    /// Change counter, bumped whenever any item's render state or the active
    /// item changes.
    ///
    /// Calls that change nothing (for example a zero-velocity sample at the
    /// same translation) leave it untouched.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` while a drag session is running.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The item being dragged, if any.
    #[must_use]
    pub fn active(&self) -> Option<K> {
        self.session.map(|session| self.items[session.slot].id)
    }

    /// Returns `true` if `id` is the item being dragged.
    #[must_use]
    pub fn is_active(&self, id: &K) -> bool {
        self.active().as_ref() == Some(id)
    }

    /// Snapshot of one item, or `None` for an unknown id.
    #[must_use]
    pub fn item(&self, id: &K) -> Option<ItemView<K>> {
        self.slots.get(id).map(|&slot| self.view(slot))
    }

    /// Snapshots of all items in the order they were supplied at construction.
    ///
    /// This order never changes, which makes it a stable iteration order for
    /// renderers that keep one widget per item.
    pub fn items(&self) -> impl ExactSizeIterator<Item = ItemView<K>> + '_ {
        (0..self.items.len()).map(|slot| self.view(slot))
    }

    /// Item ids in rank order.
    #[must_use]
    pub fn ordered_ids(&self) -> Vec<K> {
        self.by_rank.iter().map(|&slot| self.items[slot].id).collect()
    }

    /// Current rank of `id`.
    #[must_use]
    pub fn rank(&self, id: &K) -> Option<usize> {
        self.state(id).map(|item| item.rank)
    }

    /// Current render offset of `id`.
    #[must_use]
    pub fn offset(&self, id: &K) -> Option<f64> {
        self.state(id).map(|item| item.offset)
    }

    /// Current displacement marker of `id`.
    #[must_use]
    pub fn displacement(&self, id: &K) -> Option<Displacement> {
        self.state(id).map(|item| item.displacement)
    }

    /// Current insert-line hint of `id`.
    #[must_use]
    pub fn insert_line(&self, id: &K) -> Option<InsertLine> {
        self.state(id).map(|item| item.insert_line)
    }

    /// Removes and returns the transitions recorded since the last drain, oldest first.
    ///
    /// At most one transition per item is pending: a newer transition for an
    /// item replaces one that was never drained.
    pub fn drain_transitions(&mut self) -> Drain<'_, Transition<K>> {
        self.transitions.drain(..)
    }

    /// Starts dragging `id`.
    ///
    /// Fails if `id` is unknown or another drag is in progress.
    pub fn try_begin_drag(&mut self, id: K) -> Result<(), ReorderError<K>> {
        if let Some(active) = self.active() {
            return Err(ReorderError::DragInProgress { active });
        }
        let slot = self.slot_of(id)?;
        let rank = self.items[slot].rank;
        self.session = Some(DragSession {
            slot,
            rank,
            base_offset: self.config.rank_offset(rank),
        });
        self.bump_revision();

        #[cfg(feature = "tracing")]
        tracing::debug!(item = ?id, rank, "reorder drag started");

        Ok(())
    }

    /// Starts dragging `id`.
    ///
    /// # Panics
    ///
    /// In debug builds, if `id` is unknown or another drag is in progress.
    pub fn begin_drag(&mut self, id: K) {
        if let Err(err) = self.try_begin_drag(id) {
            debug_assert!(false, "begin_drag: {err}");
        }
    }

    /// Feeds one movement sample for the active item.
    ///
    /// `translation_y` is the total vertical movement since the drag started;
    /// `velocity_y` only contributes its sign, which decides whether
    /// neighbours below (`> 0`) or above (`< 0`) are tested. A zero velocity
    /// moves the active item without touching its neighbours.
    pub fn try_update_drag(
        &mut self,
        id: K,
        translation_y: f64,
        velocity_y: f64,
    ) -> Result<(), ReorderError<K>> {
        let session = self.session_for(id)?;
        self.track(session, translation_y, velocity_y);
        Ok(())
    }

    /// Feeds one movement sample for the active item.
    ///
    /// See [`try_update_drag`](Self::try_update_drag).
    ///
    /// # Panics
    ///
    /// In debug builds, if `id` is not the item being dragged.
    pub fn update_drag(&mut self, id: K, translation_y: f64, velocity_y: f64) {
        if let Err(err) = self.try_update_drag(id, translation_y, velocity_y) {
            debug_assert!(false, "update_drag: {err}");
        }
    }

    /// Feeds a sample produced by a [`PanTracker`](crate::gesture::PanTracker).
    ///
    /// Only the vertical components are used.
    #[cfg(feature = "gesture")]
    pub fn update_drag_with(&mut self, id: K, sample: crate::gesture::PanSample) {
        self.update_drag(id, sample.translation.y, sample.velocity.y);
    }

    /// Ends the drag of `id` and commits the new order.
    pub fn try_end_drag(&mut self, id: K) -> Result<Reordered<K>, ReorderError<K>> {
        let session = self.session_for(id)?;
        Ok(self.finalize(session))
    }

    /// Ends the drag of `id` and commits the new order.
    ///
    /// Returns `None` only when the call violates its precondition in a
    /// release build.
    ///
    /// # Panics
    ///
    /// In debug builds, if `id` is not the item being dragged.
    pub fn end_drag(&mut self, id: K) -> Option<Reordered<K>> {
        match self.try_end_drag(id) {
            Ok(reordered) => Some(reordered),
            Err(err) => {
                debug_assert!(false, "end_drag: {err}");
                None
            }
        }
    }

    fn slot_of(&self, id: K) -> Result<usize, ReorderError<K>> {
        self.slots
            .get(&id)
            .copied()
            .ok_or(ReorderError::UnknownItem(id))
    }

    fn session_for(&self, id: K) -> Result<DragSession, ReorderError<K>> {
        let session = self.session.ok_or(ReorderError::NotDragging)?;
        let active = self.items[session.slot].id;
        if active != id {
            return Err(ReorderError::NotActive {
                active,
                requested: id,
            });
        }
        Ok(session)
    }

    fn state(&self, id: &K) -> Option<&ItemState<K>> {
        self.slots.get(id).map(|&slot| &self.items[slot])
    }

    fn view(&self, slot: usize) -> ItemView<K> {
        let item = &self.items[slot];
        ItemView {
            id: item.id,
            rank: item.rank,
            offset: item.offset,
            displacement: item.displacement,
            insert_line: item.insert_line,
            active: self.session.is_some_and(|session| session.slot == slot),
        }
    }

    /// Moves `slot` to `to` and records the transition, replacing any pending
    /// one for the same item.
    fn animate_offset(&mut self, slot: usize, to: f64) {
        let item = &mut self.items[slot];
        let from = item.offset;
        item.offset = to;
        if let Some(stale) = self.transitions.iter().position(|t| t.id == item.id) {
            self.transitions.remove(stale);
        }
        self.transitions.push(Transition {
            id: item.id,
            from,
            to,
            duration: self.config.transition_duration(),
        });
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::vec;
    use std::string::ToString;

    fn list() -> ReorderList<u32> {
        ReorderList::new([10, 20, 30], ReorderConfig::new(60.0))
    }

    #[test]
    fn seeds_ranks_and_offsets_from_input_order() {
        let list = list();
        assert_eq!(list.len(), 3);
        assert_eq!(list.ordered_ids(), vec![10, 20, 30]);
        assert_eq!(list.rank(&30), Some(2));
        assert_eq!(list.offset(&20), Some(60.0));
        assert_eq!(list.content_extent(), 180.0);
        assert!(!list.is_dragging());
        assert_eq!(list.revision(), 0);
    }

    #[test]
    fn try_new_rejects_duplicates() {
        let err = ReorderList::try_new([1, 2, 1], ReorderConfig::default()).unwrap_err();
        assert_eq!(err, ReorderError::DuplicateItem(1));
        assert_eq!(err.to_string(), "item 1 appears more than once");
    }

    #[test]
    fn duplicates_leave_the_first_record_in_place() {
        let mut list = ReorderList::empty(ReorderConfig::default());
        for id in [1, 2] {
            list.push(id).unwrap();
        }
        assert_eq!(list.push(1), Err(ReorderError::DuplicateItem(1)));

        assert_eq!(list.len(), 2);
        assert_eq!(list.rank(&1), Some(0));
        assert_eq!(list.offset(&1), Some(0.0));
        assert_eq!(list.ordered_ids(), vec![1, 2]);
        list.try_begin_drag(1).unwrap();
        assert_eq!(list.try_end_drag(1).unwrap().order, vec![1, 2]);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn new_skips_duplicates_in_release() {
        let list = ReorderList::new([1, 2, 1], ReorderConfig::default());
        assert_eq!(list.len(), 2);
        assert_eq!(list.rank(&1), Some(0));
        assert_eq!(list.rank(&2), Some(1));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "item 1 appears more than once")]
    fn new_panics_on_duplicates_in_debug() {
        let _ = ReorderList::new([1, 2, 1], ReorderConfig::default());
    }

    #[test]
    fn begin_marks_only_the_dragged_item_active() {
        let mut list = list();
        list.try_begin_drag(20).unwrap();

        assert_eq!(list.active(), Some(20));
        assert!(list.is_active(&20));
        let views: Vec<_> = list.items().map(|view| (view.id, view.active)).collect();
        assert_eq!(views, vec![(10, false), (20, true), (30, false)]);
        assert_eq!(list.revision(), 1);
    }

    #[test]
    fn checked_entry_points_report_preconditions() {
        let mut list = list();
        assert_eq!(
            list.try_update_drag(10, 5.0, 1.0),
            Err(ReorderError::NotDragging)
        );
        assert_eq!(list.try_begin_drag(99), Err(ReorderError::UnknownItem(99)));

        list.try_begin_drag(10).unwrap();
        assert_eq!(
            list.try_begin_drag(20),
            Err(ReorderError::DragInProgress { active: 10 })
        );
        assert_eq!(
            list.try_end_drag(30).unwrap_err(),
            ReorderError::NotActive {
                active: 10,
                requested: 30
            }
        );
        // Nothing above changed the session.
        assert_eq!(list.active(), Some(10));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "update_drag: no drag is in progress")]
    fn unchecked_update_without_session_panics_in_debug() {
        let mut list = list();
        list.update_drag(10, 1.0, 1.0);
    }

    #[test]
    fn item_returns_none_for_unknown_ids() {
        let list = list();
        assert!(list.item(&7).is_none());
        assert!(list.offset(&7).is_none());
    }
}
