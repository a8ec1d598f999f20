// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A violated precondition reported by the checked `try_*` entry points of
/// [`ReorderList`](crate::ReorderList).
///
/// None of these are expected in a correct integration: the host is supposed
/// to stop recognising long-presses while a drag is running and to only feed
/// samples for the item it started. The unchecked entry points treat them as
/// bugs (panic in debug builds, ignored in release builds).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReorderError<K> {
    /// The id is not part of the list.
    UnknownItem(K),
    /// The id appeared more than once in the initial sequence.
    DuplicateItem(K),
    /// A drag was started while another one is in progress.
    DragInProgress {
        /// The item currently being dragged.
        active: K,
    },
    /// A sample or release arrived while no drag is in progress.
    NotDragging,
    /// A sample or release arrived for an item other than the active one.
    NotActive {
        /// The item currently being dragged.
        active: K,
        /// The item named by the caller.
        requested: K,
    },
}

impl<K: fmt::Debug> fmt::Display for ReorderError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownItem(id) => write!(f, "item {id:?} is not part of the list"),
            Self::DuplicateItem(id) => write!(f, "item {id:?} appears more than once"),
            Self::DragInProgress { active } => {
                write!(f, "item {active:?} is already being dragged")
            }
            Self::NotDragging => f.write_str("no drag is in progress"),
            Self::NotActive { active, requested } => write!(
                f,
                "item {requested:?} is not being dragged (active item is {active:?})"
            ),
        }
    }
}

impl<K: fmt::Debug> core::error::Error for ReorderError<K> {}
