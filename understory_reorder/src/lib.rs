// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reorder --heading-base-level=0

//! Understory Reorder: drag-to-reorder state for vertical lists.
//!
//! This crate implements the bookkeeping behind a "long-press and drag to
//! reorder" list of fixed-height items. It is renderer-agnostic: it does not
//! draw, recognise gestures, or animate. Hosts feed it drag samples and read
//! back what to draw.
//!
//! The core type is [`ReorderList`], which owns one record per item:
//!
//! - a stable **id** supplied by the host,
//! - a **rank**, the item's at-rest position (ranks always form a permutation),
//! - an **offset**, the vertical position to render at,
//! - a transient **displacement** marker for neighbours pushed out of the way,
//! - a transient **insert line** hint showing where the dragged item would land.
//!
//! ## Drag lifecycle
//!
//! A drag session is `idle → dragging → idle`:
//!
//! - [`ReorderList::begin_drag`] makes one item active and captures its
//!   resting offset.
//! - [`ReorderList::update_drag`] takes the total vertical translation and the
//!   current vertical velocity. The active item follows the translation. The
//!   velocity's sign picks which neighbours are tested: crossing a
//!   neighbour's midpoint shows an insert line, crossing its commit boundary
//!   pushes it one slot out of the way (or back, if the drag reversed).
//! - [`ReorderList::end_drag`] converts the displacement markers into a
//!   destination rank, reassigns every rank, clears the markers, and returns a
//!   [`Reordered`] describing the move.
//!
//! Offsets that jump (displaced neighbours, the dropped item) are recorded as
//! [`Transition`]s for the host to animate; see [`transition`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_reorder::{Displacement, ReorderConfig, ReorderList};
//!
//! let mut list = ReorderList::new(["a", "b", "c", "d"], ReorderConfig::new(60.0));
//!
//! // Long-press on "a", then drag it down past "b" and "c".
//! list.begin_drag("a");
//! for step in 1..=30 {
//!     list.update_drag("a", f64::from(step) * 5.0, 1.0);
//! }
//! assert_eq!(list.displacement(&"b"), Some(Displacement::ShiftedUp));
//! assert_eq!(list.displacement(&"c"), Some(Displacement::ShiftedUp));
//!
//! let reordered = list.end_drag("a").unwrap();
//! assert_eq!(reordered.order, ["b", "c", "a", "d"]);
//!
//! // Apply the same move to the host's own data.
//! let mut labels = vec!["Alpha", "Bravo", "Charlie", "Delta"];
//! reordered.apply_to(&mut labels);
//! assert_eq!(labels, ["Bravo", "Charlie", "Alpha", "Delta"]);
//! ```
//!
//! ## Preconditions
//!
//! Each entry point has a checked `try_*` twin returning [`ReorderError`].
//! The unchecked versions treat a violated precondition (unknown id, a second
//! `begin_drag`, samples for an item that is not being dragged) as a bug:
//! they panic in debug builds and leave the list untouched in release builds.
//!
//! ## Features
//!
//! - `gesture` (default): [`gesture::PanTracker`], which derives translation
//!   and velocity from raw pointer positions (requires `kurbo`).
//! - `tracing`: emit `tracing` events for drag start, displacements, and drops.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod item;
mod list;
pub mod transition;

#[cfg(feature = "gesture")]
pub mod gesture;

pub use config::ReorderConfig;
pub use error::ReorderError;
pub use item::{Displacement, DragDirection, InsertLine, ItemView};
pub use list::{ReorderList, Reordered};
pub use transition::Transition;
