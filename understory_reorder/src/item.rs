// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item markers and the read-only view handed to renderers.

/// Direction of a drag sample, derived from the sign of its velocity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragDirection {
    /// Moving toward lower ranks.
    Up,
    /// Moving toward higher ranks.
    Down,
}

impl DragDirection {
    /// Classifies a vertical velocity.
    ///
    /// Returns `None` for a zero (or NaN) velocity: such samples move the
    /// active item but never displace neighbours.
    #[must_use]
    pub fn from_velocity(velocity_y: f64) -> Option<Self> {
        if velocity_y > 0.0 {
            Some(Self::Down)
        } else if velocity_y < 0.0 {
            Some(Self::Up)
        } else {
            None
        }
    }

    /// The displacement a neighbour receives when pushed out of the way by a
    /// drag in this direction.
    #[must_use]
    pub const fn displacement(self) -> Displacement {
        match self {
            Self::Down => Displacement::ShiftedUp,
            Self::Up => Displacement::ShiftedDown,
        }
    }
}

/// Transient marker on a passive item that has been pushed one slot out of the
/// active item's path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Displacement {
    /// Not displaced.
    #[default]
    None,
    /// Pushed one slot up by a downward drag.
    ShiftedUp,
    /// Pushed one slot down by an upward drag.
    ShiftedDown,
}

impl Displacement {
    /// Returns `true` for [`Displacement::None`].
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// The marker pointing the other way; `None` stays `None`.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::ShiftedUp => Self::ShiftedDown,
            Self::ShiftedDown => Self::ShiftedUp,
        }
    }

    /// Applies a push from a drag in `direction`.
    ///
    /// A push against an existing marker undoes it; anything else leaves the
    /// item displaced in the push direction.
    #[must_use]
    pub fn toggled(self, direction: DragDirection) -> Self {
        let pushed = direction.displacement();
        if self == pushed.reversed() {
            Self::None
        } else {
            pushed
        }
    }
}

/// Visual hint telling the renderer where the active item would land.
///
/// This never affects ordering on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InsertLine {
    /// No hint.
    #[default]
    None,
    /// Draw the line along the item's top edge.
    Above,
    /// Draw the line along the item's bottom edge.
    Below,
}

/// Snapshot of one item's render state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemView<K> {
    /// Stable item identifier.
    pub id: K,
    /// At-rest position among siblings.
    pub rank: usize,
    /// Vertical offset to render at, in logical pixels.
    ///
    /// For displaced or dropped items this is the target of the most recent
    /// [`Transition`](crate::Transition), not an intermediate animated value.
    pub offset: f64,
    /// Transient displacement marker.
    pub displacement: Displacement,
    /// Insert-line hint.
    pub insert_line: InsertLine,
    /// Whether this is the item being dragged.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_follows_velocity_sign() {
        assert_eq!(DragDirection::from_velocity(12.5), Some(DragDirection::Down));
        assert_eq!(DragDirection::from_velocity(-0.1), Some(DragDirection::Up));
        assert_eq!(DragDirection::from_velocity(0.0), None);
        assert_eq!(DragDirection::from_velocity(-0.0), None);
        assert_eq!(DragDirection::from_velocity(f64::NAN), None);
    }

    #[test]
    fn toggling_against_a_marker_undoes_it() {
        assert_eq!(
            Displacement::None.toggled(DragDirection::Down),
            Displacement::ShiftedUp
        );
        assert_eq!(
            Displacement::ShiftedUp.toggled(DragDirection::Up),
            Displacement::None
        );
        assert_eq!(
            Displacement::ShiftedDown.toggled(DragDirection::Down),
            Displacement::None
        );
        assert_eq!(
            Displacement::None.toggled(DragDirection::Up),
            Displacement::ShiftedDown
        );
        assert_eq!(
            Displacement::ShiftedUp.toggled(DragDirection::Down),
            Displacement::ShiftedUp
        );
    }

    #[test]
    fn reversed_is_an_involution() {
        for d in [
            Displacement::None,
            Displacement::ShiftedUp,
            Displacement::ShiftedDown,
        ] {
            assert_eq!(d.reversed().reversed(), d);
        }
        assert_eq!(Displacement::ShiftedUp.reversed(), Displacement::ShiftedDown);
    }
}
