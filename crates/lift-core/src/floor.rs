//! Floors, travel directions, and the derived car status.

use std::fmt;

/// A floor number.  Floors are 1-based: the ground floor is [`GROUND_FLOOR`]
/// and the top floor comes from the building configuration.
pub type Floor = u32;

/// The lowest floor of every building.
pub const GROUND_FLOOR: Floor = 1;

/// Direction of travel implied by a request or a moving car.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction needed to get from `from` to `to`.  Anything that is not
    /// strictly upward counts as `Down`; callers validate `from != to` first.
    #[inline]
    pub fn between(from: Floor, to: Floor) -> Direction {
        if to > from { Direction::Up } else { Direction::Down }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

/// Observable state of a car, always derived from `(current, target)`.
///
/// Never store a `CarStatus`; recompute it with [`CarStatus::derive`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarStatus {
    Up,
    Down,
    Idle,
}

impl CarStatus {
    #[inline]
    pub fn derive(current: Floor, target: Floor) -> CarStatus {
        use std::cmp::Ordering;
        match target.cmp(&current) {
            Ordering::Greater => CarStatus::Up,
            Ordering::Less    => CarStatus::Down,
            Ordering::Equal   => CarStatus::Idle,
        }
    }

    /// The travel direction, or `None` for an idle car.
    #[inline]
    pub fn direction(self) -> Option<Direction> {
        match self {
            CarStatus::Up   => Some(Direction::Up),
            CarStatus::Down => Some(Direction::Down),
            CarStatus::Idle => None,
        }
    }

    #[inline]
    pub fn is_idle(self) -> bool {
        self == CarStatus::Idle
    }
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarStatus::Up   => f.write_str("Up"),
            CarStatus::Down => f.write_str("Down"),
            CarStatus::Idle => f.write_str("Idle"),
        }
    }
}
