//! Immutable value view of a car.

use lift_core::{CarId, CarStatus, Floor, PassengerId};

/// A copy of a car's observable state at one instant.
///
/// Snapshots own their data and never point back into the live [`Car`]
/// they were taken from, so they can be handed to policies, observers, and
/// adapters without giving anyone a way to mutate the engine.
///
/// [`Car`]: crate::Car
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarSnapshot {
    pub id:            CarId,
    pub current_floor: Floor,
    pub target_floor:  Floor,

    /// Derived from `current_floor` and `target_floor` when the snapshot was
    /// taken.
    pub status: CarStatus,

    /// Onboard passengers ordered by drop-off floor, then boarding order.
    pub passengers: Vec<PassengerId>,

    /// `true` when the doors were busy this tick and the car moves next tick.
    pub door_dwell: bool,
}

impl CarSnapshot {
    #[inline]
    pub fn onboard_count(&self) -> usize {
        self.passengers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }
}
