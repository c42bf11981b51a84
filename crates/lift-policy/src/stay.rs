//! A policy that never moves idle cars.

use lift_car::CarSnapshot;
use lift_core::Floor;

use crate::{IdlePolicy, PolicyContext};

/// An [`IdlePolicy`] that always keeps the car where it is.
///
/// Cars still serve passengers queued at their own floor and deliver whoever
/// boards.  Useful in tests and for banks where each car is parked at a
/// fixed landing.
#[derive(Copy, Clone, Debug, Default)]
pub struct StayPut;

impl IdlePolicy for StayPut {
    fn idle_target(&self, car: &CarSnapshot, _ctx: &PolicyContext) -> Floor {
        car.current_floor
    }

    fn name(&self) -> &'static str {
        "stay-put"
    }
}
