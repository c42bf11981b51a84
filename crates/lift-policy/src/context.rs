//! Read-only building state passed to every policy call.

use lift_core::{Floor, Tick};

/// Aggregate demand and building shape at the moment a car goes idle.
///
/// Built by the dispatcher right before the policy call, so the waiting
/// counts already include requests ingested this tick and exclude anyone
/// boarded by cars stepped earlier in the same tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PolicyContext {
    /// Current simulation tick.
    pub tick: Tick,

    /// Highest floor of the building.
    pub top_floor: Floor,

    /// Passengers queued to go up, over all floors.
    pub waiting_up: usize,

    /// Passengers queued to go down, over all floors.
    pub waiting_down: usize,
}

impl PolicyContext {
    #[inline]
    pub fn new(tick: Tick, top_floor: Floor, waiting_up: usize, waiting_down: usize) -> Self {
        Self { tick, top_floor, waiting_up, waiting_down }
    }

    /// Passengers queued in either direction.
    #[inline]
    pub fn total_waiting(&self) -> usize {
        self.waiting_up + self.waiting_down
    }
}
