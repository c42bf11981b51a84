//! The `Car` entity: one elevator's mutable state.

use std::collections::BTreeMap;

use lift_core::{CarId, CarStatus, Floor, GROUND_FLOOR, Passenger};

use crate::{CarError, CarResult, CarSnapshot};

/// One simulated elevator.
///
/// Only the dispatcher mutates cars.  Everything else sees them through
/// [`CarSnapshot`]s.
///
/// # Invariants
///
/// - `onboard_count() <= capacity()`.
/// - Every passenger in `onboard[f]` has drop-off floor `f`.
/// - [`status`](Self::status) is derived, never stored.
#[derive(Clone, Debug)]
pub struct Car {
    id:            CarId,
    capacity:      usize,
    current_floor: Floor,
    target_floor:  Floor,

    /// Drop-off floor → passengers leaving there, in boarding order.
    onboard: BTreeMap<Floor, Vec<Passenger>>,

    /// Cached total of `onboard` for O(1) capacity checks.
    onboard_count: usize,

    /// Set on any tick the doors opened; the car moves on the following tick.
    door_dwell: bool,
}

impl Car {
    /// Create an empty car at `current_floor` heading for `target_floor`.
    pub fn new(id: CarId, capacity: usize, current_floor: Floor, target_floor: Floor) -> Self {
        Self {
            id,
            capacity,
            current_floor,
            target_floor,
            onboard: BTreeMap::new(),
            onboard_count: 0,
            door_dwell: false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> CarId {
        self.id
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    #[inline]
    pub fn target_floor(&self) -> Floor {
        self.target_floor
    }

    #[inline]
    pub fn status(&self) -> CarStatus {
        CarStatus::derive(self.current_floor, self.target_floor)
    }

    #[inline]
    pub fn onboard_count(&self) -> usize {
        self.onboard_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.onboard_count == 0
    }

    /// Free places left.
    #[inline]
    pub fn available(&self) -> usize {
        self.capacity.saturating_sub(self.onboard_count)
    }

    #[inline]
    pub fn door_dwell(&self) -> bool {
        self.door_dwell
    }

    /// Onboard passengers ordered by drop-off floor, then boarding order.
    pub fn passengers(&self) -> impl Iterator<Item = &Passenger> + '_ {
        self.onboard.values().flatten()
    }

    /// Take an owned snapshot of the observable state.
    pub fn snapshot(&self) -> CarSnapshot {
        CarSnapshot {
            id:            self.id,
            current_floor: self.current_floor,
            target_floor:  self.target_floor,
            status:        self.status(),
            passengers:    self.passengers().map(|p| p.id).collect(),
            door_dwell:    self.door_dwell,
        }
    }

    // ── Boarding ──────────────────────────────────────────────────────────

    /// Board a single passenger.
    ///
    /// # Errors
    ///
    /// [`CarError::CapacityExceeded`] if the car is already full; the car is
    /// left untouched.
    pub fn board(&mut self, passenger: Passenger) -> CarResult<()> {
        if self.onboard_count >= self.capacity {
            return Err(CarError::CapacityExceeded {
                car:       self.id,
                requested: 1,
                available: 0,
            });
        }
        let drop_floor = passenger.drop_floor();
        self.onboard.entry(drop_floor).or_default().push(passenger);
        self.onboard_count += 1;
        self.extend_target(drop_floor);
        Ok(())
    }

    /// Board a whole batch, in order, or nobody at all.
    ///
    /// Returns the number boarded.  Splitting a queue into what fits is the
    /// caller's job (see [`Admission`](crate::Admission)).
    ///
    /// # Errors
    ///
    /// [`CarError::CapacityExceeded`] if `batch` is larger than the free
    /// places; the car is left untouched.
    pub fn board_batch(&mut self, batch: &[Passenger]) -> CarResult<usize> {
        let available = self.available();
        if batch.len() > available {
            return Err(CarError::CapacityExceeded {
                car:       self.id,
                requested: batch.len(),
                available,
            });
        }
        for &passenger in batch {
            self.board(passenger)?;
        }
        Ok(batch.len())
    }

    /// Moving cars only extend their trip; an idle car heads straight for
    /// the new drop-off floor.
    fn extend_target(&mut self, drop_floor: Floor) {
        self.target_floor = match self.status() {
            CarStatus::Up   => self.target_floor.max(drop_floor),
            CarStatus::Down => self.target_floor.min(drop_floor),
            CarStatus::Idle => drop_floor,
        };
    }

    // ── Arrivals ──────────────────────────────────────────────────────────

    /// `true` if anyone aboard wants to leave at the current floor.
    pub fn has_arrivals(&self) -> bool {
        self.onboard
            .get(&self.current_floor)
            .is_some_and(|leaving| !leaving.is_empty())
    }

    /// Let everyone bound for the current floor off, returning them.
    pub fn disembark_arrivals(&mut self) -> Vec<Passenger> {
        let leaving = self.onboard.remove(&self.current_floor).unwrap_or_default();
        self.onboard_count -= leaving.len();
        leaving
    }

    // ── Movement and doors ────────────────────────────────────────────────

    /// Move one floor towards the target.  No-op when idle.
    pub fn advance(&mut self) {
        match self.status() {
            CarStatus::Up   => self.current_floor += 1,
            CarStatus::Down => self.current_floor -= 1,
            CarStatus::Idle => {}
        }
    }

    /// Override the target floor.  The dispatcher only does this for idle
    /// cars, on behalf of the idle-routing policy.
    pub fn set_target_floor(&mut self, floor: Floor) {
        self.target_floor = floor;
    }

    /// Mark the doors busy: the car may not move until the next tick.
    pub fn open_doors(&mut self) {
        self.door_dwell = true;
    }

    /// Clear the door-dwell flag, returning whether it was set.
    pub fn take_door_dwell(&mut self) -> bool {
        std::mem::take(&mut self.door_dwell)
    }

    /// Empty the car and park it on the ground floor.
    pub fn reset(&mut self) {
        self.current_floor = GROUND_FLOOR;
        self.target_floor  = GROUND_FLOOR;
        self.onboard.clear();
        self.onboard_count = 0;
        self.door_dwell    = false;
    }
}
