//! The `Dispatcher` struct and its per-car step.

use lift_car::{Admission, Car, CarSnapshot};
use lift_core::{
    BuildingConfig, CarId, Direction, Floor, GROUND_FLOOR, Passenger, PassengerId,
    PassengerRequest, Tick,
};
use lift_policy::{IdlePolicy, PolicyContext};

use crate::{DispatchObserver, NoopObserver, WaitingQueues};

// ── Dispatcher ────────────────────────────────────────────────────────────────

/// The dispatch engine.
///
/// `Dispatcher<P>` owns every car and both waiting queues, and advances the
/// whole bank by exactly one tick per [`apply_workload`](Self::apply_workload)
/// call:
///
/// 1. **Ingest**: valid requests are queued by direction at their start
///    floor; invalid ones are dropped and reported.
/// 2. **Step**: every car, in ascending [`CarId`] order, runs the per-car
///    step (see [`step_car`]).  Earlier cars get first pick of a shared
///    queue.
///
/// Create via [`DispatcherBuilder`][crate::DispatcherBuilder].  The engine is
/// single-threaded; wrap it in [`SharedDispatcher`][crate::SharedDispatcher]
/// to share it between adapter threads.
pub struct Dispatcher<P: IdlePolicy> {
    pub(crate) config: BuildingConfig,

    /// Sorted by ascending `CarId`.
    pub(crate) cars: Vec<Car>,

    pub(crate) queues: WaitingQueues,

    pub(crate) policy: P,

    /// Tick the next `apply_workload` call will run.
    pub(crate) clock: Tick,

    /// Next `PassengerId` to hand out.
    pub(crate) next_passenger: u64,
}

impl<P: IdlePolicy> Dispatcher<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Empty both queues, park every car on the ground floor, and restart
    /// the tick and passenger-id counters.
    ///
    /// Returns the post-reset car snapshots.  Calling it twice in a row
    /// returns identical snapshots.
    pub fn reset(&mut self) -> Vec<CarSnapshot> {
        self.queues.clear();
        for car in &mut self.cars {
            car.reset();
        }
        self.clock = Tick::ZERO;
        self.next_passenger = 0;
        log::info!("dispatcher reset: {} car(s) parked on floor {GROUND_FLOOR}", self.cars.len());
        self.snapshots()
    }

    /// Queue `requests` and run one tick for every car.
    ///
    /// Never fails: malformed requests are dropped (and logged), and
    /// internal boarding faults leave the passengers queued.  The returned
    /// list always holds one snapshot per car, in id order.
    pub fn apply_workload(&mut self, requests: &[PassengerRequest]) -> Vec<CarSnapshot> {
        self.apply_workload_observed(requests, &mut NoopObserver)
    }

    /// Like [`apply_workload`](Self::apply_workload), reporting every event
    /// of the tick to `observer`.
    pub fn apply_workload_observed<O: DispatchObserver>(
        &mut self,
        requests: &[PassengerRequest],
        observer: &mut O,
    ) -> Vec<CarSnapshot> {
        let now = self.clock;
        observer.on_tick_start(now);

        if !requests.is_empty() {
            self.ingest(requests, now, observer);
        }

        // Explicit field borrows so the borrow checker sees disjoint access.
        let top_floor = self.config.top_floor;
        let policy    = &self.policy;
        let queues    = &mut self.queues;
        for car in &mut self.cars {
            step_car(car, queues, policy, top_floor, now, observer);
        }

        let snapshots = self.snapshots();
        observer.on_tick_end(now, &snapshots);
        log::trace!("{now}: {} waiting after step", self.queues.len());

        self.clock = now.next();
        snapshots
    }

    // ── Read API ──────────────────────────────────────────────────────────

    /// Snapshots of every car, in id order.
    pub fn snapshots(&self) -> Vec<CarSnapshot> {
        self.cars.iter().map(Car::snapshot).collect()
    }

    /// Snapshot of one car, if it exists.
    pub fn car(&self, id: CarId) -> Option<CarSnapshot> {
        self.cars
            .binary_search_by_key(&id, Car::id)
            .ok()
            .map(|index| self.cars[index].snapshot())
    }

    pub fn car_count(&self) -> usize {
        self.cars.len()
    }

    /// Read-only view of the waiting queues.
    pub fn waiting(&self) -> &WaitingQueues {
        &self.queues
    }

    /// The tick the next `apply_workload` call will run.
    pub fn tick(&self) -> Tick {
        self.clock
    }

    pub fn building(&self) -> &BuildingConfig {
        &self.config
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    // ── Ingestion ─────────────────────────────────────────────────────────

    fn ingest<O: DispatchObserver>(
        &mut self,
        requests: &[PassengerRequest],
        now:      Tick,
        observer: &mut O,
    ) {
        let top_floor = self.config.top_floor;
        for request in requests {
            match request.validate(top_floor) {
                Ok(direction) => {
                    let passenger = Passenger::new(PassengerId(self.next_passenger), *request);
                    self.next_passenger += 1;
                    self.queues.push(passenger);
                    log::trace!(
                        "{now}: {} queued at floor {} going {direction}",
                        passenger.id,
                        passenger.start_floor(),
                    );
                    observer.on_request_queued(now, &passenger);
                }
                Err(reason) => {
                    log::warn!(
                        "{now}: dropping request {} -> {}: {reason}",
                        request.start_floor,
                        request.end_floor,
                    );
                    observer.on_request_rejected(now, request, &reason);
                }
            }
        }
    }
}

// ── Per-car step ──────────────────────────────────────────────────────────────

/// Run one tick for `car`.
///
/// ```text
/// if door dwell set:  clear it, advance one floor, done.
/// else:
///   ① let off everyone bound for this floor
///   ② idle car: serve its own floor, else ask the policy for a target
///   ③ board from the queue matching the direction of travel, up to capacity
///   ④ doors used in ① or ③ → door dwell; otherwise advance one floor
/// ```
///
/// Boarding/alighting and movement never happen in the same tick.
fn step_car<P: IdlePolicy, O: DispatchObserver>(
    car:       &mut Car,
    queues:    &mut WaitingQueues,
    policy:    &P,
    top_floor: Floor,
    now:       Tick,
    observer:  &mut O,
) {
    if car.take_door_dwell() {
        car.advance();
        log::trace!("{now}: car {} doors closed, now at floor {}", car.id(), car.current_floor());
        return;
    }

    // ── ① Arrivals ────────────────────────────────────────────────────────
    let floor   = car.current_floor();
    let arrived = car.has_arrivals();
    if arrived {
        let leaving = car.disembark_arrivals();
        log::debug!("{now}: car {} let {} off at floor {floor}", car.id(), leaving.len());
        observer.on_disembarked(now, car.id(), floor, &leaving);
    }

    // ── ② Idle routing ────────────────────────────────────────────────────
    let serving = match car.status().direction() {
        Some(direction) => Some(direction),
        None => route_idle(car, queues, policy, top_floor, now, observer),
    };

    // ── ③ Boarding ────────────────────────────────────────────────────────
    let entered = match serving {
        Some(direction) => board_waiting(car, queues, direction, now, observer),
        None => false,
    };

    // ── ④ Doors or movement ───────────────────────────────────────────────
    if entered || arrived {
        car.open_doors();
    } else {
        car.advance();
    }
}

/// Decide which queue an idle car serves this tick, re-targeting it through
/// the policy when nobody waits at its own floor.
///
/// Returns `None` if the car stays idle.
fn route_idle<P: IdlePolicy, O: DispatchObserver>(
    car:       &mut Car,
    queues:    &WaitingQueues,
    policy:    &P,
    top_floor: Floor,
    now:       Tick,
    observer:  &mut O,
) -> Option<Direction> {
    if queues.is_empty() && car.is_empty() {
        return None;
    }

    // Someone is waiting right here: board them and let the first boarder
    // set the target.
    if let Some(direction) = queues.direction_waiting_at(car.current_floor()) {
        return Some(direction);
    }

    let snapshot = car.snapshot();
    let ctx = PolicyContext::new(now, top_floor, queues.waiting_up(), queues.waiting_down());
    let wanted = policy.idle_target(&snapshot, &ctx);
    let target = wanted.clamp(GROUND_FLOOR, top_floor);
    if target != wanted {
        log::warn!(
            "{now}: policy {} sent car {} to floor {wanted}; clamped to {target}",
            policy.name(),
            car.id(),
        );
    }

    car.set_target_floor(target);
    if target != snapshot.current_floor {
        log::debug!(
            "{now}: idle car {} at floor {} heading for floor {target}",
            car.id(),
            snapshot.current_floor,
        );
        observer.on_idle_retarget(now, car.id(), target);
    }
    car.status().direction()
}

/// Board as many passengers as fit from the `direction` queue at the car's
/// floor, front first.  Returns `true` if anyone boarded.
fn board_waiting<O: DispatchObserver>(
    car:       &mut Car,
    queues:    &mut WaitingQueues,
    direction: Direction,
    now:       Tick,
    observer:  &mut O,
) -> bool {
    let floor   = car.current_floor();
    let waiting = queues.len_at(direction, floor);
    if waiting == 0 {
        return false;
    }

    let admission = Admission::plan(car.available(), waiting);
    if let Admission::Rejected { left_waiting } = admission {
        log::debug!("{now}: car {} full at floor {floor}, {left_waiting} left waiting", car.id());
        return false;
    }

    let admitted = admission.admitted();
    let batch = queues.peek_front(direction, floor, admitted);
    match car.board_batch(&batch) {
        Ok(boarded) => {
            queues.remove_front(direction, floor, boarded);
            log::debug!(
                "{now}: car {} boarded {boarded} at floor {floor} going {direction} ({} left waiting)",
                car.id(),
                admission.left_waiting(),
            );
            observer.on_boarded(now, car.id(), floor, &batch);
            boarded > 0
        }
        Err(e) => {
            // Admission is capped to free places, so this is an engine bug.
            // The tick carries on and the passengers stay queued.
            log::error!("{now}: boarding fault at floor {floor}: {e}");
            false
        }
    }
}
