//! Dispatcher observer trait for logging, metrics, and tests.

use lift_car::CarSnapshot;
use lift_core::{CarId, Floor, Passenger, PassengerRequest, RequestError, Tick};

/// Callbacks invoked by [`Dispatcher::apply_workload_observed`] at key
/// points of a tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: delivery counter
///
/// ```rust,ignore
/// struct Delivered(usize);
///
/// impl DispatchObserver for Delivered {
///     fn on_disembarked(&mut self, _t: Tick, _car: CarId, _f: Floor, left: &[Passenger]) {
///         self.0 += left.len();
///     }
/// }
/// ```
///
/// [`Dispatcher::apply_workload_observed`]: crate::Dispatcher::apply_workload_observed
pub trait DispatchObserver {
    /// Called at the very start of each tick, before requests are ingested.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A request was accepted and queued as `passenger`.
    fn on_request_queued(&mut self, _tick: Tick, _passenger: &Passenger) {}

    /// A request was dropped at ingestion.
    fn on_request_rejected(
        &mut self,
        _tick:    Tick,
        _request: &PassengerRequest,
        _reason:  &RequestError,
    ) {}

    /// An idle car was given a new target by the idle-routing policy.
    fn on_idle_retarget(&mut self, _tick: Tick, _car: CarId, _target: Floor) {}

    /// `passengers` boarded `car` at `floor`, in boarding order.
    fn on_boarded(
        &mut self,
        _tick:       Tick,
        _car:        CarId,
        _floor:      Floor,
        _passengers: &[Passenger],
    ) {}

    /// `passengers` left `car` at `floor`.
    fn on_disembarked(
        &mut self,
        _tick:       Tick,
        _car:        CarId,
        _floor:      Floor,
        _passengers: &[Passenger],
    ) {}

    /// Called once every car has been stepped, with the post-tick snapshots.
    fn on_tick_end(&mut self, _tick: Tick, _cars: &[CarSnapshot]) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
