//! `SharedDispatcher`: one writer at a time.
//!
//! Adapters may receive concurrent calls.  `reset` and `apply_workload`
//! each run as one critical section over the whole ingest-and-step sequence,
//! so a reset can never land in the middle of a tick.  Reads go through the
//! same lock and therefore always see a completed tick.

use std::sync::{Mutex, MutexGuard, PoisonError};

use lift_car::CarSnapshot;
use lift_core::{PassengerRequest, Tick};
use lift_policy::IdlePolicy;

use crate::{DispatchObserver, Dispatcher};

pub struct SharedDispatcher<P: IdlePolicy> {
    inner: Mutex<Dispatcher<P>>,
}

impl<P: IdlePolicy> SharedDispatcher<P> {
    pub fn new(dispatcher: Dispatcher<P>) -> Self {
        Self { inner: Mutex::new(dispatcher) }
    }

    /// See [`Dispatcher::reset`].
    pub fn reset(&self) -> Vec<CarSnapshot> {
        self.lock().reset()
    }

    /// See [`Dispatcher::apply_workload`].
    pub fn apply_workload(&self, requests: &[PassengerRequest]) -> Vec<CarSnapshot> {
        self.lock().apply_workload(requests)
    }

    /// See [`Dispatcher::apply_workload_observed`].
    pub fn apply_workload_observed<O: DispatchObserver>(
        &self,
        requests: &[PassengerRequest],
        observer: &mut O,
    ) -> Vec<CarSnapshot> {
        self.lock().apply_workload_observed(requests, observer)
    }

    /// Snapshots after the most recent completed tick.
    pub fn snapshots(&self) -> Vec<CarSnapshot> {
        self.lock().snapshots()
    }

    pub fn tick(&self) -> Tick {
        self.lock().tick()
    }

    /// Run `f` with exclusive access to the dispatcher.
    pub fn with<R>(&self, f: impl FnOnce(&mut Dispatcher<P>) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn into_inner(self) -> Dispatcher<P> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// A panic inside a policy poisons the lock; the dispatcher is still
    /// usable, and `reset` restores a clean state.
    fn lock(&self) -> MutexGuard<'_, Dispatcher<P>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            log::error!("dispatcher lock poisoned by a panicking caller; continuing");
            poisoned.into_inner()
        })
    }
}

impl<P: IdlePolicy> From<Dispatcher<P>> for SharedDispatcher<P> {
    fn from(dispatcher: Dispatcher<P>) -> Self {
        Self::new(dispatcher)
    }
}
