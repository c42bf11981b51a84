//! `WorkloadScript`: a recorded workload, replayable tick by tick.

use std::collections::BTreeMap;

use lift_core::{PassengerRequest, Tick};

/// Requests keyed by the tick at which they are submitted.
///
/// Within a tick, requests keep the order they were added in, which is the
/// order the dispatcher will queue them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkloadScript {
    by_tick: BTreeMap<Tick, Vec<PassengerRequest>>,
    /// Cached request count for O(1) `len()`.
    total: usize,
}

impl WorkloadScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `request` to the batch submitted at `tick`.
    pub fn push(&mut self, tick: Tick, request: PassengerRequest) {
        self.by_tick.entry(tick).or_default().push(request);
        self.total += 1;
    }

    /// The batch for `tick`; empty if nothing is scripted then.
    pub fn requests_at(&self, tick: Tick) -> &[PassengerRequest] {
        self.by_tick.get(&tick).map(Vec::as_slice).unwrap_or_default()
    }

    /// The last tick with at least one request.
    pub fn last_tick(&self) -> Option<Tick> {
        self.by_tick.keys().next_back().copied()
    }

    /// `(tick, batch)` pairs in tick order.
    pub fn batches(&self) -> impl Iterator<Item = (Tick, &[PassengerRequest])> + '_ {
        self.by_tick.iter().map(|(&tick, batch)| (tick, batch.as_slice()))
    }

    /// Total number of requests across all ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
