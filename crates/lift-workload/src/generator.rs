//! Seeded random workload.

use lift_core::{Floor, GROUND_FLOOR, PassengerRequest};

use crate::{WorkloadError, WorkloadResult, WorkloadRng};

/// Endless stream of request batches, one batch per tick.
///
/// Each tick a batch arrives with probability `arrival_probability`; a batch
/// holds between 1 and `max_per_tick` requests.  Start and end floors are
/// uniform over the building and never equal, so every generated request is
/// valid for a building with the same top floor.
///
/// ```rust
/// use lift_workload::RandomWorkload;
///
/// let mut workload = RandomWorkload::new(7, 11).unwrap().max_per_tick(4);
/// let batch = workload.next_batch();
/// assert!(batch.len() <= 4);
/// ```
pub struct RandomWorkload {
    top_floor:           Floor,
    arrival_probability: f64,
    max_per_tick:        usize,
    rng:                 WorkloadRng,
}

impl RandomWorkload {
    /// Generator for floors `1..=top_floor`, arrival probability 0.5 and at
    /// most 3 requests per tick.
    ///
    /// # Errors
    ///
    /// [`WorkloadError::Config`] if the building has fewer than two floors.
    pub fn new(seed: u64, top_floor: Floor) -> WorkloadResult<Self> {
        if top_floor <= GROUND_FLOOR {
            return Err(WorkloadError::Config(format!(
                "need at least two floors to generate requests, top floor is {top_floor}"
            )));
        }
        Ok(Self {
            top_floor,
            arrival_probability: 0.5,
            max_per_tick:        3,
            rng:                 WorkloadRng::new(seed),
        })
    }

    /// Probability (clamped to [0, 1]) that a tick brings any requests.
    pub fn arrival_probability(mut self, p: f64) -> Self {
        self.arrival_probability = p;
        self
    }

    /// Largest batch size.  Zero disables generation.
    pub fn max_per_tick(mut self, n: usize) -> Self {
        self.max_per_tick = n;
        self
    }

    /// The batch for the next tick.
    pub fn next_batch(&mut self) -> Vec<PassengerRequest> {
        if self.max_per_tick == 0 || !self.rng.gen_bool(self.arrival_probability) {
            return vec![];
        }
        let count = self.rng.gen_range(1..=self.max_per_tick);
        (0..count).map(|_| self.next_request()).collect()
    }

    fn next_request(&mut self) -> PassengerRequest {
        let start = self.rng.gen_range(GROUND_FLOOR..=self.top_floor);
        // Draw from one floor fewer and skip over `start`.
        let mut end = self.rng.gen_range(GROUND_FLOOR..self.top_floor);
        if end >= start {
            end += 1;
        }
        PassengerRequest::new(start, end)
    }
}

impl Iterator for RandomWorkload {
    type Item = Vec<PassengerRequest>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_batch())
    }
}
