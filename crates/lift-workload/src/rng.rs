//! Deterministic RNG for workload generation.
//!
//! The same seed always yields the same request stream, so a run can be
//! replayed exactly by recording only its seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded `SmallRng` wrapper.
///
/// Used only from the thread driving the workload.  Give each extra stream
/// its own child via [`child`](Self::child).
pub struct WorkloadRng(SmallRng);

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

impl WorkloadRng {
    pub fn new(seed: u64) -> Self {
        WorkloadRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent stream, e.g. one per simulated lobby.
    pub fn child(&mut self, offset: u64) -> WorkloadRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        WorkloadRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
