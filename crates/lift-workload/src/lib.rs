//! `lift-workload`: where passenger requests come from.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`script`]    | `WorkloadScript`: requests grouped by tick                 |
//! | [`loader`]    | `load_script_csv`, `load_script_reader`                    |
//! | [`generator`] | `RandomWorkload`: seeded, endless stream of batches        |
//! | [`rng`]       | `WorkloadRng`: deterministic `SmallRng` wrapper            |
//! | [`error`]     | `WorkloadError`, `WorkloadResult<T>`                       |
//!
//! Neither source validates floors against a building; the dispatcher does
//! that at ingestion and drops what does not fit.

pub mod error;
pub mod generator;
pub mod loader;
pub mod rng;
pub mod script;

#[cfg(test)]
mod tests;

pub use error::{WorkloadError, WorkloadResult};
pub use generator::RandomWorkload;
pub use loader::{load_script_csv, load_script_reader};
pub use rng::WorkloadRng;
pub use script::WorkloadScript;
