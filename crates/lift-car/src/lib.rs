//! `lift-car`: the per-elevator entity.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`car`]       | `Car`: floors, onboard passengers, door dwell, boarding      |
//! | [`snapshot`]  | `CarSnapshot`: immutable value view of a `Car`               |
//! | [`admission`] | `Admission`: how many queued passengers fit this tick        |
//! | [`error`]     | `CarError`, `CarResult<T>`                                   |
//!
//! # Movement model
//!
//! A car holds a current and a target floor.  Its status (`Up`, `Down`,
//! `Idle`) is derived from those two on every read.  [`Car::advance`] moves
//! one floor towards the target per call; boarding only ever *extends* the
//! target in the direction of travel, so a moving car never turns around
//! mid-trip.

pub mod admission;
pub mod car;
pub mod error;
pub mod snapshot;


pub use admission::Admission;
pub use car::Car;
pub use error::{CarError, CarResult};
pub use snapshot::CarSnapshot;
