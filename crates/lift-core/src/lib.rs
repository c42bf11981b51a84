//! `lift-core`: foundational types for the lift dispatch simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and only `thiserror` (plus optional `serde`) from
//! outside.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `CarId`, `PassengerId`                                  |
//! | [`floor`]     | `Floor`, `Direction`, `CarStatus`, `GROUND_FLOOR`       |
//! | [`time`]      | `Tick`                                                  |
//! | [`request`]   | `PassengerRequest`, `Passenger`, `RequestError`         |
//! | [`config`]    | `BuildingConfig`, `CarSeed`                             |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod request;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BuildingConfig, CarSeed, DEFAULT_CAPACITY, DEFAULT_TOP_FLOOR};
pub use error::{CoreError, CoreResult};
pub use floor::{CarStatus, Direction, Floor, GROUND_FLOOR};
pub use ids::{CarId, PassengerId};
pub use request::{Passenger, PassengerRequest, RequestError};
pub use time::Tick;
