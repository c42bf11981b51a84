//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::{CarId, Floor};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("building has no cars")]
    NoCars,

    #[error("car {0} is configured more than once")]
    DuplicateCar(CarId),

    #[error("car {car} seeded at floor {floor}, outside 1..={top_floor}")]
    SeedOutOfRange {
        car:       CarId,
        floor:     Floor,
        top_floor: Floor,
    },
}

/// Shorthand result type for `lift-core`.
pub type CoreResult<T> = Result<T, CoreError>;
