use lift_core::CarId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarError {
    #[error("car {car}: cannot board {requested} passenger(s), only {available} place(s) left")]
    CapacityExceeded {
        car:       CarId,
        requested: usize,
        available: usize,
    },
}

pub type CarResult<T> = Result<T, CarError>;
