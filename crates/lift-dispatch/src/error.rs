use lift_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("invalid building configuration: {0}")]
    Building(#[from] CoreError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
