use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkloadError {
    #[error("workload parse error: {0}")]
    Parse(String),

    #[error("workload configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorkloadResult<T> = Result<T, WorkloadError>;
