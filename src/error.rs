/// Every way a die, trial, or analysis can refuse a request.
///
/// Errors are raised at the point of violation and leave the
/// receiver untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown face: {0}")]
    UnknownFace(String),

    #[error("invalid weight: {0}")]
    InvalidWeight(String),

    #[error("degenerate distribution: {0}")]
    DegenerateDistribution(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
