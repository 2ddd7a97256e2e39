use thiserror::Error;

/// Errors raised by the city store and the tour strategies
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CityError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: &'static str },

    #[error("need at least two cities, have {count}")]
    InsufficientCities { count: usize },

    #[error("no city named '{0}'")]
    UnknownCity(String),

    #[error("start index {index} is out of range for {len} cities")]
    StartOutOfRange { index: usize, len: usize },
}
