use crate::config::ConfigError;
use crate::domains::ParseError;
use crate::search::{SearchError, ValidationError};
use thiserror::Error;

/// Everything that can go wrong between reading a problem and writing its
/// plan.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("search returned an invalid plan")]
    InvalidPlan(#[from] ValidationError),
    #[error("failed to write plan")]
    Io(#[from] std::io::Error),
}
