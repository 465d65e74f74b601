//! Error types for banner loading and carousel control

use thiserror::Error;

/// Errors raised by the banner board and its collaborators
#[derive(Error, Debug)]
pub enum BoardError {
    /// Transport or decode failure talking to the banner API
    #[error("Banner API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The banner API answered with `success: false`
    #[error("Banner API reported failure: {message}")]
    ApiFailure { message: String },

    /// No carousel or rendered view exists for this container
    #[error("Unknown container: {0}")]
    UnknownContainer(String),

    /// The container is rendered but does not rotate
    #[error("Container {0} is not a rolling banner")]
    NotRolling(String),

    #[error("Slide index {index} out of range for {total} slides")]
    InvalidSlide { index: usize, total: usize },

    /// A carousel needs at least one banner
    #[error("Carousel requires at least one eligible banner")]
    NoEligibleBanners,

    #[error("Failed to lock {0}")]
    LockPoisoned(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
