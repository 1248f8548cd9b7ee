use thiserror::Error;

pub type NavigationResult<T> = Result<T, NavigationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("navigation update failed: {0}")]
    UpdateFailed(String),

    #[error("update binding #{index} outlived its chart")]
    ContextReleased { index: usize },

    #[error("invalid navigation options: {0}")]
    InvalidOptions(String),
}
