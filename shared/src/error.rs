use thiserror::Error;

pub type Result<T> = std::result::Result<T, RouletteError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouletteError {
    /// The `data` token could not be decoded into an option list.
    #[error("malformed roulette state: {0}")]
    MalformedState(String),

    #[error("encoded state is {length} characters, limit is {max}")]
    OversizeEncoding { length: usize, max: usize },

    #[error("share delivery failed: {0}")]
    ShareDelivery(String),

    #[error("history update failed: {0}")]
    History(String),
}

impl RouletteError {
    pub fn malformed(reason: impl std::fmt::Display) -> Self {
        Self::MalformedState(reason.to_string())
    }

    /// Whether the user should be told about this error. Broken links degrade silently.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, Self::MalformedState(_))
    }
}
