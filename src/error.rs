use thiserror::Error;

pub type Result<T> = std::result::Result<T, PolicyError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolicyError {
    /// A constructor argument is outside its valid range.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A row of action values does not match the number of actions.
    #[error("dimension mismatch: expected {expected} action values, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}
