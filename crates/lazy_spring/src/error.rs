//! Spring error types

use thiserror::Error;

/// Errors raised by string-keyed spring access
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpringError {
    /// The name does not refer to a member usable by the requested operation
    #[error("`{0}` is not a valid member of Spring")]
    InvalidMember(String),
}

/// Result type for spring operations
pub type Result<T> = std::result::Result<T, SpringError>;
