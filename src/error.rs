//! Error types for universe generation

use std::fmt;

/// Errors that can occur at the generation boundary
///
/// The generation core itself is total: once a configuration has been
/// validated, every generator call succeeds. All failure modes live at the
/// boundary (parsing seeds, validating counts, resolving child indices).
#[derive(Debug, Clone)]
pub enum UniverseError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// A seed value could not be parsed into a 64-bit unsigned integer
    InvalidSeed(String),
    /// Requested child entity does not exist for its parent
    EntityNotFound(String),
}

impl fmt::Display for UniverseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniverseError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            UniverseError::InvalidSeed(msg) => write!(f, "invalid seed: {}", msg),
            UniverseError::EntityNotFound(msg) => write!(f, "entity not found: {}", msg),
        }
    }
}

impl std::error::Error for UniverseError {}

/// Result type alias for universe operations
pub type Result<T> = std::result::Result<T, UniverseError>;
