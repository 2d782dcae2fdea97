use thiserror::Error;

/// Unified error type for the ntvalue library.
#[derive(Error, Debug)]
pub enum Error {
    /// Error related to an invalid type code operation.
    #[error("Type Error: {0}")]
    TypeError(String),

    /// Error related to builder configuration (bad value kind, bad column type).
    #[error("Config Error: {0}")]
    ConfigError(String),

    /// Error related to value graph field access.
    #[error("Value Error: {0}")]
    ValueError(String),
}

/// A specialized `Result` type for ntvalue operations.
pub type Result<T> = std::result::Result<T, Error>;
