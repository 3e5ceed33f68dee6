use thiserror::Error;

/// Result type for descriptor construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors raised while building a [`ScalarType`](crate::ScalarType).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The descriptor was built without a usable primary type name.
    #[error("scalar type requires a non-empty primary type")]
    MissingPrimaryType,
}
