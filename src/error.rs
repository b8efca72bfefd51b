//! Error types for ElGamal operations.

use thiserror::Error;

/// Result type for ElGamal operations.
pub type Result<T> = std::result::Result<T, ElGamalError>;

/// Errors reported by parameter resolution, key generation, encryption,
/// and decryption.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElGamalError {
    #[error("invalid modulus: {0}")]
    InvalidModulus(String),

    #[error("no primitive root found modulo {0}")]
    GeneratorNotFound(String),

    #[error("invalid ciphertext: {0}")]
    InvalidCiphertext(String),

    #[error("value out of range: {0}")]
    RangeViolation(String),
}

impl ElGamalError {
    /// Creates an `InvalidModulus` error from any string-like message.
    pub fn invalid_modulus(msg: impl Into<String>) -> Self {
        ElGamalError::InvalidModulus(msg.into())
    }

    /// Creates an `InvalidCiphertext` error from any string-like message.
    pub fn invalid_ciphertext(msg: impl Into<String>) -> Self {
        ElGamalError::InvalidCiphertext(msg.into())
    }

    /// Creates a `RangeViolation` error from any string-like message.
    pub fn range_violation(msg: impl Into<String>) -> Self {
        ElGamalError::RangeViolation(msg.into())
    }
}
