//! Error types for deep-link operations.
//!
//! Encryption deliberately collapses every failure cause (oversize content,
//! malformed key material, primitive failure) into the single
//! [`LinkError::EncryptionFailed`] variant. Callers depend on exactly this
//! one-signal contract; the remaining variants are produced only when parsing
//! a composed link string back into its components.

use thiserror::Error;

/// Errors that can occur when building or parsing Happ deep links.
#[derive(Debug, Error)]
pub enum LinkError {
    /// Encryption did not produce a result.
    /// Intentionally vague: oversize content, bad key material, and primitive
    /// failures all surface as this one variant.
    #[error("Encryption failed")]
    EncryptionFailed,

    /// The deep-link string does not have the expected structure.
    #[error("Invalid deep link format")]
    InvalidFormat,

    /// The deep-link prefix belongs to a different crypto version.
    #[error("Invalid or unsupported crypto version")]
    InvalidVersion,

    /// Base64 decoding error in the encrypted payload.
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),
}

/// Result type alias for deep-link operations.
pub type LinkResult<T> = Result<T, LinkError>;
