//! Cryptographic operations for deep-link generation.
//!
//! - [`pke`] - RSA public-key encryption of link content

pub mod pke;
