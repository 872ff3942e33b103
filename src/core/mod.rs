//! Core deep-link types and operations.
//!
//! This module provides the fundamental building blocks:
//!
//! - [`version`] - Version markers (V2, V3, V4) and the [`version::CryptoVersion`] trait
//! - [`config`] - Embedded static configuration (public keys + prefixes)
//! - [`error`] - Error types for deep-link operations
//! - [`types`] - First-class types ([`types::HappLink`], [`types::LinkParts`])
//! - [`operations`] - Cryptographic operations (RSA public-key encryption)

pub mod config;
pub mod error;
pub mod operations;
pub mod types;
pub mod version;

// Re-export commonly used items
pub use error::{LinkError, LinkResult};
pub use version::{CryptoVersion, Latest, V2, V3, V4};
