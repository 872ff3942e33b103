//! Happ deep-link generation.
//!
//! This crate produces `happ://` deep links for the Happ client by
//! RSA-encrypting a short text payload (typically a subscription URL) under a
//! versioned, embedded public key and base64-encoding the ciphertext behind a
//! version-specific URI prefix.
//!
//! # Quick Start
//!
//! ```rust
//! use happlink::{encrypt_to_link, encrypt_to_parts, Latest};
//!
//! // Composed string: prefix + base64 ciphertext
//! let link = encrypt_to_link::<Latest>("https://sub.example.com/abc")?;
//! assert!(link.starts_with("happ://crypt4/"));
//!
//! // Pair shape: same information, split
//! let parts = encrypt_to_parts::<Latest>("https://sub.example.com/abc")?;
//! assert_eq!(parts.deep_link, "happ://crypt4/");
//! # Ok::<(), happlink::LinkError>(())
//! ```
//!
//! # Versions
//!
//! Three crypto versions are shipped; all use RSA with PKCS#1 v1.5 padding
//! and differ only in key material and URI prefix:
//!
//! | Version | Prefix | Key size |
//! |---------|--------|----------|
//! | [`V2`] | `happ://crypt2/` | 2048-bit |
//! | [`V3`] | `happ://crypt3/` | 2048-bit |
//! | [`V4`] | `happ://crypt4/` | 4096-bit |
//!
//! The version is a type parameter, so an unsupported version is a compile
//! error. [`Latest`] always names the newest shipped version.
//!
//! # Failure contract
//!
//! Every encryption-side fault — content over the padding capacity
//! (`key_bits/8 - 11` bytes), bad key material, or a primitive failure —
//! collapses to the single [`LinkError::EncryptionFailed`] variant. Callers
//! treat the absence of a result as "encryption failed" with no further
//! diagnostic detail.
//!
//! # Determinism
//!
//! The prefix is a pure function of the version. The ciphertext is not:
//! PKCS#1 v1.5 padding is randomized, so encrypting the same content twice
//! yields two different links, each of which decrypts to the original
//! content on the client.
//!
//! # Modules
//!
//! - [`core`](crate::core) - Core types and operations
//! - [`prelude`] - Ergonomic imports

pub mod core;
pub mod prelude;

// Re-export commonly used items at crate root
pub use crate::core::config::CryptoConfig;
pub use crate::core::error::{LinkError, LinkResult};
pub use crate::core::operations::pke::{RsaEncryptor, RsaPublicEncryptor};
pub use crate::core::types::{encrypt_to_link, encrypt_to_parts, HappLink, LinkParts};
pub use crate::core::version::{CryptoVersion, Latest, V2, V3, V4};
