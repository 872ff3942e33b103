//! Ergonomic imports for deep-link generation.
//!
//! # Usage
//!
//! ```rust
//! use happlink::prelude::*;
//!
//! let link = encrypt_to_link::<Latest>("https://sub.example.com/abc")?;
//! assert!(link.starts_with("happ://crypt4/"));
//! # Ok::<(), LinkError>(())
//! ```

pub use crate::core::config::CryptoConfig;
pub use crate::core::error::{LinkError, LinkResult};
pub use crate::core::operations::pke::{RsaEncryptor, RsaPublicEncryptor};
pub use crate::core::types::{encrypt_to_link, encrypt_to_parts, HappLink, LinkParts};
pub use crate::core::version::{CryptoVersion, Latest, V2, V3, V4};
