//! Deep-link type implementations.
//!
//! This module provides the first-class output types:
//!
//! - [`HappLink`] - Encrypted deep link (`{prefix}{base64(ciphertext)}`)
//! - [`LinkParts`] - The same link split into prefix and payload

mod link;
mod parts;

pub use link::{encrypt_to_link, encrypt_to_parts, HappLink};
pub use parts::LinkParts;
