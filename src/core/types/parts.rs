//! `LinkParts` - the two-field output shape.
//!
//! Some callers assemble the final URI themselves (or ship prefix and
//! payload through separate channels), so the pair form exposes the same
//! information as the composed string without the concatenation.

use core::fmt::{self, Display};

/// A deep link split into its prefix and encrypted payload.
///
/// Carries the same information as the composed string; only the packaging
/// differs. `Display` renders the composed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkParts {
    /// Deep-link URI prefix (e.g. `happ://crypt4/`).
    pub deep_link: &'static str,
    /// Base64-encoded ciphertext (standard alphabet, padded).
    pub encrypted_content: String,
}

impl LinkParts {
    /// Composes the full deep-link string: prefix directly followed by the
    /// base64 payload, no separator beyond what the prefix already contains.
    #[must_use]
    pub fn compose(&self) -> String {
        format!("{}{}", self.deep_link, self.encrypted_content)
    }
}

impl Display for LinkParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.deep_link, self.encrypted_content)
    }
}
