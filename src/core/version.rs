//! Crypto version markers and the trait that ties them to their
//! embedded configuration.
//!
//! Each supported version (V2, V3, V4) is a zero-sized marker type. The
//! version is selected with a type parameter, so an unsupported version is a
//! compile error rather than a runtime failure. All versions use the same
//! RSA/PKCS#1 v1.5 scheme and differ only in key material and prefix.

use core::fmt::{self, Display};

use crate::core::config::{CryptoConfig, V2_CONFIG, V3_CONFIG, V4_CONFIG};

mod private {
    pub trait Sealed {}
}

/// Trait for crypto version markers.
///
/// This trait is sealed and cannot be implemented outside of this crate.
/// Each marker (V2, V3, V4) carries its numeric version and a reference to
/// the embedded [`CryptoConfig`] record.
pub trait CryptoVersion: private::Sealed + Default + Clone + Copy + Send + Sync + 'static {
    /// The numeric version (2, 3, or 4).
    const VERSION: u8;

    /// The embedded configuration record for this version.
    const CONFIG: &'static CryptoConfig;
}

/// Crypto version 2 marker (`happ://crypt2/`, 2048-bit key).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct V2;

impl private::Sealed for V2 {}

impl CryptoVersion for V2 {
    const VERSION: u8 = 2;
    const CONFIG: &'static CryptoConfig = &V2_CONFIG;
}

impl Display for V2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", Self::VERSION)
    }
}

/// Crypto version 3 marker (`happ://crypt3/`, 2048-bit key).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct V3;

impl private::Sealed for V3 {}

impl CryptoVersion for V3 {
    const VERSION: u8 = 3;
    const CONFIG: &'static CryptoConfig = &V3_CONFIG;
}

impl Display for V3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", Self::VERSION)
    }
}

/// Crypto version 4 marker (`happ://crypt4/`, 4096-bit key).
///
/// This is the newest shipped version.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct V4;

impl private::Sealed for V4 {}

impl CryptoVersion for V4 {
    const VERSION: u8 = 4;
    const CONFIG: &'static CryptoConfig = &V4_CONFIG;
}

impl Display for V4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", Self::VERSION)
    }
}

/// Alias for the newest shipped crypto version.
///
/// The generic API always takes an explicit version type parameter; callers
/// who want "whatever is newest" write `Latest` and pick up new versions on
/// upgrade.
pub type Latest = V4;
