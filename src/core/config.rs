//! Embedded static configuration for each supported crypto version.
//!
//! Each record pairs a PEM-encoded RSA public key with the deep-link URI
//! prefix the Happ client registers for that version. The table is built at
//! compile time and never mutated, so concurrent callers share it without
//! coordination. Only the public halves are shipped; the matching private
//! keys live on the client side.

/// Static configuration for one crypto version.
///
/// All fields are `'static`: the three shipped records are embedded in the
/// binary and live for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptoConfig {
    /// Numeric version (2, 3, or 4).
    pub version: u8,
    /// PEM-encoded RSA public key used to encrypt link content.
    pub public_key_pem: &'static str,
    /// RSA modulus size in bits.
    pub key_bits: usize,
    /// Deep-link URI prefix (e.g. `happ://crypt4/`).
    pub deep_link: &'static str,
}

impl CryptoConfig {
    /// The complete read-only configuration table, newest version last.
    #[must_use]
    pub const fn all() -> [&'static CryptoConfig; 3] {
        [&V2_CONFIG, &V3_CONFIG, &V4_CONFIG]
    }
}

/// Configuration for crypto version 2 (2048-bit key).
pub const V2_CONFIG: CryptoConfig = CryptoConfig {
    version: 2,
    public_key_pem: V2_PUBLIC_KEY_PEM,
    key_bits: 2048,
    deep_link: "happ://crypt2/",
};

/// Configuration for crypto version 3 (2048-bit key).
pub const V3_CONFIG: CryptoConfig = CryptoConfig {
    version: 3,
    public_key_pem: V3_PUBLIC_KEY_PEM,
    key_bits: 2048,
    deep_link: "happ://crypt3/",
};

/// Configuration for crypto version 4 (4096-bit key).
pub const V4_CONFIG: CryptoConfig = CryptoConfig {
    version: 4,
    public_key_pem: V4_PUBLIC_KEY_PEM,
    key_bits: 4096,
    deep_link: "happ://crypt4/",
};

const V2_PUBLIC_KEY_PEM: &str = r"-----BEGIN PUBLIC KEY-----
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAwbbPXZrl8A2HXaHEDGQ+
AQG7dWuLMRF8QiCetdyAFMFxYT9ITjG8C8GNUURZElKjXptx+p0uBFfqdK+1sKM8
m+NI/xWx9Qap+LMY3tNEvAHafr6s8Jyy4N1vAeC4ZcU8+fVRk0fRLGCqpYiIC2Tt
RBXnfLbNy/KW9YWrzTc4hXJBVIpsTIZ13QrDQYYKU/m00+9wiKyd5bCVJUc0cjqC
0DZyH/gkDOhzTdTLw1UzDRgeeSH4+HOp6AZCQpAz4J0RNJves+eA9vRYYBE9A73z
NBbO1SHCKoTfesIYGExvktC+oDjyFfL+6jstco4Jx/ZlrMYgmgk49ZJ3FUuuuLOK
fQIDAQAB
-----END PUBLIC KEY-----
";

const V3_PUBLIC_KEY_PEM: &str = r"-----BEGIN PUBLIC KEY-----
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAuG1K8R2RPi4qDY4imTlW
3oPeT8XEKOXjA7+rrTQw/FFnkfulBU3B0V62zXr31LNE3uvvwhkLBlpfkI0dUgli
hoaqytc+cs2i5uwuidakTZxXCqu7yvwLeBEWOEvROzGNPfiG7EgmRsAHh/g0hzxm
XzM15ltnNyVHrWYWcwVAd0vqgXfTXc3P5CJpSurXQSWaZE+CfqpO2oyeaGFqDyEM
MANmY3DZh+F1d7kidAb5FGx0S4yD26IWgcOpTWuZd8utiHIrHxygQrTYmR1Kbfk3
SyDH8Rgfl98RObBzfvKW8xdhfQ4bFG8EoSVZNCfRJUQg5uNwabdSXLN5bleNokdm
xwIDAQAB
-----END PUBLIC KEY-----
";

const V4_PUBLIC_KEY_PEM: &str = r"-----BEGIN PUBLIC KEY-----
MIICIjANBgkqhkiG9w0BAQEFAAOCAg8AMIICCgKCAgEAh78iLvbL2VfmZO5jcMfA
mwNNJtUqXxXuFA3ZwPoXXlXzfy56H+yy4XvEq5UdjPg1RzGVCE1Y5aQXJXtiiZ0L
x+azjU5OpJf5r2RqBMG+Ta0Gz+JvUFcX9JiLoy2V1jNSplB10pDYLsJygi4vbpyM
ptGn+jXMhtoo6b22mp8oOludqzpzJ8Z5/C5bfHDBZqwwGlK1/0br6+rqU4eyuvND
AeyXtZbjCfnLM0yv3qUNfNtY0blStINtCTua+b3onuSBlkSFHE3bRiEMZrCjGu1b
xa7zTxGiGKpejyfmlHxFw+McEqGHN0Icrqc9sDVO0pEn/vJs8FbGNzX0qzKlLUeS
ugLF4oPMMx8qFl1KYZMBoFbsGWfROdz5egfkNWfM3p+TSTiSDzwmhQUD9S0Ws26g
q5glvKVM1cxd+YZALMcHDdk5gwEXSe2nJCIgbSz8asVjW1wZAXet3FbdhDgiRhCs
FFNedi9vTh13nAkU/uVx9woyLdbw9Bnjy8j/EyNFycu1VF3JDDEVgiMLqmIM38MU
N5vEqYzH8hwhmfCTuuixcglApzNOxwAPlriF9SE66VQdNMgfRFp+3yGM9dFlF7C0
gdqd1ieru0XR4wN9KrjxzU3Hho0rpnFaiHUjVnByvjep7nF2wZwWYQHFDBn6jQis
g+djpEe8Teap5756cTC7Gy8CAwEAAQ==
-----END PUBLIC KEY-----
";
