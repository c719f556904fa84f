//! Error types for key derivation and the toy cipher.

use num_bigint::ParseBigIntError;
use thiserror::Error;

use super::bigint::RsaBigInt;

/// Key derivation error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// A prime factor below 2 leaves phi at zero.
    #[error("prime factor {0} is below 2")]
    DegeneratePrime(u64),

    /// Public exponent of zero.
    #[error("public exponent must be positive")]
    ZeroExponent,
}

/// Cipher error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A ciphertext token is not a decimal integer.
    #[error("malformed ciphertext token {token:?}: {source}")]
    MalformedToken {
        /// The offending token.
        token: String,
        /// Parser error.
        #[source]
        source: ParseBigIntError,
    },

    /// Key material has no private exponent (e has no inverse mod phi).
    #[error("private exponent is absent: public exponent has no inverse modulo phi")]
    MissingPrivateExponent,

    /// Decrypted value does not map back to a character.
    #[error("decrypted value {0} does not map to a character")]
    UnmappableCode(RsaBigInt),
}
