// RSA Errors
// Every failure a core operation can report

use crate::rsa::bigint::RsaBigInt;

/// Errors produced by key derivation and the block codec.
///
/// All of them are local to a single call; the caller can retry with
/// corrected inputs.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RsaError {
    #[error("Invalid number: {input:?}")]
    Parse { input: String },

    #[error("Factors must be greater than 1, got {value}")]
    InvalidFactor { value: RsaBigInt },

    #[error("No inverse exists: gcd(e={e}, phi={phi}) != 1")]
    NoInverse { e: RsaBigInt, phi: RsaBigInt },

    #[error("No public exponent 1 < e < {phi} is coprime with phi")]
    NoPublicExponent { phi: RsaBigInt },

    #[error("Plaintext is empty")]
    EmptyInput,

    #[error("Ciphertext is empty")]
    EmptyCipher,

    #[error("Character code {code} >= n ({n}); choose larger p or q")]
    BlockOverflow { code: u32, n: RsaBigInt },

    #[error("Invalid block: {token:?}")]
    InvalidNumber { token: String },

    #[error("Decrypted value {value} is not a valid code point")]
    CodePointOutOfRange { value: RsaBigInt },

    #[error("Private exponent d is missing and cannot be derived")]
    MissingExponent,
}

/// Result type for RSA operations
pub type Result<T> = std::result::Result<T, RsaError>;
