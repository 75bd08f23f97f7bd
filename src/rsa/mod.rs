// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod blocks;
pub mod keygen;
pub mod encrypt;
pub mod decrypt;

pub use bigint::{extended_gcd, mod_inverse, mod_pow, parse_decimal, RsaBigInt};
pub use blocks::BlockSequence;
pub use keygen::{
    derive_key, derive_key_from, derive_private_exponent, derive_private_exponent_from,
    random_public_exponent, suggest_public_exponent, KeyParams, RsaPrivateKey, RsaPublicKey,
};
pub use encrypt::{encode, encrypt_string};
pub use decrypt::{decode, decode_blocks, decrypt_to_string};
pub use crate::error::{Result, RsaError};
