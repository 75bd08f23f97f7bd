// RSA Encryption Implementation
// Textbook RSA applied to each Unicode code point separately, no padding

use super::bigint::{mod_pow, RsaBigInt};
use super::blocks::BlockSequence;
use super::keygen::RsaPublicKey;
use crate::error::{Result, RsaError};

/// Encrypt every code point of `text` as c = code^e mod n.
///
/// Any code point >= n aborts the whole call; no partial output is returned.
pub fn encode(text: &str, e: &RsaBigInt, n: &RsaBigInt) -> Result<BlockSequence> {
    if text.is_empty() {
        return Err(RsaError::EmptyInput);
    }

    // chars() yields whole scalar values, never UTF-16 halves
    text.chars()
        .map(|ch| {
            let code = u32::from(ch);
            let m = RsaBigInt::from(code);
            if &m >= n {
                return Err(RsaError::BlockOverflow {
                    code,
                    n: n.clone(),
                });
            }
            Ok(mod_pow(&m, e, n))
        })
        .collect::<Result<Vec<_>>>()
        .map(BlockSequence::from)
}

/// Encrypt a string using RSA public key
/// Returns the comma-joined block string
pub fn encrypt_string(plaintext: &str, public_key: &RsaPublicKey) -> Result<String> {
    encode(plaintext, &public_key.e, &public_key.n).map(|blocks| blocks.to_string())
}
