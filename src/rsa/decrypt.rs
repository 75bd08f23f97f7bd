// RSA Decryption Implementation
// Turns a block sequence back into text, one code point per block

use num_traits::ToPrimitive;

use super::bigint::{mod_pow, RsaBigInt};
use super::blocks::BlockSequence;
use super::keygen::RsaPrivateKey;
use crate::error::{Result, RsaError};

/// Convert a decrypted block into a character.
///
/// The value is widened, never truncated: anything outside u32, any
/// surrogate and anything above U+10FFFF is rejected.
fn block_to_char(m: &RsaBigInt) -> Result<char> {
    m.to_u32()
        .and_then(char::from_u32)
        .ok_or_else(|| RsaError::CodePointOutOfRange { value: m.clone() })
}

/// Decrypt parsed blocks: m = c^d mod n for each block, in order.
///
/// Block bounds are not re-checked against n.
pub fn decode_blocks(blocks: &BlockSequence, d: &RsaBigInt, n: &RsaBigInt) -> Result<String> {
    let mut text = String::with_capacity(blocks.len());
    for c in blocks {
        text.push(block_to_char(&mod_pow(c, d, n))?);
    }
    Ok(text)
}

/// Decrypt comma-joined block text into a string.
///
/// Fails with `EmptyCipher` on blank input, `InvalidNumber` on a malformed
/// token and `CodePointOutOfRange` when a block does not decrypt to a char.
pub fn decode(block_text: &str, d: &RsaBigInt, n: &RsaBigInt) -> Result<String> {
    let blocks = BlockSequence::parse(block_text)?;
    decode_blocks(&blocks, d, n)
}

/// Decrypt ciphertext to a string using RSA private key
pub fn decrypt_to_string(ciphertext: &str, private_key: &RsaPrivateKey) -> Result<String> {
    decode(ciphertext, &private_key.d, &private_key.n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::encrypt::encode;

    fn n() -> RsaBigInt {
        from_u64(3233)
    }

    fn d() -> RsaBigInt {
        from_u64(2753)
    }

    #[test]
    fn test_decode_textbook() {
        assert_eq!(decode("2790", &d(), &n()).unwrap(), "A");
        assert_eq!(decode("2790, 2790", &d(), &n()).unwrap(), "AA");
    }

    #[test]
    fn test_decode_roundtrip() {
        let e = from_u64(17);
        for text in ["Hello, RSA!", "Привіт, світ", "a\tb\nc", "ÿĀ"] {
            let blocks = encode(text, &e, &n()).unwrap();
            assert_eq!(decode(&blocks.to_string(), &d(), &n()).unwrap(), text);
            assert_eq!(decode_blocks(&blocks, &d(), &n()).unwrap(), text);
        }
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("", &d(), &n()), Err(RsaError::EmptyCipher));
        assert_eq!(decode("  ", &d(), &n()), Err(RsaError::EmptyCipher));
    }

    #[test]
    fn test_decode_skips_empty_tokens() {
        // With d = 1 and n large the blocks decode to themselves
        let one = from_u64(1);
        let big_n = from_u64(0x11_0000);
        assert_eq!(decode("5, ,7", &one, &big_n).unwrap(), "\u{5}\u{7}");
        assert_eq!(decode("72,105,", &one, &big_n).unwrap(), "Hi");
    }

    #[test]
    fn test_decode_invalid_number() {
        assert_eq!(
            decode("2790, 27x0", &d(), &n()),
            Err(RsaError::InvalidNumber {
                token: "27x0".to_string()
            })
        );
    }

    #[test]
    fn test_decode_rejects_surrogates_and_large_values() {
        let one = from_u64(1);
        let big_n = RsaBigInt::from(1u64 << 40);
        assert_eq!(
            decode("55296", &one, &big_n),
            Err(RsaError::CodePointOutOfRange {
                value: from_u64(0xD800)
            })
        );
        assert_eq!(
            decode("1114112", &one, &big_n),
            Err(RsaError::CodePointOutOfRange {
                value: from_u64(0x11_0000)
            })
        );
        // Above u32::MAX: must not wrap around to a valid char
        let wrapped = (1u64 << 32) + 65;
        assert_eq!(
            decode(&wrapped.to_string(), &one, &big_n),
            Err(RsaError::CodePointOutOfRange {
                value: from_u64(wrapped)
            })
        );
    }

    #[test]
    fn test_decrypt_to_string() {
        let key = RsaPrivateKey { n: n(), d: d() };
        assert_eq!(decrypt_to_string("2790", &key).unwrap(), "A");
    }
}
