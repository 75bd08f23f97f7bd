// RSA Key Derivation
// Derives modulus and totient from caller-chosen factors and picks exponents

use num_bigint::RandBigInt;
use num_traits::One;
use rand::Rng;

use super::bigint::{from_u64, gcd, mod_inverse, parse_decimal, RsaBigInt};
use crate::error::{Result, RsaError};

/// Exponents tried first when suggesting e, most common first
pub const PREFERRED_PUBLIC_EXPONENTS: [u64; 5] = [65537, 257, 17, 5, 3];

/// Random draws attempted before falling back to the deterministic search
const RANDOM_EXPONENT_ATTEMPTS: usize = 64;

/// Modulus and totient derived from a factor pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyParams {
    pub p: RsaBigInt,
    pub q: RsaBigInt,
    pub n: RsaBigInt,   // p * q
    pub phi: RsaBigInt, // (p-1)(q-1)
}

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: RsaBigInt, // Modulus
    pub e: RsaBigInt, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: RsaBigInt, // Modulus (same as public)
    pub d: RsaBigInt, // Private exponent
}

impl KeyParams {
    /// Public key for exponent `e`. The exponent is not validated.
    pub fn public_key(&self, e: RsaBigInt) -> RsaPublicKey {
        RsaPublicKey {
            n: self.n.clone(),
            e,
        }
    }

    /// Private key for a manually supplied `d`; e*d ≡ 1 (mod phi) is not checked.
    pub fn private_key(&self, d: RsaBigInt) -> RsaPrivateKey {
        RsaPrivateKey {
            n: self.n.clone(),
            d,
        }
    }

    /// Private key whose exponent is the inverse of `e` mod phi
    pub fn derive_private_key(&self, e: &RsaBigInt) -> Result<RsaPrivateKey> {
        let d = derive_private_exponent_from(e, &self.phi)?;
        Ok(self.private_key(d))
    }
}

impl RsaPublicKey {
    /// Encrypt text one code point at a time
    /// Returns the comma-joined block string
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        use super::encrypt::encrypt_string;
        encrypt_string(plaintext, self)
    }
}

impl RsaPrivateKey {
    /// Decrypt a comma-joined block string back into text
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        use super::decrypt::decrypt_to_string;
        decrypt_to_string(ciphertext, self)
    }
}

/// Derive n and phi from decimal factor strings
pub fn derive_key(p: &str, q: &str) -> Result<KeyParams> {
    let p = parse_decimal(p)?;
    let q = parse_decimal(q)?;
    derive_key_from(&p, &q)
}

/// Derive n and phi from factors. Both must exceed 1; primality is not checked.
pub fn derive_key_from(p: &RsaBigInt, q: &RsaBigInt) -> Result<KeyParams> {
    let one = RsaBigInt::one();
    for factor in [p, q] {
        if *factor <= one {
            return Err(RsaError::InvalidFactor {
                value: factor.clone(),
            });
        }
    }

    let n = p * q;
    let phi = (p - 1u8) * (q - 1u8);

    Ok(KeyParams {
        p: p.clone(),
        q: q.clone(),
        n,
        phi,
    })
}

/// Compute d = e^(-1) mod phi from a decimal string
pub fn derive_private_exponent(e: &str, phi: &RsaBigInt) -> Result<RsaBigInt> {
    let e = parse_decimal(e)?;
    derive_private_exponent_from(&e, phi)
}

/// Compute d = e^(-1) mod phi, normalized into [0, phi)
pub fn derive_private_exponent_from(e: &RsaBigInt, phi: &RsaBigInt) -> Result<RsaBigInt> {
    mod_inverse(e, phi).ok_or_else(|| RsaError::NoInverse {
        e: e.clone(),
        phi: phi.clone(),
    })
}

/// Pick a public exponent 1 < e < phi that is coprime with phi.
///
/// Prefers the usual small Fermat-style exponents, then scans odd values
/// upward from 3.
pub fn suggest_public_exponent(phi: &RsaBigInt) -> Result<RsaBigInt> {
    let one = RsaBigInt::one();
    let is_usable = |e: &RsaBigInt| e > &one && e < phi && gcd(e, phi).is_one();

    if let Some(e) = PREFERRED_PUBLIC_EXPONENTS
        .iter()
        .map(|&e| from_u64(e))
        .find(|e| is_usable(e))
    {
        return Ok(e);
    }

    let mut e = from_u64(3);
    while &e < phi {
        if is_usable(&e) {
            return Ok(e);
        }
        e += 2u8;
    }

    Err(RsaError::NoPublicExponent { phi: phi.clone() })
}

/// Pick a random public exponent in [3, phi) coprime with phi.
///
/// Falls back to `suggest_public_exponent` when no draw succeeds.
pub fn random_public_exponent<R: Rng + ?Sized>(phi: &RsaBigInt, rng: &mut R) -> Result<RsaBigInt> {
    let low = from_u64(3);
    if phi > &low {
        for _ in 0..RANDOM_EXPONENT_ATTEMPTS {
            let e = rng.gen_bigint_range(&low, phi);
            if gcd(&e, phi).is_one() {
                return Ok(e);
            }
        }
    }

    suggest_public_exponent(phi)
}
