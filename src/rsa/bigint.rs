// RSA Big Integer Operations
// Wrapper around num-bigint for RSA-specific operations

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{Result, RsaError};

/// RSA Big Integer type alias
///
/// Signed, because Bézout coefficients and user input may be negative.
pub type RsaBigInt = BigInt;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Parse a base-10 integer, ignoring any whitespace inside or around it.
///
/// An optional leading `+` or `-` is accepted. Anything else that is not an
/// ASCII digit is rejected rather than skipped.
pub fn parse_decimal(input: &str) -> Result<RsaBigInt> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = cleaned
        .strip_prefix(['+', '-'])
        .unwrap_or(&cleaned);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RsaError::Parse {
            input: input.to_string(),
        });
    }

    cleaned
        .parse::<RsaBigInt>()
        .map_err(|_| RsaError::Parse {
            input: input.to_string(),
        })
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply, consuming exp from the least significant bit.
///
/// `modulus` must be positive. A non-positive `exp` yields `1 mod modulus`.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    let mut result = RsaBigInt::one() % modulus;
    let mut base = base % modulus;
    if base.is_negative() {
        base += modulus;
    }
    let mut exp = exp.clone();

    while exp.is_positive() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
///
/// Iterative; both inputs being zero is not meaningful.
pub fn extended_gcd(a: &RsaBigInt, b: &RsaBigInt) -> (RsaBigInt, RsaBigInt, RsaBigInt) {
    let mut a = a.clone();
    let mut b = b.clone();
    let (mut x0, mut y0) = (RsaBigInt::one(), RsaBigInt::zero());
    let (mut x1, mut y1) = (RsaBigInt::zero(), RsaBigInt::one());

    while !b.is_zero() {
        // Truncating division keeps a = q*b + r for negative inputs too
        let q = &a / &b;
        let r = &a % &b;

        let x2 = &x0 - &q * &x1;
        let y2 = &y0 - &q * &y1;

        a = std::mem::replace(&mut b, r);
        x0 = std::mem::replace(&mut x1, x2);
        y0 = std::mem::replace(&mut y1, y2);
    }

    (a, x0, y0)
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if inverse doesn't exist or m is not positive
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    if !m.is_positive() {
        return None;
    }

    let (gcd, x, _) = extended_gcd(a, m);

    if !gcd.is_one() {
        return None;
    }

    let mut result = x % m;
    if result.is_negative() {
        result += m;
    }

    Some(result)
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}
