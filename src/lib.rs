//! Textbook RSA for teaching.
//!
//! Two caller-chosen factors give the modulus and totient, the public and
//! private exponents are chosen or derived with the extended Euclidean
//! algorithm, and text is encrypted one Unicode code point per block.
//!
//! This is unpadded textbook RSA. It offers no security at any key size and
//! exists only to demonstrate the arithmetic.
//!
//! ```
//! use textbook_rsa::rsa::{decode, derive_key, derive_private_exponent, encode};
//!
//! let params = derive_key("61", "53").unwrap();
//! let d = derive_private_exponent("17", &params.phi).unwrap();
//! let blocks = encode("Hi", &17u32.into(), &params.n).unwrap();
//! assert_eq!(decode(&blocks.to_string(), &d, &params.n).unwrap(), "Hi");
//! ```

pub mod error;
pub mod rsa;
pub mod ui;
pub mod util;

pub use error::{Result, RsaError};
