// Block Sequence Wire Format
// Comma-joined decimal blocks, one block per code point

use std::fmt;
use std::str::FromStr;

use super::bigint::{parse_decimal, RsaBigInt};
use crate::error::{Result, RsaError};

/// Separator between blocks on the wire
pub const BLOCK_SEPARATOR: char = ',';

/// Ordered blocks; position i holds the transform of the i-th code point
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockSequence {
    pub blocks: Vec<RsaBigInt>,
}

impl BlockSequence {
    pub fn new(blocks: Vec<RsaBigInt>) -> Self {
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RsaBigInt> {
        self.blocks.iter()
    }

    /// Parse the wire format.
    ///
    /// Tokens are trimmed and empty ones (from stray separators) are dropped.
    /// Fails with `EmptyCipher` when nothing but whitespace is given.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RsaError::EmptyCipher);
        }

        text.split(BLOCK_SEPARATOR)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                parse_decimal(token).map_err(|_| RsaError::InvalidNumber {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }
}

impl fmt::Display for BlockSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", BLOCK_SEPARATOR)?;
            }
            write!(f, "{}", block)?;
        }
        Ok(())
    }
}

impl FromStr for BlockSequence {
    type Err = RsaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Vec<RsaBigInt>> for BlockSequence {
    fn from(blocks: Vec<RsaBigInt>) -> Self {
        Self::new(blocks)
    }
}

impl<'a> IntoIterator for &'a BlockSequence {
    type Item = &'a RsaBigInt;
    type IntoIter = std::slice::Iter<'a, RsaBigInt>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
