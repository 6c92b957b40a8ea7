//! World seed handling.
//!
//! A seed is given as free text (a number or any string) and is reduced to a
//! `u64` with 64-bit FNV-1a before it seeds the generator. Numeric text is
//! hashed too, so `"42"` and `42` are not the same seed.

use std::fmt;

use thiserror::Error;

/// FNV-1a 64-bit offset basis.
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Longest seed text accepted at the boundary.
pub const MAX_SEED_LEN: usize = 256;

/// Rejected seed input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("seed is empty")]
    Empty,
    #[error("seed is {0} bytes long, the limit is {MAX_SEED_LEN}")]
    TooLong(usize),
    #[error("seed contains control character {0:?}")]
    ControlCharacter(char),
}

/// Non-cryptographic 64-bit FNV-1a hash.
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// A validated seed: the user's text plus its hashed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldSeed {
    text: String,
    value: u64,
}

impl WorldSeed {
    /// Validates and hashes user-supplied seed text.
    ///
    /// Surrounding whitespace is trimmed first.
    pub fn parse(text: &str) -> Result<Self, SeedError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SeedError::Empty);
        }
        if text.len() > MAX_SEED_LEN {
            return Err(SeedError::TooLong(text.len()));
        }
        if let Some(c) = text.chars().find(|c| c.is_control()) {
            return Err(SeedError::ControlCharacter(c));
        }
        Ok(Self {
            text: text.to_owned(),
            value: fnv1a_64(text.as_bytes()),
        })
    }

    /// Picks a random seed, formatted as a decimal number so it can be
    /// reported and replayed.
    pub fn random() -> Self {
        let text = (rand::random::<u64>() >> 1).to_string();
        let value = fnv1a_64(text.as_bytes());
        Self { text, value }
    }

    /// Parses `text` if given and non-blank, otherwise picks a random seed.
    pub fn from_optional(text: Option<&str>) -> Result<Self, SeedError> {
        match text {
            Some(t) if !t.trim().is_empty() => Self::parse(t),
            _ => Ok(Self::random()),
        }
    }

    /// Text the seed was derived from.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Hashed value that seeds the generator.
    pub fn value(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for WorldSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (\"{}\")", self.value, self.text)
    }
}
