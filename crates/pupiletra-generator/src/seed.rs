use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::prelude::*;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds are shown as 64 lowercase hexadecimal digits and can be parsed back
/// from that form, so a puzzle can be shared and regenerated exactly.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use pupiletra_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("gatos");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(PuzzleSeed::from_str(&text).unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Derives a seed from an arbitrary phrase by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`PuzzleSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input was not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected input in characters.
        len: usize,
    },
    /// The input contained a non-hexadecimal character.
    #[display("invalid hex digit {ch:?} at index {index}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// Character index of the offending character.
        index: usize,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }

        let mut bytes = [0; 32];
        let mut digits = s.chars().enumerate().map(|(index, ch)| {
            ch.to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(ParseSeedError::InvalidDigit { ch, index })
        });
        for byte in &mut bytes {
            // length was checked above, so both digits are present
            let (Some(high), Some(low)) = (digits.next(), digits.next()) else {
                unreachable!("seed length checked");
            };
            *byte = (high? << 4) | low?;
        }
        Ok(Self(bytes))
    }
}
