//! Random UUID-derived tokens

use super::TokenGenerator;
use crate::domain::{PseudonymError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::{Builder, Uuid};

/// Tokens are the leading hex characters of a random (v4) UUID.
///
/// Truncation makes tokens short and readable at the price of uniqueness:
/// with the default of 8 hex characters there are 2^32 possible tokens, so a
/// collision inside one run is unlikely but possible. Collisions are reported
/// by the tokenizer, never silently repaired.
pub struct UuidTokenGenerator {
    length: usize,
    /// Seeded source for reproducible runs; `None` uses the OS-backed v4 generator
    rng: Option<StdRng>,
}

impl UuidTokenGenerator {
    /// Token length used when none is configured
    pub const DEFAULT_LENGTH: usize = 8;

    /// Hex characters in a simple-format UUID
    pub const MAX_LENGTH: usize = 32;

    /// Create a generator producing tokens of `length` characters
    ///
    /// # Errors
    ///
    /// Returns a validation error unless `1 <= length <= 32`.
    pub fn new(length: usize) -> Result<Self> {
        Self::check_length(length)?;
        Ok(Self { length, rng: None })
    }

    /// Create a reproducible generator from a seed
    ///
    /// The same seed yields the same token sequence. Anyone who knows the seed
    /// can regenerate the tokens, so seeded runs are for tests and demos only.
    pub fn seeded(length: usize, seed: u64) -> Result<Self> {
        Self::check_length(length)?;
        Ok(Self {
            length,
            rng: Some(StdRng::seed_from_u64(seed)),
        })
    }

    fn check_length(length: usize) -> Result<()> {
        if length == 0 || length > Self::MAX_LENGTH {
            return Err(PseudonymError::Validation(format!(
                "Token length must be between 1 and {}, got {}",
                Self::MAX_LENGTH,
                length
            )));
        }
        Ok(())
    }
}

impl Default for UuidTokenGenerator {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            rng: None,
        }
    }
}

impl TokenGenerator for UuidTokenGenerator {
    fn next_token(&mut self) -> String {
        let uuid = match self.rng.as_mut() {
            Some(rng) => Builder::from_random_bytes(rng.gen()).into_uuid(),
            None => Uuid::new_v4(),
        };
        let mut token = uuid.simple().to_string();
        token.truncate(self.length);
        token
    }
}
