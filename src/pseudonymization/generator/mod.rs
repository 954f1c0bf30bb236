//! Token generation strategies
//!
//! A [`TokenGenerator`] produces one fresh pseudonym per call. The tokenizer
//! asks for exactly one token per distinct identifier value.

pub mod random;

pub use random::UuidTokenGenerator;

/// Trait for pseudonym token sources
pub trait TokenGenerator {
    /// Produce the next token
    fn next_token(&mut self) -> String;
}

/// Any closure returning strings can act as a generator (handy for fixed tokens).
impl<F> TokenGenerator for F
where
    F: FnMut() -> String,
{
    fn next_token(&mut self) -> String {
        self()
    }
}
