//! Owned random generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::options::RandomStringOptions;
use crate::error::{Result, ShextError};

/// Minimum length (inclusive) picked by [`Randomizer::random_string_default_length`].
pub const DEFAULT_MIN_LENGTH: usize = 8;
/// Maximum length (exclusive) picked by [`Randomizer::random_string_default_length`].
pub const DEFAULT_MAX_LENGTH: usize = 16;

/// Random value generator over any [`Rng`].
///
/// Every method advances the same source, so two generators built with
/// [`Randomizer::seeded`] and the same seed produce the same sequence.
#[derive(Debug, Clone)]
pub struct Randomizer<R = StdRng> {
    rng: R,
}

impl Randomizer<StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic generator; same seed, same output.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Randomizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform integer in `[0, i32::MAX)`.
    pub fn random_int(&mut self) -> i32 {
        self.rng.gen_range(0..i32::MAX)
    }

    /// Uniform integer in `[0, max_exclusive)`.
    pub fn random_int_below(&mut self, max_exclusive: i32) -> Result<i32> {
        if max_exclusive <= 0 {
            return Err(ShextError::invalid(format!(
                "max_exclusive must be positive, got {}",
                max_exclusive
            )));
        }
        Ok(self.rng.gen_range(0..max_exclusive))
    }

    /// Uniform integer in `[min, max_exclusive)`.
    pub fn random_int_range(&mut self, min: i32, max_exclusive: i32) -> Result<i32> {
        if min >= max_exclusive {
            return Err(ShextError::invalid(format!(
                "min ({}) must be less than max_exclusive ({})",
                min, max_exclusive
            )));
        }
        Ok(self.rng.gen_range(min..max_exclusive))
    }

    /// Uniform double in `[0.0, 1.0)`.
    pub fn random_double(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Overwrites every byte of `buf` with a uniform random byte.
    pub fn fill_bytes(&mut self, buf: &mut [u8]) {
        self.rng.fill(buf);
    }

    /// String of exactly `length` characters drawn from `options`' alphabet.
    ///
    /// A zero length returns `""` without touching the source, even when
    /// `options` is empty.
    pub fn random_string(&mut self, length: usize, options: RandomStringOptions) -> Result<String> {
        if length == 0 {
            return Ok(String::new());
        }

        let alphabet = options.alphabet();
        let pool = alphabet.as_bytes();
        if pool.is_empty() {
            return Err(ShextError::invalid(
                "no character classes selected for a non-empty random string",
            ));
        }

        // Pools are ASCII, so each byte is one character.
        let out = (0..length)
            .map(|_| pool[self.rng.gen_range(0..pool.len())] as char)
            .collect();
        Ok(out)
    }

    /// Random string whose length is uniform in `[min, max_exclusive)`.
    pub fn random_string_between(
        &mut self,
        min: usize,
        max_exclusive: usize,
        options: RandomStringOptions,
    ) -> Result<String> {
        if min >= max_exclusive {
            return Err(ShextError::invalid(format!(
                "min length ({}) must be less than max length ({})",
                min, max_exclusive
            )));
        }
        let length = self.rng.gen_range(min..max_exclusive);
        self.random_string(length, options)
    }

    /// Random string of 8 to 15 characters.
    pub fn random_string_default_length(&mut self, options: RandomStringOptions) -> Result<String> {
        self.random_string_between(DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH, options)
    }
}
