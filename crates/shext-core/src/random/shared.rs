//! Process-wide generator behind a mutex.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use std::sync::{Mutex, PoisonError};

use super::generator::Randomizer;
use super::options::RandomStringOptions;
use crate::error::Result;

static SHARED: Lazy<Mutex<Randomizer<StdRng>>> =
    Lazy::new(|| Mutex::new(Randomizer::from_entropy()));

/// The process-wide generator used by the free functions of this module.
pub fn shared() -> &'static Mutex<Randomizer<StdRng>> {
    &SHARED
}

fn with_shared<T>(f: impl FnOnce(&mut Randomizer<StdRng>) -> T) -> T {
    // A panic while holding the lock cannot leave the rng half-updated.
    let mut guard = SHARED.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// See [`Randomizer::random_int`].
pub fn random_int() -> i32 {
    with_shared(|r| r.random_int())
}

/// See [`Randomizer::random_int_below`].
pub fn random_int_below(max_exclusive: i32) -> Result<i32> {
    with_shared(|r| r.random_int_below(max_exclusive))
}

/// See [`Randomizer::random_int_range`].
pub fn random_int_range(min: i32, max_exclusive: i32) -> Result<i32> {
    with_shared(|r| r.random_int_range(min, max_exclusive))
}

/// See [`Randomizer::random_double`].
pub fn random_double() -> f64 {
    with_shared(|r| r.random_double())
}

/// See [`Randomizer::fill_bytes`].
pub fn fill_bytes(buf: &mut [u8]) {
    with_shared(|r| r.fill_bytes(buf))
}

/// See [`Randomizer::random_string`].
pub fn random_string(length: usize, options: RandomStringOptions) -> Result<String> {
    with_shared(|r| r.random_string(length, options))
}

/// See [`Randomizer::random_string_between`].
pub fn random_string_between(
    min: usize,
    max_exclusive: usize,
    options: RandomStringOptions,
) -> Result<String> {
    with_shared(|r| r.random_string_between(min, max_exclusive, options))
}

/// See [`Randomizer::random_string_default_length`].
pub fn random_string_default_length(options: RandomStringOptions) -> Result<String> {
    with_shared(|r| r.random_string_default_length(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn shared_generator_from_many_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(|| {
                    (0..50)
                        .map(|_| random_string(12, RandomStringOptions::all()).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for h in handles {
            for s in h.join().unwrap() {
                assert_eq!(s.len(), 12);
            }
        }
    }

    #[test]
    fn shared_generator_can_be_locked_directly() {
        let mut guard = shared().lock().unwrap_or_else(PoisonError::into_inner);
        let s = guard.random_string(6, RandomStringOptions::LETTERS).unwrap();
        assert_eq!(s.len(), 6);
        let n = guard.random_int_below(3).unwrap();
        assert!((0..3).contains(&n));
    }

    #[test]
    fn free_functions_validate_arguments() {
        assert!(random_int_below(0).is_err());
        assert!(random_int_range(2, 1).is_err());
        assert!(random_string(3, RandomStringOptions::empty()).is_err());
        let d = random_double();
        assert!((0.0..1.0).contains(&d));
        assert!(random_int() >= 0);
        let n = random_int_range(8, 16).unwrap();
        assert!((8..16).contains(&n));
        let s = random_string_default_length(RandomStringOptions::NUMBERS).unwrap();
        assert!(s.chars().all(|c| c.is_ascii_digit()));
        let mut buf = [0u8; 8];
        fill_bytes(&mut buf);
    }
}
