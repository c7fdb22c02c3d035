//! Random integers, doubles, bytes and strings.
//!
//! [`Randomizer`] owns its source and can be seeded for reproducible output.
//! The free functions in this module share one lazily created, lock-protected
//! generator for the whole process.

mod generator;
mod options;
mod shared;

pub use generator::{Randomizer, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
pub use options::RandomStringOptions;
pub use shared::{
    fill_bytes, random_double, random_int, random_int_below, random_int_range, random_string,
    random_string_between, random_string_default_length, shared,
};
