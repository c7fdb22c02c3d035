//! String helpers.
//!
//! Lengths and positions count `char`s, never bytes, so multi-byte text is
//! never split inside a character.

mod case;
mod edit;
mod encode;
mod slice;
mod transliterate;

pub use case::{
    first_letter_up, split_camel_case, to_title_case, to_title_case_with, TitleCaseLocale,
};
pub use edit::{extract_digits, remove_chars, remove_substrings, repeat, reverse};
pub use encode::{bytes_to_hex, hex_to_bytes, to_base64};
pub use slice::{
    after, before, between, common_prefix, common_prefix_all, cut_left, cut_right, left,
    remove_prefix, remove_suffix, right, trim_to_length, trim_to_length_with_suffix,
};
pub use transliterate::{transliterate_strict, transliterate_url_safe};

/// Byte offset of the `n`th char, or `None` when `s` has `n` chars or fewer.
fn char_offset(s: &str, n: usize) -> Option<usize> {
    s.char_indices().nth(n).map(|(i, _)| i)
}
