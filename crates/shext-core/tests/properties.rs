//! Property tests for the string and random helpers.

use proptest::prelude::*;
use shext_core::random::{RandomStringOptions, Randomizer};
use shext_core::text;

fn options_strategy() -> impl Strategy<Value = RandomStringOptions> {
    (1u8..8).prop_map(|bits| {
        let mut opts = RandomStringOptions::empty();
        if bits & 1 != 0 {
            opts |= RandomStringOptions::LETTERS;
        }
        if bits & 2 != 0 {
            opts |= RandomStringOptions::NUMBERS;
        }
        if bits & 4 != 0 {
            opts |= RandomStringOptions::SPECIAL_CHARS;
        }
        opts
    })
}

proptest! {
    #[test]
    fn trim_to_length_keeps_short_strings(s in "\\PC*", extra in 0usize..8) {
        let n = s.chars().count() + extra;
        prop_assert_eq!(text::trim_to_length(&s, n), s.as_str());
    }

    #[test]
    fn reverse_is_an_involution(s in "\\PC*") {
        prop_assert_eq!(text::reverse(&text::reverse(&s)), s);
    }

    #[test]
    fn hex_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let hex = text::bytes_to_hex(&bytes);
        prop_assert_eq!(text::hex_to_bytes(&hex).unwrap(), bytes);
    }

    #[test]
    fn url_safe_output_is_a_clean_slug(s in "\\PC*") {
        let slug = text::transliterate_url_safe(&s);
        prop_assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!slug.contains("--"));
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
    }

    #[test]
    fn url_safe_on_russian_text(s in "[а-яё ,.!-]{0,40}") {
        let slug = text::transliterate_url_safe(&s);
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c == '-'));
    }

    #[test]
    fn strict_output_has_no_double_hyphen(s in "\\PC*") {
        let out = text::transliterate_strict(&s);
        prop_assert!(!out.contains("--"));
        prop_assert!(out
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-' || c == '.'));
    }

    #[test]
    fn random_string_length_and_alphabet(
        seed in any::<u64>(),
        length in 0usize..128,
        opts in options_strategy(),
    ) {
        let mut rng = Randomizer::seeded(seed);
        let s = rng.random_string(length, opts).unwrap();
        let alphabet = opts.alphabet();
        prop_assert_eq!(s.chars().count(), length);
        prop_assert!(s.chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn common_prefix_is_prefix_of_both(a in "[ab]{0,8}", b in "[ab]{0,8}") {
        let p = text::common_prefix(&a, &b);
        prop_assert!(a.starts_with(p));
        prop_assert!(b.starts_with(p));
    }
}
