//! Character class selection for random strings.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::charset::{LOWERCASE, NUMERIC, SPECIAL, UPPERCASE};

/// Set of character classes a random string draws from.
///
/// Combine with `|`: `RandomStringOptions::LETTERS | RandomStringOptions::NUMBERS`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RandomStringOptions(u8);

impl RandomStringOptions {
    pub const LETTERS: Self = Self(1);
    pub const NUMBERS: Self = Self(2);
    pub const SPECIAL_CHARS: Self = Self(4);

    /// No classes selected; only valid for zero-length strings.
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(1 | 2 | 4)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Sampling alphabet for these options.
    ///
    /// Pools are appended in a fixed order: uppercase, digits, special,
    /// lowercase, digits. Digits appear twice when `NUMBERS` is set, which
    /// doubles their weight relative to the other classes.
    pub fn alphabet(self) -> String {
        let mut out = String::new();
        if self.contains(Self::LETTERS) {
            out.push_str(UPPERCASE);
        }
        if self.contains(Self::NUMBERS) {
            out.push_str(NUMERIC);
        }
        if self.contains(Self::SPECIAL_CHARS) {
            out.push_str(SPECIAL);
        }
        if self.contains(Self::LETTERS) {
            out.push_str(LOWERCASE);
        }
        if self.contains(Self::NUMBERS) {
            out.push_str(NUMERIC);
        }
        out
    }
}

impl Default for RandomStringOptions {
    fn default() -> Self {
        Self::LETTERS
    }
}

impl BitOr for RandomStringOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RandomStringOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for RandomStringOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.contains(Self::LETTERS) {
            names.push("LETTERS");
        }
        if self.contains(Self::NUMBERS) {
            names.push("NUMBERS");
        }
        if self.contains(Self::SPECIAL_CHARS) {
            names.push("SPECIAL_CHARS");
        }
        if names.is_empty() {
            write!(f, "RandomStringOptions(empty)")
        } else {
            write!(f, "RandomStringOptions({})", names.join(" | "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_letters() {
        assert_eq!(RandomStringOptions::default(), RandomStringOptions::LETTERS);
    }

    #[test]
    fn alphabet_order_and_duplication() {
        let all = RandomStringOptions::all().alphabet();
        let expected = format!("{UPPERCASE}{NUMERIC}{SPECIAL}{LOWERCASE}{NUMERIC}");
        assert_eq!(all, expected);

        let numbers = RandomStringOptions::NUMBERS.alphabet();
        assert_eq!(numbers, "01234567890123456789");
    }

    #[test]
    fn letters_only_alphabet() {
        let letters = RandomStringOptions::LETTERS.alphabet();
        assert_eq!(letters, format!("{UPPERCASE}{LOWERCASE}"));
        assert!(!letters.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn empty_options_give_empty_alphabet() {
        assert!(RandomStringOptions::empty().alphabet().is_empty());
        assert!(RandomStringOptions::empty().is_empty());
    }

    #[test]
    fn bitor_combines() {
        let mut opts = RandomStringOptions::LETTERS;
        opts |= RandomStringOptions::SPECIAL_CHARS;
        assert!(opts.contains(RandomStringOptions::LETTERS));
        assert!(opts.contains(RandomStringOptions::SPECIAL_CHARS));
        assert!(!opts.contains(RandomStringOptions::NUMBERS));
        assert_eq!(format!("{:?}", opts), "RandomStringOptions(LETTERS | SPECIAL_CHARS)");
    }
}
