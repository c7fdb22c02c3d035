//! Static character pools and transliteration tables.
//!
//! Pools are sampling alphabets for [`crate::random`]. Look-alike characters
//! (`I`/`l`, `O`/`0`, `U`/`V`/`u`/`v`, `h`) are left out of the letter pools.
//!
//! Transliteration tables are ordered [`RuleSet`]s: every digraph rule runs
//! before any single-character rule. A digraph whose first character was
//! already replaced would never match, and the text would come out longer.

mod strict;
mod url_safe;

pub use strict::STRICT;
pub use url_safe::URL_SAFE;

/// Uppercase letter pool.
pub const UPPERCASE: &str = "ABCDEFGHJKLMNPQRSTWXYZ";
/// Lowercase letter pool.
pub const LOWERCASE: &str = "abcdefgijkmnopqrstwxyz";
/// Decimal digit pool.
pub const NUMERIC: &str = "0123456789";
/// Punctuation pool.
pub const SPECIAL: &str = "!#$%&'()*+,-./:;<=>?@[]^_`{|}~";

/// One replacement: every occurrence of `from` becomes `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub from: &'static str,
    pub to: &'static str,
}

pub(crate) const fn r(from: &'static str, to: &'static str) -> Rule {
    Rule { from, to }
}

/// Ordered replacement rules: `digraphs` first, then `singles`.
#[derive(Debug)]
pub struct RuleSet {
    /// Multi-character rules, applied in table order.
    pub digraphs: &'static [Rule],
    /// Single-character rules. Keys are distinct single characters.
    pub singles: &'static [Rule],
}

impl RuleSet {
    /// Applies every rule to `text`, digraphs first.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for d in self.digraphs {
            if out.contains(d.from) {
                out = out.replace(d.from, d.to);
            }
        }

        // Single-char keys never overlap, so one pass is the same as
        // replacing them one rule at a time.
        let mut mapped = String::with_capacity(out.len());
        for c in out.chars() {
            match self.lookup(c) {
                Some(to) => mapped.push_str(to),
                None => mapped.push(c),
            }
        }
        mapped
    }

    fn lookup(&self, c: char) -> Option<&'static str> {
        self.singles
            .iter()
            .find(|rule| rule.from.chars().eq(std::iter::once(c)))
            .map(|rule| rule.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_single_chars(rules: &[Rule]) -> bool {
        rules.iter().all(|r| r.from.chars().count() == 1)
    }

    #[test]
    fn single_tables_have_single_char_keys() {
        assert!(all_single_chars(STRICT.singles));
        assert!(all_single_chars(URL_SAFE.singles));
    }

    #[test]
    fn digraph_keys_are_two_chars() {
        assert!(STRICT.digraphs.is_empty());
        assert_eq!(URL_SAFE.digraphs.len(), 11);
        assert!(URL_SAFE.digraphs.iter().all(|r| r.from.chars().count() == 2));
    }

    #[test]
    fn pools_are_ascii_and_unique() {
        for pool in [UPPERCASE, LOWERCASE, NUMERIC, SPECIAL] {
            assert!(pool.is_ascii());
            let mut seen = std::collections::HashSet::new();
            assert!(pool.chars().all(|c| seen.insert(c)), "duplicate in {}", pool);
        }
    }

    #[test]
    fn digraph_applied_before_single() {
        // кх would become "kh" char by char; the digraph gives "kkh".
        assert_eq!(URL_SAFE.apply("кх"), "kkh");
        assert_eq!(URL_SAFE.apply("к"), "k");
    }
}
