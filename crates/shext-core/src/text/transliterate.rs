//! Cyrillic to Latin transliteration.

use crate::charset::{STRICT, URL_SAFE};

fn is_strict_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '.')
}

fn is_url_allowed(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '
}

/// Collapses every run of `-` into one.
fn collapse_hyphens(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_hyphen = false;
    for c in s.chars() {
        if c == '-' {
            if !prev_hyphen {
                out.push('-');
            }
            prev_hyphen = true;
        } else {
            out.push(c);
            prev_hyphen = false;
        }
    }
    out
}

/// Transliterates Russian letters and keeps only ASCII letters, digits,
/// space, `-` and `.`; anything else is dropped. Case is preserved and
/// leading/trailing hyphens are kept.
pub fn transliterate_strict(text: &str) -> String {
    let mapped = STRICT.apply(text);
    let kept: String = mapped.chars().filter(|&c| is_strict_allowed(c)).collect();
    collapse_hyphens(&kept)
}

/// Lowercase slug: `a-z`, `0-9` and single inner hyphens only.
///
/// `"Привет, мир!"` gives `"privet-mir"`. Every char the map does not cover
/// becomes a hyphen before hyphens are collapsed and trimmed.
pub fn transliterate_url_safe(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mapped = URL_SAFE.apply(&lowered);
    let replaced: String = mapped
        .chars()
        .map(|c| if is_url_allowed(c) { c } else { '-' })
        .collect();
    let hyphenated = replaced.trim().replace(['.', ' '], "-");
    collapse_hyphens(&hyphenated).trim_matches('-').to_string()
}
