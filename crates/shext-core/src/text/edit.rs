//! Whole-string rewrites.

/// Chars of `s` in reverse order.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// `s` concatenated `count` times.
pub fn repeat(s: &str, count: usize) -> String {
    s.repeat(count)
}

/// Every ASCII digit of `s`, in order.
pub fn extract_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// `s` with every occurrence of each char in `chars` removed.
pub fn remove_chars(s: &str, chars: &[char]) -> String {
    s.chars().filter(|c| !chars.contains(c)).collect()
}

/// `s` with every occurrence of each substring removed, in argument order.
///
/// Removing one substring can join text that forms the next one:
/// `remove_substrings("aXbb", &["X", "ab"]) == "b"`.
pub fn remove_substrings(s: &str, subs: &[&str]) -> String {
    subs.iter()
        .filter(|sub| !sub.is_empty())
        .fold(s.to_string(), |acc, sub| acc.replace(sub, ""))
}
