//! Substring extraction by position or by delimiter.

use std::borrow::Cow;

use super::char_offset;

/// First `max_len` chars of `s`; `s` itself when it is short enough.
pub fn trim_to_length(s: &str, max_len: usize) -> &str {
    left(s, max_len)
}

/// Like [`trim_to_length`], appending `suffix` only when something was cut.
///
/// `trim_to_length_with_suffix("Hello world", 5, "...") == "Hello..."`
pub fn trim_to_length_with_suffix<'a>(s: &'a str, max_len: usize, suffix: &str) -> Cow<'a, str> {
    match char_offset(s, max_len) {
        Some(end) => Cow::Owned(format!("{}{}", &s[..end], suffix)),
        None => Cow::Borrowed(s),
    }
}

/// First `n` chars; the whole string when `n` reaches its length.
pub fn left(s: &str, n: usize) -> &str {
    match char_offset(s, n) {
        Some(end) => &s[..end],
        None => s,
    }
}

/// Last `n` chars; the whole string when `n` reaches its length.
pub fn right(s: &str, n: usize) -> &str {
    let len = s.chars().count();
    if n >= len {
        return s;
    }
    // `n == 0` asks for the offset one past the last char.
    match char_offset(s, len - n) {
        Some(start) => &s[start..],
        None => &s[s.len()..],
    }
}

/// Drops the first `n` chars; empty when `n` reaches the length.
pub fn cut_left(s: &str, n: usize) -> &str {
    match char_offset(s, n) {
        Some(start) => &s[start..],
        None => "",
    }
}

/// Drops the last `n` chars; empty when `n` reaches the length.
pub fn cut_right(s: &str, n: usize) -> &str {
    let len = s.chars().count();
    if n >= len {
        return "";
    }
    match char_offset(s, len - n) {
        Some(end) => &s[..end],
        None => s,
    }
}

pub fn remove_prefix<'a>(s: &'a str, prefix: &str) -> &'a str {
    s.strip_prefix(prefix).unwrap_or(s)
}

pub fn remove_suffix<'a>(s: &'a str, suffix: &str) -> &'a str {
    s.strip_suffix(suffix).unwrap_or(s)
}

/// Text before the first `x`, or `""` when `x` does not occur.
pub fn before<'a>(s: &'a str, x: &str) -> &'a str {
    match s.find(x) {
        Some(pos) => &s[..pos],
        None => "",
    }
}

/// Trimmed text between the first `x` and the last `y`.
///
/// Empty when either delimiter is missing or the last `y` starts before the
/// end of the first `x`.
pub fn between<'a>(s: &'a str, x: &str, y: &str) -> &'a str {
    let (Some(x_pos), Some(y_pos)) = (s.find(x), s.rfind(y)) else {
        return "";
    };
    let start = x_pos + x.len();
    if start >= y_pos {
        return "";
    }
    s[start..y_pos].trim()
}

/// Trimmed text after the last `x`, or `""` when `x` is missing or ends `s`.
pub fn after<'a>(s: &'a str, x: &str) -> &'a str {
    let Some(x_pos) = s.rfind(x) else {
        return "";
    };
    let start = x_pos + x.len();
    if start >= s.len() {
        return "";
    }
    s[start..].trim()
}

/// Longest shared leading substring of `a` and `b`, borrowed from `a`.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut end = 0;
    for ((i, ca), cb) in a.char_indices().zip(b.chars()) {
        if ca != cb {
            break;
        }
        end = i + ca.len_utf8();
    }
    &a[..end]
}

/// Common prefix of every item, folding left from the first one.
/// An empty slice gives `""`.
pub fn common_prefix_all<S: AsRef<str>>(items: &[S]) -> &str {
    let Some((first, rest)) = items.split_first() else {
        return "";
    };
    rest.iter()
        .fold(first.as_ref(), |prefix, item| common_prefix(prefix, item.as_ref()))
}
