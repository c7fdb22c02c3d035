//! Casing helpers.

/// Case rules for [`to_title_case_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleCaseLocale {
    /// Unicode default case mapping.
    #[default]
    Invariant,
    /// Turkish and Azerbaijani: dotted `i`/`İ` and dotless `ı`/`I` are
    /// separate letters.
    Turkic,
}

impl TitleCaseLocale {
    /// Picks the rules for a language tag such as `"tr-TR"` or `"en_US"`.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "tr" | "az" => TitleCaseLocale::Turkic,
            _ => TitleCaseLocale::Invariant,
        }
    }

    fn push_upper(self, out: &mut String, c: char) {
        match (self, c) {
            (TitleCaseLocale::Turkic, 'i') => out.push('İ'),
            _ => out.extend(c.to_uppercase()),
        }
    }

    fn push_lower(self, out: &mut String, c: char) {
        match (self, c) {
            (TitleCaseLocale::Turkic, 'I') => out.push('ı'),
            (TitleCaseLocale::Turkic, 'İ') => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
}

/// Uppercases the first char; blank input gives `""`.
pub fn first_letter_up(s: &str) -> String {
    if s.trim().is_empty() {
        return String::new();
    }
    let mut chars = s.chars();
    let mut out = String::with_capacity(s.len());
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }
    out.push_str(chars.as_str());
    out
}

/// Title case with [`TitleCaseLocale::Invariant`] rules.
pub fn to_title_case(s: &str) -> String {
    to_title_case_with(s, TitleCaseLocale::Invariant)
}

/// Capitalizes each word and lowercases the rest of it.
///
/// A word is a run of alphanumerics and apostrophes. Words whose letters are
/// all uppercase are left alone as acronyms: `"NASA launch"` gives
/// `"NASA Launch"`.
pub fn to_title_case_with(s: &str, locale: TitleCaseLocale) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word = String::new();
    for c in s.chars() {
        if c.is_alphanumeric() || c == '\'' {
            word.push(c);
        } else {
            push_title_word(&mut out, &word, locale);
            word.clear();
            out.push(c);
        }
    }
    push_title_word(&mut out, &word, locale);
    out
}

fn push_title_word(out: &mut String, word: &str, locale: TitleCaseLocale) {
    let mut letters = word.chars().filter(|c| c.is_alphabetic()).peekable();
    let is_acronym = letters.peek().is_some() && letters.all(char::is_uppercase);
    if is_acronym {
        out.push_str(word);
        return;
    }

    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        locale.push_upper(out, first);
    }
    for c in chars {
        locale.push_lower(out, c);
    }
}

/// Inserts a space before each uppercase letter that directly follows a
/// non-uppercase char: `"HelloWorldFoo"` gives `"Hello World Foo"`.
/// Whitespace counts as non-uppercase, so `"Already Split"` gains a second space.
pub fn split_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if let Some(p) = prev {
            if c.is_uppercase() && !p.is_uppercase() {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}
