//! Transliterate command.

use shext_core::text;

pub fn run_transliterate(input: &str, url: bool) {
    let out = if url {
        text::transliterate_url_safe(input)
    } else {
        text::transliterate_strict(input)
    };
    println!("{}", out);
}
