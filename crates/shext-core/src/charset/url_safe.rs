//! URL-safe map: lowercase Russian letters to slug-friendly Latin.
//!
//! Input is lowercased before these rules run, so only lowercase keys exist.

use super::{r, Rule, RuleSet};

pub static URL_SAFE: RuleSet = RuleSet {
    digraphs: DIGRAPHS,
    singles: SINGLES,
};

// "х" alone maps to "h"; after these consonants it is spelled "kh" so the
// pair is not read as the Latin digraph.
const DIGRAPHS: &[Rule] = &[
    r("кх", "kkh"),
    r("зх", "zkh"),
    r("цх", "ckh"),
    r("сх", "skh"),
    r("ех", "ekh"),
    r("шх", "shkh"),
    r("щх", "shchkh"),
    r("хх", "khhkh"),
    r("жх", "zhkh"),
    r("эх", "ehkh"),
    r("чх", "chkh"),
];

#[rustfmt::skip]
const SINGLES: &[Rule] = &[
    r("й", "j"), r("ц", "c"), r("у", "u"), r("к", "k"), r("е", "e"),
    r("ё", "yo"), r("н", "n"), r("г", "g"), r("ш", "sh"), r("щ", "shch"),
    r("з", "z"), r("х", "h"), r("ъ", ""), r("ф", "f"), r("ы", "y"),
    r("в", "v"), r("а", "a"), r("п", "p"), r("р", "r"), r("о", "o"),
    r("л", "l"), r("д", "d"), r("ж", "zh"), r("э", "eh"), r("я", "ya"),
    r("ч", "ch"), r("с", "s"), r("м", "m"), r("и", "i"), r("т", "t"),
    r("ь", ""), r("б", "b"), r("ю", "yu"),
];
