//! Strict map: Russian letters (both cases) to plain Latin.

use super::{r, Rule, RuleSet};

pub static STRICT: RuleSet = RuleSet {
    digraphs: &[],
    singles: SINGLES,
};

#[rustfmt::skip]
const SINGLES: &[Rule] = &[
    r("й", "j"), r("ц", "ts"), r("у", "u"), r("к", "k"), r("е", "e"),
    r("ё", "jo"), r("н", "n"), r("г", "g"), r("ш", "sh"), r("щ", "sh"),
    r("з", "z"), r("х", "h"), r("ъ", ""), r("ф", "f"), r("ы", "i"),
    r("в", "v"), r("а", "a"), r("п", "p"), r("р", "r"), r("о", "o"),
    r("л", "l"), r("д", "d"), r("ж", "zh"), r("э", "e"), r("я", "ja"),
    r("ч", "ch"), r("с", "s"), r("м", "m"), r("и", "i"), r("т", "t"),
    r("ь", ""), r("б", "b"), r("ю", "u"),
    r("Й", "J"), r("Ц", "Ts"), r("У", "U"), r("К", "K"), r("Е", "E"),
    r("Ё", "Jo"), r("Н", "N"), r("Г", "G"), r("Ш", "Sh"), r("Щ", "Sh"),
    r("З", "Z"), r("Х", "H"), r("Ъ", ""), r("Ф", "F"), r("Ы", "I"),
    r("В", "V"), r("А", "A"), r("П", "P"), r("Р", "R"), r("О", "O"),
    r("Л", "L"), r("Д", "D"), r("Ж", "Zh"), r("Э", "E"), r("Я", "Ja"),
    r("Ч", "Ch"), r("С", "S"), r("М", "M"), r("И", "I"), r("Т", "T"),
    r("Ь", ""), r("Б", "B"), r("Ю", "U"),
];
