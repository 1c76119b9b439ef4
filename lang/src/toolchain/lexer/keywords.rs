//! The static tables driving substitution.
//!
//! [KEYWORDS] pairs every localized keyword or operator name with the C text replacing it. It is
//! only ever consulted with a complete identifier, never with a prefix. [SYMBOLS] lists the ASCII
//! operators matched directly against the input, longer symbols first so that `==` wins over
//! `=`. [PUNCTUATION] is the single byte fallback tried when no symbol matched.

use bstr::ByteSlice;

use super::cursor::is_identifier_continue;

/// Localized phrase to replacement text, in lookup order.
///
/// Entries containing a space cannot be produced by identifier scanning, which stops at blank
/// space. They only match when phrase joining is enabled in
/// [LexOptions](super::LexOptions).
pub const KEYWORDS: &[(&str, &str)] = &[
    ("اگر", "if"),
    ("جاپ", "printf"),
    ("وگرنه", "else"),
    ("برای", "for"),
    ("درحالی که", "while"),
    ("اشاره", "void*"),
    ("تابع", "void"),
    ("بازگردان", "return"),
    ("صحیح", "int"),
    ("اعشاری", "double"),
    ("رشته", "char*"),
    ("و", "&&"),
    ("یا", "||"),
    ("برابر", "=="),
    ("نابرابر", "!="),
    ("کمتر", "<"),
    ("بزرگتر", ">"),
    ("افزایش", "++"),
];

pub const SYMBOLS: &[&str] = &[
    "==", "!=", "++", "--", "&&", "||", "{", "}", "(", ")", ",", ";", "+", "-", "*", "/", "=",
    "<", ">", "%", "!",
];

pub const PUNCTUATION: &[u8] = b"{}(),;+-*/=%<>![]";

assert_impl_all!(&'static [(&'static str, &'static str)]: Send, Sync);

/// Exact, case-sensitive lookup of a whole identifier.
pub fn lookup(identifier: &[u8]) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .find(|(phrase, _)| phrase.as_bytes() == identifier)
        .map(|(_, replacement)| *replacement)
}

/// The first entry of [SYMBOLS] that prefixes `input`.
pub fn match_symbol(input: &[u8]) -> Option<&'static str> {
    SYMBOLS.iter().find(|symbol| input.starts_with_str(symbol)).copied()
}

/// The single punctuation byte at the start of `input`, if it is one.
pub fn match_punctuation(input: &[u8]) -> Option<&'static str> {
    let first = *input.first()?;
    let index = PUNCTUATION.find_byte(first)?;
    // Each byte of PUNCTUATION is ASCII, so the one-byte slice is valid utf-8.
    std::str::from_utf8(&PUNCTUATION[index..index + 1]).ok()
}

/// Tries every multi-word entry of [KEYWORDS] against the start of `input`, in table order.
///
/// Words must match exactly and be separated by at least one space or tab. The phrase must end
/// where an identifier would end. Returns the matched byte length and the replacement.
pub fn match_phrase(input: &[u8]) -> Option<(usize, &'static str)> {
    KEYWORDS
        .iter()
        .filter(|(phrase, _)| phrase.contains(' '))
        .find_map(|(phrase, replacement)| phrase_len(input, phrase).map(|len| (len, *replacement)))
}

fn phrase_len(input: &[u8], phrase: &str) -> Option<usize> {
    let mut pos = 0;
    for (i, word) in phrase.split(' ').filter(|w| !w.is_empty()).enumerate() {
        if i > 0 {
            let gap = input[pos..].iter().take_while(|&&b| b == b' ' || b == b'\t').count();
            if gap == 0 {
                return None;
            }
            pos += gap;
        }
        if !input[pos..].starts_with_str(word) {
            return None;
        }
        pos += word.len();
    }
    match input.get(pos) {
        Some(&b) if is_identifier_continue(b) => None,
        _ => Some(pos),
    }
}
