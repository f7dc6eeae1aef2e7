use unicode_normalization::UnicodeNormalization;

use crate::generate::Generator;

/// Arabic combining diacritics (fathatan through sukun) plus the
/// superscript alef, all stripped before store lookups.
const DIACRITICS: std::ops::RangeInclusive<char> = '\u{064B}'..='\u{0652}';
const SUPERSCRIPT_ALEF: char = '\u{0670}';

/// The definite-article prefix ("the").
const DEFINITE_ARTICLE: &str = "ال";

/// True when `text` is a non-empty run of Arabic-script code points.
///
/// This is the transport-side input gate: digits, Latin letters,
/// punctuation and whitespace all fail it, so the pipeline only ever
/// sees bare Arabic words.
pub fn is_arabic_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}

/// Pure orthographic canonicalization: NFC, strip diacritics, then
/// strip a single leading definite article.
pub fn normalize_orthography(word: &str) -> String {
    let dediacritized: String = word
        .nfc()
        .filter(|c| !DIACRITICS.contains(c) && *c != SUPERSCRIPT_ALEF)
        .collect();

    match dediacritized.strip_prefix(DEFINITE_ARTICLE) {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => dediacritized,
    }
}

/// Full two-stage canonicalization used for store keys: ask the oracle
/// for the base/singular form first (fail-open), then normalize the
/// result orthographically. Only the second stage is deterministic.
pub async fn canonical_key(generator: &dyn Generator, word: &str) -> String {
    let base = generator.base_form(word).await;
    normalize_orthography(&base)
}
