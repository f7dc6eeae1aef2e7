use serde::{Deserialize, Serialize};

/// Placeholder for a field the oracle could not fill ("not available").
/// Distinct from an empty string: it is written to the store verbatim.
pub const SENTINEL: &str = "غير متوفر";

/// One fully-resolved word profile. The store's primary key is `word`;
/// every other field always carries either a real value or [`SENTINEL`].
/// Records are append-only and never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalRecord {
    pub word: String,
    pub cefr_level: String,
    pub field: String,
    pub part_of_speech: String,
    pub lemma: String,
    pub definition: String,
    pub synonyms: String,
    pub antonyms: String,
    pub phrase_example: String,
    pub context: String,
}

impl LexicalRecord {
    /// Record with every field defaulted to the sentinel.
    pub fn sparse(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            cefr_level: SENTINEL.to_string(),
            field: SENTINEL.to_string(),
            part_of_speech: SENTINEL.to_string(),
            lemma: SENTINEL.to_string(),
            definition: SENTINEL.to_string(),
            synonyms: SENTINEL.to_string(),
            antonyms: SENTINEL.to_string(),
            phrase_example: SENTINEL.to_string(),
            context: SENTINEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_record_fills_every_field_with_sentinel() {
        let record = LexicalRecord::sparse("كتاب");

        assert_eq!(record.word, "كتاب");
        for value in [
            &record.cefr_level,
            &record.field,
            &record.part_of_speech,
            &record.lemma,
            &record.definition,
            &record.synonyms,
            &record.antonyms,
            &record.phrase_example,
            &record.context,
        ] {
            assert_eq!(value, SENTINEL);
        }
    }
}
