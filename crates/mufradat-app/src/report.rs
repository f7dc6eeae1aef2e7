use mufradat_core::labels;
use mufradat_core::record::LexicalRecord;

/// Render a record as the fixed analysis block sent back to the user.
pub fn format_report(record: &LexicalRecord) -> String {
    format!(
        "=== نتيجة التحليل ===\n\
         {}: {}\n\
         {}: {}\n\
         {}: {}\n\
         {}: {}\n\
         {}: {}\n\
         {}: {}\n\
         {}: {}\n\
         {}: {}\n\
         {}: {}\n\
         {}: {}\n\
         ========================================",
        labels::WORD,
        record.word,
        labels::CEFR_LEVEL,
        record.cefr_level,
        labels::FIELD,
        record.field,
        labels::PART_OF_SPEECH,
        record.part_of_speech,
        labels::LEMMA,
        record.lemma,
        labels::DEFINITION,
        record.definition,
        labels::SYNONYMS,
        record.synonyms,
        labels::ANTONYMS,
        record.antonyms,
        labels::PHRASE_EXAMPLE,
        record.phrase_example,
        labels::CONTEXT,
        record.context,
    )
}
