use crate::labels;
use crate::record::{LexicalRecord, SENTINEL};

/// Parse the oracle's free-text analysis into a record.
///
/// Each field is resolved independently: the first line starting with
/// its label at a token boundary (the label immediately followed by a
/// colon) wins, and the value is whatever follows the `": "` delimiter.
/// A missing line, or a line without the delimiter, yields the
/// sentinel. Malformed input can never fail — the worst case is an
/// all-sentinel record.
pub fn parse_analysis(word: &str, raw_text: &str) -> LexicalRecord {
    let lines: Vec<&str> = raw_text.lines().map(str::trim).collect();

    LexicalRecord {
        word: word.to_string(),
        cefr_level: labeled_value(&lines, labels::CEFR_LEVEL),
        field: labeled_value(&lines, labels::FIELD),
        part_of_speech: labeled_value(&lines, labels::PART_OF_SPEECH),
        lemma: labeled_value(&lines, labels::LEMMA),
        definition: labeled_value(&lines, labels::DEFINITION),
        synonyms: labeled_value(&lines, labels::SYNONYMS),
        antonyms: labeled_value(&lines, labels::ANTONYMS),
        phrase_example: labeled_value(&lines, labels::PHRASE_EXAMPLE),
        context: labeled_value(&lines, labels::CONTEXT),
    }
}

fn labeled_value(lines: &[&str], label: &str) -> String {
    for line in lines {
        let Some(rest) = line.strip_prefix(label) else {
            continue;
        };
        // Token boundary: the label must be followed by the colon,
        // otherwise a label that textually extends this one could be
        // mis-routed here.
        if !rest.starts_with(':') {
            continue;
        }
        return match rest.strip_prefix(": ") {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => SENTINEL.to_string(),
        };
    }
    SENTINEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels;

    fn full_response(word: &str) -> String {
        format!(
            "{}: {word}\n\
             {}: B1\n\
             {}: تعليم\n\
             {}: اسم\n\
             {}: كتب\n\
             {}: مجموعة أوراق مطبوعة تحمل نصًا\n\
             {}: مؤلف, مصنف\n\
             {}: غير متوفر\n\
             {}: قرأت كتابًا ممتعًا\n\
             {}: في المدرسة والمكتبة",
            labels::WORD,
            labels::CEFR_LEVEL,
            labels::FIELD,
            labels::PART_OF_SPEECH,
            labels::LEMMA,
            labels::DEFINITION,
            labels::SYNONYMS,
            labels::ANTONYMS,
            labels::PHRASE_EXAMPLE,
            labels::CONTEXT,
        )
    }

    #[test]
    fn parses_a_complete_ten_line_response() {
        let record = parse_analysis("كتاب", &full_response("كتاب"));

        assert_eq!(record.word, "كتاب");
        assert_eq!(record.cefr_level, "B1");
        assert_eq!(record.field, "تعليم");
        assert_eq!(record.part_of_speech, "اسم");
        assert_eq!(record.lemma, "كتب");
        assert_eq!(record.synonyms, "مؤلف, مصنف");
        assert_eq!(record.antonyms, SENTINEL);
        assert_eq!(record.phrase_example, "قرأت كتابًا ممتعًا");
        assert_eq!(record.context, "في المدرسة والمكتبة");
    }

    #[test]
    fn missing_lines_become_sentinels_without_touching_the_rest() {
        // Drop three of the labeled lines: lemma, synonyms, context.
        let raw = format!(
            "{}: A2\n{}: طب\n{}: فعل\n{}: جملة توضيحية\n{}: ضد واحد\n{}: مثال قصير",
            labels::CEFR_LEVEL,
            labels::FIELD,
            labels::PART_OF_SPEECH,
            labels::DEFINITION,
            labels::ANTONYMS,
            labels::PHRASE_EXAMPLE,
        );
        let record = parse_analysis("درس", &raw);

        assert_eq!(record.lemma, SENTINEL);
        assert_eq!(record.synonyms, SENTINEL);
        assert_eq!(record.context, SENTINEL);

        assert_eq!(record.cefr_level, "A2");
        assert_eq!(record.field, "طب");
        assert_eq!(record.part_of_speech, "فعل");
        assert_eq!(record.definition, "جملة توضيحية");
        assert_eq!(record.antonyms, "ضد واحد");
        assert_eq!(record.phrase_example, "مثال قصير");
    }

    #[test]
    fn line_without_delimiter_falls_back_to_sentinel() {
        let raw = format!("{}:B1", labels::CEFR_LEVEL);
        let record = parse_analysis("كتاب", &raw);
        assert_eq!(record.cefr_level, SENTINEL);
    }

    #[test]
    fn first_matching_line_wins() {
        let raw = format!(
            "{}: B1\n{}: C2",
            labels::CEFR_LEVEL,
            labels::CEFR_LEVEL
        );
        let record = parse_analysis("كتاب", &raw);
        assert_eq!(record.cefr_level, "B1");
    }

    #[test]
    fn garbage_input_yields_an_all_sentinel_record() {
        let record = parse_analysis("كتاب", "no labels here\njust noise");
        assert_eq!(record, LexicalRecord::sparse("كتاب"));
    }

    #[test]
    fn empty_oracle_sentinel_text_yields_sparse_record() {
        let record = parse_analysis("كتاب", SENTINEL);
        assert_eq!(record, LexicalRecord::sparse("كتاب"));
    }

    #[test]
    fn label_must_sit_at_a_token_boundary() {
        // A line extending a label with extra words must not bind to it.
        let raw = format!("{} الإضافي: B1", labels::CEFR_LEVEL);
        let record = parse_analysis("كتاب", &raw);
        assert_eq!(record.cefr_level, SENTINEL);
    }
}
