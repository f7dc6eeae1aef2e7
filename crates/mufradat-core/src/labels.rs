//! The Arabic line labels shared by the analysis prompt, the response
//! parser, and the report formatter. One label per record field; labels
//! must stay mutually non-prefixing so the parser can match them at a
//! token boundary without ambiguity.

pub const WORD: &str = "كلمة";
pub const CEFR_LEVEL: &str = "مستوى CEFR";
pub const FIELD: &str = "المجال";
pub const PART_OF_SPEECH: &str = "نوع الكلمة";
pub const LEMMA: &str = "الجذر";
pub const DEFINITION: &str = "التعريف";
pub const SYNONYMS: &str = "المرادفات";
pub const ANTONYMS: &str = "الأضداد";
pub const PHRASE_EXAMPLE: &str = "مثال استخدام";
pub const CONTEXT: &str = "السياق";

/// Every label except [`WORD`], in response order.
pub const ANALYSIS_LABELS: [&str; 9] = [
    CEFR_LEVEL,
    FIELD,
    PART_OF_SPEECH,
    LEMMA,
    DEFINITION,
    SYNONYMS,
    ANTONYMS,
    PHRASE_EXAMPLE,
    CONTEXT,
];
