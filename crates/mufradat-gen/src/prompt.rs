//! Fixed Arabic prompt templates for the two oracle contracts. The
//! analysis template requests one labeled line per record field; the
//! labels here must stay in sync with [`mufradat_core::labels`].

/// Prompt asking for the base/singular form of a possibly definite or
/// plural word, as a single word with no explanation.
pub fn base_form(word: &str) -> String {
    format!(
        "الكلمة: \"{word}\"\n\
         هل الكلمة معرفة بـ \"ال\" أو جمع؟ إذا كانت كذلك، أعطني الكلمة بصيغتها الأساسية أو المفردة فقط، بدون شرح إضافي.\n\
         فقط الكلمة المفردة أو الأصلية.\n\
         إذا كانت الكلمة أصلية فعلًا، أعد نفس الكلمة فقط.\n"
    )
}

/// Prompt asking for the full ten-line labeled analysis.
pub fn analysis(word: &str) -> String {
    format!(
        "أعطني تحليلًا دقيقًا ومنسقًا للكلمة \"{word}\" بصيغة واضحة، حيث كل معلومة تكون في سطر مستقل وفقًا للتنسيق التالي:\n\
         كلمة: {word}\n\
         مستوى CEFR: (A1, A2, B1, B2, C1, C2 فقط)\n\
         المجال: (حدد مجالًا واحدًا فقط مثل: قانون، طب، هندسة...)\n\
         نوع الكلمة: (اسم، فعل، صفة، حال...)\n\
         الجذر: (اكتب الجذر فقط، بدون شرح)\n\
         التعريف: (جملة واحدة فقط تشرح المعنى بوضوح)\n\
         المرادفات: (قائمة مفصولة بفواصل)\n\
         الأضداد: (قائمة مفصولة بفواصل، أو اكتب \"غير متوفر\" إذا لم يكن هناك)\n\
         مثال استخدام: (جملة قصيرة توضح استخدام الكلمة)\n\
         السياق: (وضح كيف تُستخدم الكلمة في سياق معين، مثل: في المدرسة، في السوق، في الحياة اليومية...)\n\
         **مهم**: لا تضف أي شرح زائد خارج هذا التنسيق.\n"
    )
}

#[cfg(test)]
mod tests {
    use mufradat_core::labels;

    use super::*;

    #[test]
    fn both_prompts_embed_the_word() {
        assert!(base_form("كتاب").contains("كتاب"));
        assert!(analysis("كتاب").contains("كتاب"));
    }

    #[test]
    fn analysis_prompt_names_every_record_label() {
        let prompt = analysis("كتاب");
        assert!(prompt.contains(labels::WORD));
        for label in labels::ANALYSIS_LABELS {
            assert!(prompt.contains(label), "missing label {label}");
        }
    }
}
