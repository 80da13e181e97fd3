//! Classical Nahuatl orthography to IPA

use super::WORD_END;
use phonoscribe_core::{
    CasePolicy, CorrespondenceTable, Edit, PhoneSet, Pipeline, RulePass, Segments, Word,
};
use std::sync::LazyLock;

static GRAPHEMES: LazyLock<CorrespondenceTable> = LazyLock::new(|| {
    CorrespondenceTable::from_pairs(&[
        ("cu", "kʷ"),
        ("uc", "kʷ"),
        ("tl", "t͡ɬ"),
        ("hu", "w"),
        ("uh", "w"),
        ("ch", "ʧ"),
        ("tz", "ʦ"),
        ("qu", "k"),
        ("ce", "se"),
        ("cē", "seː"),
        ("ci", "si"),
        ("cī", "siː"),
        ("ā", "aː"),
        ("ē", "eː"),
        ("ī", "iː"),
        ("ō", "oː"),
        ("y", "j"),
        ("z", "s"),
        ("x", "ʃ"),
        ("h", "ʔ"),
        ("c", "k"),
    ])
});

/// `t͡ɬ` and `kʷ` are caught by their first segment
const VOICELESS: PhoneSet = PhoneSet::new(&['p', 't', 'k', 'ʔ', 's', 'ʃ', 'ʧ', 'ʦ', 'h']);

fn map_graphemes(word: &str) -> Segments {
    GRAPHEMES.map(word)
}

/// Sonorants devoice before a voiceless consonant and at the end of a word
fn devoice_sonorants(word: &mut Word) {
    word.rewrite(|w| {
        let devoicing = match w.next() {
            None => true,
            Some(next) => VOICELESS.contains(next) || WORD_END.contains(next),
        };
        match w.current() {
            'm' | 'n' if devoicing => Edit::Append("\u{0325}"),
            'l' if devoicing => Edit::Replace('ɬ'),
            'j' if devoicing => Edit::Replace('ʃ'),
            'w' if devoicing => Edit::Replace('ʍ'),
            _ => Edit::Keep,
        }
    });
}

static PASSES: &[RulePass<()>] = &[RulePass::word("sonorant devoicing", devoice_sonorants)];

/// Nahuatl pipeline
pub static PIPELINE: Pipeline<()> =
    Pipeline::new("nahuatl", map_graphemes, CasePolicy::Lowercase, PASSES);

/// Transcribe Nahuatl text to IPA
pub fn transcribe(text: &str) -> String {
    PIPELINE.run(text, &())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digraphs() {
        assert_eq!(transcribe("nahuatl"), "nawat͡ɬ");
        assert_eq!(transcribe("xochitl"), "ʃoʧit͡ɬ");
        assert_eq!(transcribe("calli"), "kalli");
    }

    #[test]
    fn test_devoicing_before_voiceless() {
        assert_eq!(transcribe("quetzalcoatl"), "keʦaɬkoat͡ɬ");
        assert_eq!(transcribe("cuauhtli"), "kʷaʍt͡ɬi");
    }

    #[test]
    fn test_final_devoicing_through_punctuation() {
        assert_eq!(transcribe("nican"), "nikan\u{0325}");
        assert_eq!(transcribe("nican."), "nikan\u{0325}.");
    }

    #[test]
    fn test_long_vowels() {
        assert_eq!(transcribe("yōlotl"), "joːlot͡ɬ");
        assert_eq!(transcribe("Cē"), "seː");
    }
}
