//! Ukrainian Cyrillic to IPA
//!
//! Soft-series letters map to a `ʲ` followed by their vowel, so that
//! palatalization is carried by the preceding consonant from the start.
//! Apostrophes survive until the last pass because they tell the
//! soft-vowel adjustment that the preceding consonant stays hard.

use super::{gemination_harmony, is_apostrophe, strip_punctuation};
use phonoscribe_core::{
    marks, CasePolicy, CorrespondenceTable, Edit, PhonePairs, PhoneSet, Pipeline, RulePass,
    Segments, Word,
};
use std::sync::LazyLock;

static GRAPHEMES: LazyLock<CorrespondenceTable> = LazyLock::new(|| {
    CorrespondenceTable::from_pairs(&[
        ("дз", "ʣ"),
        ("дж", "ʤ"),
        ("а", "ɑ"),
        ("б", "b"),
        ("в", "ʋ"),
        ("г", "ɦ"),
        ("ґ", "ɡ"),
        ("д", "d"),
        ("е", "ɛ"),
        ("є", "ʲɛ"),
        ("ж", "ʒ"),
        ("з", "z"),
        ("и", "ɪ"),
        ("і", "ʲi"),
        ("ї", "ji"),
        ("й", "j"),
        ("к", "k"),
        ("л", "ɫ"),
        ("м", "m"),
        ("н", "n"),
        ("о", "ɔ"),
        ("п", "p"),
        ("р", "r"),
        ("с", "s"),
        ("т", "t"),
        ("у", "u"),
        ("ф", "f"),
        ("х", "x"),
        ("ц", "ʦ"),
        ("ч", "ʧ"),
        ("ш", "ʃ"),
        ("щ", "ʃʧ"),
        ("ь", "ʲ"),
        ("ю", "ʲu"),
        ("я", "ʲɑ"),
    ])
});

const VOWELS: PhoneSet = PhoneSet::new(&['ɑ', 'ɐ', 'ɛ', 'e', 'ɪ', 'i', 'ɔ', 'o', 'u', 'ʊ']);

const VOICELESS: PhoneSet = PhoneSet::new(&['k', 'p', 's', 't', 'f', 'x', 'ʦ', 'ʧ', 'ʃ']);

/// Unstressed reflexes: `ɑ u` reduce everywhere, `ɔ ɛ` only next to a
/// stressed `u`/`i`
const REDUCTION: PhonePairs =
    PhonePairs::new(&[('ɑ', 'ɐ'), ('u', 'ʊ'), ('ɔ', 'o'), ('ɛ', 'e')]);

fn map_graphemes(word: &str) -> Segments {
    GRAPHEMES.map(&strip_punctuation(word))
}

fn palatalize(word: &mut Word) {
    gemination_harmony(word);
    word.rewrite(|w| match w.current() {
        'ɫ' if w.next_is(marks::PALATAL) => Edit::Replace('l'),
        'r' if w.next_is(marks::PALATAL) => Edit::Replace('ɾ'),
        _ => Edit::Keep,
    });
    if word.first() == Some(marks::PALATAL) {
        if word.get(1) == Some('i') {
            word.remove(0);
        } else {
            word.set(0, 'j');
        }
    }
}

fn allophony(word: &mut Word) {
    word.rewrite(|w| match w.current() {
        'ʋ' if w.is_at_end() => Edit::ReplaceWith("u̯"),
        'ʋ' if matches!(w.next(), Some('ɔ' | 'u')) => Edit::Replace('w'),
        'ʋ' if !VOWELS.holds(w.prev()) && VOICELESS.holds(w.next()) => Edit::Replace('ʍ'),
        'j' if w.is_at_end() => Edit::ReplaceWith("i̯"),
        'ɦ' if w.next_is('k') => Edit::Replace('x'),
        _ => Edit::Keep,
    });
}

/// Only words with a marked stress are reduced
fn reduce_vowels(word: &mut Word) {
    if !word.contains(marks::ACUTE) {
        return;
    }
    word.rewrite(|w| match w.current() {
        marks::ACUTE => Edit::Delete,
        ch if VOWELS.contains(ch) && w.next_is(marks::ACUTE) => Edit::Prepend("ˈ"),
        ch @ ('ɑ' | 'u') => Edit::replace_or_keep(REDUCTION.forward(ch)),
        _ => Edit::Keep,
    });
    harmonize_before_stress(word);
}

/// The nearest `ɔ` before a stressed `u` (or `ɛ` before a stressed `i`)
/// raises
fn harmonize_before_stress(word: &mut Word) {
    let stressed = |target: char| {
        (0..word.len())
            .find(|&i| word.get(i) == Some(marks::STRESS) && word.get(i + 1) == Some(target))
    };
    let (stress, target) = match (stressed('u'), stressed('i')) {
        (Some(index), _) => (index, 'ɔ'),
        (None, Some(index)) => (index, 'ɛ'),
        (None, None) => return,
    };
    if let Some(j) = (0..stress).rev().find(|&j| word.get(j) == Some(target)) {
        word.set(j, REDUCTION.forward_or_keep(target));
    }
}

fn adjust_soft_vowels(word: &mut Word) {
    word.rewrite(|w| {
        if w.current() != marks::PALATAL || w.is_at_start() {
            return Edit::Keep;
        }
        let between_vowels =
            VOWELS.holds(w.prev()) && VOWELS.holds(w.next_skipping(marks::STRESS));
        if between_vowels || w.prev().is_some_and(is_apostrophe) {
            Edit::Replace('j')
        } else {
            Edit::Keep
        }
    });
}

fn remove_apostrophes(word: &mut Word) {
    word.retain(|ch| !is_apostrophe(ch));
}

static PASSES: &[RulePass<()>] = &[
    RulePass::word("palatalization", palatalize),
    RulePass::word("allophony", allophony),
    RulePass::word("vowel reduction", reduce_vowels),
    RulePass::word("soft vowels", adjust_soft_vowels),
    RulePass::word("apostrophes", remove_apostrophes),
];

/// Ukrainian pipeline
pub static PIPELINE: Pipeline<()> =
    Pipeline::new("ukrainian", map_graphemes, CasePolicy::Lowercase, PASSES);

/// Transcribe Ukrainian text to IPA
///
/// Vowel reduction needs the stressed vowel marked with a combining acute
/// (`голова́`); unmarked words keep their full vowels.
pub fn transcribe(text: &str) -> String {
    PIPELINE.run(text, &())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmarked_word_unreduced() {
        assert_eq!(transcribe("мама"), "mɑmɑ");
    }

    #[test]
    fn test_stress_and_reduction() {
        assert_eq!(transcribe("голова́"), "ɦɔɫɔʋˈɑ");
        assert_eq!(transcribe("ї́жак"), "jˈiʒɐk");
    }

    #[test]
    fn test_raising_before_stressed_u() {
        assert_eq!(transcribe("зозу́ля"), "zozˈulʲɐ");
    }

    #[test]
    fn test_v_allophones() {
        assert_eq!(transcribe("ву́хо"), "wˈuxɔ");
        assert_eq!(transcribe("все"), "ʍsɛ");
        assert_eq!(transcribe("любов"), "lʲubɔu̯");
    }

    #[test]
    fn test_word_initial_soft_sign() {
        assert_eq!(transcribe("яблуко"), "jɑbɫukɔ");
        assert_eq!(transcribe("і"), "i");
    }

    #[test]
    fn test_geminate_palatalization() {
        assert_eq!(transcribe("життя́"), "ʒɪtʲtʲˈɑ");
    }

    #[test]
    fn test_apostrophe_blocks_palatalization() {
        assert_eq!(transcribe("сім'я́"), "sʲimjˈɑ");
    }

    #[test]
    fn test_final_glide_and_h_before_k() {
        assert_eq!(transcribe("край"), "krɑi̯");
        assert_eq!(transcribe("легко"), "ɫɛxkɔ");
    }
}
