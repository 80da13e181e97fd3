//! Slovak orthography to IPA

use super::{last_sound_index, WORD_END};
use crate::options::SlovakOptions;
use phonoscribe_core::{
    marks, CasePolicy, CorrespondenceTable, Edit, PhonePairs, PhoneSet, Pipeline, RulePass,
    Segments, Word,
};
use std::sync::LazyLock;

static GRAPHEMES: LazyLock<CorrespondenceTable> = LazyLock::new(|| {
    CorrespondenceTable::from_pairs(&[
        ("ia", "ɪ̯a"),
        ("ie", "ɪ̯ɛ"),
        ("iu", "ɪ̯u"),
        ("au", "au̯"),
        ("eu", "ɛu̯"),
        ("ou", "ɔʊ̯"),
        ("ch", "x"),
        ("dz", "ʣ"),
        ("dž", "ʤ"),
        ("qu", "kv"),
        ("nk", "ŋk"),
        ("ng", "ŋɡ"),
        ("mf", "ɱf"),
        ("mv", "ɱv"),
        ("á", "aː"),
        ("ä", "æ"),
        ("e", "ɛ"),
        ("é", "ɛː"),
        ("í", "iː"),
        ("o", "ɔ"),
        ("ó", "ɔː"),
        ("ô", "ʊ̯ɔ"),
        ("ú", "uː"),
        ("c", "ʦ"),
        ("č", "ʧ"),
        ("ď", "ɟ"),
        ("g", "ɡ"),
        ("h", "ɦ"),
        ("l", "ɫ"),
        // ĺ and ŕ are always syllabic
        ("ĺ", "ɫ̩ː"),
        ("ľ", "ʎ"),
        ("ň", "ɲ"),
        ("ŕ", "r̩ː"),
        ("š", "ʃ"),
        ("ť", "c"),
        ("w", "v"),
        ("x", "ks"),
        ("ž", "ʒ"),
    ])
});

const VOWELS: PhoneSet = PhoneSet::new(&['a', 'i', 'ɛ', 'æ', 'ɔ', 'u', 'ʊ', 'ɪ']);

const OBSTRUENTS: PhoneSet = PhoneSet::new(&[
    'b', 'c', 'd', 'f', 'ɡ', 'k', 'p', 's', 't', 'v', 'x', 'z', 'ɟ', 'ɦ', 'ʃ', 'ʒ', 'ʦ', 'ʧ', 'ʣ',
    'ʤ',
]);

const CONSONANTS: PhoneSet = PhoneSet::new(&[
    'b', 'c', 'd', 'f', 'ɡ', 'k', 'p', 's', 't', 'v', 'x', 'z', 'ɟ', 'ɦ', 'ʃ', 'ʒ', 'ʦ', 'ʧ', 'ʣ',
    'ʤ', 'm', 'n', 'ɲ', 'ŋ', 'r', 'ɫ', 'ʎ', 'j', 'ʋ',
]);

const DEVOICING: PhonePairs = PhonePairs::new(&[
    ('b', 'p'),
    ('d', 't'),
    ('ɡ', 'k'),
    ('v', 'f'),
    ('z', 's'),
    ('ɦ', 'x'),
    ('ɟ', 'c'),
    ('ʒ', 'ʃ'),
    ('ʣ', 'ʦ'),
    ('ʤ', 'ʧ'),
]);

const PALATALS: PhonePairs = PhonePairs::new(&[('d', 'ɟ'), ('t', 'c'), ('n', 'ɲ'), ('ɫ', 'ʎ')]);

const FRONT: PhoneSet = PhoneSet::new(&['ɛ', 'i', 'ɪ']);

const SYLLABIC_SONORANTS: PhoneSet = PhoneSet::new(&['r', 'ɫ']);

/// Words whose dentals stay hard before front vowels
const HARD_WORDS: &[&str] = &["jɛdɛn", "tɛn", "tɛɫɛfɔːn"];

fn map_graphemes(word: &str) -> Segments {
    GRAPHEMES.map(word)
}

/// The word without trailing boundary punctuation
fn sounds(word: &Word) -> &[char] {
    let end = last_sound_index(word).map_or(0, |last| last + 1);
    &word.segments()[..end]
}

fn is_hard_word(word: &Word) -> bool {
    let core = sounds(word);
    HARD_WORDS
        .iter()
        .any(|hard| core.iter().copied().eq(hard.chars()))
}

fn palatalize(word: &mut Word) {
    if !is_hard_word(word) {
        word.rewrite(|w| {
            if FRONT.holds(w.next()) {
                Edit::replace_or_keep(PALATALS.forward(w.current()))
            } else {
                Edit::Keep
            }
        });
    }
    word.rewrite(|w| match w.current() {
        'y' => Edit::Replace('i'),
        'ý' => Edit::ReplaceWith("iː"),
        _ => Edit::Keep,
    });
}

/// The last obstruent devoices; a final `v` vocalizes instead, except for
/// the preposition itself
fn devoice_final(word: &mut Word) {
    let Some(last) = last_sound_index(word) else {
        return;
    };
    match word.get(last) {
        Some('v') => {
            if sounds(word) == ['v'] {
                return;
            }
            let after_consonant =
                last > 0 && word.get(last - 1).is_some_and(|p| CONSONANTS.contains(p));
            if after_consonant {
                word.set(last, 'ʋ');
            } else {
                word.set(last, 'ʊ');
                word.insert(last + 1, marks::NON_SYLLABIC);
            }
        }
        Some(ch) => {
            if let Some(voiceless) = DEVOICING.forward(ch) {
                word.set(last, voiceless);
            }
        }
        None => {}
    }
}

fn assimilate_voicing(word: &mut Word) {
    word.rewrite(|w| {
        let current = w.current();
        match w.next() {
            Some(next)
                if OBSTRUENTS.contains(current) && OBSTRUENTS.contains(next) && next != 'v' =>
            {
                if DEVOICING.is_right(next) {
                    Edit::replace_or_keep(DEVOICING.forward(current))
                } else {
                    Edit::replace_or_keep(DEVOICING.backward(current))
                }
            }
            _ => Edit::Keep,
        }
    });
}

fn mark_syllabic(word: &mut Word) {
    word.rewrite(|w| {
        if !SYLLABIC_SONORANTS.contains(w.current()) {
            return Edit::Keep;
        }
        let closed_right = w.next().map_or(true, |n| CONSONANTS.contains(n));
        let closed_left = w.is_at_start() || CONSONANTS.holds(w.prev());
        if closed_left && closed_right {
            Edit::Append("\u{0329}")
        } else {
            Edit::Keep
        }
    });
}

fn realize(word: &mut Word) {
    word.rewrite(|w| match w.current() {
        't' if matches!(w.next(), Some('ʦ' | 'ʧ')) => Edit::Delete,
        'v' => match w.next() {
            None => Edit::Keep,
            Some(next) if OBSTRUENTS.contains(next) || WORD_END.contains(next) => Edit::Keep,
            Some(_) => Edit::Replace('ʋ'),
        },
        _ => Edit::Keep,
    });
}

/// Vowels that are not glides, plus syllabic consonants
fn syllable_count(word: &Word) -> usize {
    (0..word.len())
        .filter(|&i| match word.get(i) {
            Some(ch) if VOWELS.contains(ch) => word.get(i + 1) != Some(marks::NON_SYLLABIC),
            Some(_) => word.get(i + 1) == Some(marks::SYLLABIC),
            None => false,
        })
        .count()
}

/// Initial stress, marked only on polysyllables
fn mark_stress(word: &mut Word) {
    if syllable_count(word) < 2 {
        return;
    }
    let nucleus = (0..word.len()).find(|&i| match word.get(i) {
        Some(ch) if VOWELS.contains(ch) => true,
        Some(ch) if SYLLABIC_SONORANTS.contains(ch) => word.get(i + 1) == Some(marks::SYLLABIC),
        _ => false,
    });
    if let Some(index) = nucleus {
        word.insert(index, marks::STRESS);
    }
}

fn stress_enabled(options: &SlovakOptions) -> bool {
    options.stress
}

static PASSES: &[RulePass<SlovakOptions>] = &[
    RulePass::word("palatalization", palatalize),
    RulePass::word("final devoicing", devoice_final),
    RulePass::word("voicing assimilation", assimilate_voicing),
    RulePass::word("syllabic consonants", mark_syllabic),
    RulePass::word("realization", realize),
    RulePass::word("stress", mark_stress).when(stress_enabled),
];

/// Slovak pipeline
pub static PIPELINE: Pipeline<SlovakOptions> =
    Pipeline::new("slovak", map_graphemes, CasePolicy::Lowercase, PASSES);

/// Transcribe Slovak text to IPA
pub fn transcribe(text: &str, options: &SlovakOptions) -> String {
    PIPELINE.run(text, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sk(text: &str) -> String {
        transcribe(text, &SlovakOptions::default())
    }

    #[test]
    fn test_monosyllables_unstressed() {
        assert_eq!(sk("pes"), "pɛs");
        assert_eq!(sk("hrad"), "ɦrat");
    }

    #[test]
    fn test_polysyllable_initial_stress() {
        assert_eq!(sk("voda"), "ʋˈɔda");
        assert_eq!(transcribe("voda", &SlovakOptions { stress: false }), "ʋɔda");
    }

    #[test]
    fn test_palatalization_and_exceptions() {
        assert_eq!(sk("dedina"), "ɟˈɛɟina");
        assert_eq!(sk("ten"), "tɛn");
        assert_eq!(sk("telefón"), "tˈɛɫɛfɔːn");
    }

    #[test]
    fn test_final_v() {
        assert_eq!(sk("krv"), "kr\u{0329}ʋ");
        assert_eq!(sk("lev."), "ʎɛʊ\u{032F}.");
        assert_eq!(sk("v dome"), "v dˈɔmɛ");
    }

    #[test]
    fn test_syllabic_l() {
        assert_eq!(sk("vlk"), "ʋɫ\u{0329}k");
    }

    #[test]
    fn test_v_before_obstruent() {
        assert_eq!(sk("pravda."), "prˈavda.");
    }

    #[test]
    fn test_glide_does_not_count_as_syllable() {
        assert_eq!(sk("stôl"), "stʊ\u{032F}ɔɫ");
    }
}
