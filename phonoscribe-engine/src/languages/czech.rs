//! Czech orthography to IPA
//!
//! `ř`, `ě`, `y` and `ý` leave the mapper untouched: palatalization needs to
//! see `ě` and the original `y`/`i` contrast, and `ř` keeps its own voicing
//! behaviour (it assimilates but never triggers) until the final
//! realization pass turns it into `r̝`.

use super::last_sound_index;
use crate::options::CzechOptions;
use phonoscribe_core::{
    marks, CasePolicy, CorrespondenceTable, Edit, PhonePairs, PhoneSet, Pipeline, RulePass,
    Segments, Word,
};
use std::sync::LazyLock;

static GRAPHEMES: LazyLock<CorrespondenceTable> = LazyLock::new(|| {
    CorrespondenceTable::from_pairs(&[
        ("au", "au̯"),
        ("eu", "ɛu̯"),
        ("ou", "ou̯"),
        ("ch", "x"),
        ("dz", "ʣ"),
        ("dž", "ʤ"),
        ("qu", "kv"),
        ("nk", "ŋk"),
        ("ng", "ŋɡ"),
        ("á", "aː"),
        ("e", "ɛ"),
        ("é", "ɛː"),
        ("i", "ɪ"),
        ("í", "iː"),
        ("ó", "oː"),
        ("ú", "uː"),
        ("ů", "uː"),
        ("c", "ʦ"),
        ("č", "ʧ"),
        ("ď", "ɟ"),
        ("g", "ɡ"),
        ("h", "ɦ"),
        ("ň", "ɲ"),
        ("š", "ʃ"),
        ("ť", "c"),
        ("w", "v"),
        ("x", "ks"),
        ("ž", "ʒ"),
    ])
});

const VOWELS: PhoneSet = PhoneSet::new(&['a', 'i', 'ɛ', 'ɪ', 'o', 'u']);

const OBSTRUENTS: PhoneSet = PhoneSet::new(&[
    'b', 'c', 'd', 'f', 'ɡ', 'k', 'p', 's', 't', 'v', 'x', 'z', 'ɟ', 'ɦ', 'ʃ', 'ʒ', 'ʦ', 'ʧ', 'ř',
    'ʣ', 'ʤ',
]);

const CONSONANTS: PhoneSet = PhoneSet::new(&[
    'b', 'c', 'd', 'f', 'ɡ', 'k', 'p', 's', 't', 'v', 'x', 'z', 'ɟ', 'ɦ', 'ʃ', 'ʒ', 'ʦ', 'ʧ', 'ř',
    'ʣ', 'ʤ', 'm', 'n', 'ɲ', 'ŋ', 'r', 'l', 'j',
]);

/// Voiced obstruent to voiceless partner; `ř` is handled separately
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

const PALATALS: PhonePairs = PhonePairs::new(&[('d', 'ɟ'), ('t', 'c'), ('n', 'ɲ')]);

const FRONT: PhoneSet = PhoneSet::new(&['ě', 'i', 'ɪ']);

const SYLLABIC_SONORANTS: PhoneSet = PhoneSet::new(&['r', 'l', 'm', 'n']);

fn map_graphemes(word: &str) -> Segments {
    GRAPHEMES.map(word)
}

fn devoice(ch: char) -> Edit {
    match ch {
        'ř' => Edit::Append("\u{030A}"),
        _ => Edit::replace_or_keep(DEVOICING.forward(ch)),
    }
}

fn is_voiceless(ch: char) -> bool {
    DEVOICING.is_right(ch)
}

/// d t n soften before ě/i; ě, y and ý resolve to plain vowels
fn palatalize(word: &mut Word) {
    word.rewrite(|w| {
        if FRONT.holds(w.next()) {
            Edit::replace_or_keep(PALATALS.forward(w.current()))
        } else {
            Edit::Keep
        }
    });
    word.rewrite(|w| match w.current() {
        'y' => Edit::Replace('ɪ'),
        'ý' => Edit::ReplaceWith("iː"),
        'ě' => match w.prev() {
            Some('m') => Edit::ReplaceWith("ɲɛ"),
            Some('b' | 'p' | 'f' | 'v') => Edit::ReplaceWith("jɛ"),
            _ => Edit::Replace('ɛ'),
        },
        _ => Edit::Keep,
    });
}

fn devoice_final(word: &mut Word) {
    let Some(last) = last_sound_index(word) else {
        return;
    };
    match word.get(last) {
        Some('ř') => word.insert(last + 1, marks::VOICELESS_ABOVE),
        Some(ch) => {
            if let Some(voiceless) = DEVOICING.forward(ch) {
                word.set(last, voiceless);
            }
        }
        None => {}
    }
}

/// Obstruent clusters take the voicing of their last member; `v` and `ř`
/// undergo but never trigger. Afterwards `ř` devoices after a voiceless
/// segment.
fn assimilate_voicing(word: &mut Word) {
    word.rewrite(|w| {
        let current = w.current();
        match w.next() {
            Some(next)
                if OBSTRUENTS.contains(current)
                    && OBSTRUENTS.contains(next)
                    && !matches!(next, 'v' | 'ř') =>
            {
                if is_voiceless(next) {
                    devoice(current)
                } else {
                    Edit::replace_or_keep(DEVOICING.backward(current))
                }
            }
            _ => Edit::Keep,
        }
    });
    word.rewrite(|w| {
        let follows_voiceless = w.prev().is_some_and(is_voiceless);
        if w.current() == 'ř' && follows_voiceless && !w.next_is(marks::VOICELESS_ABOVE) {
            Edit::Append("\u{030A}")
        } else {
            Edit::Keep
        }
    });
}

fn mark_syllabic(word: &mut Word) {
    word.rewrite(|w| {
        let current = w.current();
        if !SYLLABIC_SONORANTS.contains(current) {
            return Edit::Keep;
        }
        let next = w.next();
        // nasal + sonorant clusters simplify instead of becoming syllabic
        if matches!(current, 'm' | 'n') && matches!(next, Some('m' | 'n' | 'l' | 'r' | 'ɲ')) {
            return Edit::Keep;
        }
        let closed_right = next.map_or(true, |n| CONSONANTS.contains(n));
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
        'ř' => Edit::ReplaceWith("r\u{031D}"),
        't' if matches!(w.next(), Some('ʦ' | 'ʧ')) => Edit::Delete,
        _ => Edit::Keep,
    });
}

/// Stress falls on the first nucleus: a vowel or a syllabic consonant
fn mark_stress(word: &mut Word) {
    let nucleus = (0..word.len()).find(|&i| {
        word.get(i).is_some_and(|ch| VOWELS.contains(ch))
            || word.get(i + 1) == Some(marks::SYLLABIC)
    });
    if let Some(index) = nucleus {
        word.insert(index, marks::STRESS);
    }
}

fn stress_enabled(options: &CzechOptions) -> bool {
    options.stress
}

static PASSES: &[RulePass<CzechOptions>] = &[
    RulePass::word("palatalization", palatalize),
    RulePass::word("final devoicing", devoice_final),
    RulePass::word("voicing assimilation", assimilate_voicing),
    RulePass::word("syllabic consonants", mark_syllabic),
    RulePass::word("realization", realize),
    RulePass::word("stress", mark_stress).when(stress_enabled),
];

/// Czech pipeline
pub static PIPELINE: Pipeline<CzechOptions> =
    Pipeline::new("czech", map_graphemes, CasePolicy::Lowercase, PASSES);

/// Transcribe Czech text to IPA
pub fn transcribe(text: &str, options: &CzechOptions) -> String {
    PIPELINE.run(text, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cz(text: &str) -> String {
        transcribe(text, &CzechOptions::default())
    }

    #[test]
    fn test_stress_before_first_vowel() {
        assert_eq!(cz("pes"), "pˈɛs");
        assert_eq!(transcribe("pes", &CzechOptions { stress: false }), "pɛs");
    }

    #[test]
    fn test_final_devoicing() {
        assert_eq!(cz("led"), "lˈɛt");
        assert_eq!(cz("hrad."), "ɦrˈat.");
    }

    #[test]
    fn test_palatalization_and_e_caron() {
        assert_eq!(cz("děti"), "ɟˈɛcɪ");
        assert_eq!(cz("město"), "mɲˈɛsto");
    }

    #[test]
    fn test_regressive_voicing() {
        assert_eq!(cz("kde"), "ɡdˈɛ");
        assert_eq!(cz("vždy"), "vʒdˈɪ");
    }

    #[test]
    fn test_syllabic_r_takes_stress() {
        assert_eq!(cz("krk"), "kˈr\u{0329}k");
        assert_eq!(cz("chleba"), "xlˈɛba");
    }

    #[test]
    fn test_r_caron_realization() {
        assert_eq!(cz("řeka"), "r\u{031D}ˈɛka");
        // devoiced after a voiceless stop
        assert_eq!(cz("tři"), "tr\u{031D}\u{030A}ˈɪ");
    }

    #[test]
    fn test_multiple_words() {
        assert_eq!(cz("kde je"), "ɡdˈɛ jˈɛ");
    }
}
