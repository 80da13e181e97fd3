//! Belarusian Cyrillic to IPA

use super::{gemination_harmony, is_apostrophe, last_sound_index, strip_punctuation};
use phonoscribe_core::{
    marks, CasePolicy, CorrespondenceTable, Edit, PhonePairs, PhoneSet, Pipeline, RulePass,
    Segments, Word,
};
use std::sync::LazyLock;

static GRAPHEMES: LazyLock<CorrespondenceTable> = LazyLock::new(|| {
    CorrespondenceTable::from_pairs(&[
        ("дз", "ʣ"),
        ("дж", "ʤ"),
        ("а", "a"),
        ("б", "b"),
        ("в", "v"),
        ("г", "ʁ"),
        ("д", "d"),
        ("е", "ʲe"),
        ("ё", "ʲɵ"),
        ("ж", "ʐ"),
        ("з", "z"),
        ("і", "ʲi"),
        ("й", "j"),
        ("к", "k"),
        ("л", "l"),
        ("м", "m"),
        ("н", "n"),
        ("о", "o"),
        ("п", "p"),
        ("р", "r"),
        ("с", "s"),
        ("т", "t"),
        ("у", "u"),
        ("ў", "w"),
        ("ф", "f"),
        ("х", "x"),
        ("ц", "ʦ"),
        ("ч", "ʧ"),
        ("ш", "ʂ"),
        ("ы", "ɨ"),
        ("ь", "ʲ"),
        ("э", "ɛ"),
        ("ю", "ʲʉ"),
        ("я", "ʲæ"),
    ])
});

const VOWELS: PhoneSet = PhoneSet::new(&['a', 'æ', 'ɛ', 'e', 'ɨ', 'i', 'o', 'ɵ', 'u', 'ʉ', 'ʌ']);

/// Voiced obstruent to voiceless partner; `ʁ` devoices by taking a ring
/// below instead
const DEVOICING: PhonePairs = PhonePairs::new(&[
    ('b', 'p'),
    ('v', 'f'),
    ('d', 't'),
    ('ʐ', 'ʂ'),
    ('z', 's'),
    ('ʣ', 'ʦ'),
    ('ʤ', 'ʧ'),
]);

const OBSTRUENTS: PhoneSet = PhoneSet::new(&[
    'b', 'v', 'ʁ', 'd', 'ʐ', 'z', 'ʣ', 'ʤ', 'p', 'f', 't', 'ʂ', 's', 'ʦ', 'ʧ', 'k',
]);

/// Never palatalized by a following soft obstruent
const HARD: PhoneSet = PhoneSet::new(&['ʂ', 'ʐ', 'ʧ', 'ʤ']);

fn map_graphemes(word: &str) -> Segments {
    GRAPHEMES.map(&strip_punctuation(word))
}

fn palatalize(word: &mut Word) {
    gemination_harmony(word);
    word.rewrite(|w| match w.current() {
        'ʁ' if w.next_is(marks::PALATAL) => Edit::Replace('ɣ'),
        // r has no soft counterpart
        marks::PALATAL if w.prev_is('r') => Edit::Delete,
        _ => Edit::Keep,
    });
    if word.first() == Some(marks::PALATAL) {
        word.set(0, 'j');
    }
}

fn mark_stress(word: &mut Word) {
    word.rewrite(|w| match w.current() {
        marks::ACUTE if VOWELS.holds(w.prev()) => Edit::Delete,
        ch if VOWELS.contains(ch) && w.next_is(marks::ACUTE) => Edit::Prepend("ˈ"),
        _ => Edit::Keep,
    });
}

/// Akanye: `a` two or more vowels before the stress becomes `ʌ`
fn reduce_vowels(word: &mut Word) {
    let Some(stress) = word.position(marks::STRESS) else {
        return;
    };
    let mut count = 0;
    for j in (0..stress).rev() {
        match word.get(j) {
            Some(ch) if VOWELS.contains(ch) => {
                count += 1;
                if ch == 'a' && count >= 2 {
                    word.set(j, 'ʌ');
                }
            }
            _ => {}
        }
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

/// Devoice `word[i]` in place
fn devoice_at(word: &mut Word, i: usize) {
    match word.get(i) {
        Some('ʁ') if word.get(i + 1) != Some(marks::VOICELESS_BELOW) => {
            word.insert(i + 1, marks::VOICELESS_BELOW)
        }
        Some(ch) => word.set(i, DEVOICING.forward_or_keep(ch)),
        None => {}
    }
}

/// Voice `word[i]` in place
fn voice_at(word: &mut Word, i: usize) {
    match word.get(i) {
        Some('ʁ') if word.get(i + 1) == Some(marks::VOICELESS_BELOW) => {
            word.remove(i + 1);
        }
        Some(ch) => word.set(i, DEVOICING.backward_or_keep(ch)),
        None => {}
    }
}

fn is_voiced_at(word: &Word, i: usize) -> bool {
    match word.get(i) {
        Some('ʁ') => word.get(i + 1) != Some(marks::VOICELESS_BELOW),
        Some(ch) => DEVOICING.is_left(ch),
        None => false,
    }
}

/// The last sound devoices, looking through a final `ʲ`
fn devoice_final(word: &mut Word) {
    let Some(mut last) = last_sound_index(word) else {
        return;
    };
    if word.get(last) == Some(marks::PALATAL) {
        let Some(before) = last.checked_sub(1) else {
            return;
        };
        last = before;
    }
    devoice_at(word, last);
}

/// Obstruent clusters agree in voicing and, unless hard, in palatalization
/// with their last member (`v` included, so `св` → `zv`)
fn assimilate_obstruents(word: &mut Word) {
    for i in (0..word.len()).rev() {
        let Some(ch) = word.get(i).filter(|&ch| OBSTRUENTS.contains(ch)) else {
            continue;
        };
        let mut end = i;
        if ch == 'ʁ' && word.get(i + 1) == Some(marks::VOICELESS_BELOW) {
            end += 1;
        }
        let soft = word.get(end + 1) == Some(marks::PALATAL);
        let j = if soft { end + 2 } else { end + 1 };
        if !word.get(j).is_some_and(|n| OBSTRUENTS.contains(n)) {
            continue;
        }
        let next_end = if word.get(j + 1) == Some(marks::VOICELESS_BELOW) {
            j + 1
        } else {
            j
        };
        let next_soft = word.get(next_end + 1) == Some(marks::PALATAL);
        if is_voiced_at(word, j) {
            voice_at(word, i);
        } else {
            devoice_at(word, i);
        }
        if next_soft && !soft && !HARD.contains(ch) {
            let after = if word.get(i + 1) == Some(marks::VOICELESS_BELOW) {
                i + 2
            } else {
                i + 1
            };
            word.insert(after, marks::PALATAL);
        }
    }
}

fn remove_apostrophes(word: &mut Word) {
    word.retain(|ch| !is_apostrophe(ch));
}

static PASSES: &[RulePass<()>] = &[
    RulePass::word("palatalization", palatalize),
    RulePass::word("stress", mark_stress),
    RulePass::word("akanye", reduce_vowels),
    RulePass::word("soft vowels", adjust_soft_vowels),
    RulePass::word("final devoicing", devoice_final),
    RulePass::word("obstruent assimilation", assimilate_obstruents),
    RulePass::word("apostrophes", remove_apostrophes),
];

/// Belarusian pipeline
pub static PIPELINE: Pipeline<()> =
    Pipeline::new("belarusian", map_graphemes, CasePolicy::Lowercase, PASSES);

/// Transcribe Belarusian text to IPA
///
/// Stress, and with it akanye, is only marked where the input carries a
/// combining acute on the stressed vowel (`галава́`).
pub fn transcribe(text: &str) -> String {
    PIPELINE.run(text, &())
}
