//! Bulgarian Cyrillic to IPA
//!
//! Bulgarian stress is free and unstressed vowels reduce, so reduction only
//! happens in words whose stressed vowel carries a combining acute (U+0301)
//! in the input. The same marking decides whether a word-final obstruent
//! devoices.

use crate::options::BulgarianOptions;
use phonoscribe_core::{
    marks, CasePolicy, CorrespondenceTable, Edit, PhonePairs, PhoneSet, Pipeline, RulePass,
    Segments, Text, Word, ASCII_PUNCTUATION,
};
use std::sync::LazyLock;

static GRAPHEMES: LazyLock<CorrespondenceTable> = LazyLock::new(|| {
    CorrespondenceTable::from_pairs(&[
        ("дз", "ʣ"),
        ("дж", "ʤ"),
        ("а", "a"),
        ("б", "b"),
        ("в", "v"),
        ("г", "ɡ"),
        ("д", "d"),
        ("е", "ɛ"),
        ("ж", "ʒ"),
        ("з", "z"),
        ("и", "i"),
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
        ("щ", "ʃt"),
        ("ъ", "ɤ"),
        ("ь", "j"),
        ("ю", "ju"),
        ("я", "ja"),
    ])
});

const OBSTRUENTS: PhoneSet = PhoneSet::new(&[
    'p', 'b', 't', 'd', 'c', 'ɟ', 'k', 'ɡ', 'ʦ', 'ʣ', 'ʧ', 'ʤ', 'f', 'v', 's', 'z', 'ʃ', 'ʒ', 'x',
    'ɣ',
]);

/// Consonants that absorb a following `j` as palatalization
const CONSONANTS: PhoneSet = PhoneSet::new(&[
    'p', 'b', 't', 'd', 'c', 'ɟ', 'k', 'ɡ', 'ʦ', 'ʣ', 'ʧ', 'ʤ', 'f', 'v', 's', 'z', 'ʃ', 'ʒ', 'x',
    'ɣ', 'ɫ', 'l', 'm', 'n', 'r',
]);

const DEVOICING: PhonePairs = PhonePairs::new(&[
    ('b', 'p'),
    ('d', 't'),
    ('ɡ', 'k'),
    ('ʣ', 'ʦ'),
    ('ʤ', 'ʧ'),
    ('v', 'f'),
    ('z', 's'),
    ('ʒ', 'ʃ'),
    ('ɣ', 'x'),
]);

const REDUCTION: PhonePairs = PhonePairs::new(&[('a', 'ɐ'), ('ɤ', 'ɐ'), ('ɔ', 'o')]);

const FRONT: PhoneSet = PhoneSet::new(&['i', 'ɛ', 'j']);

/// Punctuation is dropped, then `ɫ` clears to `l` before front segments
fn map_graphemes(word: &str) -> Segments {
    let letters: String = word
        .chars()
        .filter(|&ch| !ASCII_PUNCTUATION.contains(ch))
        .collect();
    let mut segments = GRAPHEMES.map(&letters);
    for i in 0..segments.len() {
        if segments[i] == 'ɫ' && FRONT.holds(segments.get(i + 1).copied()) {
            segments[i] = 'l';
        }
    }
    segments
}

/// Turn the first acute into a stress mark before its vowel and reduce the
/// other vowels; words without an acute are left as they are
fn reduce_vowels(word: &mut Word) {
    let Some(acute) = word.position(marks::ACUTE) else {
        return;
    };
    let stressed = acute.checked_sub(1);
    word.rewrite(|w| {
        let index = Some(w.index());
        match w.current() {
            marks::ACUTE => Edit::Delete,
            _ if index == stressed => Edit::Prepend("ˈ"),
            ch => Edit::replace_or_keep(REDUCTION.forward(ch)),
        }
    });
}

/// Voice or devoice `ch` to match `trigger`
fn assimilate_to(ch: char, trigger: char) -> char {
    if DEVOICING.is_left(trigger) {
        DEVOICING.backward_or_keep(ch)
    } else {
        DEVOICING.forward_or_keep(ch)
    }
}

fn triggers_assimilation(next: Option<char>) -> Option<char> {
    next.filter(|&ch| OBSTRUENTS.contains(ch) && ch != 'v')
}

/// Regressive voicing assimilation, right to left across the whole text so
/// that a cluster takes the voicing of its last member even when it spans a
/// word boundary
fn assimilate_voicing(text: &mut Text) {
    let words = text.words_mut();
    for j in (0..words.len()).rev() {
        let following = words[j + 1..]
            .iter()
            .find(|w| !w.is_empty())
            .and_then(Word::first);
        let word = &mut words[j];
        let stressed = word.contains(marks::STRESS);
        let preposition = word.is("v");
        for i in (0..word.len()).rev() {
            let Some(ch) = word.get(i).filter(|&ch| OBSTRUENTS.contains(ch)) else {
                continue;
            };
            let is_final = i + 1 == word.len();
            let next = if is_final { following } else { word.get(i + 1) };
            if let Some(trigger) = triggers_assimilation(next) {
                word.set(i, assimilate_to(ch, trigger));
            } else if is_final && stressed && !preposition {
                word.set(i, DEVOICING.forward_or_keep(ch));
            }
        }
    }
}

/// Velars soften before front vowels; `j` after a consonant becomes `ʲ`
fn palatalize(word: &mut Word) {
    word.rewrite(|w| match w.current() {
        'k' | 'ɡ' if matches!(w.next_skipping(marks::STRESS), Some('i' | 'ɛ')) => {
            Edit::Append("ʲ")
        }
        'j' if CONSONANTS.holds(w.prev()) => Edit::Replace(marks::PALATAL),
        _ => Edit::Keep,
    });
}

fn palatalization_enabled(options: &BulgarianOptions) -> bool {
    options.palatalization
}

static PASSES: &[RulePass<BulgarianOptions>] = &[
    RulePass::word("vowel reduction", reduce_vowels),
    RulePass::text("voicing assimilation", assimilate_voicing),
    RulePass::word("palatalization", palatalize).when(palatalization_enabled),
];

/// Bulgarian pipeline
pub static PIPELINE: Pipeline<BulgarianOptions> =
    Pipeline::new("bulgarian", map_graphemes, CasePolicy::Lowercase, PASSES);

/// Transcribe Bulgarian text to IPA
pub fn transcribe(text: &str, options: &BulgarianOptions) -> String {
    PIPELINE.run(text, options)
}
