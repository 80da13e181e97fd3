//! Modern Greek orthography to IPA
//!
//! `αυ`/`ευ` map to a provisional `w` whose voicing is decided by the next
//! segment. Prenasalized stops (`μπ ντ γγ γκ`) carry a superscript nasal
//! that is dropped word-initially.

use super::WORD_END;
use crate::options::GreekOptions;
use phonoscribe_core::{
    marks, CasePolicy, CorrespondenceTable, Edit, PhoneMap, PhonePairs, PhoneSet, Pipeline,
    RulePass, Segments, Text, Word,
};
use std::sync::LazyLock;

static GRAPHEMES: LazyLock<CorrespondenceTable> = LazyLock::new(|| {
    CorrespondenceTable::from_pairs(&[
        ("αι", "e"),
        ("αί", "ˈe"),
        ("αυ", "aw"),
        ("αύ", "ˈaw"),
        ("ει", "i"),
        ("εί", "ˈi"),
        ("ευ", "ew"),
        ("εύ", "ˈew"),
        ("οι", "i"),
        ("οί", "ˈi"),
        ("ου", "u"),
        ("ού", "ˈu"),
        ("υι", "i"),
        ("υί", "ˈi"),
        ("μπ", "ᵐb"),
        ("ντ", "ⁿd"),
        ("γγ", "ᵑɡ"),
        ("γκ", "ᵑɡ"),
        ("γχ", "ŋx"),
        ("τσ", "ʦ"),
        ("τζ", "ʣ"),
        ("α", "a"),
        ("β", "v"),
        ("γ", "ɣ"),
        ("δ", "ð"),
        ("ε", "e"),
        ("ζ", "z"),
        ("η", "i"),
        ("θ", "θ"),
        ("ι", "i"),
        ("κ", "k"),
        ("λ", "l"),
        ("μ", "m"),
        ("ν", "n"),
        ("ξ", "ks"),
        ("ο", "o"),
        ("π", "p"),
        ("ρ", "ɾ"),
        ("σ", "s"),
        ("ς", "s"),
        ("τ", "t"),
        ("υ", "i"),
        ("φ", "f"),
        ("χ", "x"),
        ("ψ", "ps"),
        ("ω", "o"),
        ("ά", "ˈa"),
        ("έ", "ˈe"),
        ("ή", "ˈi"),
        ("ί", "ˈi"),
        ("ϊ", "i"),
        ("ΐ", "ˈi"),
        ("ό", "ˈo"),
        ("ύ", "ˈi"),
        ("ϋ", "i"),
        ("ΰ", "ˈi"),
        ("ώ", "ˈo"),
    ])
});

const VOWELS: PhoneSet = PhoneSet::new(&['a', 'e', 'i', 'o', 'u']);

const CONSONANTS: PhoneSet = PhoneSet::new(&[
    'v', 'ɣ', 'ð', 'z', 'θ', 'k', 'l', 'm', 'n', 'p', 'ɾ', 's', 't', 'f', 'x', 'ᵐ', 'b', 'ⁿ', 'd',
    'ᵑ', 'ɡ', 'ŋ', 'ʦ', 'ʣ', 'w', 'c', 'ɟ', 'ç', 'ʝ', 'ʎ', 'ɲ',
]);

const VOICELESS: PhoneSet = PhoneSet::new(&['p', 't', 'c', 'k', 'ʦ', 'f', 'θ', 's', 'ç', 'x']);

const PALATALS: PhoneMap = PhoneMap::new(&[
    ('k', "c"),
    ('ɡ', "ɟ"),
    ('x', "ç"),
    ('ɣ', "ʝ"),
    ('l', "ʎ"),
    ('n', "ɲ"),
    ('m', "mɲ"),
]);

/// Segments that have absorbed a following `j`
const ABSORBS_GLIDE: PhoneSet = PhoneSet::new(&['c', 'ɟ', 'ç', 'ʝ', 'ʎ', 'ɲ']);

const PRENASAL: PhoneSet = PhoneSet::new(&['ᵐ', 'ⁿ', 'ᵑ']);

const BOUNDARY_VOICING: PhonePairs =
    PhonePairs::new(&[('p', 'b'), ('t', 'd'), ('c', 'ɟ'), ('k', 'ɡ'), ('ʦ', 'ʣ')]);

/// Function words ending in `n` that voice a following voiceless stop
const NASAL_FINAL_WORDS: &[&str] = &[
    "tin", "ton", "stin", "ston", "aftˈin", "aftˈon", "ðen", "min",
];

fn map_graphemes(word: &str) -> Segments {
    GRAPHEMES.map(word)
}

/// Unstressed, non-initial `i` before a vowel is a glide
fn form_glides(word: &mut Word) {
    word.rewrite(|w| {
        let before_vowel =
            matches!(w.next(), Some(n) if VOWELS.contains(n) || n == marks::STRESS);
        if w.current() == 'i' && before_vowel && !w.is_at_start() && !w.prev_is(marks::STRESS) {
            Edit::Replace('j')
        } else {
            Edit::Keep
        }
    });
}

fn assimilate_voicing(word: &mut Word) {
    word.rewrite(|w| match w.current() {
        'w' => match w.next() {
            Some(next) if VOICELESS.contains(next) || WORD_END.contains(next) => {
                Edit::Replace('f')
            }
            None => Edit::Replace('f'),
            Some(_) => Edit::Replace('v'),
        },
        's' => match w.next() {
            Some(next) if CONSONANTS.contains(next) && !VOICELESS.contains(next) => {
                Edit::Replace('z')
            }
            _ => Edit::Keep,
        },
        _ => Edit::Keep,
    });
}

fn reduce_geminates(word: &mut Word) {
    word.rewrite(|w| {
        let current = w.current();
        if CONSONANTS.contains(current) && w.prev_is(current) {
            Edit::Delete
        } else {
            Edit::Keep
        }
    });
}

fn palatal_trigger(consonant: char, next: char, strong: bool) -> bool {
    match consonant {
        'k' | 'ɡ' | 'x' | 'ɣ' => matches!(next, 'i' | 'e' | 'j'),
        'l' | 'n' if strong => matches!(next, 'i' | 'j'),
        _ => next == 'j',
    }
}

/// Palatalize before front vowels and `j`, drop the absorbed glide, then
/// harden the glides that are left
fn palatalize(word: &mut Word, options: &GreekOptions) {
    word.rewrite(|w| {
        let current = w.current();
        match (PALATALS.get(current), w.next_skipping(marks::STRESS)) {
            (Some(palatal), Some(next))
                if palatal_trigger(current, next, options.strong_palatalization) =>
            {
                Edit::ReplaceWith(palatal)
            }
            _ => Edit::Keep,
        }
    });
    word.rewrite(|w| {
        if w.current() == 'j' && ABSORBS_GLIDE.holds(w.prev()) {
            Edit::Delete
        } else {
            Edit::Keep
        }
    });
    word.rewrite(|w| {
        if w.current() != 'j' {
            return Edit::Keep;
        }
        match w.prev() {
            Some(prev) if VOICELESS.contains(prev) => Edit::Replace('ç'),
            // CɾjV keeps a full vowel
            Some('ɾ') if CONSONANTS.holds(w.prev_prev()) => Edit::Replace('i'),
            _ => Edit::Replace('ʝ'),
        }
    });
}

fn denasalize_initial(word: &mut Word) {
    if word.first().is_some_and(|ch| PRENASAL.contains(ch)) {
        word.remove(0);
    }
}

/// After a nasal-final function word the next word's initial voiceless stop
/// voices and the function word loses its `n`
fn voice_across_boundary(text: &mut Text) {
    let words = text.words_mut();
    for i in (1..words.len()).rev() {
        let after_function_word = NASAL_FINAL_WORDS.iter().any(|w| words[i - 1].is(w));
        let Some(voiced) = words[i].first().and_then(|ch| BOUNDARY_VOICING.forward(ch)) else {
            continue;
        };
        if !after_function_word {
            continue;
        }
        let word = &mut words[i];
        word.set(0, voiced);
        if matches!(voiced, 'b' | 'ɡ') && word.get(1) == Some('s') {
            word.set(1, 'z');
        }
        let function_word = &mut words[i - 1];
        function_word.remove(function_word.len() - 1);
    }
}

fn retract_sibilants(word: &mut Word) {
    word.rewrite(|w| match w.current() {
        's' | 'z' => Edit::Append("\u{0320}"),
        _ => Edit::Keep,
    });
}

static PASSES: &[RulePass<GreekOptions>] = &[
    RulePass::word("glides", form_glides),
    RulePass::word("voicing", assimilate_voicing),
    RulePass::word("geminates", reduce_geminates),
    RulePass::word_with("palatalization", palatalize),
    RulePass::word("prenasalization", denasalize_initial),
    RulePass::text("boundary voicing", voice_across_boundary),
    RulePass::word("sibilants", retract_sibilants),
];

/// Greek pipeline
pub static PIPELINE: Pipeline<GreekOptions> =
    Pipeline::new("greek", map_graphemes, CasePolicy::Lowercase, PASSES);

/// Transcribe Greek text to IPA
pub fn transcribe(text: &str, options: &GreekOptions) -> String {
    PIPELINE.run(text, options)
}
