//! Spanish orthography to IPA
//!
//! The defaults describe Standard Peninsular Spanish. Setting
//! `distincion = false` gives the seseo of most Latin American varieties.
//!
//! Unlike the other languages the mapper is not a plain table: `c`, `g`,
//! `r`, `i`, `u` and `y` all read their orthographic neighbours, so the
//! mapper walks the word itself and only falls back to a table for letters
//! without context.

use crate::options::SpanishOptions;
use phonoscribe_core::{
    marks, CasePolicy, Edit, PhoneMap, PhoneSet, Pipeline, RulePass, Segments, Text, Word,
    ASCII_PUNCTUATION,
};

/// Context-free letters; `h` is silent
const LETTERS: PhoneMap = PhoneMap::new(&[
    ('á', "ˈa"),
    ('b', "β"),
    ('d', "ð"),
    ('é', "ˈe"),
    ('h', ""),
    ('í', "ˈi"),
    ('j', "x"),
    ('ñ', "ɲ"),
    ('ó', "ˈo"),
    ('q', "k"),
    ('ú', "ˈu"),
    ('ü', "w"),
    ('v', "β"),
    ('x', "ks"),
    ('y', "ʝ"),
    ('z', "θ"),
]);

const FRONT_LETTERS: PhoneSet = PhoneSet::new(&['e', 'é', 'i', 'í']);

const VOWEL_LETTERS: PhoneSet =
    PhoneSet::new(&['a', 'á', 'e', 'é', 'i', 'í', 'o', 'ó', 'u', 'ú']);

/// Vowels that turn a following `i` into an offglide; a plain `u` before
/// `i` is itself the glide (`cuidado`)
const OFFGLIDE_HOSTS: PhoneSet = PhoneSet::new(&['a', 'á', 'e', 'é', 'o', 'ó', 'ú']);

const VOWELS: PhoneSet = PhoneSet::new(&['a', 'e', 'i', 'o', 'u']);

const NASALS: PhoneSet = PhoneSet::new(&['m', 'n', 'ɲ', 'ŋ']);

/// Voiced fricatives and the stops they harden to
const STOP_ALLOPHONES: PhoneMap =
    PhoneMap::new(&[('β', "b"), ('ð', "d"), ('ɣ', "ɡ"), ('ʝ', "ɟ͡ʝ")]);

const NASAL_PLACE: PhoneMap = PhoneMap::new(&[
    ('p', "m"),
    ('b', "m"),
    ('f', "ɱ"),
    ('t', "n"),
    ('d', "n"),
    ('θ', "n"),
    ('s', "n"),
    ('ʧ', "nʲ"),
    ('ɟ', "ɲ"),
    ('k', "ŋ"),
    ('ɡ', "ŋ"),
    ('x', "ŋ"),
]);

const VOICED_CONSONANTS: PhoneSet = PhoneSet::new(&[
    'b', 'β', 'd', 'ð', 'ɡ', 'ɣ', 'ɟ', 'ʝ', 'm', 'ɱ', 'n', 'ɲ', 'ŋ', 'l', 'ʎ', 'r', 'ɾ', 'v', 'z',
]);

const FRICATIVE_VOICING: PhoneMap = PhoneMap::new(&[('f', "v"), ('θ', "ð"), ('s', "z")]);

/// Punctuation after which a new phrase starts
const PAUSES: PhoneSet = PhoneSet::new(&['.', ',', '!', '¡', '?', '¿', ':', ';', '—']);

const SPANISH_PUNCTUATION: PhoneSet = PhoneSet::new(&['¡', '¿', '«', '»', '—']);

fn is_punctuation(ch: char) -> bool {
    ASCII_PUNCTUATION.contains(ch) || SPANISH_PUNCTUATION.contains(ch)
}

fn map_graphemes(word: &str) -> Segments {
    let letters: Vec<char> = word.chars().collect();
    let mut segments = Segments::new();
    let mut i = 0;
    while i < letters.len() {
        let prev = i.checked_sub(1).map(|p| letters[p]);
        let next = letters.get(i + 1).copied();
        let after_next = letters.get(i + 2).copied();
        let (phones, width) = match letters[i] {
            'g' if next == Some('u') && FRONT_LETTERS.holds(after_next) => ("ɣ", 2),
            'q' if next == Some('u') && FRONT_LETTERS.holds(after_next) => ("k", 2),
            'c' if next == Some('h') => ("ʧ", 2),
            'l' if next == Some('l') => ("ʎ", 2),
            'r' if next == Some('r') => ("r", 2),
            'r' if !prev.is_some_and(char::is_alphabetic) => ("r", 1),
            'r' => ("ɾ", 1),
            'c' if FRONT_LETTERS.holds(next) => ("θ", 1),
            'c' => ("k", 1),
            'g' if FRONT_LETTERS.holds(next) => ("x", 1),
            'g' => ("ɣ", 1),
            'i' if OFFGLIDE_HOSTS.holds(prev) => ("i̯", 1),
            'i' if VOWEL_LETTERS.holds(next) => ("j", 1),
            'u' if matches!(prev, Some('a' | 'á' | 'e' | 'é')) => ("u̯", 1),
            'u' if VOWEL_LETTERS.holds(next) && !matches!(next, Some('u' | 'ú')) => ("w", 1),
            // final <y> after a vowel closes a diphthong (rey, muy)
            'y' if !next.is_some_and(char::is_alphanumeric)
                && matches!(prev, Some('a' | 'e' | 'o' | 'u')) =>
            {
                ("i̯", 1)
            }
            ch => match LETTERS.get(ch) {
                Some(phones) => (phones, 1),
                None => {
                    segments.push(ch);
                    i += 1;
                    continue;
                }
            },
        };
        segments.extend(phones.chars());
        i += width;
    }
    segments
}

fn yeismo_enabled(options: &SpanishOptions) -> bool {
    options.yeismo
}

fn merge_palatal_lateral(word: &mut Word) {
    word.rewrite(|w| match w.current() {
        'ʎ' => Edit::Replace('ʝ'),
        _ => Edit::Keep,
    });
}

/// Voiced fricatives harden to stops after a nasal, `ð` also after `l`, and
/// at the start of a phrase
fn harden_fricatives(text: &mut Text) {
    let words = text.words_mut();
    for i in 0..words.len() {
        let (before, rest) = words.split_at_mut(i);
        let prev_last = before
            .iter()
            .rev()
            .find(|w| !w.is_empty())
            .and_then(Word::last);
        let word = &mut rest[0];
        word.rewrite(|w| {
            let current = w.current();
            match STOP_ALLOPHONES.get(current) {
                Some(stop) if NASALS.holds(w.prev()) => Edit::ReplaceWith(stop),
                Some(_) if current == 'ð' && w.prev_is('l') => Edit::Replace('d'),
                _ => Edit::Keep,
            }
        });

        let Some(start) = word.segments().iter().position(|&ch| !is_punctuation(ch)) else {
            continue;
        };
        let Some(first) = word.get(start) else {
            continue;
        };
        let Some(stop) = STOP_ALLOPHONES.get(first) else {
            continue;
        };
        let phrase_initial = prev_last.is_none()
            || PAUSES.holds(prev_last)
            || (start > 0 && PAUSES.holds(word.get(start - 1)));
        let after_sonorant = start == 0
            && (NASALS.holds(prev_last) || (first == 'ð' && prev_last == Some('l')));
        if phrase_initial || after_sonorant {
            word.remove(start);
            word.insert_str(start, stop);
        }
    }
}

fn assimilate_nasal_place(word: &mut Word) {
    word.rewrite(|w| match w.next().and_then(|next| NASAL_PLACE.get(next)) {
        Some(nasal) if NASALS.contains(w.current()) => Edit::ReplaceWith(nasal),
        _ => Edit::Keep,
    });
}

fn palatalize_lateral(word: &mut Word) {
    word.rewrite(|w| match w.current() {
        'l' if w.next_is('ʧ') => Edit::Append("ʲ"),
        _ => Edit::Keep,
    });
}

fn mark_approximants(word: &mut Word) {
    word.rewrite(|w| match w.current() {
        'β' | 'ð' | 'ɣ' => Edit::Append("\u{031E}"),
        _ => Edit::Keep,
    });
}

/// Whether the word is the bare conjunction `y`, before or after hardening
fn is_conjunction(word: &Word) -> bool {
    let letters: Vec<char> = word
        .segments()
        .iter()
        .copied()
        .filter(|&ch| !is_punctuation(ch))
        .collect();
    matches!(letters.as_slice(), ['ʝ'] | ['ɟ', marks::TIE, 'ʝ'])
}

/// The conjunction `y` is a vowel before consonants and pauses and a
/// fricative before vowels
fn realize_conjunction(text: &mut Text) {
    let words = text.words_mut();
    for i in 0..words.len() {
        if !is_conjunction(&words[i]) {
            continue;
        }
        let pause = words[i].segments().iter().any(|&ch| is_punctuation(ch));
        let before_vowel = !pause
            && words.get(i + 1).is_some_and(|next| {
                let onset = next.segments().iter().copied().find(|&ch| !is_punctuation(ch));
                matches!(onset, Some(ch) if VOWELS.contains(ch) || ch == marks::STRESS)
            });
        let word = &mut words[i];
        word.retain(|ch| ch != 'ɟ' && ch != marks::TIE);
        word.rewrite(|w| match w.current() {
            'ʝ' if !before_vowel => Edit::Replace('i'),
            _ => Edit::Keep,
        });
    }
}

fn syllable_count(word: &Word) -> usize {
    let nuclei = word
        .segments()
        .iter()
        .filter(|&&ch| VOWELS.contains(ch) || ch == marks::SYLLABIC)
        .count();
    nuclei.saturating_sub(word.segments().iter().filter(|&&ch| ch == marks::NON_SYLLABIC).count())
}

/// Monosyllables lose any written stress; unmarked polysyllables are
/// stressed on the penult when they end in a vowel, `n` or `s` and on the
/// last syllable otherwise
fn mark_stress(word: &mut Word) {
    if syllable_count(word) < 2 {
        word.retain(|ch| ch != marks::STRESS);
        return;
    }
    if word.contains(marks::STRESS) {
        return;
    }
    let Some(last) = word.last_index_where_not(is_punctuation) else {
        return;
    };
    let target = match word.get(last) {
        Some('a' | 'e' | 'i' | 'o' | 'u' | 'n' | 's') => 2,
        _ => 1,
    };
    // an offglide cancels the vowel it sits on
    let mut nuclei = 0i32;
    for k in (0..=last).rev() {
        match word.get(k) {
            Some(ch) if VOWELS.contains(ch) => nuclei += 1,
            Some(marks::NON_SYLLABIC) => nuclei -= 1,
            _ => {}
        }
        if nuclei == target {
            word.insert(k, marks::STRESS);
            return;
        }
    }
}

fn seseo_enabled(options: &SpanishOptions) -> bool {
    !options.distincion
}

fn ceceo_enabled(options: &SpanishOptions) -> bool {
    options.ceceo
}

fn merge_into_s(word: &mut Word) {
    word.rewrite(|w| match w.current() {
        'θ' => Edit::Replace('s'),
        _ => Edit::Keep,
    });
}

fn merge_into_ceceo(word: &mut Word) {
    word.rewrite(|w| match w.current() {
        's' | 'θ' => Edit::ReplaceWith("s\u{0304}"),
        _ => Edit::Keep,
    });
}

/// `f θ s` voice before a voiced consonant
fn voice_fricatives(word: &mut Word) {
    word.rewrite(|w| match FRICATIVE_VOICING.get(w.current()) {
        Some(voiced) if VOICED_CONSONANTS.holds(w.next()) => Edit::ReplaceWith(voiced),
        _ => Edit::Keep,
    });
}

static PASSES: &[RulePass<SpanishOptions>] = &[
    RulePass::word("yeismo", merge_palatal_lateral).when(yeismo_enabled),
    RulePass::text("fortition", harden_fricatives),
    RulePass::word("nasal place", assimilate_nasal_place),
    RulePass::word("lateral palatalization", palatalize_lateral),
    RulePass::word("approximants", mark_approximants),
    RulePass::text("conjunction y", realize_conjunction),
    RulePass::word("stress", mark_stress),
    RulePass::word("seseo", merge_into_s).when(seseo_enabled),
    RulePass::word("ceceo", merge_into_ceceo).when(ceceo_enabled),
    RulePass::word("fricative voicing", voice_fricatives),
];

/// Spanish pipeline
pub static PIPELINE: Pipeline<SpanishOptions> =
    Pipeline::new("spanish", map_graphemes, CasePolicy::Lowercase, PASSES);

/// Transcribe Spanish text to IPA
pub fn transcribe(text: &str, options: &SpanishOptions) -> String {
    PIPELINE.run(text, options)
}
