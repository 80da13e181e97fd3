//! Per-language transcription pipelines
//!
//! Every module exposes a `static PIPELINE` and a `transcribe` entry point.
//! The pipelines are independent. The helpers below are shared by languages
//! with a common spelling tradition: word-end punctuation, the East Slavic
//! apostrophe and soft-sign handling, and tie-barred affricates.

pub mod belarusian;
pub mod bulgarian;
pub mod czech;
pub mod greek;
pub mod nahuatl;
pub mod polish;
pub mod slovak;
pub mod spanish;
pub mod ukrainian;

use phonoscribe_core::{marks, Edit, PhoneSet, Word, ASCII_PUNCTUATION};

/// Characters that end a word for final-position rules
///
/// A rule that targets "the last segment" looks past these.
pub(crate) const WORD_END: PhoneSet = PhoneSet::new(&[
    ' ', '.', ',', ';', ':', '!', '?', '[', ']', '(', ')', '\'', '"',
]);

/// Index of the last segment before any trailing word-end punctuation
pub(crate) fn last_sound_index(word: &Word) -> Option<usize> {
    word.last_index_where_not(|ch| WORD_END.contains(ch))
}

/// Apostrophe variants that mark a hard consonant in East Slavic spelling
const APOSTROPHES: PhoneSet = PhoneSet::new(&['\'', 'ʼ', '’']);

pub(crate) fn is_apostrophe(ch: char) -> bool {
    APOSTROPHES.contains(ch)
}

/// Drop ASCII punctuation other than the apostrophe
pub(crate) fn strip_punctuation(word: &str) -> String {
    word.chars()
        .filter(|&ch| ch == '\'' || !ASCII_PUNCTUATION.contains(ch))
        .collect()
}

/// A consonant doubled before `ʲ` is palatalized in both halves
/// (`tːʲ` written `ttʲ` becomes `tʲtʲ`)
pub(crate) fn gemination_harmony(word: &mut Word) {
    word.rewrite(|w| {
        let current = w.current();
        if current != marks::PALATAL && w.next_is(current) && w.next_next() == Some(marks::PALATAL)
        {
            Edit::Append("ʲ")
        } else {
            Edit::Keep
        }
    });
}

/// Make the first half of each tie-barred affricate agree in voicing with
/// its second half (`t͡ʐ -> d͡ʐ`, `d͡ʂ -> t͡ʂ`)
pub(crate) fn harmonize_tied_affricates(word: &mut Word, voiceless: &PhoneSet) {
    word.rewrite(|w| {
        if w.next() != Some(marks::TIE) {
            return Edit::Keep;
        }
        match (w.current(), w.next_next()) {
            ('t', Some(second)) if !voiceless.contains(second) => Edit::Replace('d'),
            ('d', Some(second)) if voiceless.contains(second) => Edit::Replace('t'),
            _ => Edit::Keep,
        }
    });
}
