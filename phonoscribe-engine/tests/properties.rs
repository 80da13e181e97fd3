//! Property tests over every pipeline

use phonoscribe_engine::{
    convert_text, convert_to_latin, transcribe_cz, transcribe_es, transcribe_pl, Language,
    SpanishOptions, Transcriber,
};
use proptest::prelude::*;

const SERBIAN_CYRILLIC: &str = "[абвгдђежзијклљмнњопрстћуфхцчџш]{1,8}";

fn digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

proptest! {
    #[test]
    fn digit_words_pass_through_every_language(
        words in prop::collection::vec("[0-9]{1,6}", 1..8)
    ) {
        let text = words.join(" ");
        for language in Language::all().iter().filter(|l| l.is_transcription()) {
            let output = Transcriber::new(*language).transcribe(&text).unwrap();
            prop_assert_eq!(&output, &text, "{}", language);
        }
    }

    #[test]
    fn digits_keep_their_order_inside_words(text in "[a-z0-9 ]{0,40}") {
        prop_assert_eq!(digits(&transcribe_cz(&text)), digits(&text));
        prop_assert_eq!(digits(&transcribe_pl(&text)), digits(&text));
        prop_assert_eq!(
            digits(&transcribe_es(&text, &SpanishOptions::default())),
            digits(&text)
        );
    }

    #[test]
    fn czech_word_count_is_preserved(
        words in prop::collection::vec("[a-z]{1,10}", 0..10)
    ) {
        let output = transcribe_cz(&words.join(" "));
        prop_assert_eq!(output.split_whitespace().count(), words.len());
    }

    #[test]
    fn serbian_all_caps_words_stay_capitalized(word in SERBIAN_CYRILLIC) {
        let upper = word.to_uppercase();
        prop_assert_eq!(
            convert_to_latin(&upper),
            convert_to_latin(&word).to_uppercase()
        );
    }

    #[test]
    fn serbian_cyrillic_is_detected(
        words in prop::collection::vec(SERBIAN_CYRILLIC, 1..6)
    ) {
        let text = words.join(" ");
        prop_assert_eq!(convert_text(&text, None).unwrap(), convert_to_latin(&text));
        prop_assert_eq!(
            convert_to_latin(&text).split_whitespace().count(),
            words.len()
        );
    }
}
