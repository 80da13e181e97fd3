//! Transcription through the public API, one section per language family

use phonoscribe_engine::{
    transcribe_be, transcribe_bg, transcribe_cz, transcribe_es, transcribe_gr, transcribe_nahuatl,
    transcribe_pl, transcribe_sk, transcribe_uk, CzechOptions, GreekOptions, Language, Options,
    PolishOptions, SpanishOptions, Transcriber,
};

// West Slavic

#[test]
fn test_czech_words() {
    assert_eq!(transcribe_cz("děti"), "ɟˈɛcɪ");
    assert_eq!(transcribe_cz("vždy"), "vʒdˈɪ");
    assert_eq!(transcribe_cz("kde je"), "ɡdˈɛ jˈɛ");
    // trailing punctuation does not hide the word end from devoicing
    assert_eq!(transcribe_cz("hrad."), "ɦrˈat.");
}

#[test]
fn test_slovak_words() {
    assert_eq!(transcribe_sk("voda"), "ʋˈɔda");
    assert_eq!(transcribe_sk("krv"), "kr\u{0329}ʋ");
    assert_eq!(transcribe_sk("stôl"), "stʊ\u{032F}ɔɫ");
}

#[test]
fn test_polish_words() {
    assert_eq!(transcribe_pl("rzeka"), "ʐˈɛka");
    assert_eq!(transcribe_pl("ręka"), "ɾˈɛŋka");
    assert_eq!(transcribe_pl("jagnię"), "jˈaɡɲɛw̃");
}

#[test]
fn test_polish_options_through_transcriber() {
    let transcriber = Transcriber::builder()
        .language("polish")
        .polish(PolishOptions {
            final_denasal: true,
            stress: true,
        })
        .build()
        .unwrap();
    assert_eq!(transcriber.transcribe("jagnię").unwrap(), "jˈaɡɲɛ");
}

// East and South Slavic

#[test]
fn test_belarusian_words() {
    assert_eq!(transcribe_be("галава́"), "ʁʌlavˈa");
    assert_eq!(transcribe_be("хлеб"), "xlʲep");
    assert_eq!(transcribe_be("сям'я́"), "sʲæmjˈæ");
}

#[test]
fn test_ukrainian_words() {
    assert_eq!(transcribe_uk("голова́"), "ɦɔɫɔʋˈɑ");
    assert_eq!(transcribe_uk("життя́"), "ʒɪtʲtʲˈɑ");
    assert_eq!(transcribe_uk("край"), "krɑi̯");
}

#[test]
fn test_bulgarian_words() {
    assert_eq!(transcribe_bg("гра́д"), "ɡrˈat");
    assert_eq!(transcribe_bg("в се́ло"), "f sˈɛɫo");
    assert_eq!(transcribe_bg("ки́но"), "kʲˈino");
}

// Greek, Spanish, Nahuatl

#[test]
fn test_greek_words() {
    assert_eq!(transcribe_gr("παιδιά"), "peðʝˈa");
    assert_eq!(transcribe_gr("τον πατέρα"), "to batˈeɾa");

    let weak = Transcriber::builder()
        .language("el")
        .greek(GreekOptions {
            strong_palatalization: false,
        })
        .build()
        .unwrap();
    assert_eq!(weak.transcribe("καλημέρα").unwrap(), "kalimˈeɾa");
}

#[test]
fn test_spanish_dialects() {
    let default = SpanishOptions::default();
    assert_eq!(transcribe_es("ciudad", &default), "θjuð\u{031E}ˈað\u{031E}");

    let seseo = SpanishOptions {
        distincion: false,
        ..default
    };
    assert_eq!(transcribe_es("ciudad", &seseo), "sjuð\u{031E}ˈað\u{031E}");

    let no_yeismo = SpanishOptions {
        yeismo: false,
        ..default
    };
    assert_eq!(transcribe_es("llave", &no_yeismo), "ʎˈaβ\u{031E}e");
}

#[test]
fn test_spanish_phrase_boundaries() {
    let default = SpanishOptions::default();
    assert_eq!(transcribe_es("el dedo", &default), "el dˈeð\u{031E}o");
    assert_eq!(transcribe_es("¿dónde?", &default), "¿dˈonde?");
    assert_eq!(transcribe_es("pan y agua", &default), "pan ʝ ˈaɣ\u{031E}wa");
}

#[test]
fn test_nahuatl_words() {
    assert_eq!(transcribe_nahuatl("quetzalcoatl"), "keʦaɬkoat͡ɬ");
    assert_eq!(transcribe_nahuatl("nican."), "nikan\u{0325}.");
}

// Dispatch

#[test]
fn test_transcriber_matches_convenience_functions() {
    let cases: [(Language, &str, String); 5] = [
        (Language::Czech, "pes", transcribe_cz("pes")),
        (Language::Slovak, "voda", transcribe_sk("voda")),
        (Language::Greek, "χέρι", transcribe_gr("χέρι")),
        (Language::Nahuatl, "calli", transcribe_nahuatl("calli")),
        (
            Language::Spanish,
            "casa",
            transcribe_es("casa", &SpanishOptions::default()),
        ),
    ];
    for (language, input, expected) in cases {
        let transcriber = Transcriber::new(language);
        assert_eq!(transcriber.transcribe(input).unwrap(), expected, "{language}");
    }
}

#[test]
fn test_options_apply_only_to_their_language() {
    let options = Options {
        czech: CzechOptions { stress: false },
        ..Options::default()
    };
    let czech = Transcriber::builder()
        .language("cs")
        .options(options.clone())
        .build()
        .unwrap();
    let slovak = Transcriber::builder()
        .language("sk")
        .options(options)
        .build()
        .unwrap();
    assert_eq!(czech.transcribe("pes").unwrap(), "pɛs");
    assert_eq!(slovak.transcribe("voda").unwrap(), "ʋˈɔda");
}

#[test]
fn test_batch_over_mixed_input() {
    let transcriber = Transcriber::for_code("uk").unwrap();
    let texts = vec!["мама".to_string(), String::new(), "і".to_string()];
    assert_eq!(
        transcriber.transcribe_batch(&texts).unwrap(),
        ["mɑmɑ", "", "i"]
    );
}
