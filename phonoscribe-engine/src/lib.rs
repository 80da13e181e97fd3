//! Rule-based IPA transcription for Slavic languages, Greek, Spanish and
//! Nahuatl, plus Serbian Cyrillic ↔ Latin conversion
//!
//! Each language is a fixed pipeline of rewrite passes (see
//! [`phonoscribe_core::Pipeline`]) living in [`languages`]. The
//! `transcribe_*` functions below run a pipeline with default options;
//! [`Transcriber`] carries a language and its options for repeated or batch
//! use.
//!
//! ```rust
//! use phonoscribe_engine::{transcribe_cz, transcribe_es, SpanishOptions};
//!
//! assert_eq!(transcribe_cz("pes"), "pˈɛs");
//! assert_eq!(transcribe_es("casa", &SpanishOptions::default()), "kˈasa");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod language;
pub mod languages;
pub mod options;
pub mod serbian;
pub mod transcriber;

pub use error::{EngineError, Result};
pub use language::Language;
pub use options::{
    BulgarianOptions, CzechOptions, GreekOptions, Options, PolishOptions, SerbianOptions,
    SlovakOptions, SpanishOptions,
};
pub use serbian::{
    convert_text, convert_to_cyrillic, convert_to_latin, detect_script, Script, CYRILLIC_KEYS,
    LATIN_KEYS,
};
pub use transcriber::{Transcriber, TranscriberBuilder};

use languages::{belarusian, bulgarian, czech, greek, nahuatl, polish, slovak, spanish, ukrainian};

/// Belarusian with stress taken from combining acutes in the input
pub fn transcribe_be(text: &str) -> String {
    belarusian::transcribe(text)
}

/// Bulgarian with palatalization
pub fn transcribe_bg(text: &str) -> String {
    bulgarian::transcribe(text, &BulgarianOptions::default())
}

/// Czech with initial stress
pub fn transcribe_cz(text: &str) -> String {
    czech::transcribe(text, &CzechOptions::default())
}

/// Greek with strong palatalization
pub fn transcribe_gr(text: &str) -> String {
    greek::transcribe(text, &GreekOptions::default())
}

/// Classical Nahuatl
pub fn transcribe_nahuatl(text: &str) -> String {
    nahuatl::transcribe(text)
}

/// Polish with penultimate stress and nasal final `ę`
pub fn transcribe_pl(text: &str) -> String {
    polish::transcribe(text, &PolishOptions::default())
}

/// Slovak with initial stress
pub fn transcribe_sk(text: &str) -> String {
    slovak::transcribe(text, &SlovakOptions::default())
}

/// Spanish with the given dialect options
pub fn transcribe_es(text: &str, options: &SpanishOptions) -> String {
    spanish::transcribe(text, options)
}

/// Ukrainian with stress taken from combining acutes in the input
pub fn transcribe_uk(text: &str) -> String {
    ukrainian::transcribe(text)
}
