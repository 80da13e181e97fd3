//! Serbian Cyrillic ↔ Latin script conversion
//!
//! Conversion is a case-sensitive table lookup per word, run through the
//! same [`Pipeline`] machinery as the transcription languages. Words written
//! entirely in capitals are re-cased at the end, so `XEROX` becomes
//! `КСЕРОКС` even though the table row for `X` is `Кс`.
//!
//! Cyrillic letters from other Slavic alphabets (я, щ, ї, ў, ...) are
//! transliterated too, and a soft sign after `н л ч ц дз` folds into the
//! matching Serbian palatal (`конь` → `konj`).

use crate::error::{EngineError, Result};
use phonoscribe_core::{CasePolicy, CorrespondenceTable, Edit, Pipeline, RulePass, Segments, Word};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Keys that select Cyrillic as the source script (compared case-insensitively)
pub const CYRILLIC_KEYS: &[&str] = &[
    "cyrillic", "cyr", "c", "ćirilica", "ć", "ћирилица", "ћир", "ћ",
];

/// Keys that select Latin as the source script (compared case-insensitively)
pub const LATIN_KEYS: &[&str] = &["latin", "lat", "l", "latinica", "латиница", "лат", "л"];

/// Soft sign after transliteration
const SOFT_SIGN: char = '’';

static CYRILLIC_TO_LATIN: LazyLock<CorrespondenceTable> = LazyLock::new(|| {
    CorrespondenceTable::from_pairs(&[
        ("А", "A"),
        ("а", "a"),
        ("Б", "B"),
        ("б", "b"),
        ("Ц", "C"),
        ("ц", "c"),
        ("Ч", "Č"),
        ("ч", "č"),
        ("Ћ", "Ć"),
        ("ћ", "ć"),
        ("Д", "D"),
        ("д", "d"),
        ("Џ", "Dž"),
        ("џ", "dž"),
        ("Ђ", "Đ"),
        ("ђ", "đ"),
        ("Е", "E"),
        ("е", "e"),
        ("Ф", "F"),
        ("ф", "f"),
        ("Г", "G"),
        ("г", "g"),
        ("Х", "H"),
        ("х", "h"),
        ("И", "I"),
        ("и", "i"),
        ("Ј", "J"),
        ("ј", "j"),
        ("К", "K"),
        ("к", "k"),
        ("Л", "L"),
        ("л", "l"),
        ("Љ", "Lj"),
        ("љ", "lj"),
        ("М", "M"),
        ("м", "m"),
        ("Н", "N"),
        ("н", "n"),
        ("Њ", "Nj"),
        ("њ", "nj"),
        ("О", "O"),
        ("о", "o"),
        ("П", "P"),
        ("п", "p"),
        ("Р", "R"),
        ("р", "r"),
        ("С", "S"),
        ("с", "s"),
        ("Ш", "Š"),
        ("ш", "š"),
        ("Т", "T"),
        ("т", "t"),
        ("У", "U"),
        ("у", "u"),
        ("В", "V"),
        ("в", "v"),
        ("З", "Z"),
        ("з", "z"),
        ("Ж", "Ž"),
        ("ж", "ž"),
        // other Slavic alphabets
        ("Ь", "’"),
        ("ь", "’"),
        ("Ъ", ""),
        ("ъ", ""),
        ("Я", "Ja"),
        ("я", "ja"),
        ("Ё", "Jo"),
        ("ё", "jo"),
        ("Ю", "Ju"),
        ("ю", "ju"),
        ("Э", "E"),
        ("э", "e"),
        ("Щ", "ŠČ"),
        ("щ", "šč"),
        ("Й", "J"),
        ("й", "j"),
        ("І", "I"),
        ("і", "i"),
        ("Ї", "Ji"),
        ("ї", "ji"),
        ("Є", "Je"),
        ("є", "je"),
        ("Ґ", "G"),
        ("ґ", "g"),
        ("Ў", "W"),
        ("ў", "w"),
    ])
});

static LATIN_TO_CYRILLIC: LazyLock<CorrespondenceTable> = LazyLock::new(|| {
    CorrespondenceTable::from_pairs(&[
        ("LJ", "Љ"),
        ("Lj", "Љ"),
        ("lj", "љ"),
        ("NJ", "Њ"),
        ("Nj", "Њ"),
        ("nj", "њ"),
        ("DŽ", "Џ"),
        ("Dž", "Џ"),
        ("dž", "џ"),
        ("QU", "КВ"),
        ("Qu", "Кв"),
        ("qu", "кв"),
        ("A", "А"),
        ("a", "а"),
        ("B", "Б"),
        ("b", "б"),
        ("C", "Ц"),
        ("c", "ц"),
        ("Č", "Ч"),
        ("č", "ч"),
        ("Ć", "Ћ"),
        ("ć", "ћ"),
        ("D", "Д"),
        ("d", "д"),
        ("Đ", "Ђ"),
        ("đ", "ђ"),
        ("E", "Е"),
        ("e", "е"),
        ("F", "Ф"),
        ("f", "ф"),
        ("G", "Г"),
        ("g", "г"),
        ("H", "Х"),
        ("h", "х"),
        ("I", "И"),
        ("i", "и"),
        ("J", "Ј"),
        ("j", "ј"),
        ("K", "К"),
        ("k", "к"),
        ("L", "Л"),
        ("l", "л"),
        ("M", "М"),
        ("m", "м"),
        ("N", "Н"),
        ("n", "н"),
        ("O", "О"),
        ("o", "о"),
        ("P", "П"),
        ("p", "п"),
        ("R", "Р"),
        ("r", "р"),
        ("S", "С"),
        ("s", "с"),
        ("Š", "Ш"),
        ("š", "ш"),
        ("T", "Т"),
        ("t", "т"),
        ("U", "У"),
        ("u", "у"),
        ("V", "В"),
        ("v", "в"),
        ("Z", "З"),
        ("z", "з"),
        ("Ž", "Ж"),
        ("ž", "ж"),
        // letters outside the Serbian alphabet
        ("Q", "К"),
        ("q", "к"),
        ("W", "В"),
        ("w", "в"),
        ("X", "Кс"),
        ("x", "кс"),
        ("Y", "И"),
        ("y", "и"),
    ])
});

/// Source script of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// Serbian Cyrillic (converted to Latin)
    Cyrillic,
    /// Serbian Latin (converted to Cyrillic)
    Latin,
}

impl Script {
    /// Recognized keys for this script
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            Script::Cyrillic => CYRILLIC_KEYS,
            Script::Latin => LATIN_KEYS,
        }
    }

    /// The script a text converted from `self` ends up in
    pub fn target(self) -> Script {
        match self {
            Script::Cyrillic => Script::Latin,
            Script::Latin => Script::Cyrillic,
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Cyrillic => write!(f, "cyrillic"),
            Script::Latin => write!(f, "latin"),
        }
    }
}

impl FromStr for Script {
    type Err = EngineError;

    fn from_str(key: &str) -> Result<Self> {
        let normalized = key.trim().to_lowercase();
        if CYRILLIC_KEYS.contains(&normalized.as_str()) {
            Ok(Script::Cyrillic)
        } else if LATIN_KEYS.contains(&normalized.as_str()) {
            Ok(Script::Latin)
        } else {
            Err(EngineError::UnrecognizedScriptKey {
                key: key.to_string(),
            })
        }
    }
}

fn map_cyrillic(word: &str) -> Segments {
    CYRILLIC_TO_LATIN.map(word)
}

fn map_latin(word: &str) -> Segments {
    LATIN_TO_CYRILLIC.map(word)
}

/// A transliterated soft sign after `n l č c dz` becomes the Serbian palatal
/// (`n’ → nj`, `č’ c’ → ć`, `dz’ → đ`)
fn fold_soft_sign(word: &mut Word) {
    word.rewrite(|w| {
        let softened = |offset: isize| w.peek(offset) == Some(SOFT_SIGN);
        match w.current() {
            SOFT_SIGN => match (w.prev_prev(), w.prev()) {
                (_, Some('n' | 'N' | 'l' | 'L')) => Edit::Replace('j'),
                (_, Some('č' | 'Č' | 'c' | 'C')) => Edit::Delete,
                (Some('d' | 'D'), Some('z' | 'Z')) => Edit::Delete,
                _ => Edit::Keep,
            },
            'č' | 'c' if softened(1) => Edit::Replace('ć'),
            'Č' | 'C' if softened(1) => Edit::Replace('Ć'),
            'd' if matches!(w.next(), Some('z' | 'Z')) && softened(2) => Edit::Replace('đ'),
            'D' if matches!(w.next(), Some('z' | 'Z')) && softened(2) => Edit::Replace('Đ'),
            'z' | 'Z' if matches!(w.prev(), Some('d' | 'D')) && softened(1) => Edit::Delete,
            _ => Edit::Keep,
        }
    });
}

static TO_LATIN_PASSES: &[RulePass<()>] = &[RulePass::word("soft sign", fold_soft_sign)];

/// Cyrillic to Latin
pub static TO_LATIN: Pipeline<()> = Pipeline::new(
    "serbian cyrillic-latin",
    map_cyrillic,
    CasePolicy::Sensitive,
    TO_LATIN_PASSES,
);

/// Latin to Cyrillic
pub static TO_CYRILLIC: Pipeline<()> =
    Pipeline::new("serbian latin-cyrillic", map_latin, CasePolicy::Sensitive, &[]);

/// Run a pipeline line by line; words in a line are rejoined with single
/// spaces and lines with `\n`
fn convert_lines(pipeline: &Pipeline<()>, text: &str) -> String {
    text.split('\n')
        .map(|line| pipeline.run(line, &()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert Serbian Cyrillic text to Latin
pub fn convert_to_latin(text: &str) -> String {
    convert_lines(&TO_LATIN, text)
}

/// Convert Serbian Latin text to Cyrillic
pub fn convert_to_cyrillic(text: &str) -> String {
    convert_lines(&TO_CYRILLIC, text)
}

/// Convert text whose source script is known
pub fn convert(text: &str, source: Script) -> String {
    match source {
        Script::Cyrillic => convert_to_latin(text),
        Script::Latin => convert_to_cyrillic(text),
    }
}

fn is_cyrillic_letter(ch: char) -> bool {
    CYRILLIC_TO_LATIN.longest_match(&[ch]).is_some()
}

fn is_latin_letter(ch: char) -> bool {
    LATIN_TO_CYRILLIC.longest_match(&[ch]).is_some()
}

/// Pick the script that accounts for more of the text's characters
///
/// Equal shares, including a text with no letter from either table, are
/// ambiguous.
pub fn detect_script(text: &str) -> Result<Script> {
    let total = text.chars().count();
    let cyrillic = text.chars().filter(|&ch| is_cyrillic_letter(ch)).count();
    let latin = text.chars().filter(|&ch| is_latin_letter(ch)).count();
    let ratio = |count: usize| {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        }
    };
    debug!(
        cyrillic = ratio(cyrillic),
        latin = ratio(latin),
        "serbian script ratios"
    );

    match cyrillic.cmp(&latin) {
        std::cmp::Ordering::Greater => Ok(Script::Cyrillic),
        std::cmp::Ordering::Less => Ok(Script::Latin),
        std::cmp::Ordering::Equal => {
            warn!(cyrillic, latin, "serbian source script is ambiguous");
            Err(EngineError::AmbiguousScript)
        }
    }
}

/// Convert text in whichever direction its script calls for
///
/// `source_script` is one of [`CYRILLIC_KEYS`] or [`LATIN_KEYS`]; `None`
/// detects the script from the text.
pub fn convert_text(text: &str, source_script: Option<&str>) -> Result<String> {
    let source = match source_script {
        Some(key) => key.parse()?,
        None => detect_script(text)?,
    };
    Ok(convert(text, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_cyrillic_source() {
        assert_eq!(
            convert_text("Пас је велик.", Some("cyrillic")).unwrap(),
            "Pas je velik."
        );
        assert_eq!(convert_text("Пас", Some("ЋИР")).unwrap(), "Pas");
    }

    #[test]
    fn test_detected_latin_all_caps() {
        assert_eq!(convert_text("NJEGOV", None).unwrap(), "ЊЕГОВ");
        assert_eq!(convert_text("Njegov", None).unwrap(), "Његов");
    }

    #[test]
    fn test_all_caps_digraph_to_latin() {
        assert_eq!(convert_to_latin("ЉУБАВ"), "LJUBAV");
        assert_eq!(convert_to_latin("Љубав"), "Ljubav");
    }

    #[test]
    fn test_soft_sign_folding() {
        assert_eq!(convert_to_latin("конь"), "konj");
        assert_eq!(convert_to_latin("речь"), "reć");
        assert_eq!(convert_to_latin("объект"), "objekt");
    }

    #[test]
    fn test_foreign_latin_letters() {
        assert_eq!(convert_to_cyrillic("xerox"), "ксерокс");
        assert_eq!(convert_to_cyrillic("Quiz"), "Квиз");
        assert_eq!(convert_to_cyrillic("XEROX"), "КСЕРОКС");
    }

    #[test]
    fn test_lines_preserved() {
        assert_eq!(convert_to_latin("Пас  је\nвелик"), "Pas je\nvelik");
    }

    #[test]
    fn test_ambiguous_script() {
        assert_eq!(convert_text("ab аб", None), Err(EngineError::AmbiguousScript));
        assert_eq!(convert_text("", None), Err(EngineError::AmbiguousScript));
        assert_eq!(detect_script("123 !"), Err(EngineError::AmbiguousScript));
    }

    #[test]
    fn test_unrecognized_key() {
        assert_eq!(
            convert_text("Пас", Some("greek")),
            Err(EngineError::UnrecognizedScriptKey {
                key: "greek".to_string()
            })
        );
    }

    #[test]
    fn test_script_keys_round_trip() {
        for script in [Script::Cyrillic, Script::Latin] {
            for key in script.keys() {
                assert_eq!(key.parse::<Script>(), Ok(script));
            }
            assert_eq!(script.to_string().parse::<Script>(), Ok(script));
        }
        assert_eq!(Script::Cyrillic.target(), Script::Latin);
    }
}
