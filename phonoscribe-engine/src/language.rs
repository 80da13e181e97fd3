//! Language registry
//!
//! Maps the codes and names callers use onto the pipelines in
//! [`crate::languages`] and the Serbian converter.

use crate::error::{EngineError, Result};
use std::fmt;
use std::str::FromStr;

/// A supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// Belarusian
    Belarusian,
    /// Bulgarian
    Bulgarian,
    /// Czech
    Czech,
    /// Modern Greek
    Greek,
    /// Classical Nahuatl
    Nahuatl,
    /// Polish
    Polish,
    /// Slovak
    Slovak,
    /// Spanish
    Spanish,
    /// Ukrainian
    Ukrainian,
    /// Serbian (script conversion rather than transcription)
    Serbian,
}

impl Language {
    /// Every language, in code order
    pub const ALL: [Language; 10] = [
        Language::Belarusian,
        Language::Bulgarian,
        Language::Czech,
        Language::Greek,
        Language::Nahuatl,
        Language::Polish,
        Language::Slovak,
        Language::Spanish,
        Language::Ukrainian,
        Language::Serbian,
    ];

    /// Every language
    pub fn all() -> &'static [Language] {
        &Self::ALL
    }

    /// Canonical code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Belarusian => "be",
            Language::Bulgarian => "bg",
            Language::Czech => "cs",
            Language::Greek => "el",
            Language::Nahuatl => "nah",
            Language::Polish => "pl",
            Language::Slovak => "sk",
            Language::Spanish => "es",
            Language::Ukrainian => "uk",
            Language::Serbian => "sr",
        }
    }

    /// English name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Belarusian => "Belarusian",
            Language::Bulgarian => "Bulgarian",
            Language::Czech => "Czech",
            Language::Greek => "Greek",
            Language::Nahuatl => "Nahuatl",
            Language::Polish => "Polish",
            Language::Slovak => "Slovak",
            Language::Spanish => "Spanish",
            Language::Ukrainian => "Ukrainian",
            Language::Serbian => "Serbian",
        }
    }

    /// Resolve a code, alias or English name (case-insensitive)
    pub fn from_code(code: &str) -> Result<Self> {
        let language = match code.trim().to_lowercase().as_str() {
            "be" | "bel" | "belarusian" => Language::Belarusian,
            "bg" | "bul" | "bulgarian" => Language::Bulgarian,
            "cs" | "cz" | "ces" | "czech" => Language::Czech,
            "el" | "gr" | "ell" | "greek" => Language::Greek,
            "nah" | "nci" | "nahuatl" => Language::Nahuatl,
            "pl" | "pol" | "polish" => Language::Polish,
            "sk" | "slk" | "slovak" => Language::Slovak,
            "es" | "spa" | "spanish" => Language::Spanish,
            "uk" | "ukr" | "ukrainian" => Language::Ukrainian,
            "sr" | "srp" | "serbian" => Language::Serbian,
            _ => {
                return Err(EngineError::UnsupportedLanguage {
                    code: code.to_string(),
                })
            }
        };
        Ok(language)
    }

    /// Whether the language is transcribed to IPA (everything but Serbian)
    pub fn is_transcription(&self) -> bool {
        !matches!(self, Language::Serbian)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = EngineError;

    fn from_str(code: &str) -> Result<Self> {
        Self::from_code(code)
    }
}
