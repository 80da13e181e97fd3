//! Data Transfer Objects for API

use phonoscribe_engine::Language;

/// One transcribed (or, for Serbian, converted) text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transcription {
    /// Canonical code of the language that produced the output
    pub language: String,
    /// Text as given
    pub input: String,
    /// IPA transcription, or the text in the other script for Serbian
    pub output: String,
}

impl Transcription {
    /// Create a new transcription DTO
    pub fn new(language: Language, input: impl Into<String>, output: String) -> Self {
        Self {
            language: language.code().to_string(),
            input: input.into(),
            output,
        }
    }

    /// Serialize to a JSON object
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A supported language as reported to callers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanguageInfo {
    /// Canonical code
    pub code: String,
    /// English name
    pub name: String,
    /// `false` for Serbian, which converts between scripts instead
    pub transcription: bool,
}

impl From<Language> for LanguageInfo {
    fn from(language: Language) -> Self {
        Self {
            code: language.code().to_string(),
            name: language.name().to_string(),
            transcription: language.is_transcription(),
        }
    }
}
