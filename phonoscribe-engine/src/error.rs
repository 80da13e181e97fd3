//! Engine error types

use crate::serbian::{CYRILLIC_KEYS, LATIN_KEYS};
use thiserror::Error;

/// Engine-level errors
///
/// Transcription itself never fails; errors come only from selecting what to
/// run (an unknown language, an unusable Serbian script key).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Serbian script auto-detection found equal Cyrillic and Latin evidence
    #[error(
        "cannot determine the source script of the text; pass one of the script keys ({})",
        script_key_listing()
    )]
    AmbiguousScript,

    /// Serbian source-script key is not one of the recognized keys
    #[error("unrecognized script key '{key}'; expected one of ({})", script_key_listing())]
    UnrecognizedScriptKey {
        /// The key that was supplied
        key: String,
    },

    /// Language code or name has no pipeline
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The language code that is not supported
        code: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),
}

fn script_key_listing() -> String {
    format!(
        "Cyrillic: {}; Latin: {}",
        CYRILLIC_KEYS.join(", "),
        LATIN_KEYS.join(", ")
    )
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_errors_list_every_key() {
        let messages = [
            EngineError::AmbiguousScript.to_string(),
            EngineError::UnrecognizedScriptKey {
                key: "greek".to_string(),
            }
            .to_string(),
        ];
        for message in &messages {
            for key in CYRILLIC_KEYS.iter().chain(LATIN_KEYS) {
                assert!(message.contains(key), "{message:?} should list {key:?}");
            }
        }
        assert!(messages[1].contains("'greek'"));
    }

    #[test]
    fn test_unsupported_language_message() {
        let err = EngineError::UnsupportedLanguage {
            code: "xx".to_string(),
        };
        assert_eq!(err.to_string(), "language 'xx' not supported");
    }
}
