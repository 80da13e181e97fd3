//! Public API for Phonoscribe
//!
//! This crate provides a stable interface over the transcription engine:
//! configuration that can be loaded from TOML, a [`Transcriber`] that
//! returns serializable [`Transcription`] records, and one-call helpers.
//!
//! ```rust
//! use phonoscribe_api::{transcribe, Transcriber};
//!
//! assert_eq!(transcribe("calli", "nah").unwrap(), "kalli");
//!
//! let transcriber = Transcriber::with_language("cs").unwrap();
//! let result = transcriber.transcribe("pes").unwrap();
//! assert_eq!(result.language, "cs");
//! assert_eq!(result.output, "pˈɛs");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use phonoscribe_engine::Language;
use tracing::debug;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{LanguageInfo, Transcription};
pub use error::ApiError;
pub use phonoscribe_engine::{
    BulgarianOptions, CzechOptions, GreekOptions, Options, PolishOptions, SerbianOptions,
    SlovakOptions, SpanishOptions,
};

/// Main entry point for transcription
///
/// Wraps the engine transcriber so callers depend only on this crate's
/// configuration and DTO types.
#[derive(Debug, Clone)]
pub struct Transcriber {
    inner: phonoscribe_engine::Transcriber,
    config: Config,
}

impl Transcriber {
    /// Create a transcriber for a language with default options
    pub fn with_language(lang_code: &str) -> Result<Self> {
        Self::with_config(Config::for_language(lang_code)?)
    }

    /// Create a transcriber from a validated configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let inner = config.engine_builder().build()?;
        debug!(language = inner.language().code(), "api transcriber ready");
        Ok(Self { inner, config })
    }

    /// Transcribe one text
    pub fn transcribe(&self, text: &str) -> Result<Transcription> {
        let output = self.inner.transcribe(text)?;
        Ok(Transcription::new(self.inner.language(), text, output))
    }

    /// Transcribe many texts, in parallel when the `parallel` feature is on
    pub fn transcribe_batch<S>(&self, texts: &[S]) -> Result<Vec<Transcription>>
    where
        S: AsRef<str> + Sync,
    {
        let outputs = self.inner.transcribe_batch(texts)?;
        let language = self.inner.language();
        Ok(texts
            .iter()
            .zip(outputs)
            .map(|(text, output)| Transcription::new(language, text.as_ref(), output))
            .collect())
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the configured language
    pub fn language(&self) -> Language {
        self.inner.language()
    }
}

// Convenience functions

/// Transcribe text in the language with the given code, using default options
pub fn transcribe(text: &str, lang_code: &str) -> Result<String> {
    let transcriber = phonoscribe_engine::Transcriber::for_code(lang_code)?;
    Ok(transcriber.transcribe(text)?)
}

/// Convert Serbian text to the other script
///
/// `source_script` is one of the recognized script keys; `None` detects the
/// script from the text.
pub fn convert_serbian(text: &str, source_script: Option<&str>) -> Result<String> {
    Ok(phonoscribe_engine::convert_text(text, source_script)?)
}

/// Every language this crate can process
pub fn supported_languages() -> Vec<LanguageInfo> {
    Language::all().iter().copied().map(LanguageInfo::from).collect()
}
