//! High-level configuration API
//!
//! A [`Config`] names one language and carries the options of every
//! pipeline, so a single file can configure all of them. With the `serde`
//! feature it loads from TOML, each language's options in its own table:
//!
//! ```toml
//! language = "pl"
//! threads = 4
//!
//! [polish]
//! final_denasal = true
//!
//! [serbian]
//! source_script = "cyrillic"
//! ```

use crate::error::{ApiError, Result};
use phonoscribe_engine::{
    BulgarianOptions, CzechOptions, GreekOptions, Language, Options, PolishOptions, Script,
    SlovakOptions, SpanishOptions, TranscriberBuilder,
};

/// High-level configuration for transcription
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    language: String,
    threads: Option<usize>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    options: Options,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configuration for one language with default options
    pub fn for_language(code: &str) -> Result<Self> {
        Self::builder().language(code)?.build()
    }

    /// Parse and validate a TOML document
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    #[cfg(feature = "serde")]
    pub fn from_toml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Render the configuration as TOML
    #[cfg(feature = "serde")]
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| ApiError::Config(e.to_string()))
    }

    /// Selected language as written in the configuration
    pub fn language_code(&self) -> &str {
        &self.language
    }

    /// Selected language, resolved
    pub fn language(&self) -> Result<Language> {
        Ok(Language::from_code(&self.language)?)
    }

    /// Worker threads for batch transcription
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Options for every pipeline
    pub fn options(&self) -> &Options {
        &self.options
    }

    fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(ApiError::Config("language required".to_string()));
        }
        self.language()?;
        if let Some(key) = self.options.serbian.source_script.as_deref() {
            key.parse::<Script>()?;
        }
        if self.threads == Some(0) {
            return Err(ApiError::Config("threads must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Engine builder carrying this configuration
    pub(crate) fn engine_builder(&self) -> TranscriberBuilder {
        TranscriberBuilder::new()
            .language(self.language.as_str())
            .options(self.options.clone())
            .threads(self.threads)
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the language by code, alias or English name
    ///
    /// Unknown languages are rejected here rather than at `build()`.
    pub fn language(mut self, language: impl Into<String>) -> Result<Self> {
        let language = language.into();
        Language::from_code(&language)?;
        self.config.language = language;
        Ok(self)
    }

    /// Set thread count
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.config.threads = threads;
        self
    }

    /// Replace every option at once
    pub fn options(mut self, options: Options) -> Self {
        self.config.options = options;
        self
    }

    /// Bulgarian options
    pub fn bulgarian(mut self, options: BulgarianOptions) -> Self {
        self.config.options.bulgarian = options;
        self
    }

    /// Czech options
    pub fn czech(mut self, options: CzechOptions) -> Self {
        self.config.options.czech = options;
        self
    }

    /// Slovak options
    pub fn slovak(mut self, options: SlovakOptions) -> Self {
        self.config.options.slovak = options;
        self
    }

    /// Polish options
    pub fn polish(mut self, options: PolishOptions) -> Self {
        self.config.options.polish = options;
        self
    }

    /// Spanish options
    pub fn spanish(mut self, options: SpanishOptions) -> Self {
        self.config.options.spanish = options;
        self
    }

    /// Greek options
    pub fn greek(mut self, options: GreekOptions) -> Self {
        self.config.options.greek = options;
        self
    }

    /// Serbian source-script key; `None` detects the script per call
    pub fn source_script(mut self, key: Option<impl Into<String>>) -> Self {
        self.config.options.serbian.source_script = key.map(Into::into);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonoscribe_engine::EngineError;

    #[test]
    fn test_builder_requires_language() {
        assert!(matches!(
            Config::builder().build(),
            Err(ApiError::Config(message)) if message == "language required"
        ));
    }

    #[test]
    fn test_builder_rejects_unknown_language() {
        assert!(matches!(
            Config::builder().language("tlh"),
            Err(ApiError::Engine(EngineError::UnsupportedLanguage { .. }))
        ));
    }

    #[test]
    fn test_builder_rejects_bad_settings() {
        let zero_threads = Config::builder()
            .language("cs")
            .unwrap()
            .threads(Some(0))
            .build();
        assert!(matches!(zero_threads, Err(ApiError::Config(_))));

        let bad_key = Config::builder()
            .language("sr")
            .unwrap()
            .source_script(Some("runic"))
            .build();
        assert!(matches!(
            bad_key,
            Err(ApiError::Engine(EngineError::UnrecognizedScriptKey { .. }))
        ));
    }

    #[test]
    fn test_for_language_keeps_defaults() {
        let config = Config::for_language("Greek").unwrap();
        assert_eq!(config.language().unwrap(), Language::Greek);
        assert_eq!(config.language_code(), "Greek");
        assert_eq!(config.options(), &Options::default());
        assert_eq!(config.threads(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_toml_sections() {
        let config = Config::from_toml_str(
            r#"
language = "pl"
threads = 2

[polish]
final_denasal = true

[spanish]
yeismo = false
"#,
        )
        .unwrap();
        assert_eq!(config.language().unwrap(), Language::Polish);
        assert_eq!(config.threads(), Some(2));
        assert!(config.options().polish.final_denasal);
        assert!(config.options().polish.stress);
        assert!(!config.options().spanish.yeismo);
        assert!(config.options().spanish.distincion);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_toml_validation() {
        assert!(matches!(
            Config::from_toml_str("threads = 2"),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            Config::from_toml_str("language = 5"),
            Err(ApiError::Toml(_))
        ));
        assert!(matches!(
            Config::from_toml_str("language = \"sr\"\n[serbian]\nsource_script = \"x\""),
            Err(ApiError::Engine(EngineError::UnrecognizedScriptKey { .. }))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_toml_round_trip() {
        let config = Config::builder()
            .language("sr")
            .unwrap()
            .source_script(Some("lat"))
            .czech(CzechOptions { stress: false })
            .build()
            .unwrap();
        let rendered = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&rendered).unwrap(), config);
    }
}
