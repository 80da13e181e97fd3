//! Transcriber and builder
//!
//! A [`Transcriber`] binds one language to its options. It is cheap to clone
//! and can be shared between threads; the pipelines it dispatches to are
//! immutable statics.

use crate::error::{EngineError, Result};
use crate::language::Language;
use crate::languages::{
    belarusian, bulgarian, czech, greek, nahuatl, polish, slovak, spanish, ukrainian,
};
use crate::options::{
    BulgarianOptions, CzechOptions, GreekOptions, Options, PolishOptions, SlovakOptions,
    SpanishOptions,
};
use crate::serbian::{self, Script};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::Arc;
use tracing::debug;

/// Transcribes (or, for Serbian, converts) text in one language
#[derive(Debug, Clone)]
pub struct Transcriber {
    language: Language,
    options: Options,
    #[cfg(feature = "parallel")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl Transcriber {
    /// Transcriber with default options
    pub fn new(language: Language) -> Self {
        Self {
            language,
            options: Options::default(),
            #[cfg(feature = "parallel")]
            pool: None,
        }
    }

    /// Transcriber for a language code such as `"pl"` or `"greek"`
    pub fn for_code(code: &str) -> Result<Self> {
        Ok(Self::new(Language::from_code(code)?))
    }

    /// Start building a transcriber
    pub fn builder() -> TranscriberBuilder {
        TranscriberBuilder::new()
    }

    /// Selected language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Options in effect
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Transcribe one text
    ///
    /// Only Serbian can fail, when its source script is ambiguous or the
    /// configured key is not recognized.
    pub fn transcribe(&self, text: &str) -> Result<String> {
        debug!(
            language = self.language.code(),
            words = text.split_whitespace().count(),
            "transcribing"
        );
        let o = &self.options;
        let output = match self.language {
            Language::Belarusian => belarusian::transcribe(text),
            Language::Bulgarian => bulgarian::transcribe(text, &o.bulgarian),
            Language::Czech => czech::transcribe(text, &o.czech),
            Language::Greek => greek::transcribe(text, &o.greek),
            Language::Nahuatl => nahuatl::transcribe(text),
            Language::Polish => polish::transcribe(text, &o.polish),
            Language::Slovak => slovak::transcribe(text, &o.slovak),
            Language::Spanish => spanish::transcribe(text, &o.spanish),
            Language::Ukrainian => ukrainian::transcribe(text),
            Language::Serbian => {
                serbian::convert_text(text, o.serbian.source_script.as_deref())?
            }
        };
        Ok(output)
    }

    /// Transcribe many independent texts, in parallel when the `parallel`
    /// feature is on
    ///
    /// Fails with the first error any text produces.
    pub fn transcribe_batch<S>(&self, texts: &[S]) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        debug!(
            language = self.language.code(),
            texts = texts.len(),
            "transcribing batch"
        );
        #[cfg(feature = "parallel")]
        {
            let run = || -> Result<Vec<String>> {
                texts
                    .par_iter()
                    .map(|text| self.transcribe(text.as_ref()))
                    .collect()
            };
            match &self.pool {
                Some(pool) => pool.install(run),
                None => run(),
            }
        }

        #[cfg(not(feature = "parallel"))]
        {
            texts
                .iter()
                .map(|text| self.transcribe(text.as_ref()))
                .collect()
        }
    }
}

/// Builder for [`Transcriber`]
///
/// ```rust
/// use phonoscribe_engine::{PolishOptions, Transcriber};
///
/// let transcriber = Transcriber::builder()
///     .language("pl")
///     .polish(PolishOptions { final_denasal: true, stress: false })
///     .build()
///     .unwrap();
/// assert_eq!(transcriber.transcribe("jagnię").unwrap(), "jaɡɲɛ");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriberBuilder {
    language: Option<String>,
    options: Options,
    threads: Option<usize>,
}

impl TranscriberBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code, alias or English name
    pub fn language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Replace every option at once
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Bulgarian options
    pub fn bulgarian(mut self, options: BulgarianOptions) -> Self {
        self.options.bulgarian = options;
        self
    }

    /// Czech options
    pub fn czech(mut self, options: CzechOptions) -> Self {
        self.options.czech = options;
        self
    }

    /// Slovak options
    pub fn slovak(mut self, options: SlovakOptions) -> Self {
        self.options.slovak = options;
        self
    }

    /// Polish options
    pub fn polish(mut self, options: PolishOptions) -> Self {
        self.options.polish = options;
        self
    }

    /// Spanish options
    pub fn spanish(mut self, options: SpanishOptions) -> Self {
        self.options.spanish = options;
        self
    }

    /// Greek options
    pub fn greek(mut self, options: GreekOptions) -> Self {
        self.options.greek = options;
        self
    }

    /// Serbian source-script key; `None` detects the script per call
    pub fn source_script<S: Into<String>>(mut self, key: Option<S>) -> Self {
        self.options.serbian.source_script = key.map(Into::into);
        self
    }

    /// Worker threads for batch transcription (`None` uses rayon's global pool)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Validate the settings and build the transcriber
    pub fn build(self) -> Result<Transcriber> {
        let code = self
            .language
            .ok_or_else(|| EngineError::Config("no language selected".to_string()))?;
        let language = Language::from_code(&code)?;
        if let Some(key) = self.options.serbian.source_script.as_deref() {
            key.parse::<Script>()?;
        }
        if self.threads == Some(0) {
            return Err(EngineError::Config(
                "thread count must be at least 1".to_string(),
            ));
        }

        #[cfg(feature = "parallel")]
        let pool = match self.threads {
            Some(threads) => Some(Arc::new(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EngineError::Config(e.to_string()))?,
            )),
            None => None,
        };

        debug!(
            language = language.code(),
            threads = ?self.threads,
            "transcriber built"
        );
        Ok(Transcriber {
            language,
            options: self.options,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
