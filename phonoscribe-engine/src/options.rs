//! Per-language transcription options
//!
//! Each record has named fields with the defaults used when a caller does
//! not say otherwise. With the `serde` feature every record deserializes
//! from a partial table, missing fields taking their defaults.

/// Bulgarian pipeline options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BulgarianOptions {
    /// Palatalize velars before front vowels and turn post-consonantal j into ʲ
    pub palatalization: bool,
}

impl Default for BulgarianOptions {
    fn default() -> Self {
        Self {
            palatalization: true,
        }
    }
}

/// Czech pipeline options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CzechOptions {
    /// Mark initial stress on every word
    pub stress: bool,
}

impl Default for CzechOptions {
    fn default() -> Self {
        Self { stress: true }
    }
}

/// Slovak pipeline options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SlovakOptions {
    /// Mark initial stress on polysyllabic words
    pub stress: bool,
}

impl Default for SlovakOptions {
    fn default() -> Self {
        Self { stress: true }
    }
}

/// Polish pipeline options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolishOptions {
    /// Word-final ę loses its nasality (`ɛ` instead of `ɛw̃`)
    pub final_denasal: bool,
    /// Mark penultimate stress
    pub stress: bool,
}

impl Default for PolishOptions {
    fn default() -> Self {
        Self {
            final_denasal: false,
            stress: true,
        }
    }
}

/// Spanish pipeline options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpanishOptions {
    /// Merge ʎ into ʝ
    pub yeismo: bool,
    /// Keep θ distinct from s; when off, θ merges into s (seseo)
    pub distincion: bool,
    /// Merge s and θ into s̄
    pub ceceo: bool,
}

impl Default for SpanishOptions {
    fn default() -> Self {
        Self {
            yeismo: true,
            distincion: true,
            ceceo: false,
        }
    }
}

/// Greek pipeline options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GreekOptions {
    /// Palatalize l and n before i as well as before j
    pub strong_palatalization: bool,
}

impl Default for GreekOptions {
    fn default() -> Self {
        Self {
            strong_palatalization: true,
        }
    }
}

/// Serbian converter options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SerbianOptions {
    /// Source-script key such as `"cyrillic"` or `"lat"`; `None` auto-detects
    pub source_script: Option<String>,
}

/// Options for every language, grouped by pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Bulgarian options
    pub bulgarian: BulgarianOptions,
    /// Czech options
    pub czech: CzechOptions,
    /// Slovak options
    pub slovak: SlovakOptions,
    /// Polish options
    pub polish: PolishOptions,
    /// Spanish options
    pub spanish: SpanishOptions,
    /// Greek options
    pub greek: GreekOptions,
    /// Serbian options
    pub serbian: SerbianOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let options = Options::default();
        assert!(options.bulgarian.palatalization);
        assert!(options.czech.stress);
        assert!(options.slovak.stress);
        assert!(!options.polish.final_denasal);
        assert!(options.polish.stress);
        assert!(options.spanish.yeismo);
        assert!(options.spanish.distincion);
        assert!(!options.spanish.ceceo);
        assert!(options.greek.strong_palatalization);
        assert_eq!(options.serbian.source_script, None);
    }
}
