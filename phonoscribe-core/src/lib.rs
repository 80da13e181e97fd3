//! Language-neutral machinery for rule-based phonetic transcription
//!
//! A transcription pipeline turns orthographic text into IPA in three steps:
//! a longest-match grapheme table maps each word to segments, an ordered
//! list of context-sensitive rule passes rewrites those segments, and the
//! words are joined back into one string.
//!
//! This crate holds the pieces every language shares:
//! - [`Word`] / [`Text`]: segment buffers, one per whitespace-delimited word
//! - [`Window`]: bounds-checked neighbour access for context rules
//! - [`PhoneSet`] / [`PhonePairs`] / [`PhoneMap`]: static phone classes and
//!   correspondences (voicing pairs, palatal counterparts)
//! - [`CorrespondenceTable`]: the grapheme-to-segment trie
//! - [`RulePass`] / [`Pipeline`]: ordered, optionally gated passes
//!
//! # Example
//!
//! ```rust
//! use phonoscribe_core::{CasePolicy, CorrespondenceTable, Pipeline, RulePass, Segments, Word};
//! use std::sync::LazyLock;
//!
//! static TABLE: LazyLock<CorrespondenceTable> =
//!     LazyLock::new(|| CorrespondenceTable::from_pairs(&[("sh", "ʃ"), ("a", "a")]));
//!
//! fn map(word: &str) -> Segments {
//!     TABLE.map(word)
//! }
//!
//! fn stress_first_vowel(word: &mut Word) {
//!     if let Some(i) = word.position('a') {
//!         word.insert(i, 'ˈ');
//!     }
//! }
//!
//! static PASSES: &[RulePass<()>] = &[RulePass::word("stress", stress_first_vowel)];
//! static TOY: Pipeline<()> = Pipeline::new("toy", map, CasePolicy::Lowercase, PASSES);
//!
//! assert_eq!(TOY.run("Shash", &()), "ʃˈaʃ");
//! ```

#![warn(missing_docs)]

pub mod correspondence;
pub mod marks;
pub mod pairs;
pub mod phone_set;
pub mod pipeline;
pub mod text;
pub mod window;
pub mod word;

pub use correspondence::CorrespondenceTable;
pub use pairs::{PhoneMap, PhonePairs};
pub use phone_set::{PhoneSet, ASCII_PUNCTUATION};
pub use pipeline::{CasePolicy, Mapper, Pipeline, RulePass};
pub use text::Text;
pub use window::Window;
pub use word::{is_all_caps, Edit, Segments, Word};
