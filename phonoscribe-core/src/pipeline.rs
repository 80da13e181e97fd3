//! Ordered rule pipelines
//!
//! A pipeline is the whole life of a text in one language:
//!
//! 1. split on whitespace into words,
//! 2. map each word's graphemes to segments,
//! 3. run the rule passes in their fixed order,
//! 4. apply the case policy and join the words with single spaces.
//!
//! Passes run strictly in declaration order; each one sees the complete
//! output of the one before it. A pass may be gated on an option, in which
//! case it is skipped entirely when the gate says no.

use crate::text::Text;
use crate::word::{is_all_caps, Segments, Word};
use std::fmt;
use tracing::trace;

/// Grapheme-to-segment mapping for one word
pub type Mapper = fn(&str) -> Segments;

/// How source casing interacts with the tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CasePolicy {
    /// Tables see the lower-cased word and output stays lower-case
    #[default]
    Lowercase,
    /// Tables see the source casing; all-caps words are re-cased at the end
    Sensitive,
}

enum PassBody<O: 'static> {
    Word(fn(&mut Word)),
    WordWith(fn(&mut Word, &O)),
    Text(fn(&mut Text)),
    TextWith(fn(&mut Text, &O)),
}

/// One named rewrite step
pub struct RulePass<O: 'static> {
    name: &'static str,
    body: PassBody<O>,
    gate: Option<fn(&O) -> bool>,
}

impl<O: 'static> RulePass<O> {
    /// Pass applied to every word independently
    pub const fn word(name: &'static str, apply: fn(&mut Word)) -> Self {
        Self {
            name,
            body: PassBody::Word(apply),
            gate: None,
        }
    }

    /// Word pass that reads the pipeline options
    pub const fn word_with(name: &'static str, apply: fn(&mut Word, &O)) -> Self {
        Self {
            name,
            body: PassBody::WordWith(apply),
            gate: None,
        }
    }

    /// Pass that sees the whole text (cross-word context)
    pub const fn text(name: &'static str, apply: fn(&mut Text)) -> Self {
        Self {
            name,
            body: PassBody::Text(apply),
            gate: None,
        }
    }

    /// Text pass that reads the pipeline options
    pub const fn text_with(name: &'static str, apply: fn(&mut Text, &O)) -> Self {
        Self {
            name,
            body: PassBody::TextWith(apply),
            gate: None,
        }
    }

    /// Run the pass only when `gate` returns true for the options
    pub const fn when(self, gate: fn(&O) -> bool) -> Self {
        Self {
            name: self.name,
            body: self.body,
            gate: Some(gate),
        }
    }

    /// Pass name, used in trace output
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the pass runs for these options
    pub fn is_enabled(&self, options: &O) -> bool {
        self.gate.map_or(true, |gate| gate(options))
    }

    /// Apply the pass unconditionally
    pub fn apply(&self, text: &mut Text, options: &O) {
        match self.body {
            PassBody::Word(apply) => text.words_mut().iter_mut().for_each(apply),
            PassBody::WordWith(apply) => {
                for word in text.words_mut() {
                    apply(word, options);
                }
            }
            PassBody::Text(apply) => apply(text),
            PassBody::TextWith(apply) => apply(text, options),
        }
    }
}

impl<O: 'static> fmt::Debug for RulePass<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RulePass")
            .field("name", &self.name)
            .field("gated", &self.gate.is_some())
            .finish()
    }
}

/// A language's complete transcription procedure
pub struct Pipeline<O: 'static> {
    name: &'static str,
    mapper: Mapper,
    case: CasePolicy,
    passes: &'static [RulePass<O>],
}

impl<O: 'static> Pipeline<O> {
    /// Create a pipeline from its mapper and ordered passes
    pub const fn new(
        name: &'static str,
        mapper: Mapper,
        case: CasePolicy,
        passes: &'static [RulePass<O>],
    ) -> Self {
        Self {
            name,
            mapper,
            case,
            passes,
        }
    }

    /// Pipeline name, used in trace output
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ordered passes
    pub fn passes(&self) -> &'static [RulePass<O>] {
        self.passes
    }

    /// Split and map a text, before any pass has run
    pub fn prepare(&self, text: &str) -> Text {
        text.split_whitespace()
            .map(|token| {
                let all_caps = is_all_caps(token);
                let segments = match self.case {
                    CasePolicy::Lowercase => (self.mapper)(&token.to_lowercase()),
                    CasePolicy::Sensitive => (self.mapper)(token),
                };
                Word::new(segments, all_caps)
            })
            .collect()
    }

    /// Run every enabled pass in order
    pub fn apply(&self, text: &mut Text, options: &O) {
        for pass in self.passes {
            if !pass.is_enabled(options) {
                trace!(pipeline = self.name, pass = pass.name(), "rule pass skipped");
                continue;
            }
            pass.apply(text, options);
            trace!(pipeline = self.name, pass = pass.name(), output = %text, "rule pass applied");
        }
    }

    /// Apply the case policy to finished words
    pub fn finish(&self, text: &mut Text) {
        if self.case == CasePolicy::Sensitive {
            for word in text.words_mut().iter_mut().filter(|w| w.is_all_caps()) {
                word.make_uppercase();
            }
        }
    }

    /// Transcribe `text` end to end
    pub fn run(&self, text: &str, options: &O) -> String {
        let mut prepared = self.prepare(text);
        trace!(pipeline = self.name, mapped = %prepared, "segments mapped");
        self.apply(&mut prepared, options);
        self.finish(&mut prepared);
        prepared.render()
    }
}

impl<O: 'static> fmt::Debug for Pipeline<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field("case", &self.case)
            .field("passes", &self.passes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Edit;

    #[derive(Default)]
    struct Flags {
        shout: bool,
    }

    fn map_identity(word: &str) -> Segments {
        word.chars().collect()
    }

    fn a_to_b(word: &mut Word) {
        word.rewrite(|w| if w.current() == 'a' { Edit::Replace('b') } else { Edit::Keep });
    }

    fn b_to_c(word: &mut Word) {
        word.rewrite(|w| if w.current() == 'b' { Edit::Replace('c') } else { Edit::Keep });
    }

    fn drop_last_word(text: &mut Text) {
        if let Some(word) = text.words_mut().last_mut() {
            word.retain(|_| false);
        }
    }

    fn shout(flags: &Flags) -> bool {
        flags.shout
    }

    static ORDERED_PASSES: &[RulePass<Flags>] = &[
        RulePass::word("a to b", a_to_b),
        RulePass::word("b to c", b_to_c),
        RulePass::text("drop last", drop_last_word).when(shout),
    ];

    static ORDERED: Pipeline<Flags> =
        Pipeline::new("ordered", map_identity, CasePolicy::Lowercase, ORDERED_PASSES);

    static CASED: Pipeline<Flags> =
        Pipeline::new("cased", map_identity, CasePolicy::Sensitive, &[]);

    #[test]
    fn test_passes_run_in_order() {
        // b_to_c sees the output of a_to_b, so every 'a' ends up as 'c'
        assert_eq!(ORDERED.run("aab ba", &Flags::default()), "ccc cc");
    }

    #[test]
    fn test_gated_pass() {
        assert_eq!(ORDERED.run("x y", &Flags { shout: false }), "x y");
        assert_eq!(ORDERED.run("x y", &Flags { shout: true }), "x");
    }

    #[test]
    fn test_whitespace_normalized() {
        assert_eq!(ORDERED.run("  x \n\t y  ", &Flags::default()), "x y");
        assert_eq!(ORDERED.run("", &Flags::default()), "");
    }

    #[test]
    fn test_case_policies() {
        assert_eq!(ORDERED.run("XyZ", &Flags::default()), "xyz");
        assert_eq!(CASED.run("XyZ ABC", &Flags::default()), "XyZ ABC");
    }

    #[test]
    fn test_pass_introspection() {
        assert_eq!(ORDERED.name(), "ordered");
        let names: Vec<_> = ORDERED.passes().iter().map(RulePass::name).collect();
        assert_eq!(names, ["a to b", "b to c", "drop last"]);
        assert!(!ORDERED.passes()[2].is_enabled(&Flags::default()));
    }
}
