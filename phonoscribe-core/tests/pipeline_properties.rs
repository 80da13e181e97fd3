//! Property tests for the shared pipeline machinery

use phonoscribe_core::{
    CasePolicy, CorrespondenceTable, Edit, PhonePairs, Pipeline, RulePass, Segments, Word,
};
use proptest::prelude::*;
use std::sync::LazyLock;

static TABLE: LazyLock<CorrespondenceTable> = LazyLock::new(|| {
    CorrespondenceTable::from_pairs(&[("sz", "ʂ"), ("cz", "t͡ʂ"), ("s", "s"), ("z", "z")])
});

const DEVOICING: PhonePairs = PhonePairs::new(&[('z', 'ʂ')]);

fn mapped(word: &str) -> String {
    TABLE.map(word).into_iter().collect()
}

fn map(word: &str) -> Segments {
    TABLE.map(word)
}

fn devoice_final(word: &mut Word) {
    let last = word.len().saturating_sub(1);
    word.rewrite(|w| {
        if w.index() == last {
            Edit::replace_or_keep(DEVOICING.forward(w.current()))
        } else {
            Edit::Keep
        }
    });
}

static PASSES: &[RulePass<()>] = &[RulePass::word("final devoicing", devoice_final)];
static TOY: Pipeline<()> = Pipeline::new("toy", map, CasePolicy::Lowercase, PASSES);

#[test]
fn test_digraph_applied_whole() {
    assert_eq!(mapped("szcz"), "ʂt͡ʂ");
    assert_eq!(TOY.run("kasz kaz", &()), "kaʂ kaʂ");
}

proptest! {
    #[test]
    fn unmapped_characters_pass_through(text in "[0-9a-y!?.]{0,40}") {
        // without 'z' no digraph can form, and 's' maps to itself
        let expected: String = text.chars().collect();
        prop_assert_eq!(mapped(&text), expected);
    }

    #[test]
    fn word_count_is_preserved(words in prop::collection::vec("[a-z0-9]{1,8}", 0..12)) {
        let text = words.join(" ");
        let output = TOY.run(&text, &());
        prop_assert_eq!(output.split_whitespace().count(), words.len());
    }

    #[test]
    fn no_dangling_digraph_halves(text in "(sz|cz|s|z|a){0,20}") {
        let mapped = mapped(&text);
        // every 'c' in the alphabet belongs to "cz", so none may survive
        prop_assert!(!mapped.contains('c'));
        let digraphs = text.matches("sz").count() + text.matches("cz").count();
        prop_assert_eq!(mapped.matches('ʂ').count(), digraphs);
    }

    #[test]
    fn keep_rewrite_is_identity(phones in "[a-zʲˈ]{0,20}") {
        let mut word = Word::from_phones(&phones);
        word.rewrite(|_| Edit::Keep);
        prop_assert_eq!(word.to_string(), phones);
    }
}
