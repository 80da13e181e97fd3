//! Grapheme-to-segment correspondence trie
//!
//! This is the segment mapper every pipeline starts with: a left-to-right
//! scan that, at each position, takes the longest grapheme sequence listed in
//! the table and emits its segments. Characters with no entry are copied
//! through unchanged, so unmapped input is never lost.

use crate::word::Segments;
use std::collections::HashMap;

/// Compact trie node using array indices instead of pointers
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Output segments if a grapheme sequence ends here
    output: Option<&'static str>,
}

/// Longest-match grapheme table
///
/// Built once per language (usually inside a `LazyLock`) and only read
/// afterwards.
#[derive(Debug, Clone)]
pub struct CorrespondenceTable {
    /// All nodes in contiguous storage; index 0 is the root
    nodes: Vec<TrieNode>,
    entries: usize,
}

impl Default for CorrespondenceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CorrespondenceTable {
    /// Create empty table
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            entries: 0,
        }
    }

    /// Build from `(graphemes, segments)` pairs
    ///
    /// Later pairs override earlier ones with the same graphemes.
    pub fn from_pairs(pairs: &[(&str, &'static str)]) -> Self {
        let mut table = Self::new();
        for (graphemes, output) in pairs {
            table.insert(graphemes, output);
        }
        table
    }

    /// Insert one correspondence; an empty grapheme sequence is ignored
    pub fn insert(&mut self, graphemes: &str, output: &'static str) {
        if graphemes.is_empty() {
            return;
        }

        let mut current_idx = 0u32;
        for ch in graphemes.chars() {
            let next_idx = match self.nodes[current_idx as usize].children.get(&ch) {
                Some(&child_idx) => child_idx,
                None => {
                    let new_idx = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[current_idx as usize]
                        .children
                        .insert(ch, new_idx);
                    new_idx
                }
            };
            current_idx = next_idx;
        }

        let node = &mut self.nodes[current_idx as usize];
        if node.output.is_none() {
            self.entries += 1;
        }
        node.output = Some(output);
    }

    /// Number of grapheme sequences in the table
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Longest entry that is a prefix of `chars`
    ///
    /// Returns the number of characters consumed and the output segments.
    pub fn longest_match(&self, chars: &[char]) -> Option<(usize, &'static str)> {
        let mut current_idx = 0u32;
        let mut best = None;

        for (consumed, ch) in chars.iter().enumerate() {
            match self.nodes[current_idx as usize].children.get(ch) {
                Some(&child_idx) => {
                    current_idx = child_idx;
                    if let Some(output) = self.nodes[current_idx as usize].output {
                        best = Some((consumed + 1, output));
                    }
                }
                None => break,
            }
        }

        best
    }

    /// Map a character sequence, copying unmatched characters through
    pub fn map_chars(&self, chars: &[char]) -> Segments {
        let mut out = Segments::with_capacity(chars.len());
        let mut pos = 0;
        while pos < chars.len() {
            match self.longest_match(&chars[pos..]) {
                Some((consumed, output)) => {
                    out.extend(output.chars());
                    pos += consumed;
                }
                None => {
                    out.push(chars[pos]);
                    pos += 1;
                }
            }
        }
        out
    }

    /// Map a word, copying unmatched characters through
    pub fn map(&self, word: &str) -> Segments {
        let chars: Segments = word.chars().collect();
        self.map_chars(&chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapped(table: &CorrespondenceTable, word: &str) -> String {
        table.map(word).into_iter().collect()
    }

    fn table() -> CorrespondenceTable {
        CorrespondenceTable::from_pairs(&[
            ("c", "ʦ"),
            ("ch", "x"),
            ("d", "d"),
            ("dz", "ʣ"),
            ("dž", "ʤ"),
            ("x", "ks"),
        ])
    }

    #[test]
    fn test_longest_match_wins() {
        let table = table();
        assert_eq!(mapped(&table, "chata"), "xata");
        assert_eq!(mapped(&table, "cena"), "ʦena");
        assert_eq!(mapped(&table, "dždž"), "ʤʤ");
    }

    #[test]
    fn test_prefix_without_entry_falls_back() {
        // "dż" has no entry: 'd' maps alone and 'ż' is copied through
        let table = table();
        assert_eq!(mapped(&table, "dż"), "dż");
    }

    #[test]
    fn test_unmapped_characters_preserved() {
        let table = table();
        assert_eq!(mapped(&table, "123 ?!"), "123 ?!");
        assert_eq!(mapped(&table, ""), "");
    }

    #[test]
    fn test_multi_segment_output() {
        let table = table();
        assert_eq!(mapped(&table, "xx"), "ksks");
    }

    #[test]
    fn test_override_and_len() {
        let mut table = table();
        assert_eq!(table.len(), 6);
        table.insert("c", "k");
        table.insert("", "ignored");
        assert_eq!(table.len(), 6);
        assert_eq!(mapped(&table, "c"), "k");
        assert!(!table.is_empty());
        assert!(CorrespondenceTable::new().is_empty());
    }
}
