//! Whole-text container for passes that look across word boundaries

use crate::word::Word;
use std::fmt;

/// Ordered words of one input text
///
/// Words keep their position even when a pass empties them (for example a
/// token made only of stripped punctuation); empty words render to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    words: Vec<Word>,
}

impl Text {
    /// Create from words
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Words in order
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Mutable words in order
    pub fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    /// Number of words, empty ones included
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Text has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Mutable word at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Word> {
        self.words.get_mut(index)
    }

    /// Join the non-empty words with single spaces
    pub fn render(&self) -> String {
        let mut out = String::new();
        for word in self.words.iter().filter(|w| !w.is_empty()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&word.to_string());
        }
        out
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromIterator<Word> for Text {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
