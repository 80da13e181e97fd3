//! Word segment buffers and per-position rewrites

use crate::window::Window;
use smallvec::SmallVec;
use std::fmt;

/// Inline segment storage; most words never spill to the heap
pub type Segments = SmallVec<[char; 24]>;

/// Result of a rewrite closure for one position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Emit the current segment unchanged
    Keep,
    /// Emit a different single segment
    Replace(char),
    /// Emit a run of segments instead of the current one
    ReplaceWith(&'static str),
    /// Emit nothing
    Delete,
    /// Emit the current segment followed by a run
    Append(&'static str),
    /// Emit a run followed by the current segment
    Prepend(&'static str),
}

impl Edit {
    /// `Replace` when `ch` is `Some`, otherwise `Keep`
    pub fn replace_or_keep(ch: Option<char>) -> Self {
        ch.map_or(Edit::Keep, Edit::Replace)
    }
}

/// One whitespace-delimited word as it moves through a pipeline
///
/// Holds the working segment buffer and whether the source word was written
/// in all capitals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
    segments: Segments,
    all_caps: bool,
}

impl Word {
    /// Create from already-mapped segments
    pub fn new(segments: Segments, all_caps: bool) -> Self {
        Self { segments, all_caps }
    }

    /// Create from a string, one segment per scalar value
    pub fn from_phones(phones: &str) -> Self {
        Self {
            segments: phones.chars().collect(),
            all_caps: false,
        }
    }

    /// Source word was written in all capitals
    pub fn is_all_caps(&self) -> bool {
        self.all_caps
    }

    /// Current segments
    pub fn segments(&self) -> &[char] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Word has no segments left
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment at `index`
    pub fn get(&self, index: usize) -> Option<char> {
        self.segments.get(index).copied()
    }

    /// First segment
    pub fn first(&self) -> Option<char> {
        self.segments.first().copied()
    }

    /// Last segment
    pub fn last(&self) -> Option<char> {
        self.segments.last().copied()
    }

    /// Overwrite the segment at `index`; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, ch: char) {
        if let Some(slot) = self.segments.get_mut(index) {
            *slot = ch;
        }
    }

    /// Insert a run of segments before `index` (or at the end)
    pub fn insert_str(&mut self, index: usize, run: &str) {
        let at = index.min(self.segments.len());
        for (offset, ch) in run.chars().enumerate() {
            self.segments.insert(at + offset, ch);
        }
    }

    /// Insert one segment before `index` (or at the end)
    pub fn insert(&mut self, index: usize, ch: char) {
        let at = index.min(self.segments.len());
        self.segments.insert(at, ch);
    }

    /// Remove the segment at `index`, if present
    pub fn remove(&mut self, index: usize) -> Option<char> {
        (index < self.segments.len()).then(|| self.segments.remove(index))
    }

    /// Word contains the segment
    pub fn contains(&self, ch: char) -> bool {
        self.segments.contains(&ch)
    }

    /// First position of the segment
    pub fn position(&self, ch: char) -> Option<usize> {
        self.segments.iter().position(|&c| c == ch)
    }

    /// Segments equal the given phone string
    pub fn is(&self, phones: &str) -> bool {
        self.segments.iter().copied().eq(phones.chars())
    }

    /// Window at `index`; `None` when out of range
    pub fn window(&self, index: usize) -> Option<Window<'_>> {
        (index < self.segments.len()).then(|| Window::new(&self.segments, index))
    }

    /// Rebuild the buffer position by position
    ///
    /// The closure sees windows over the buffer as it was before the call, so
    /// an edit never feeds a later position of the same rewrite.
    pub fn rewrite<F>(&mut self, mut edit: F)
    where
        F: FnMut(Window<'_>) -> Edit,
    {
        if self.segments.is_empty() {
            return;
        }
        let mut out = Segments::with_capacity(self.segments.len() + 2);
        for index in 0..self.segments.len() {
            let window = Window::new(&self.segments, index);
            match edit(window) {
                Edit::Keep => out.push(window.current()),
                Edit::Replace(ch) => out.push(ch),
                Edit::ReplaceWith(run) => out.extend(run.chars()),
                Edit::Delete => {}
                Edit::Append(run) => {
                    out.push(window.current());
                    out.extend(run.chars());
                }
                Edit::Prepend(run) => {
                    out.extend(run.chars());
                    out.push(window.current());
                }
            }
        }
        self.segments = out;
    }

    /// Keep only the segments matching the predicate
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(char) -> bool,
    {
        self.segments.retain(|ch| keep(*ch));
    }

    /// Index of the last segment not matched by `skip`
    pub fn last_index_where_not<F>(&self, skip: F) -> Option<usize>
    where
        F: Fn(char) -> bool,
    {
        self.segments.iter().rposition(|&ch| !skip(ch))
    }

    /// Replace every segment with its upper-case form
    pub fn make_uppercase(&mut self) {
        let upper: Segments = self.segments.iter().flat_map(|c| c.to_uppercase()).collect();
        self.segments = upper;
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.segments {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Source word has at least one upper-case letter and no lower-case ones
pub fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_reads_previous_buffer() {
        // Each 'a' becomes 'b', and a 'b' after 'a' becomes 'c'. The second
        // 'a' must see the original 'a' before it, not the rewritten 'b'.
        let mut word = Word::from_phones("aab");
        word.rewrite(|w| match (w.prev(), w.current()) {
            (_, 'a') => Edit::Replace('b'),
            (Some('a'), 'b') => Edit::Replace('c'),
            _ => Edit::Keep,
        });
        assert_eq!(word.to_string(), "bbc");
    }

    #[test]
    fn test_rewrite_variants() {
        let mut word = Word::from_phones("abcde");
        word.rewrite(|w| match w.current() {
            'a' => Edit::Prepend("ˈ"),
            'b' => Edit::Delete,
            'c' => Edit::ReplaceWith("ʦ"),
            'd' => Edit::Append("ʲ"),
            _ => Edit::Keep,
        });
        assert_eq!(word.to_string(), "ˈaʦdʲe");
    }

    #[test]
    fn test_insert_remove() {
        let mut word = Word::from_phones("kasa");
        word.insert(1, 'ˈ');
        assert_eq!(word.to_string(), "kˈasa");
        assert_eq!(word.remove(1), Some('ˈ'));
        assert_eq!(word.remove(10), None);
        word.insert_str(99, "ʲi");
        assert_eq!(word.to_string(), "kasaʲi");
    }

    #[test]
    fn test_last_index_where_not() {
        let word = Word::from_phones("pes.!");
        assert_eq!(word.last_index_where_not(|c| c == '.' || c == '!'), Some(2));
        let punct = Word::from_phones("..");
        assert_eq!(punct.last_index_where_not(|c| c == '.'), None);
    }

    #[test]
    fn test_all_caps_detection() {
        assert!(is_all_caps("NJEGOV"));
        assert!(is_all_caps("ЊЕГОВ."));
        assert!(!is_all_caps("Njegov"));
        assert!(!is_all_caps("123"));
        assert!(!is_all_caps(""));
    }

    #[test]
    fn test_make_uppercase() {
        let mut word = Word::from_phones("njegov");
        word.make_uppercase();
        assert_eq!(word.to_string(), "NJEGOV");
    }
}
