//! Segment window for context-sensitive rules
//!
//! A rule usually decides what to do with one segment by looking at up to two
//! neighbours on each side. [`Window`] gives O(1), bounds-checked access to
//! that context so no rule ever indexes a buffer directly.

/// View of one position in a segment buffer
///
/// Provides `[prev_prev, prev, current, next, next_next]` plus arbitrary
/// offsets. Every neighbour outside the buffer is `None`.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    segments: &'a [char],
    index: usize,
}

impl<'a> Window<'a> {
    /// Create a window at `index`
    ///
    /// `index` must be inside `segments`.
    pub fn new(segments: &'a [char], index: usize) -> Self {
        debug_assert!(index < segments.len(), "window index out of range");
        Self { segments, index }
    }

    /// Position of the current segment
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whole buffer the window looks into
    pub fn segments(&self) -> &'a [char] {
        self.segments
    }

    /// Current segment
    pub fn current(&self) -> char {
        self.segments[self.index]
    }

    /// Segment at a signed offset from the current one (0 = current)
    pub fn peek(&self, offset: isize) -> Option<char> {
        let target = self.index.checked_add_signed(offset)?;
        self.segments.get(target).copied()
    }

    /// Segment before previous (position - 2)
    pub fn prev_prev(&self) -> Option<char> {
        self.peek(-2)
    }

    /// Previous segment (position - 1)
    pub fn prev(&self) -> Option<char> {
        self.peek(-1)
    }

    /// Next segment (position + 1)
    pub fn next(&self) -> Option<char> {
        self.peek(1)
    }

    /// Segment after next (position + 2)
    pub fn next_next(&self) -> Option<char> {
        self.peek(2)
    }

    /// Next segment, looking through one `mark` (typically the stress mark)
    pub fn next_skipping(&self, mark: char) -> Option<char> {
        match self.next() {
            Some(ch) if ch == mark => self.next_next(),
            other => other,
        }
    }

    /// Check if we're at the first position
    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    /// Check if we're at the last position
    pub fn is_at_end(&self) -> bool {
        self.index + 1 == self.segments.len()
    }

    /// Check if previous segment is a specific segment
    pub fn prev_is(&self, target: char) -> bool {
        self.prev() == Some(target)
    }

    /// Check if next segment is a specific segment
    pub fn next_is(&self, target: char) -> bool {
        self.next() == Some(target)
    }
}
