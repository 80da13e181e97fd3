//! Directional segment correspondences (voicing pairs, palatal counterparts)

/// One-to-one correspondence between two classes of segments
///
/// The canonical use is a devoicing table: `forward` maps a voiced obstruent
/// to its voiceless partner and `backward` maps it back.
#[derive(Debug, Clone, Copy)]
pub struct PhonePairs {
    pairs: &'static [(char, char)],
}

impl PhonePairs {
    /// Create from `(left, right)` pairs
    pub const fn new(pairs: &'static [(char, char)]) -> Self {
        Self { pairs }
    }

    /// Right-hand partner of `ch`, if `ch` appears on the left
    pub fn forward(&self, ch: char) -> Option<char> {
        self.pairs.iter().find(|(l, _)| *l == ch).map(|(_, r)| *r)
    }

    /// Left-hand partner of `ch`, if `ch` appears on the right
    pub fn backward(&self, ch: char) -> Option<char> {
        self.pairs.iter().find(|(_, r)| *r == ch).map(|(l, _)| *l)
    }

    /// `ch` appears on the left-hand side
    pub fn is_left(&self, ch: char) -> bool {
        self.forward(ch).is_some()
    }

    /// `ch` appears on the right-hand side
    pub fn is_right(&self, ch: char) -> bool {
        self.backward(ch).is_some()
    }

    /// Apply `forward`, leaving unpaired segments unchanged
    pub fn forward_or_keep(&self, ch: char) -> char {
        self.forward(ch).unwrap_or(ch)
    }

    /// Apply `backward`, leaving unpaired segments unchanged
    pub fn backward_or_keep(&self, ch: char) -> char {
        self.backward(ch).unwrap_or(ch)
    }
}

/// Segment to replacement-string table for rewrites whose output is longer
/// than one segment (`m -> mɲ`, `ʝ -> ɟ͡ʝ`)
#[derive(Debug, Clone, Copy)]
pub struct PhoneMap {
    entries: &'static [(char, &'static str)],
}

impl PhoneMap {
    /// Create from `(segment, replacement)` entries
    pub const fn new(entries: &'static [(char, &'static str)]) -> Self {
        Self { entries }
    }

    /// Replacement for `ch`, if any
    pub fn get(&self, ch: char) -> Option<&'static str> {
        self.entries.iter().find(|(c, _)| *c == ch).map(|(_, s)| *s)
    }

    /// `ch` has a replacement
    pub fn contains(&self, ch: char) -> bool {
        self.get(ch).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVOICING: PhonePairs = PhonePairs::new(&[('b', 'p'), ('d', 't'), ('ʒ', 'ʃ')]);

    #[test]
    fn test_both_directions() {
        assert_eq!(DEVOICING.forward('b'), Some('p'));
        assert_eq!(DEVOICING.backward('ʃ'), Some('ʒ'));
        assert_eq!(DEVOICING.forward('p'), None);
        assert!(DEVOICING.is_left('d'));
        assert!(DEVOICING.is_right('t'));
        assert!(!DEVOICING.is_right('d'));
    }

    #[test]
    fn test_keep_fallback() {
        assert_eq!(DEVOICING.forward_or_keep('a'), 'a');
        assert_eq!(DEVOICING.backward_or_keep('t'), 'd');
    }

    #[test]
    fn test_phone_map() {
        const MAP: PhoneMap = PhoneMap::new(&[('m', "mɲ"), ('l', "ʎ")]);
        assert_eq!(MAP.get('m'), Some("mɲ"));
        assert!(MAP.contains('l'));
        assert_eq!(MAP.get('n'), None);
    }
}
