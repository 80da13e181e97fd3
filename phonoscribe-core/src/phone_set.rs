//! Phone class membership with O(1) lookup for ASCII
//!
//! Rule passes test segments against small fixed classes (vowels, obstruents,
//! punctuation) on every position, so membership is a hot path.

/// Fixed set of segments, constructible in `const` context
///
/// ASCII members are answered from a 128-entry table; other members fall
/// back to a scan of the (short) source slice.
#[derive(Debug, Clone, Copy)]
pub struct PhoneSet {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// All members, including the ASCII ones
    members: &'static [char],
}

impl PhoneSet {
    /// Create from a list of member segments
    pub const fn new(members: &'static [char]) -> Self {
        let mut ascii_table = [false; 128];
        let mut i = 0;
        while i < members.len() {
            let ch = members[i];
            if (ch as u32) < 128 {
                ascii_table[ch as usize] = true;
            }
            i += 1;
        }
        Self {
            ascii_table,
            members,
        }
    }

    /// Check whether `ch` belongs to the set - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.members.contains(&ch)
        }
    }

    /// Membership test for an optional neighbour; `None` is never a member
    #[inline]
    pub fn holds(&self, ch: Option<char>) -> bool {
        ch.is_some_and(|c| self.contains(c))
    }

    /// The member segments, in declaration order
    pub fn members(&self) -> &'static [char] {
        self.members
    }
}

/// Python-style ASCII punctuation: ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``
pub const ASCII_PUNCTUATION: PhoneSet = PhoneSet::new(&[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<',
    '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
]);

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: PhoneSet = PhoneSet::new(&['a', 'e', 'ɛ', 'ʃ']);

    #[test]
    fn test_ascii_and_non_ascii_lookup() {
        assert!(MIXED.contains('a'));
        assert!(MIXED.contains('e'));
        assert!(!MIXED.contains('b'));

        assert!(MIXED.contains('ɛ'));
        assert!(MIXED.contains('ʃ'));
        assert!(!MIXED.contains('ʒ'));
    }

    #[test]
    fn test_optional_membership() {
        assert!(MIXED.holds(Some('a')));
        assert!(!MIXED.holds(Some('z')));
        assert!(!MIXED.holds(None));
    }

    #[test]
    fn test_punctuation_class() {
        for ch in ".,;:!?'\"()[]".chars() {
            assert!(ASCII_PUNCTUATION.contains(ch), "{ch:?} should be punctuation");
        }
        assert!(!ASCII_PUNCTUATION.contains('a'));
        assert!(!ASCII_PUNCTUATION.contains('’'));
        assert!(!ASCII_PUNCTUATION.contains('¿'));
    }
}
