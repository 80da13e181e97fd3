//! IPA modifier letters and combining diacritics shared by the pipelines
//!
//! Every mark is a single Unicode scalar value, so it occupies its own
//! position in a [`Word`](crate::Word) and can be tested as context.

/// Primary stress (U+02C8), placed immediately before the stressed nucleus
pub const STRESS: char = 'ˈ';
/// Length (U+02D0)
pub const LONG: char = 'ː';
/// Palatalization (U+02B2)
pub const PALATAL: char = 'ʲ';
/// Labialization (U+02B7)
pub const LABIAL: char = 'ʷ';

/// Orthographic stress mark written by users (combining acute, U+0301)
pub const ACUTE: char = '\u{0301}';
/// Syllabic (combining vertical line below, U+0329)
pub const SYLLABIC: char = '\u{0329}';
/// Non-syllabic (combining inverted breve below, U+032F)
pub const NON_SYLLABIC: char = '\u{032F}';
/// Nasalization (combining tilde, U+0303)
pub const NASAL: char = '\u{0303}';
/// Voiceless (combining ring above, U+030A)
pub const VOICELESS_ABOVE: char = '\u{030A}';
/// Voiceless (combining ring below, U+0325)
pub const VOICELESS_BELOW: char = '\u{0325}';
/// Dental (combining bridge below, U+032A)
pub const DENTAL: char = '\u{032A}';
/// Raised (combining up tack below, U+031D)
pub const RAISED: char = '\u{031D}';
/// Lowered (combining down tack below, U+031E)
pub const LOWERED: char = '\u{031E}';
/// Retracted (combining minus sign below, U+0320)
pub const RETRACTED: char = '\u{0320}';
/// Combining macron (U+0304)
pub const MACRON: char = '\u{0304}';
/// Tie bar joining the halves of an affricate (U+0361)
pub const TIE: char = '\u{0361}';
