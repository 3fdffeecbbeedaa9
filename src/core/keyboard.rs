//! Two-set (dubeolsik) keyboard reachability
//!
//! The on-screen keyboard only emits single consonants (including the five
//! doubled consonants reached with Shift) and simple vowels. Compound vowels
//! (ㅘ, ㅢ, ...) and compound trailing consonants (ㄳ, ㄺ, ...) have no key of
//! their own, so words containing them can never be typed as a jamo guess.

/// Every jamo the two-set layout produces directly
#[rustfmt::skip]
pub const KEYBOARD_JAMO: [char; 33] = [
    // consonants
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
    // vowels
    'ㅏ', 'ㅑ', 'ㅓ', 'ㅕ', 'ㅗ', 'ㅛ', 'ㅜ', 'ㅠ', 'ㅡ', 'ㅣ',
    'ㅐ', 'ㅔ', 'ㅒ', 'ㅖ',
];

/// Key rows as laid out on the two-set keyboard, Shift row last
pub const KEYBOARD_ROWS: [&[char]; 4] = [
    &['ㅂ', 'ㅈ', 'ㄷ', 'ㄱ', 'ㅅ', 'ㅛ', 'ㅕ', 'ㅑ', 'ㅐ', 'ㅔ'],
    &['ㅁ', 'ㄴ', 'ㅇ', 'ㄹ', 'ㅎ', 'ㅗ', 'ㅓ', 'ㅏ', 'ㅣ'],
    &['ㅋ', 'ㅌ', 'ㅊ', 'ㅍ', 'ㅠ', 'ㅜ', 'ㅡ'],
    &['ㄲ', 'ㄸ', 'ㅃ', 'ㅆ', 'ㅉ', 'ㅒ', 'ㅖ'],
];

/// Whether a single jamo has a key on the two-set layout
#[inline]
#[must_use]
pub fn is_keyboard_jamo(c: char) -> bool {
    KEYBOARD_JAMO.contains(&c)
}

/// First character of an already-decomposed sequence that has no key
#[must_use]
pub fn first_unreachable(jamo: &str) -> Option<char> {
    jamo.chars().find(|&c| !is_keyboard_jamo(c))
}

/// Whether every character of an already-decomposed sequence has a key
///
/// Empty input is trivially reachable.
#[must_use]
pub fn is_reachable(jamo: &str) -> bool {
    first_unreachable(jamo).is_none()
}
