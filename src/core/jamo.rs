//! Hangul syllable decomposition into compatibility jamo
//!
//! A precomposed syllable in U+AC00..=U+D7A3 is an arithmetic encoding of three
//! indices: leading consonant (19), vowel (21) and trailing consonant (28, where
//! 0 means "no trailing consonant"). Decomposition maps each index onto the
//! standalone compatibility jamo block (U+3131..) that a two-set keyboard emits.
//!
//! Compound trailing consonants (ㄳ, ㄺ, ㅄ, ...) are split into their two
//! constituent consonants, so a syllable yields 2, 3 or 4 jamo.

/// First precomposed syllable (가)
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Number of leading consonants
pub const LEAD_COUNT: u32 = 19;
/// Number of vowels
pub const VOWEL_COUNT: u32 = 21;
/// Number of trailing consonants, including "none" at index 0
pub const TRAIL_COUNT: u32 = 28;
/// Syllables sharing one leading consonant
const VOWEL_TRAIL_COUNT: u32 = VOWEL_COUNT * TRAIL_COUNT; // 588
/// Size of the precomposed syllable block
pub const SYLLABLE_COUNT: u32 = LEAD_COUNT * VOWEL_TRAIL_COUNT; // 11172

/// Compatibility jamo for each leading consonant index
pub const LEAD_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ',
    'ㅍ', 'ㅎ',
];

/// Compatibility jamo for each vowel index
pub const VOWEL_JAMO: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ',
    'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Compatibility jamo for each trailing consonant index
///
/// Clusters expand to two consonants, in writing order.
pub const TRAIL_JAMO: [&[char]; 28] = [
    &[],
    &['ㄱ'],
    &['ㄲ'],
    &['ㄱ', 'ㅅ'], // ㄳ
    &['ㄴ'],
    &['ㄴ', 'ㅈ'], // ㄵ
    &['ㄴ', 'ㅎ'], // ㄶ
    &['ㄷ'],
    &['ㄹ'],
    &['ㄹ', 'ㄱ'], // ㄺ
    &['ㄹ', 'ㅁ'], // ㄻ
    &['ㄹ', 'ㅂ'], // ㄼ
    &['ㄹ', 'ㅅ'], // ㄽ
    &['ㄹ', 'ㅌ'], // ㄾ
    &['ㄹ', 'ㅍ'], // ㄿ
    &['ㄹ', 'ㅎ'], // ㅀ
    &['ㅁ'],
    &['ㅂ'],
    &['ㅂ', 'ㅅ'], // ㅄ
    &['ㅅ'],
    &['ㅆ'],
    &['ㅇ'],
    &['ㅈ'],
    &['ㅊ'],
    &['ㅋ'],
    &['ㅌ'],
    &['ㅍ'],
    &['ㅎ'],
];

/// A precomposed Hangul syllable split into its three indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Syllable {
    lead: u32,
    vowel: u32,
    trail: u32,
}

impl Syllable {
    /// Build a syllable from indices
    ///
    /// Returns `None` if any index is out of range.
    #[must_use]
    pub const fn new(lead: u32, vowel: u32, trail: u32) -> Option<Self> {
        if lead >= LEAD_COUNT || vowel >= VOWEL_COUNT || trail >= TRAIL_COUNT {
            return None;
        }
        Some(Self { lead, vowel, trail })
    }

    /// Split a precomposed syllable into indices
    ///
    /// Returns `None` for any character outside the syllable block.
    ///
    /// # Examples
    /// ```
    /// use jamo_wordle::core::Syllable;
    ///
    /// let s = Syllable::from_char('한').unwrap();
    /// assert_eq!((s.lead(), s.vowel(), s.trail()), (18, 0, 4));
    /// assert!(Syllable::from_char('ㄱ').is_none());
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        let code = c as u32;
        if code < SYLLABLE_BASE || code >= SYLLABLE_BASE + SYLLABLE_COUNT {
            return None;
        }
        let index = code - SYLLABLE_BASE;
        Some(Self {
            lead: index / VOWEL_TRAIL_COUNT,
            vowel: (index % VOWEL_TRAIL_COUNT) / TRAIL_COUNT,
            trail: index % TRAIL_COUNT,
        })
    }

    /// Recompose the precomposed character
    #[must_use]
    pub fn to_char(self) -> char {
        let code = SYLLABLE_BASE + self.lead * VOWEL_TRAIL_COUNT + self.vowel * TRAIL_COUNT + self.trail;
        // Indices are range-checked on construction, so the code point is always a syllable
        char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    #[inline]
    #[must_use]
    pub const fn lead(self) -> u32 {
        self.lead
    }

    #[inline]
    #[must_use]
    pub const fn vowel(self) -> u32 {
        self.vowel
    }

    #[inline]
    #[must_use]
    pub const fn trail(self) -> u32 {
        self.trail
    }

    /// Whether the syllable has a trailing consonant
    #[inline]
    #[must_use]
    pub const fn has_trail(self) -> bool {
        self.trail != 0
    }

    /// Compatibility jamo for this syllable, in order: lead, vowel, trail(s)
    pub fn jamo(self) -> impl Iterator<Item = char> {
        [LEAD_JAMO[self.lead as usize], VOWEL_JAMO[self.vowel as usize]]
            .into_iter()
            .chain(TRAIL_JAMO[self.trail as usize].iter().copied())
    }

    /// Number of jamo this syllable decomposes to (2, 3 or 4)
    #[must_use]
    pub const fn jamo_count(self) -> usize {
        2 + TRAIL_JAMO[self.trail as usize].len()
    }
}

/// Decompose text into compatibility jamo
///
/// Precomposed syllables are expanded; every other character passes through
/// unchanged. Never fails, and is idempotent on its own output.
///
/// # Examples
/// ```
/// use jamo_wordle::core::decompose;
///
/// assert_eq!(decompose("한글"), "ㅎㅏㄴㄱㅡㄹ");
/// assert_eq!(decompose("닭"), "ㄷㅏㄹㄱ");
/// assert_eq!(decompose("ㄱa가"), "ㄱaㄱㅏ");
/// ```
#[must_use]
pub fn decompose(text: &str) -> String {
    jamo_iter(text).collect()
}

/// Decompose text into a vector of jamo characters
#[must_use]
pub fn decompose_chars(text: &str) -> Vec<char> {
    jamo_iter(text).collect()
}

/// Lazily decompose text, one jamo (or passed-through character) at a time
pub fn jamo_iter(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(|c| {
        let syllable = Syllable::from_char(c);
        let passthrough = syllable.is_none().then_some(c);
        syllable.into_iter().flat_map(Syllable::jamo).chain(passthrough)
    })
}

/// Length of the jamo sequence `text` decomposes to
#[must_use]
pub fn jamo_len(text: &str) -> usize {
    text.chars()
        .map(|c| Syllable::from_char(c).map_or(1, Syllable::jamo_count))
        .sum()
}

/// Whether every character is a precomposed syllable (`^[가-힣]+$`)
#[must_use]
pub fn is_all_syllables(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| Syllable::from_char(c).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllable_block_size() {
        assert_eq!(SYLLABLE_COUNT, 11172);
        assert_eq!(
            Syllable::from_char('힣'),
            Syllable::new(LEAD_COUNT - 1, VOWEL_COUNT - 1, TRAIL_COUNT - 1)
        );
        assert!(Syllable::from_char('\u{D7A4}').is_none());
        assert!(Syllable::from_char('\u{ABFF}').is_none());
    }

    #[test]
    fn syllable_indices_round_trip_over_whole_block() {
        for code in SYLLABLE_BASE..SYLLABLE_BASE + SYLLABLE_COUNT {
            let c = char::from_u32(code).unwrap();
            let s = Syllable::from_char(c).unwrap();

            assert_eq!(s.to_char(), c);
            let expected = if s.has_trail() { 3..=4 } else { 2..=2 };
            assert!(expected.contains(&s.jamo_count()), "{c} -> {}", s.jamo_count());

            let jamo: Vec<char> = s.jamo().collect();
            assert_eq!(jamo.len(), s.jamo_count());
            assert_eq!(LEAD_JAMO.iter().position(|&j| j == jamo[0]), Some(s.lead() as usize));
            assert_eq!(VOWEL_JAMO.iter().position(|&j| j == jamo[1]), Some(s.vowel() as usize));
            assert_eq!(&jamo[2..], TRAIL_JAMO[s.trail() as usize]);
        }
    }

    #[test]
    fn decompose_open_syllables() {
        assert_eq!(decompose("가나다라"), "ㄱㅏㄴㅏㄷㅏㄹㅏ");
        assert_eq!(jamo_len("가나다라"), 8);
    }

    #[test]
    fn decompose_trailing_consonants() {
        assert_eq!(decompose("한국"), "ㅎㅏㄴㄱㅜㄱ");
        assert_eq!(decompose("있다"), "ㅇㅣㅆㄷㅏ");
    }

    #[test]
    fn decompose_splits_clusters() {
        assert_eq!(decompose("닭"), "ㄷㅏㄹㄱ");
        assert_eq!(decompose("없다"), "ㅇㅓㅂㅅㄷㅏ");
        assert_eq!(decompose("앉"), "ㅇㅏㄴㅈ");
        assert_eq!(jamo_len("읽"), 4);
    }

    #[test]
    fn decompose_keeps_compound_vowels_whole() {
        assert_eq!(decompose("과"), "ㄱㅘ");
        assert_eq!(decompose("의"), "ㅇㅢ");
    }

    #[test]
    fn decompose_passes_through_non_syllables() {
        assert_eq!(decompose(""), "");
        assert_eq!(decompose("abc 123"), "abc 123");
        assert_eq!(decompose("ㄱㅏ"), "ㄱㅏ");
        assert_eq!(decompose("ㄳ"), "ㄳ");
        assert_eq!(decompose("\u{1100}\u{1161}"), "\u{1100}\u{1161}");
    }

    #[test]
    fn decompose_is_idempotent() {
        for text in ["한글", "닭볶음탕", "ㄱㅏ나", "wordle 워들", ""] {
            let once = decompose(text);
            assert_eq!(decompose(&once), once);
        }
    }

    #[test]
    fn decompose_chars_matches_decompose() {
        let text = "값비싼 꽃";
        let chars: String = decompose_chars(text).into_iter().collect();
        assert_eq!(chars, decompose(text));
        assert!(jamo_iter(text).eq(decompose(text).chars()));
        assert_eq!(jamo_len(text), decompose(text).chars().count());
    }

    #[test]
    fn all_syllables_check() {
        assert!(is_all_syllables("사과"));
        assert!(!is_all_syllables("사과1"));
        assert!(!is_all_syllables("ㄱㅏ"));
        assert!(!is_all_syllables(""));
    }
}
