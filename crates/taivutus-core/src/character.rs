// Grapheme classification for Finnish stems and suffixes

// ---------------------------------------------------------------------------
// Finnish vowel classes
// ---------------------------------------------------------------------------

/// Placeholder for a historically dropped vowel that some paradigms retain
/// in their inflection stems (`ovi` → stem `ovV`).
pub const VIRTUAL_VOWEL: char = 'V';

/// Placeholder for a dropped consonant (`hylje` → mask `C`).
pub const VIRTUAL_CONSONANT: char = 'C';

/// Back vowels: a o u
const BACK_VOWELS: &[char] = &['a', 'o', 'u'];

/// Front vowels: ä ö y
const FRONT_VOWELS: &[char] = &['\u{00E4}', '\u{00F6}', 'y'];

/// Neutral vowels: e i
const NEUTRAL_VOWELS: &[char] = &['e', 'i'];

// ---------------------------------------------------------------------------
// Predicates
//
// These are case-sensitive on purpose: the uppercase markers `V` and `C`
// live in the same strings as real letters. Callers lowercase user input
// with `simple_lower` before analysis.
// ---------------------------------------------------------------------------

/// Check whether a character is a vowel or the virtual vowel marker.
pub fn is_vowel(c: char) -> bool {
    c == VIRTUAL_VOWEL || is_back_vowel(c) || is_front_vowel(c) || is_neutral_vowel(c)
}

/// Front-harmony vowels: y, ä, ö.
pub fn is_front_vowel(c: char) -> bool {
    FRONT_VOWELS.contains(&c)
}

/// Back-harmony vowels: u, a, o.
pub fn is_back_vowel(c: char) -> bool {
    BACK_VOWELS.contains(&c)
}

/// Vowels that do not take part in harmony: i, e.
pub fn is_neutral_vowel(c: char) -> bool {
    NEUTRAL_VOWELS.contains(&c)
}

/// `a` in either harmony: a, ä.
pub fn is_a(c: char) -> bool {
    c == 'a' || c == '\u{00E4}'
}

/// `o` in either harmony: o, ö.
pub fn is_o(c: char) -> bool {
    c == 'o' || c == '\u{00F6}'
}

/// `u` in either harmony: u, y.
pub fn is_u(c: char) -> bool {
    c == 'u' || c == 'y'
}

/// Check whether a character is one of the virtual grapheme markers.
pub fn is_virtual(c: char) -> bool {
    c == VIRTUAL_VOWEL || c == VIRTUAL_CONSONANT
}

// ---------------------------------------------------------------------------
// Simple case conversion
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels() {
        for c in ['a', 'e', 'i', 'o', 'u', 'y', '\u{00E4}', '\u{00F6}'] {
            assert!(is_vowel(c), "{c} should be a vowel");
        }
        assert!(!is_vowel('b'));
        assert!(!is_vowel('k'));
        assert!(!is_vowel('v'));
    }

    #[test]
    fn virtual_vowel_counts_as_vowel() {
        assert!(is_vowel(VIRTUAL_VOWEL));
        assert!(!is_vowel(VIRTUAL_CONSONANT));
        assert!(is_virtual(VIRTUAL_VOWEL));
        assert!(is_virtual(VIRTUAL_CONSONANT));
        assert!(!is_virtual('c'));
    }

    #[test]
    fn harmony_classes_are_disjoint() {
        for c in ['a', 'o', 'u'] {
            assert!(is_back_vowel(c));
            assert!(!is_front_vowel(c));
        }
        for c in ['y', '\u{00E4}', '\u{00F6}'] {
            assert!(is_front_vowel(c));
            assert!(!is_back_vowel(c));
        }
        for c in ['e', 'i'] {
            assert!(is_neutral_vowel(c));
            assert!(!is_front_vowel(c));
            assert!(!is_back_vowel(c));
        }
        assert!(!is_neutral_vowel(VIRTUAL_VOWEL));
    }

    #[test]
    fn uppercase_is_not_a_vowel() {
        // Input is lowercased before classification.
        assert!(!is_vowel('A'));
        assert!(!is_front_vowel('\u{00C4}'));
    }

    #[test]
    fn letter_identity() {
        assert!(is_a('a'));
        assert!(is_a('\u{00E4}'));
        assert!(!is_a('o'));
        assert!(is_o('o'));
        assert!(is_o('\u{00F6}'));
        assert!(!is_o('u'));
        assert!(is_u('u'));
        assert!(is_u('y'));
        assert!(!is_u('i'));
    }

    #[test]
    fn simple_lower_finnish() {
        assert_eq!(simple_lower('K'), 'k');
        assert_eq!(simple_lower('\u{00C4}'), '\u{00E4}'); // Ä -> ä
        assert_eq!(simple_lower('\u{00D6}'), '\u{00F6}'); // Ö -> ö
        assert_eq!(simple_lower('a'), 'a');
    }
}
