// Vowel harmony between a stem and an attached suffix

use taivutus_core::character::{is_back_vowel, is_front_vowel};

use crate::finnish::constants::{BACK_VOWELS, FRONT_VOWELS};

/// Harmony class decided by the last harmonic vowel of a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Harmony {
    Front,
    Back,
    /// The stem has only neutral vowels (or none).
    Neutral,
}

/// Scan `stem` from the end and return the class of the first front or
/// back vowel found. Neutral vowels, consonants and markers are skipped.
pub fn stem_harmony(stem: &str) -> Harmony {
    for c in stem.chars().rev() {
        if is_front_vowel(c) {
            return Harmony::Front;
        }
        if is_back_vowel(c) {
            return Harmony::Back;
        }
    }
    Harmony::Neutral
}

/// Return `suffix` adjusted to the harmony of `stem`.
///
/// Suffixes are written with back vowels ("ssa", "ko", "nut"). After a
/// front-harmony stem every a, o, u becomes ä, ö, y; otherwise the suffix is
/// returned unchanged. The stem is never modified.
pub fn apply_vowel_harmony(stem: &str, suffix: &str) -> String {
    match stem_harmony(stem) {
        Harmony::Front => suffix.chars().map(to_front).collect(),
        Harmony::Back | Harmony::Neutral => suffix.to_string(),
    }
}

fn to_front(c: char) -> char {
    BACK_VOWELS
        .iter()
        .position(|&b| b == c)
        .map_or(c, |i| FRONT_VOWELS[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_stem_keeps_suffix() {
        assert_eq!(apply_vowel_harmony("talo", "ssa"), "ssa");
        assert_eq!(apply_vowel_harmony("katu", "lla"), "lla");
    }

    #[test]
    fn front_stem_fronts_suffix() {
        assert_eq!(apply_vowel_harmony("kyl\u{00E4}", "ssa"), "ss\u{00E4}");
        assert_eq!(apply_vowel_harmony("kyn\u{00E4}", "ko"), "k\u{00F6}");
        assert_eq!(apply_vowel_harmony("p\u{00F6}yt\u{00E4}", "nut"), "nyt");
    }

    #[test]
    fn neutral_vowels_are_skipped() {
        // "tyttäre": the final e is neutral, ä decides.
        assert_eq!(stem_harmony("tytt\u{00E4}re"), Harmony::Front);
        // "soittime": i and e are skipped until o.
        assert_eq!(stem_harmony("soittime"), Harmony::Back);
        assert_eq!(apply_vowel_harmony("soittime", "lta"), "lta");
    }

    #[test]
    fn neutral_only_stem_keeps_suffix() {
        assert_eq!(stem_harmony("kivi"), Harmony::Neutral);
        assert_eq!(apply_vowel_harmony("kivi", "ssa"), "ssa");
    }

    #[test]
    fn markers_are_skipped() {
        assert_eq!(stem_harmony("kuollV"), Harmony::Back);
        assert_eq!(stem_harmony("kyll\u{00E4}C"), Harmony::Front);
    }

    #[test]
    fn consonant_suffix_unchanged() {
        assert_eq!(apply_vowel_harmony("kyl\u{00E4}", "n"), "n");
    }
}
