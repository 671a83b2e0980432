// Shared Finnish language constants used across multiple modules.
//
// These tables capture the phonological and paradigm data the phonology and
// declension modules share. They are immutable and live for the whole
// program.

use crate::phonology::gradation::{GradationPair, WeakGrade};

/// Back vowels and their front-harmony counterparts (same index order).
pub(crate) const BACK_VOWELS: &[char] = &['a', 'o', 'u'];

/// Front vowels corresponding to back vowels (same index order).
pub(crate) const FRONT_VOWELS: &[char] = &['\u{00E4}', '\u{00F6}', 'y'];

/// Consonant clusters taking part in gradation, strong grade first.
///
/// Strong `k` has no canonical weak partner: it may vanish (`joki` →
/// `joen`) or turn into `v`, which is more commonly the weak grade of `p`.
/// It is listed as elided and is never reached when strengthening.
pub const GRADATION_PAIRS: &[GradationPair] = &[
    GradationPair::new("p", WeakGrade::Form("v")),
    GradationPair::new("pp", WeakGrade::Form("p")),
    GradationPair::new("mp", WeakGrade::Form("mm")),
    GradationPair::new("t", WeakGrade::Form("d")),
    GradationPair::new("tt", WeakGrade::Form("t")),
    GradationPair::new("nt", WeakGrade::Form("nn")),
    GradationPair::new("lt", WeakGrade::Form("ll")),
    GradationPair::new("rt", WeakGrade::Form("rr")),
    GradationPair::new("k", WeakGrade::Elided),
    GradationPair::new("kk", WeakGrade::Form("k")),
    GradationPair::new("nk", WeakGrade::Form("ng")),
    GradationPair::new("lk", WeakGrade::Form("lj")),
    GradationPair::new("rk", WeakGrade::Form("rj")),
];

// ---------------------------------------------------------------------------
// Declension paradigm templates
//
// One word per pattern column (partitive, genitive, illative). Bits from the
// most significant: default ending ((i/j)en, (i/j)A, iin), extended ending
// (iden, itA, ihin), face, expression 1, expression 2. 1 = allowed.
// ---------------------------------------------------------------------------

pub(crate) const DOUBLE_VOWEL_FINAL_TEMPLATE: [u8; 3] = [0b10100, 0b10010, 0b01010];
pub(crate) const MASKED_TEMPLATE: [u8; 3] = [0b10011, 0b10010, 0b10010];
pub(crate) const STEM_LENGTHENING_TEMPLATE: [u8; 3] = [0b11110, 0b11010, 0b01010];
pub(crate) const VOWEL_VOWEL_TEMPLATE: [u8; 3] = [0b01010, 0b01010, 0b11010];

/// Suffix marking the nominative plural.
pub(crate) const PLURAL_MARKER: &str = "t";

/// Minimum length of a stem whose final cluster can be graded.
pub(crate) const MIN_GRADEABLE_STEM: usize = 3;

/// Minimum length of a word the declension classifier accepts.
pub(crate) const MIN_CLASSIFIED_WORD: usize = 2;
