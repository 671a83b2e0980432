// Morpheme merging: gradation + harmony + concatenation

use taivutus_core::MorphError;
use taivutus_core::character::{VIRTUAL_CONSONANT, VIRTUAL_VOWEL, is_vowel};

use crate::phonology::gradation::{Gradation, apply_consonant_gradation};
use crate::phonology::harmony::apply_vowel_harmony;

/// Whether attaching `morpheme` closes the last syllable of the stem.
///
/// True for a single non-vowel, or for a morpheme of three or more
/// characters starting with two non-vowels ("n", "lta", "ssa"). A closed
/// syllable puts the stem into its weak grade.
pub fn closes_syllable(morpheme: &str) -> bool {
    let m: Vec<char> = morpheme.chars().collect();
    match m.len() {
        1 => !is_vowel(m[0]),
        0 | 2 => false,
        _ => !is_vowel(m[0]) && !is_vowel(m[1]),
    }
}

/// Join `stem` and `morpheme` into a derived form.
///
/// The stem is taken to be in its strong grade. It is weakened when the
/// morpheme closes the syllable, and the morpheme is then harmonized against
/// the (possibly weakened) stem. Virtual graphemes are kept; see [`realize`].
pub fn merge(stem: &str, morpheme: &str) -> Result<String, MorphError> {
    let mut joined = stem.to_string();
    if closes_syllable(morpheme) {
        apply_consonant_gradation(&mut joined, Gradation::Weaken)?;
    }
    let suffix = apply_vowel_harmony(&joined, morpheme);
    joined.push_str(&suffix);
    Ok(joined)
}

/// Render virtual graphemes into a surface form.
///
/// The virtual consonant is silent. The virtual vowel is silent before a
/// vowel (`ovVi` → `ovi`) and surfaces as the harmonic `u`/`y` elsewhere
/// (`kuollVt` → `kuollut`).
pub fn realize(form: &str) -> String {
    let chars: Vec<char> = form.chars().collect();
    let mut out = String::with_capacity(form.len());

    for (i, &c) in chars.iter().enumerate() {
        match c {
            VIRTUAL_CONSONANT => {}
            VIRTUAL_VOWEL => {
                let next = chars.get(i + 1).copied();
                if !next.is_some_and(|n| is_vowel(n) && n != VIRTUAL_VOWEL) {
                    out.push_str(&apply_vowel_harmony(&out, "u"));
                }
            }
            _ => out.push(c),
        }
    }

    out
}
