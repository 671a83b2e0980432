// Finnish phonology: syllables, vowel harmony, consonant gradation and
// the morpheme merger built on them

pub mod gradation;
pub mod harmony;
pub mod merge;
pub mod syllable;

pub use gradation::{Gradation, apply_consonant_gradation};
pub use harmony::apply_vowel_harmony;
pub use merge::{closes_syllable, merge, realize};
pub use syllable::syllables;
