// Paradigm templates and the bit-flag patterns derived from them

use std::fmt;

use taivutus_core::case::CaseColumn;

use crate::finnish::constants::{
    DOUBLE_VOWEL_FINAL_TEMPLATE, MASKED_TEMPLATE, STEM_LENGTHENING_TEMPLATE,
    VOWEL_VOWEL_TEMPLATE,
};

/// One switch inside a pattern word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Default ending: (i/j)en, (i/j)A, iin.
    DefaultEnding,
    /// Extended ending: iden, itA, ihin.
    ExtendedEnding,
    /// Primary inflection stem (`face`).
    Face,
    /// First alternative stem (`expr1`).
    Expr1,
    /// Second alternative stem (`expr2`).
    Expr2,
}

impl Slot {
    const fn bit(self) -> u8 {
        match self {
            Slot::DefaultEnding => 1 << 4,
            Slot::ExtendedEnding => 1 << 3,
            Slot::Face => 1 << 2,
            Slot::Expr1 => 1 << 1,
            Slot::Expr2 => 1,
        }
    }
}

/// The four canonical declension templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Paradigm {
    /// Double-vowel-final template. The classifier routes double-vowel
    /// nominatives through [`Paradigm::VowelVowel`]; this one is available
    /// for keys built by hand.
    DoubleVowelFinal,
    /// Consonant-final and i/e-final words whose nominative hides part of
    /// the inflection stem.
    Masked,
    /// Vowel-final words whose stem lengthens in inflection.
    StemLengthening,
    /// Words ending in two vowels.
    VowelVowel,
}

impl Paradigm {
    /// The template pattern this paradigm seeds a key with.
    pub fn template(self) -> Pattern {
        Pattern(match self {
            Paradigm::DoubleVowelFinal => DOUBLE_VOWEL_FINAL_TEMPLATE,
            Paradigm::Masked => MASKED_TEMPLATE,
            Paradigm::StemLengthening => STEM_LENGTHENING_TEMPLATE,
            Paradigm::VowelVowel => VOWEL_VOWEL_TEMPLATE,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Paradigm::DoubleVowelFinal => "double-vowel-final",
            Paradigm::Masked => "masked",
            Paradigm::StemLengthening => "stem-lengthening",
            Paradigm::VowelVowel => "vowel-vowel",
        }
    }
}

impl fmt::Display for Paradigm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Three five-bit words, one per [`CaseColumn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern([u8; 3]);

impl Pattern {
    /// Every slot allowed in every column.
    pub const UNCONSTRAINED: Pattern = Pattern([0b11111; 3]);

    pub const fn from_words(words: [u8; 3]) -> Self {
        Self(words)
    }

    pub fn words(&self) -> [u8; 3] {
        self.0
    }

    pub fn word(&self, column: CaseColumn) -> u8 {
        self.0[column.index()]
    }

    /// Whether `slot` is allowed in `column`.
    pub fn allows(&self, column: CaseColumn, slot: Slot) -> bool {
        self.word(column) & slot.bit() != 0
    }

    pub fn enable(&mut self, slot: Slot, columns: &[CaseColumn]) {
        for column in columns {
            self.0[column.index()] |= slot.bit();
        }
    }

    pub fn disable(&mut self, slot: Slot, columns: &[CaseColumn]) {
        for column in columns {
            self.0[column.index()] &= !slot.bit();
        }
    }
}

impl fmt::Display for Pattern {
    /// Binary words separated by slashes: `10011/10010/10010`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p, g, i] = self.0;
        write!(f, "{p:05b}/{g:05b}/{i:05b}")
    }
}
