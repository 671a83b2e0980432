// Declension key: the structured result of classifying one nominal

use std::fmt;

use crate::declension::pattern::{Paradigm, Pattern};

/// Stem segments and paradigm pattern of a classified nominative singular.
///
/// | lemma  | stem   | mask | face |
/// |--------|--------|------|------|
/// | soitin | soitti | n    | me   |
/// | tytär  | tyttä  | r    | re   |
/// | ovi    | ovV    | i    | e    |
/// | hylje  | hylke  | C    | e    |
///
/// `V` and `C` are the virtual vowel and consonant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclensionKey {
    /// Segment shared by the nominative singular and the inflection stem.
    pub stem: String,
    /// Segment unique to the nominative singular.
    pub mask: String,
    /// Segment unique to the primary inflection stem.
    pub face: String,
    /// Alternative inflection segment.
    pub expr1: Option<String>,
    /// Alternative inflection segment.
    pub expr2: Option<String>,
    /// Template that seeded `pattern`.
    pub paradigm: Paradigm,
    /// Per-word variant of the paradigm template.
    pub pattern: Pattern,
}

impl DeclensionKey {
    /// Key seeded with the template of `paradigm` and no alternatives.
    pub fn new(
        stem: impl Into<String>,
        mask: impl Into<String>,
        face: impl Into<String>,
        paradigm: Paradigm,
    ) -> Self {
        Self {
            stem: stem.into(),
            mask: mask.into(),
            face: face.into(),
            expr1: None,
            expr2: None,
            paradigm,
            pattern: paradigm.template(),
        }
    }
}

impl fmt::Display for DeclensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stem={} mask={} face={} expr1={} expr2={} paradigm={} pattern={}",
            self.stem,
            self.mask,
            self.face,
            self.expr1.as_deref().unwrap_or("-"),
            self.expr2.as_deref().unwrap_or("-"),
            self.paradigm,
            self.pattern,
        )
    }
}
