// Consonant gradation: strong/weak alternation of the cluster before the
// final vowel of a stem

use taivutus_core::MorphError;
use taivutus_core::character::is_vowel;

use crate::finnish::constants::{GRADATION_PAIRS, MIN_GRADEABLE_STEM};

/// Weak grade of a gradation pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeakGrade {
    /// The cluster alternates with this form.
    Form(&'static str),
    /// The cluster disappears in the weak grade. There is no way back from
    /// the weak form, so strengthening never matches it.
    Elided,
}

impl WeakGrade {
    /// Text written in place of the strong cluster when weakening.
    pub fn as_str(self) -> &'static str {
        match self {
            WeakGrade::Form(s) => s,
            WeakGrade::Elided => "",
        }
    }
}

/// One row of the consonant correspondence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradationPair {
    pub strong: &'static str,
    pub weak: WeakGrade,
}

impl GradationPair {
    pub const fn new(strong: &'static str, weak: WeakGrade) -> Self {
        Self { strong, weak }
    }

    /// Whether weakening and strengthening undo each other for this pair.
    pub fn is_invertible(&self) -> bool {
        matches!(self.weak, WeakGrade::Form(_))
    }
}

/// Direction of a gradation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradation {
    Weaken,
    Strengthen,
}

/// Find the replacement for `cluster` in the given direction.
fn lookup(cluster: &str, direction: Gradation) -> Option<&'static str> {
    GRADATION_PAIRS.iter().find_map(|pair| match direction {
        Gradation::Weaken => (pair.strong == cluster).then(|| pair.weak.as_str()),
        Gradation::Strengthen => match pair.weak {
            WeakGrade::Form(weak) if weak == cluster => Some(pair.strong),
            _ => None,
        },
    })
}

/// Whether `cluster` is listed as a strong grade.
pub fn is_strong_cluster(cluster: &str) -> bool {
    GRADATION_PAIRS.iter().any(|pair| pair.strong == cluster)
}

/// Locate the gradeable cluster of a vowel-final stem.
///
/// The cluster is the single character before the final vowel when the
/// character before that is a vowel, otherwise the two characters before
/// the final vowel. Returns the char range of the cluster.
pub(crate) fn cluster_range(stem: &[char]) -> Option<std::ops::Range<usize>> {
    let len = stem.len();
    if len < MIN_GRADEABLE_STEM || !is_vowel(stem[len - 1]) {
        return None;
    }
    let end = len - 1;
    let start = if is_vowel(stem[len - 3]) { len - 2 } else { len - 3 };
    Some(start..end)
}

/// Grade the cluster before the final vowel of `stem` in place.
///
/// A cluster missing from the source side of the table leaves the stem
/// unchanged; so does a stem that does not end in a vowel. Returns whether
/// the stem was rewritten. Stems shorter than three characters are
/// rejected.
pub fn apply_consonant_gradation(
    stem: &mut String,
    direction: Gradation,
) -> Result<bool, MorphError> {
    let mut chars: Vec<char> = stem.chars().collect();
    if chars.len() < MIN_GRADEABLE_STEM {
        return Err(MorphError::InvalidInput {
            word: stem.clone(),
            required: MIN_GRADEABLE_STEM,
        });
    }

    let Some(range) = cluster_range(&chars) else {
        return Ok(false);
    };
    let cluster: String = chars[range.clone()].iter().collect();
    let Some(replacement) = lookup(&cluster, direction) else {
        return Ok(false);
    };

    chars.splice(range, replacement.chars());
    let graded: String = chars.into_iter().collect();
    tracing::debug!(from = %stem, to = %graded, ?direction, "consonant gradation");
    *stem = graded;
    Ok(true)
}
