// Declension key classifier
//
// Decides the paradigm of a nominative singular from its final graphemes
// and splits the word into stem, mask and face. Lexical ambiguities that the
// surface form cannot settle are put to an injected oracle.
//
// Expression markers (`_`, `.`, `t` and `e`) are stored verbatim for the
// case-form generators.

use taivutus_core::MorphError;
use taivutus_core::case::CaseColumn;
use taivutus_core::character::{
    VIRTUAL_CONSONANT, VIRTUAL_VOWEL, is_a, is_u, is_vowel, simple_lower,
};

use crate::declension::key::DeclensionKey;
use crate::declension::pattern::{Paradigm, Pattern, Slot};
use crate::finnish::constants::MIN_CLASSIFIED_WORD;
use crate::oracle::{Oracle, Question};
use crate::phonology::gradation::{Gradation, apply_consonant_gradation};
use crate::phonology::merge::{closes_syllable, merge, realize};
use crate::phonology::syllable::syllable_count;

/// What to do with a word that no masked-type rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FallbackPolicy {
    /// Fail with [`MorphError::UnclassifiedWord`].
    #[default]
    Reject,
    /// Return the whole word as the stem with every pattern bit set.
    Unconstrained,
}

/// Configuration options for the declension classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassifierOptions {
    /// Handling of words outside the coded paradigm space.
    pub fallback: FallbackPolicy,
}

impl Default for ClassifierOptions {
    /// Unclassified words are rejected.
    fn default() -> Self {
        Self {
            fallback: FallbackPolicy::Reject,
        }
    }
}

/// Columns whose default ending is switched off for monosyllables and
/// mixed vowel pairs.
const LEADING_COLUMNS: &[CaseColumn] = &[CaseColumn::Partitive, CaseColumn::Genitive];

/// Classify a nominative singular into a [`DeclensionKey`].
///
/// The word is trimmed and lowercased first. Words shorter than two
/// characters are rejected with [`MorphError::InvalidInput`].
pub fn classify<O: Oracle + ?Sized>(
    word: &str,
    oracle: &mut O,
    options: &ClassifierOptions,
) -> Result<DeclensionKey, MorphError> {
    let normalized: String = word.trim().chars().map(simple_lower).collect();
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() < MIN_CLASSIFIED_WORD {
        return Err(MorphError::InvalidInput {
            word: normalized,
            required: MIN_CLASSIFIED_WORD,
        });
    }

    let last = chars[chars.len() - 1];
    let before = chars[chars.len() - 2];

    if is_vowel(last) && is_vowel(before) {
        Ok(double_vowel_key(&normalized, &chars, oracle))
    } else if !is_vowel(last) || last == 'i' || last == 'e' {
        masked_key(&normalized, &chars, oracle, options)
    } else {
        Ok(stem_lengthening_key(&normalized))
    }
}

/// Words ending in two vowels.
fn double_vowel_key<O: Oracle + ?Sized>(
    word: &str,
    chars: &[char],
    oracle: &mut O,
) -> DeclensionKey {
    let mut key = DeclensionKey::new(word, "", "", Paradigm::VowelVowel);
    let last = chars[chars.len() - 1];
    let before = chars[chars.len() - 2];
    let monosyllabic = syllable_count(chars) == 1;

    if last == before {
        if last == 'e' && oracle.ask(Question::Native) {
            key.expr2 = Some("t".into());
        } else if monosyllabic {
            key.pattern.disable(Slot::DefaultEnding, LEADING_COLUMNS);
        } else if is_a(last) {
            key.pattern.enable(Slot::ExtendedEnding, &[CaseColumn::Partitive]);
        }
        key.expr1 = Some("_".into());
    } else if !(is_u(before) && last == 'e') {
        key.pattern.disable(Slot::DefaultEnding, LEADING_COLUMNS);
        if monosyllabic && last != 'i' {
            key.expr1 = Some(".".into());
        }
    }

    tracing::debug!(word, %key, "double-vowel nominal");
    key
}

/// Consonant-final and i/e-final words.
///
/// The rules are tried longest suffix first. The nominative of this class
/// shows the weak grade, so a stem whose mask closes the syllable is
/// strengthened before it is stored.
///
/// A key whose nominative singular does not give back `word` is never
/// returned. That happens when the weak grade has no strong partner in the
/// gradation table ("kirkas", "altis"); such words go to the fallback.
fn masked_key<O: Oracle + ?Sized>(
    word: &str,
    chars: &[char],
    oracle: &mut O,
    options: &ClassifierOptions,
) -> Result<DeclensionKey, MorphError> {
    let len = chars.len();
    let last = chars[len - 1];
    let before = chars[len - 2];

    let head = |n: usize| -> String { chars[..len - n].iter().collect() };
    let virtual_head = |n: usize| -> String {
        let mut stem = head(n);
        stem.push(VIRTUAL_VOWEL);
        stem
    };
    let tail = last.to_string();

    let (mut key, rule) = if word.ends_with("nen") {
        let mut key = DeclensionKey::new(head(3), "nen", "se", Paradigm::Masked);
        key.expr2 = Some("_".into());
        (key, "nen")
    } else if word.ends_with("mpi") {
        let mut key = DeclensionKey::new(virtual_head(1), tail, "a", Paradigm::Masked);
        key.pattern.enable(Slot::ExtendedEnding, &[CaseColumn::Partitive]);
        (key, "comparative")
    } else if word.ends_with("ton") || word.ends_with("t\u{00F6}n") {
        (DeclensionKey::new(head(1), tail, "ma", Paradigm::Masked), "caritive")
    } else if word.ends_with("tar") || word.ends_with("t\u{00E4}r") {
        (DeclensionKey::new(head(1), tail, "re", Paradigm::Masked), "feminine")
    } else if word.ends_with("in") || word == "vasen" {
        // vasen is the only superlative not ending in -in
        if oracle.ask(Question::Noun) {
            (DeclensionKey::new(head(1), tail, "me", Paradigm::Masked), "in-noun")
        } else {
            let mut key = DeclensionKey::new(head(1), tail, "mpa", Paradigm::Masked);
            key.pattern.enable(Slot::ExtendedEnding, &[CaseColumn::Partitive]);
            (key, "superlative")
        }
    } else if last == 's' && is_vowel(before) {
        (DeclensionKey::new(head(1), tail, "", Paradigm::Masked), "s")
    } else if is_u(before) && last == 't' {
        if is_participle(chars) {
            (DeclensionKey::new(virtual_head(2), tail, "ee", Paradigm::Masked), "participle")
        } else {
            (DeclensionKey::new(head(1), tail, "e", Paradigm::Masked), "ut")
        }
    } else if last == 'e' && oracle.ask(Question::Native) {
        let mask = VIRTUAL_CONSONANT.to_string();
        (DeclensionKey::new(word, mask, "e", Paradigm::Masked), "native-e")
    } else if last == 'i' && syllable_count(chars) < 3 && oracle.ask(Question::Native) {
        (DeclensionKey::new(virtual_head(1), tail, "e", Paradigm::Masked), "native-i")
    } else {
        return unclassified(word, options);
    };

    if closes_syllable(&key.mask) && !key.stem.ends_with(VIRTUAL_VOWEL) {
        apply_consonant_gradation(&mut key.stem, Gradation::Strengthen)
            .map_err(|e| for_word(e, word))?;
    }

    let singular = merge(&key.stem, &key.mask).map_err(|e| for_word(e, word))?;
    if realize(&singular) != word {
        tracing::debug!(word, rule, %key, "nominative does not reproduce the word");
        return unclassified(word, options);
    }

    tracing::debug!(word, rule, %key, "masked nominal");
    Ok(key)
}

/// Vowel-final words other than i/e and double vowels.
pub(crate) fn stem_lengthening_key(word: &str) -> DeclensionKey {
    let mut key = DeclensionKey::new(word, "", "", Paradigm::StemLengthening);
    if word.ends_with('i') {
        key.expr1 = Some("e".into());
    }
    tracing::debug!(word, %key, "stem-lengthening nominal");
    key
}

/// Point a short-stem error at the word that was classified.
fn for_word(err: MorphError, word: &str) -> MorphError {
    match err {
        MorphError::InvalidInput { required, .. } => MorphError::InvalidInput {
            word: word.to_string(),
            required,
        },
        other => other,
    }
}

fn unclassified(word: &str, options: &ClassifierOptions) -> Result<DeclensionKey, MorphError> {
    match options.fallback {
        FallbackPolicy::Reject => {
            tracing::debug!(word, "no declension rule matched");
            Err(MorphError::UnclassifiedWord(word.to_string()))
        }
        FallbackPolicy::Unconstrained => {
            tracing::debug!(word, "no declension rule matched, using unconstrained key");
            let mut key = DeclensionKey::new(word, "", "", Paradigm::Masked);
            key.pattern = Pattern::UNCONSTRAINED;
            Ok(key)
        }
    }
}

/// Heuristic test for an active past participle form.
///
/// Accepts u/y + t preceded by `n` or by `ll`/`ss` ("mennyt", "kuollut",
/// "juossut"), a final t + u/y, and a final v + a/ä.
///
/// "ainut" is accepted too: it is the only word of its declension type
/// ending in -nUt, so it cannot be told apart from the participle of a
/// nonexistent verb. This misclassification is kept.
pub fn is_participle(word: &[char]) -> bool {
    let n = word.len();
    if n < 2 {
        return false;
    }
    let last = word[n - 1];
    let before = word[n - 2];

    if is_u(before) && last == 't' {
        let preceded_by_n = n >= 3 && word[n - 3] == 'n';
        let preceded_by_geminate =
            n >= 4 && matches!(&word[n - 4..n - 2], ['l', 'l'] | ['s', 's']);
        if preceded_by_n || preceded_by_geminate {
            return true;
        }
    }

    (before == 't' && is_u(last)) || (before == 'v' && is_a(last))
}
