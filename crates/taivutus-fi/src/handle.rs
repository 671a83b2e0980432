// Inflector: top-level integration point for Finnish inflection.
//
// Owns the classifier options and exposes classification, declension and
// morpheme merging through one value. The oracle is passed per call, so a
// single Inflector serves words answered by different sources.

use taivutus_core::MorphError;
use taivutus_core::case::{Case, Number};

use crate::declension::classifier::{self, ClassifierOptions, FallbackPolicy};
use crate::declension::generator::{self, CaseForm};
use crate::declension::key::DeclensionKey;
use crate::oracle::Oracle;
use crate::phonology::merge::{merge, realize};

#[cfg(feature = "conjugation")]
use crate::conjugation::{self, ConjugationKey};

/// Options an [`Inflector`] is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InflectorOptions {
    pub classifier: ClassifierOptions,
}

/// Handle over the Finnish inflection components.
#[derive(Debug, Clone, Default)]
pub struct Inflector {
    options: InflectorOptions,
}

impl Inflector {
    pub fn new(options: InflectorOptions) -> Self {
        tracing::debug!(?options, "inflector created");
        Self { options }
    }

    pub fn options(&self) -> &InflectorOptions {
        &self.options
    }

    // =========================================================================
    // Declension
    // =========================================================================

    /// Classify a nominative singular, asking `oracle` when the surface
    /// form is ambiguous.
    pub fn classify<O: Oracle + ?Sized>(
        &self,
        word: &str,
        oracle: &mut O,
    ) -> Result<DeclensionKey, MorphError> {
        classifier::classify(word, oracle, &self.options.classifier)
    }

    pub fn decline(
        &self,
        key: &DeclensionKey,
        case: Case,
        number: Number,
    ) -> Result<String, MorphError> {
        generator::decline(key, case, number)
    }

    pub fn list_all_forms(&self, key: &DeclensionKey) -> Vec<CaseForm> {
        generator::list_all_forms(key)
    }

    /// Merge a suffix onto a strong-grade stem and render the result.
    ///
    /// `merge("soitti", "n")` is `soitin`.
    pub fn merge(&self, stem: &str, suffix: &str) -> Result<String, MorphError> {
        merge(stem, suffix).map(|form| realize(&form))
    }

    // =========================================================================
    // Conjugation
    // =========================================================================

    /// Conjugation key of a verb, from its first infinitive.
    #[cfg(feature = "conjugation")]
    pub fn conjugation_key(&self, first_infinitive: &str) -> Result<ConjugationKey, MorphError> {
        conjugation::conjugation_key(first_infinitive)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set how words outside the coded paradigms are handled.
    pub fn set_fallback_policy(&mut self, policy: FallbackPolicy) {
        self.options.classifier.fallback = policy;
    }
}
