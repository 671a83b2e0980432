//! Property-based tests for the phonology transducers and the classifier.
//!
//! 1. **Gradation round trip**: weakening then strengthening a stem built on
//!    an invertible pair gives the stem back, and the other way round
//! 2. **Weakening is exactly the strong table**: merging a closing suffix
//!    changes the stem iff its cluster is a strong grade
//! 3. **Harmony idempotence**
//! 4. **Harmony directionality**
//! 5. **Classifier totality**: any word classifies or fails with an error
//! 6. **Lemma reproduction**: the nominative singular of every key the
//!    classifier returns is the word it was built from

use proptest::prelude::*;
use taivutus_core::MorphError;
use taivutus_fi::declension::classify;
use taivutus_fi::finnish::constants::GRADATION_PAIRS;
use taivutus_fi::phonology::gradation::{
    Gradation, WeakGrade, apply_consonant_gradation, is_strong_cluster,
};
use taivutus_fi::phonology::harmony::apply_vowel_harmony;
use taivutus_fi::phonology::merge::merge;
use taivutus_core::case::{Case, Number};
use taivutus_fi::{
    Answers, ClassifierOptions, FallbackPolicy, Inflector, InflectorOptions, Question,
};

const VOWELS: &[char] = &['a', 'o', 'u', 'e', 'i', '\u{00E4}', '\u{00F6}', 'y'];
const BACK: &[char] = &['a', 'o', 'u'];
const FRONT: &[char] = &['\u{00E4}', '\u{00F6}', 'y'];
const CONSONANTS: &[char] = &['h', 'j', 'k', 'l', 'm', 'n', 'p', 'r', 's', 't', 'v'];

fn vowel() -> impl Strategy<Value = char> {
    prop::sample::select(VOWELS)
}

fn onset() -> impl Strategy<Value = String> {
    prop::option::of(prop::sample::select(CONSONANTS))
        .prop_map(|c| c.map(String::from).unwrap_or_default())
}

/// Invertible gradation pairs as (strong, weak).
fn invertible_pair() -> impl Strategy<Value = (&'static str, &'static str)> {
    let pairs: Vec<(&'static str, &'static str)> = GRADATION_PAIRS
        .iter()
        .filter_map(|pair| match pair.weak {
            WeakGrade::Form(weak) => Some((pair.strong, weak)),
            WeakGrade::Elided => None,
        })
        .collect();
    prop::sample::select(pairs)
}

/// One- or two-consonant clusters, gradeable or not.
fn cluster() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(CONSONANTS).prop_map(String::from),
        (prop::sample::select(CONSONANTS), prop::sample::select(CONSONANTS))
            .prop_map(|(a, b)| format!("{a}{b}")),
    ]
}

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[adehijklmnoprstuvy\u{00E4}\u{00F6}]{0,10}").unwrap()
}

/// Endings that steer words into the masked rules.
const MASKED_ENDINGS: &[&str] = &[
    "s", "n", "in", "nen", "mpi", "ton", "t\u{00F6}n", "tar", "t\u{00E4}r", "t", "ut", "yt",
    "nut", "e", "i", "r", "l",
];

/// Two-syllable words with a gradeable or strong-only cluster and a masked
/// ending: "kirkas", "altis", "soitin", "hylje".
fn masked_word() -> impl Strategy<Value = String> {
    (
        onset(),
        vowel(),
        cluster(),
        vowel(),
        prop::sample::select(MASKED_ENDINGS),
    )
        .prop_map(|(onset, v1, cluster, v2, ending)| format!("{onset}{v1}{cluster}{v2}{ending}"))
}

fn graded(stem: &str, direction: Gradation) -> String {
    let mut s = stem.to_string();
    apply_consonant_gradation(&mut s, direction).unwrap();
    s
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn gradation_round_trip(
        onset in onset(),
        v1 in vowel(),
        (strong, weak) in invertible_pair(),
        v2 in vowel(),
    ) {
        let strong_stem = format!("{onset}{v1}{strong}{v2}");
        let weak_stem = format!("{onset}{v1}{weak}{v2}");

        prop_assert_eq!(graded(&strong_stem, Gradation::Weaken), weak_stem.clone());
        prop_assert_eq!(graded(&weak_stem, Gradation::Strengthen), strong_stem.clone());
        prop_assert_eq!(
            graded(&graded(&strong_stem, Gradation::Weaken), Gradation::Strengthen),
            strong_stem
        );
    }

    #[test]
    fn closing_suffix_weakens_only_strong_clusters(
        onset in onset(),
        v1 in vowel(),
        cluster in cluster(),
        v2 in vowel(),
    ) {
        let stem = format!("{onset}{v1}{cluster}{v2}");
        let merged = merge(&stem, "n").unwrap();
        prop_assert_eq!(merged != format!("{stem}n"), is_strong_cluster(&cluster), "{}", stem);
    }

    #[test]
    fn harmony_is_idempotent(stem in word(), suffix in word()) {
        let once = apply_vowel_harmony(&stem, &suffix);
        let twice = apply_vowel_harmony(&stem, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn back_stem_never_alters_suffix(
        head in word(),
        last in prop::sample::select(BACK),
        coda in prop::collection::vec(prop::sample::select(CONSONANTS), 0..3),
        suffix in word(),
    ) {
        let stem: String = format!("{head}{last}{}", coda.iter().collect::<String>());
        prop_assert_eq!(apply_vowel_harmony(&stem, &suffix), suffix);
    }

    #[test]
    fn front_stem_leaves_no_back_vowels(
        head in word(),
        last in prop::sample::select(FRONT),
        coda in prop::collection::vec(prop::sample::select(CONSONANTS), 0..3),
        suffix in word(),
    ) {
        let stem: String = format!("{head}{last}{}", coda.iter().collect::<String>());
        let harmonized = apply_vowel_harmony(&stem, &suffix);
        prop_assert!(!harmonized.chars().any(|c| BACK.contains(&c)), "{}", harmonized);
        prop_assert_eq!(harmonized.chars().count(), suffix.chars().count());
    }

    #[test]
    fn classifier_is_total(word in word(), native in any::<bool>(), noun in any::<bool>()) {
        let mut oracle = Answers::new()
            .with(Question::Native, native)
            .with(Question::Noun, noun);
        let options = ClassifierOptions { fallback: FallbackPolicy::Unconstrained };
        match classify(&word, &mut oracle, &options) {
            Ok(_) | Err(MorphError::InvalidInput { .. }) => {}
            Err(e) => prop_assert!(false, "unexpected error for {}: {}", word, e),
        }
    }

    #[test]
    fn nominative_singular_reproduces_word(
        word in masked_word(),
        native in any::<bool>(),
        noun in any::<bool>(),
        permissive in any::<bool>(),
    ) {
        let fallback = if permissive {
            FallbackPolicy::Unconstrained
        } else {
            FallbackPolicy::Reject
        };
        let inflector = Inflector::new(InflectorOptions {
            classifier: ClassifierOptions { fallback },
        });
        let mut oracle = Answers::new()
            .with(Question::Native, native)
            .with(Question::Noun, noun);
        if let Ok(key) = inflector.classify(&word, &mut oracle) {
            prop_assert_eq!(
                inflector.decline(&key, Case::Nominative, Number::Singular),
                Ok(word.clone()),
                "{}",
                key
            );
        }
    }
}
