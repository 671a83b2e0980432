// Nominal declension: paradigm patterns, the key classifier and the
// case-form generator

pub mod classifier;
pub mod generator;
pub mod key;
pub mod pattern;

pub use classifier::{ClassifierOptions, FallbackPolicy, classify, is_participle};
pub use generator::{CaseForm, Endings, active_stems, decline, endings, list_all_forms, nominative};
pub use key::DeclensionKey;
pub use pattern::{Paradigm, Pattern, Slot};
