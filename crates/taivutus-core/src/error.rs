// Error type shared by the inflection crates

use crate::case::{Case, Number};

/// Errors raised while classifying, merging or inflecting a word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MorphError {
    /// The word is too short for the rule that was applied to it.
    #[error("`{word}` is too short: at least {required} characters are needed")]
    InvalidInput { word: String, required: usize },

    /// No declension rule matched the word.
    #[error("no declension rule matches `{0}`")]
    UnclassifiedWord(String),

    /// The case form generator for this case and number has no rules yet.
    #[error("the {case} {number} form is not implemented")]
    UnimplementedCase { case: Case, number: Number },

    /// Verb conjugation is declared but has no rules yet.
    #[error("conjugation is not implemented: {operation}")]
    UnimplementedConjugation { operation: &'static str },

    /// A case name could not be parsed.
    #[error("unknown case name: {0}")]
    UnknownCase(String),
}
