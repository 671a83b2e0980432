//! Finnish nominal inflection.
//!
//! - [`phonology`] -- Syllables, vowel harmony, consonant gradation, merging
//! - [`declension`] -- Paradigm patterns, key classifier, case-form generator
//! - [`oracle`] -- Yes/no questions for lexically ambiguous words
//! - [`conjugation`] -- Verb branch tables and conjugation key (feature `conjugation`)
//! - [`handle`] -- [`Inflector`], the top-level entry point
//!
//! ```
//! use taivutus_core::case::{Case, Number};
//! use taivutus_fi::{Answers, Inflector, Question};
//!
//! let inflector = Inflector::default();
//! let mut oracle = Answers::new().with(Question::Noun, true);
//! let key = inflector.classify("soitin", &mut oracle).unwrap();
//! assert_eq!(key.stem, "soitti");
//! assert_eq!(
//!     inflector.decline(&key, Case::Nominative, Number::Plural).unwrap(),
//!     "soittimet"
//! );
//! ```

pub mod declension;
pub mod finnish;
pub mod handle;
pub mod oracle;
pub mod phonology;

#[cfg(feature = "conjugation")]
pub mod conjugation;

pub use declension::{ClassifierOptions, DeclensionKey, FallbackPolicy, Paradigm, Pattern};
pub use handle::{Inflector, InflectorOptions};
pub use oracle::{Answers, Oracle, Question};
