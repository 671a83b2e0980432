//! Shared types for the taivutus Finnish inflection engine.
//!
//! - [`character`] -- Grapheme classification (vowel classes, virtual markers)
//! - [`case`] -- Grammatical case, number and pattern columns
//! - [`error`] -- The [`MorphError`] type used across the workspace

pub mod case;
pub mod character;
pub mod error;

pub use error::MorphError;
