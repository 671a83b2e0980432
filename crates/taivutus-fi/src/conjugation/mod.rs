// Verb conjugation: branch tables and the conjugation key
//
// A verb inflects from five stem branches:
//
//   P  non-past indicative forms and infinitives 3-5
//   I  past indicative forms
//   N  potential forms and active past participles
//   D  infinitives 1-2 and the present passive
//   T  every other passive form, including passive past participles
//
// The active conditional reads from a sixth, derived branch that is P for
// the T and null types and I for the D and l/st types.
//
// The tables and key types are in place; the form generators have no rules
// yet and report UnimplementedConjugation.

use std::fmt;

use taivutus_core::MorphError;
use taivutus_core::case::Number;
use taivutus_core::character::is_vowel;

/// One of the five stem branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Branch {
    P,
    I,
    N,
    D,
    T,
}

impl Branch {
    pub const ALL: [Branch; 5] = [Branch::P, Branch::I, Branch::N, Branch::D, Branch::T];

    fn index(self) -> usize {
        self as usize
    }
}

/// Verb class, keyed on the final grapheme of the first infinitive stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VerbType {
    /// Stem ends in -t, except -st ("halut-", "tarvit-").
    T,
    /// Stem ends in a vowel ("puhu-").
    Null,
    /// Stem ends in -d ("saad-").
    D,
    /// Stem ends in -l or -st ("tul-", "pest-").
    Ls,
}

// Branch segments in P, I, N, D, T order. ":" marks a geminated stem-final
// consonant.
const T_BRANCHES: [&str; 5] = ["a", "si", "nn", "t", "tt"];
const NULL_BRANCHES: [&str; 5] = ["", "i", "n", "", "tt"];
const D_BRANCHES: [&str; 5] = ["", "i", "n", "d", "t"];
const LS_BRANCHES: [&str; 5] = ["e", "i", ":", ":", "t"];

impl VerbType {
    /// Classify a first infinitive stem (the D branch).
    pub fn from_first_infinitive_stem(stem: &str) -> Option<VerbType> {
        if stem.ends_with("st") {
            return Some(VerbType::Ls);
        }
        match stem.chars().next_back()? {
            't' => Some(VerbType::T),
            'd' => Some(VerbType::D),
            'l' => Some(VerbType::Ls),
            c if is_vowel(c) => Some(VerbType::Null),
            _ => None,
        }
    }

    /// Branch segments in [`Branch::ALL`] order.
    pub fn branches(self) -> [&'static str; 5] {
        match self {
            VerbType::T => T_BRANCHES,
            VerbType::Null => NULL_BRANCHES,
            VerbType::D => D_BRANCHES,
            VerbType::Ls => LS_BRANCHES,
        }
    }

    pub fn branch(self, branch: Branch) -> &'static str {
        self.branches()[branch.index()]
    }

    /// Branch the active conditional is built on.
    pub fn conditional_branch(self) -> Branch {
        match self {
            VerbType::T | VerbType::Null => Branch::P,
            VerbType::D | VerbType::Ls => Branch::I,
        }
    }
}

impl fmt::Display for VerbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VerbType::T => "t",
            VerbType::Null => "null",
            VerbType::D => "d",
            VerbType::Ls => "ls",
        })
    }
}

/// Grammatical person of a finite form. The passive takes the place of a
/// fourth person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Person {
    First(Number),
    Second(Number),
    Third(Number),
    Passive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Infinitive {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tense {
    Present,
    Past,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Voice {
    Active,
    Passive,
}

/// Branch segments tailored to one verb.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConjugationKey {
    /// Common starting point of every branch.
    pub stem: String,
    /// Segments in [`Branch::ALL`] order.
    pub pattern: [String; 5],
    /// Whether the conditional reads from P (otherwise from I).
    pub p_conditional: bool,
}

impl ConjugationKey {
    /// Key seeded with the untailored table of `verb_type`.
    pub fn new(stem: impl Into<String>, verb_type: VerbType) -> Self {
        Self {
            stem: stem.into(),
            pattern: verb_type.branches().map(String::from),
            p_conditional: verb_type.conditional_branch() == Branch::P,
        }
    }

    pub fn segment(&self, branch: Branch) -> &str {
        &self.pattern[branch.index()]
    }

    pub fn conditional_branch(&self) -> Branch {
        if self.p_conditional { Branch::P } else { Branch::I }
    }
}

fn unimplemented<T>(operation: &'static str) -> Result<T, MorphError> {
    tracing::debug!(operation, "conjugation requested");
    Err(MorphError::UnimplementedConjugation { operation })
}

/// Build the conjugation key of a verb from its first infinitive.
pub fn conjugation_key(_first_infinitive: &str) -> Result<ConjugationKey, MorphError> {
    unimplemented("conjugation_key")
}

pub fn infinitive(_key: &ConjugationKey, _which: Infinitive) -> Result<String, MorphError> {
    unimplemented("infinitive")
}

pub fn indicative(
    _key: &ConjugationKey,
    _person: Person,
    _tense: Tense,
) -> Result<String, MorphError> {
    unimplemented("indicative")
}

pub fn conditional(_key: &ConjugationKey, _person: Person) -> Result<String, MorphError> {
    unimplemented("conditional")
}

pub fn potential(_key: &ConjugationKey, _person: Person) -> Result<String, MorphError> {
    unimplemented("potential")
}

pub fn imperative(_key: &ConjugationKey, _person: Person) -> Result<String, MorphError> {
    unimplemented("imperative")
}

pub fn participle(_key: &ConjugationKey, _voice: Voice, _tense: Tense) -> Result<String, MorphError> {
    unimplemented("participle")
}

/// Every finite and non-finite form of the verb.
pub fn list_all_forms(_key: &ConjugationKey) -> Result<Vec<String>, MorphError> {
    unimplemented("list_all_forms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_types_from_stem() {
        assert_eq!(VerbType::from_first_infinitive_stem("halut"), Some(VerbType::T));
        assert_eq!(VerbType::from_first_infinitive_stem("puhu"), Some(VerbType::Null));
        assert_eq!(VerbType::from_first_infinitive_stem("saad"), Some(VerbType::D));
        assert_eq!(VerbType::from_first_infinitive_stem("tul"), Some(VerbType::Ls));
        assert_eq!(VerbType::from_first_infinitive_stem("pest"), Some(VerbType::Ls));
        assert_eq!(VerbType::from_first_infinitive_stem("juokn"), None);
        assert_eq!(VerbType::from_first_infinitive_stem(""), None);
    }

    #[test]
    fn branch_tables() {
        assert_eq!(VerbType::T.branch(Branch::I), "si");
        assert_eq!(VerbType::Null.branch(Branch::D), "");
        assert_eq!(VerbType::D.branch(Branch::D), "d");
        assert_eq!(VerbType::Ls.branch(Branch::N), ":");
        for verb_type in [VerbType::T, VerbType::Null, VerbType::D, VerbType::Ls] {
            assert!(verb_type.branch(Branch::T).starts_with('t'));
        }
    }

    #[test]
    fn conditional_branch() {
        assert_eq!(VerbType::T.conditional_branch(), Branch::P);
        assert_eq!(VerbType::Null.conditional_branch(), Branch::P);
        assert_eq!(VerbType::D.conditional_branch(), Branch::I);
        assert_eq!(VerbType::Ls.conditional_branch(), Branch::I);

        let key = ConjugationKey::new("tul", VerbType::Ls);
        assert!(!key.p_conditional);
        assert_eq!(key.conditional_branch(), Branch::I);
        assert_eq!(key.segment(Branch::P), "e");
    }

    #[test]
    fn generators_are_unimplemented() {
        let key = ConjugationKey::new("puhu", VerbType::Null);
        assert_eq!(
            conjugation_key("puhua"),
            Err(MorphError::UnimplementedConjugation {
                operation: "conjugation_key"
            })
        );
        assert!(infinitive(&key, Infinitive::First).is_err());
        assert!(indicative(&key, Person::First(Number::Singular), Tense::Past).is_err());
        assert!(conditional(&key, Person::Passive).is_err());
        assert!(potential(&key, Person::Third(Number::Plural)).is_err());
        assert!(imperative(&key, Person::Second(Number::Singular)).is_err());
        assert!(matches!(
            participle(&key, Voice::Passive, Tense::Past),
            Err(MorphError::UnimplementedConjugation { operation: "participle" })
        ));
        assert!(list_all_forms(&key).is_err());
    }
}
