// Case-form generator
//
// Reads a DeclensionKey and produces realized case forms. Only the
// nominative has rules; every other case reports UnimplementedCase.

use taivutus_core::MorphError;
use taivutus_core::case::{Case, CaseColumn, Number};

use crate::declension::key::DeclensionKey;
use crate::declension::pattern::Slot;
use crate::finnish::constants::PLURAL_MARKER;
use crate::phonology::merge::{merge, realize};

/// Nominative singular or plural of `key`.
///
/// The singular rejoins stem and mask; the plural builds the primary
/// inflection stem from stem and face and adds the plural marker.
pub fn nominative(key: &DeclensionKey, number: Number) -> Result<String, MorphError> {
    let form = match number {
        Number::Singular => merge(&key.stem, &key.mask)?,
        Number::Plural => merge(&merge(&key.stem, &key.face)?, PLURAL_MARKER)?,
    };
    Ok(realize(&form))
}

/// Inflect `key` in the given case and number.
pub fn decline(key: &DeclensionKey, case: Case, number: Number) -> Result<String, MorphError> {
    match case {
        Case::Nominative => nominative(key, number),
        _ => Err(MorphError::UnimplementedCase { case, number }),
    }
}

/// One cell of the inflection table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseForm {
    pub case: Case,
    pub number: Number,
    pub form: Result<String, MorphError>,
}

/// Every case in both numbers, in table order, singular first.
pub fn list_all_forms(key: &DeclensionKey) -> Vec<CaseForm> {
    Case::ALL
        .into_iter()
        .flat_map(|case| Number::ALL.into_iter().map(move |number| (case, number)))
        .map(|(case, number)| CaseForm {
            case,
            number,
            form: decline(key, case, number),
        })
        .collect()
}

/// Stem segments the pattern enables in `column`, tagged with their slot.
///
/// Alternatives the key does not carry are skipped even when their bit is
/// set.
pub fn active_stems(key: &DeclensionKey, column: CaseColumn) -> Vec<(Slot, &str)> {
    let candidates = [
        (Slot::Face, Some(key.face.as_str())),
        (Slot::Expr1, key.expr1.as_deref()),
        (Slot::Expr2, key.expr2.as_deref()),
    ];
    candidates
        .into_iter()
        .filter(|(slot, _)| key.pattern.allows(column, *slot))
        .filter_map(|(slot, segment)| segment.map(|s| (slot, s)))
        .collect()
}

/// Which ending families a column accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Endings {
    /// (i/j)en, (i/j)A, iin
    pub default: bool,
    /// iden, itA, ihin
    pub extended: bool,
}

pub fn endings(key: &DeclensionKey, column: CaseColumn) -> Endings {
    Endings {
        default: key.pattern.allows(column, Slot::DefaultEnding),
        extended: key.pattern.allows(column, Slot::ExtendedEnding),
    }
}
