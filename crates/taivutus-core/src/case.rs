// Grammatical case and number of Finnish nominals

use std::fmt;
use std::str::FromStr;

use crate::error::MorphError;

/// The fifteen nominal cases, in the order of the traditional inflection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Case {
    Nominative,
    Partitive,
    Genitive,
    Accusative,
    Inessive,
    Illative,
    Elative,
    Adessive,
    Allative,
    Ablative,
    Essive,
    Translative,
    Instructive,
    Abessive,
    Comitative,
}

impl Case {
    /// Every case, in table order.
    pub const ALL: [Case; 15] = [
        Case::Nominative,
        Case::Partitive,
        Case::Genitive,
        Case::Accusative,
        Case::Inessive,
        Case::Illative,
        Case::Elative,
        Case::Adessive,
        Case::Allative,
        Case::Ablative,
        Case::Essive,
        Case::Translative,
        Case::Instructive,
        Case::Abessive,
        Case::Comitative,
    ];

    /// English name, lowercase.
    pub fn name(self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Partitive => "partitive",
            Case::Genitive => "genitive",
            Case::Accusative => "accusative",
            Case::Inessive => "inessive",
            Case::Illative => "illative",
            Case::Elative => "elative",
            Case::Adessive => "adessive",
            Case::Allative => "allative",
            Case::Ablative => "ablative",
            Case::Essive => "essive",
            Case::Translative => "translative",
            Case::Instructive => "instructive",
            Case::Abessive => "abessive",
            Case::Comitative => "comitative",
        }
    }

    /// Finnish grammatical term for the case.
    pub fn finnish_name(self) -> &'static str {
        match self {
            Case::Nominative => "nominatiivi",
            Case::Partitive => "partitiivi",
            Case::Genitive => "genetiivi",
            Case::Accusative => "akkusatiivi",
            Case::Inessive => "inessiivi",
            Case::Illative => "illatiivi",
            Case::Elative => "elatiivi",
            Case::Adessive => "adessiivi",
            Case::Allative => "allatiivi",
            Case::Ablative => "ablatiivi",
            Case::Essive => "essiivi",
            Case::Translative => "translatiivi",
            Case::Instructive => "instruktiivi",
            Case::Abessive => "abessiivi",
            Case::Comitative => "komitatiivi",
        }
    }

    /// The paradigm pattern column this case reads its stem and ending
    /// selectors from, if it heads one of the three columns.
    pub fn column(self) -> Option<CaseColumn> {
        match self {
            Case::Partitive => Some(CaseColumn::Partitive),
            Case::Genitive => Some(CaseColumn::Genitive),
            Case::Illative => Some(CaseColumn::Illative),
            _ => None,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = MorphError;

    /// Parse an English or Finnish case name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Case::ALL
            .into_iter()
            .find(|c| c.name() == lower || c.finnish_name() == lower)
            .ok_or_else(|| MorphError::UnknownCase(s.to_string()))
    }
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];

    pub fn is_plural(self) -> bool {
        self == Number::Plural
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Number::Singular => "singular",
            Number::Plural => "plural",
        })
    }
}

/// The three columns of a declension pattern. Each column covers a case
/// in the singular together with its plural counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CaseColumn {
    Partitive = 0,
    Genitive = 1,
    Illative = 2,
}

impl CaseColumn {
    pub const ALL: [CaseColumn; 3] = [
        CaseColumn::Partitive,
        CaseColumn::Genitive,
        CaseColumn::Illative,
    ];

    /// Position of the column inside a pattern.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifteen_distinct_cases() {
        let mut names: Vec<&str> = Case::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 15);
    }

    #[test]
    fn parse_english_and_finnish_names() {
        assert_eq!("genitive".parse::<Case>().unwrap(), Case::Genitive);
        assert_eq!("Illative".parse::<Case>().unwrap(), Case::Illative);
        assert_eq!("komitatiivi".parse::<Case>().unwrap(), Case::Comitative);
        assert!(matches!(
            "vocative".parse::<Case>(),
            Err(MorphError::UnknownCase(name)) if name == "vocative"
        ));
    }

    #[test]
    fn display_matches_name() {
        for case in Case::ALL {
            assert_eq!(case.to_string(), case.name());
        }
        assert_eq!(Number::Plural.to_string(), "plural");
    }

    #[test]
    fn only_column_heads_have_columns() {
        assert_eq!(Case::Partitive.column(), Some(CaseColumn::Partitive));
        assert_eq!(Case::Genitive.column(), Some(CaseColumn::Genitive));
        assert_eq!(Case::Illative.column(), Some(CaseColumn::Illative));
        assert_eq!(Case::Nominative.column(), None);
        assert_eq!(Case::Essive.column(), None);
    }

    #[test]
    fn column_indices() {
        let indices: Vec<usize> = CaseColumn::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn number_is_plural() {
        assert!(Number::Plural.is_plural());
        assert!(!Number::Singular.is_plural());
    }
}
