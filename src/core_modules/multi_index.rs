// THEORY:
// A `MultiIndex` is a selection over 1-based sheet (or page) numbers. Every
// per-operation switch in `Options` ("don't deskew sheets 3 and 7") is one of
// these, as is the primary "which sheets to process" selector.
//
// Two of its states are not lists at all:
// - `All` selects every sheet. It is the default only for the primary selector.
// - `None` selects nothing, so an exclusion set in this state excludes nothing
//   and the operation runs on every sheet. It is the default everywhere else.
//
// Keeping these as distinct variants (rather than magic counts) means a caller
// can never confuse "process everything" with "exclude nothing".

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type SheetNumber = i32;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MultiIndex {
    /// Every sheet is selected.
    All,
    /// No sheet is selected.
    #[default]
    None,
    /// Exactly these sheets, ascending and without duplicates.
    Explicit(Vec<SheetNumber>),
}

impl MultiIndex {
    /// Builds an explicit selection. Indexes are sorted and deduplicated;
    /// an empty input yields `MultiIndex::None`.
    pub fn from_indexes<I>(indexes: I) -> Self
    where
        I: IntoIterator<Item = SheetNumber>,
    {
        let mut indexes: Vec<SheetNumber> = indexes.into_iter().collect();
        if indexes.is_empty() {
            return MultiIndex::None;
        }
        indexes.sort_unstable();
        indexes.dedup();
        MultiIndex::Explicit(indexes)
    }

    pub fn contains(&self, index: SheetNumber) -> bool {
        match self {
            MultiIndex::All => true,
            MultiIndex::None => false,
            MultiIndex::Explicit(indexes) => indexes.binary_search(&index).is_ok(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, MultiIndex::All)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, MultiIndex::None)
    }

    /// The explicit indexes, or an empty slice for `All` and `None`.
    pub fn indexes(&self) -> &[SheetNumber] {
        match self {
            MultiIndex::Explicit(indexes) => indexes,
            _ => &[],
        }
    }
}

impl fmt::Display for MultiIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MultiIndex::All => f.write_str("[all]"),
            MultiIndex::None => f.write_str("[none]"),
            MultiIndex::Explicit(indexes) => {
                f.write_str("[")?;
                for (position, index) in indexes.iter().enumerate() {
                    if position > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{index}")?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_and_none_are_distinct() {
        assert!(MultiIndex::All.contains(1));
        assert!(MultiIndex::All.contains(9999));
        assert!(!MultiIndex::None.contains(1));
        assert_ne!(MultiIndex::All, MultiIndex::None);
        assert_eq!(MultiIndex::default(), MultiIndex::None);
    }

    #[test]
    fn explicit_selection_is_sorted_and_deduplicated() {
        let selection = MultiIndex::from_indexes([7, 3, 3, 1]);
        assert_eq!(selection.indexes(), &[1, 3, 7]);
        assert!(selection.contains(3));
        assert!(!selection.contains(2));
        assert_eq!(selection.to_string(), "[1,3,7]");
    }

    #[test]
    fn empty_explicit_selection_is_none() {
        assert_eq!(MultiIndex::from_indexes(Vec::new()), MultiIndex::None);
    }

    #[test]
    fn sentinel_states_render_as_words() {
        assert_eq!(MultiIndex::All.to_string(), "[all]");
        assert_eq!(MultiIndex::None.to_string(), "[none]");
        assert!(MultiIndex::All.indexes().is_empty());
    }
}
