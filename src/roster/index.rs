//! # Display Indexes
//!
//! Records carry a stable [`RecordId`](crate::model::RecordId), but people
//! refer to what they see: the 1-based position of a row in the current view.
//! A [`DisplayIndex`] is that position. It is assigned over a projected
//! sequence right before rendering and is never stored on the record, so the
//! same record can be `2` with no search active and `1` under a search.
//!
//! Commands that take indexes resolve them against the same view the user was
//! looking at (see `commands::helpers`).

use crate::model::Record;
use std::str::FromStr;

/// 1-based position of a record in a rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    pub fn position(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub record: Record,
    pub index: DisplayIndex,
}

/// Numbers a projected sequence for display.
pub fn index_records(records: Vec<Record>) -> Vec<DisplayRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            record,
            index: DisplayIndex(i + 1),
        })
        .collect()
}

/// One token of user index input: a single position or an inclusive range.
///
/// Ranges stay unexpanded until they are checked against a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSelector {
    Single(DisplayIndex),
    Range(DisplayIndex, DisplayIndex),
}

impl IndexSelector {
    /// The highest position this selector names.
    pub fn last(&self) -> DisplayIndex {
        match self {
            IndexSelector::Single(idx) => *idx,
            IndexSelector::Range(_, end) => *end,
        }
    }

    /// Expands into positions, failing when any falls past `view_len`.
    pub fn expand(&self, view_len: usize) -> Result<Vec<DisplayIndex>, DisplayIndex> {
        let last = self.last();
        if last.0 > view_len {
            return Err(last);
        }
        Ok(match self {
            IndexSelector::Single(idx) => vec![*idx],
            IndexSelector::Range(start, end) => (start.0..=end.0).map(DisplayIndex).collect(),
        })
    }
}

/// Parses a single index (`"3"`) or an inclusive range (`"2-4"`).
///
/// Whether the indexes exist is checked later, during resolution.
pub fn parse_index_or_range(s: &str) -> Result<IndexSelector, String> {
    if let Some(dash_pos) = s.find('-') {
        if dash_pos > 0 {
            let start = DisplayIndex::from_str(&s[..dash_pos])?;
            let end = DisplayIndex::from_str(&s[dash_pos + 1..])?;
            if start > end {
                return Err(format!(
                    "Invalid range: start ({}) must be <= end ({})",
                    start, end
                ));
            }
            return Ok(IndexSelector::Range(start, end));
        }
    }

    DisplayIndex::from_str(s).map(IndexSelector::Single)
}

/// Parses every input, keeping the given order.
pub fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<IndexSelector>, String> {
    inputs
        .iter()
        .map(|input| parse_index_or_range(input.as_ref()))
        .collect()
}

/// Expands selectors against a view of `view_len` rows.
///
/// Fails with the first position past the end before expanding anything.
pub fn expand_indexes(
    selectors: &[IndexSelector],
    view_len: usize,
) -> Result<Vec<DisplayIndex>, DisplayIndex> {
    if let Some(past_end) = selectors.iter().map(|s| s.last()).find(|last| last.0 > view_len) {
        return Err(past_end);
    }
    let mut out = Vec::new();
    for selector in selectors {
        out.extend(selector.expand(view_len)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;

    #[test]
    fn indexes_are_one_based_positions() {
        let records = vec![
            Record::new(RecordId::new(10), "Harry Potter"),
            Record::new(RecordId::new(42), "Noname"),
        ];
        let indexed = index_records(records);

        assert_eq!(indexed[0].index, DisplayIndex::new(1));
        assert_eq!(indexed[1].index, DisplayIndex::new(2));
        assert_eq!(indexed[1].record.id, RecordId::new(42));
    }

    #[test]
    fn test_parsing() {
        assert_eq!(DisplayIndex::from_str("1"), Ok(DisplayIndex(1)));
        assert_eq!(DisplayIndex::from_str(" 42 "), Ok(DisplayIndex(42)));

        assert!(DisplayIndex::from_str("").is_err());
        assert!(DisplayIndex::from_str("0").is_err());
        assert!(DisplayIndex::from_str("abc").is_err());
        assert!(DisplayIndex::from_str("12a").is_err());
        assert!(DisplayIndex::from_str("-1").is_err());
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            parse_index_or_range("3-5"),
            Ok(IndexSelector::Range(DisplayIndex(3), DisplayIndex(5)))
        );
        assert_eq!(
            parse_index_or_range("3-3"),
            Ok(IndexSelector::Range(DisplayIndex(3), DisplayIndex(3)))
        );
        assert_eq!(parse_index_or_range("2"), Ok(IndexSelector::Single(DisplayIndex(2))));
    }

    #[test]
    fn test_parse_range_invalid() {
        let result = parse_index_or_range("5-3");
        assert!(result.unwrap_err().contains("must be <= end"));

        assert!(parse_index_or_range("abc-5").is_err());
        assert!(parse_index_or_range("3-").is_err());
        assert!(parse_index_or_range("-5").is_err());
    }

    #[test]
    fn huge_range_parses_without_expanding() {
        let selector = parse_index_or_range("1-18446744073709551615").unwrap();
        assert_eq!(selector.last(), DisplayIndex(usize::MAX));
        assert_eq!(selector.expand(3), Err(DisplayIndex(usize::MAX)));
    }

    #[test]
    fn expand_indexes_keeps_order() {
        let selectors = parse_indexes(&["4", "1-2"]).unwrap();
        assert_eq!(
            expand_indexes(&selectors, 4),
            Ok(vec![DisplayIndex(4), DisplayIndex(1), DisplayIndex(2)])
        );
        assert!(parse_indexes(&["1", "x"]).is_err());
    }

    #[test]
    fn expand_indexes_rejects_past_the_view() {
        let selectors = parse_indexes(&["1", "2-9"]).unwrap();
        assert_eq!(expand_indexes(&selectors, 3), Err(DisplayIndex(9)));

        let selectors = parse_indexes(&["1-99999999999"]).unwrap();
        assert_eq!(expand_indexes(&selectors, 3), Err(DisplayIndex(99999999999)));
    }
}
