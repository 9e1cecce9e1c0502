use indexmap::IndexMap;
use log::debug;
use polars::prelude::*;

use crate::data_structs::typedef::SeqStr;
use crate::data_structs::{
    RecordField,
    RecordStore,
};

/// Name of the count column in [`PairCounts::to_dataframe`].
pub const COUNTS_COLUMN: &str = "Counts";

/// One distinct combination of two column values and how many records
/// carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCount {
    pub first:  SeqStr,
    pub second: SeqStr,
    pub count:  usize,
}

/// Distinct value pairs of two columns, in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairCounts {
    pairs: Vec<PairCount>,
}

impl PairCounts {
    pub fn len(&self) -> usize { self.pairs.len() }

    pub fn is_empty(&self) -> bool { self.pairs.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, PairCount> { self.pairs.iter() }

    /// Sum of all counts, equal to the number of counted records.
    pub fn total(&self) -> usize { self.pairs.iter().map(|p| p.count).sum() }

    pub fn get(
        &self,
        first: &str,
        second: &str,
    ) -> Option<usize> {
        self.pairs
            .iter()
            .find(|p| p.first.as_str() == first && p.second.as_str() == second)
            .map(|p| p.count)
    }

    /// Builds a frame with one column per selected field and a `Counts`
    /// column. When both fields are the same column the second one gets a
    /// `_right` suffix.
    pub fn to_dataframe(
        &self,
        first: RecordField,
        second: RecordField,
    ) -> PolarsResult<DataFrame> {
        let first_name = first.column_name().to_string();
        let second_name = if first == second {
            format!("{}_right", second.column_name())
        }
        else {
            second.column_name().to_string()
        };

        let firsts = self.pairs.iter().map(|p| p.first.as_str()).collect::<Vec<_>>();
        let seconds = self.pairs.iter().map(|p| p.second.as_str()).collect::<Vec<_>>();
        let counts = self.pairs.iter().map(|p| p.count as u64).collect::<Vec<_>>();

        DataFrame::new(vec![
            Column::new(first_name.into(), firsts),
            Column::new(second_name.into(), seconds),
            Column::new(COUNTS_COLUMN.into(), counts),
        ])
    }
}

impl<'a> IntoIterator for &'a PairCounts {
    type IntoIter = std::slice::Iter<'a, PairCount>;
    type Item = &'a PairCount;

    fn into_iter(self) -> Self::IntoIter { self.pairs.iter() }
}

/// Counts every distinct `(first, second)` combination of column values in
/// `store`. Values are compared by equality, so the counts always add up to
/// the number of records.
pub fn count_pairs(
    store: &RecordStore,
    first: RecordField,
    second: RecordField,
) -> PairCounts {
    let mut counts: IndexMap<(SeqStr, SeqStr), usize> = IndexMap::new();
    for record in store {
        let key = (first.get(record).clone(), second.get(record).clone());
        *counts.entry(key).or_insert(0) += 1;
    }
    debug!(
        "{} distinct ({}, {}) pairs in {} records",
        counts.len(),
        first,
        second,
        store.len()
    );

    PairCounts {
        pairs: counts
            .into_iter()
            .map(|((first, second), count)| PairCount { first, second, count })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::data_structs::{
        AnnotationRecord,
        RecordId,
    };

    fn store() -> RecordStore {
        [
            ("c1", "A", "-", "X"),
            ("c1", "A", "U", "-"),
            ("c2", "B", "-", "X"),
            ("c3", "A", "-", "X"),
            ("c4", "B", "U", "-"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (contig, name, up, down))| {
            AnnotationRecord::new(RecordId::new(i), contig, name, "M", up, down)
        })
        .collect()
    }

    #[test]
    fn counts_in_first_occurrence_order() {
        let counts = count_pairs(&store(), RecordField::HitName, RecordField::Upstream);
        let rows = counts
            .iter()
            .map(|p| (p.first.as_str(), p.second.as_str(), p.count))
            .collect_vec();
        assert_eq!(rows, vec![("A", "-", 2), ("A", "U", 1), ("B", "-", 1), ("B", "U", 1)]);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.get("A", "-"), Some(2));
        assert_eq!(counts.get("C", "-"), None);
    }

    #[test]
    fn pairs_are_unique() {
        let counts = count_pairs(&store(), RecordField::Upstream, RecordField::Downstream);
        let unique = counts
            .iter()
            .map(|p| (p.first.clone(), p.second.clone()))
            .unique()
            .count();
        assert_eq!(unique, counts.len());
        assert_eq!(counts.total(), store().len());
    }

    #[test]
    fn empty_store_gives_empty_counts() {
        let counts = count_pairs(&RecordStore::default(), RecordField::Contig, RecordField::Hit);
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn dataframe_layout() {
        let counts = count_pairs(&store(), RecordField::HitName, RecordField::HitName);
        let df = counts
            .to_dataframe(RecordField::HitName, RecordField::HitName)
            .unwrap();
        assert_eq!(df.get_column_names_str(), vec!["Hit Name", "Hit Name_right", "Counts"]);
        assert_eq!(df.height(), 2);
    }
}
