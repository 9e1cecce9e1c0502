use std::path::Path;

use hashbrown::HashMap;
use polars::prelude::*;

use super::field::RecordField;
use super::record::{
    AnnotationRecord,
    RecordId,
};
use super::typedef::SeqStr;
use crate::io::table::RecordReader;

/// Name of the identifier column in [`RecordStore::to_dataframe`].
pub const ID_COLUMN: &str = "Id";

/// Ordered, immutable collection of [`AnnotationRecord`]s.
///
/// Every analysis step borrows a store and returns a new one, so a store
/// loaded from disk is never changed by downstream processing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<AnnotationRecord>,
    /// Position of the first record carrying each id.
    index:   HashMap<RecordId, usize>,
}

impl RecordStore {
    pub fn new(records: Vec<AnnotationRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            index.entry(record.id()).or_insert(pos);
        }
        Self { records, index }
    }

    /// Loads a comma separated annotation table.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        RecordReader::default().read_path(path)
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn records(&self) -> &[AnnotationRecord] { &self.records }

    pub fn iter(&self) -> std::slice::Iter<'_, AnnotationRecord> {
        self.records.iter()
    }

    /// Record with the given id. If several records share an id, the first
    /// one in store order is returned.
    pub fn get(
        &self,
        id: RecordId,
    ) -> Option<&AnnotationRecord> {
        self.index.get(&id).map(|&pos| &self.records[pos])
    }

    /// Values of one column in store order.
    pub fn column(
        &self,
        field: RecordField,
    ) -> Vec<SeqStr> {
        self.records
            .iter()
            .map(|r| field.get(r).clone())
            .collect()
    }

    /// Keeps the records for which `predicate` holds, preserving order.
    pub fn filter<F: FnMut(&AnnotationRecord) -> bool>(
        &self,
        mut predicate: F,
    ) -> Self {
        self.records
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// Converts the store into a [`DataFrame`] with an `Id` column followed
    /// by the five table columns.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let ids = self
            .records
            .iter()
            .map(|r| r.id().get() as u64)
            .collect::<Vec<_>>();
        let mut columns = vec![Column::new(ID_COLUMN.into(), ids)];
        for field in RecordField::ALL {
            let values = self
                .records
                .iter()
                .map(|r| field.get(r).as_str())
                .collect::<Vec<_>>();
            columns.push(Column::new(field.column_name().into(), values));
        }
        DataFrame::new(columns)
    }
}

impl FromIterator<AnnotationRecord> for RecordStore {
    fn from_iter<T: IntoIterator<Item = AnnotationRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for RecordStore {
    type IntoIter = std::vec::IntoIter<AnnotationRecord>;
    type Item = AnnotationRecord;

    fn into_iter(self) -> Self::IntoIter { self.records.into_iter() }
}

impl<'a> IntoIterator for &'a RecordStore {
    type IntoIter = std::slice::Iter<'a, AnnotationRecord>;
    type Item = &'a AnnotationRecord;

    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}
