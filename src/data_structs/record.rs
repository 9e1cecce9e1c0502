use std::fmt::Display;

use super::field::RecordField;
use super::typedef::{
    is_absent,
    SeqStr,
};
use crate::getter_fn;

/// Stable identifier of a record, assigned from its 0-based row position in
/// the source table.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord)]
pub struct RecordId(usize);

impl RecordId {
    pub fn new(id: usize) -> Self { Self(id) }

    pub fn get(&self) -> usize { self.0 }
}

impl From<usize> for RecordId {
    fn from(value: usize) -> Self { Self(value) }
}

impl Display for RecordId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the annotation table: a toxin hit on a contig with the
/// antitoxin candidates found on either side of it.
///
/// `upstream` and `downstream` keep the raw table text, so an absent
/// antitoxin is stored as the `-` sentinel. Use [`AnnotationRecord::upstream`]
/// and [`AnnotationRecord::downstream`] to get `None` for it instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationRecord {
    id:         RecordId,
    contig:     SeqStr,
    hit_name:   SeqStr,
    hit:        SeqStr,
    upstream:   SeqStr,
    downstream: SeqStr,
}

impl AnnotationRecord {
    pub fn new<S: Into<SeqStr>>(
        id: RecordId,
        contig: S,
        hit_name: S,
        hit: S,
        upstream: S,
        downstream: S,
    ) -> Self {
        Self {
            id,
            contig: contig.into(),
            hit_name: hit_name.into(),
            hit: hit.into(),
            upstream: upstream.into(),
            downstream: downstream.into(),
        }
    }

    pub fn id(&self) -> RecordId { self.id }

    getter_fn!(contig, SeqStr);

    getter_fn!(hit_name, SeqStr);

    getter_fn!(hit, SeqStr);

    /// Upstream column as written in the table, sentinel included.
    pub fn upstream_raw(&self) -> &SeqStr { &self.upstream }

    /// Downstream column as written in the table, sentinel included.
    pub fn downstream_raw(&self) -> &SeqStr { &self.downstream }

    pub fn upstream(&self) -> Option<&str> {
        Some(self.upstream.as_str()).filter(|s| !is_absent(s))
    }

    pub fn downstream(&self) -> Option<&str> {
        Some(self.downstream.as_str()).filter(|s| !is_absent(s))
    }

    /// Both antitoxin slots are filled, so the orientation of the pair
    /// cannot be told.
    pub fn is_ambiguous(&self) -> bool {
        self.upstream().is_some() && self.downstream().is_some()
    }

    /// The antitoxin paired with this toxin. Upstream wins over downstream.
    pub fn antitoxin(&self) -> Option<&str> {
        self.upstream().or_else(|| self.downstream())
    }

    /// Returns a copy of this record with `field` set to `value`.
    pub fn with_value(
        &self,
        field: RecordField,
        value: SeqStr,
    ) -> Self {
        let mut new = self.clone();
        match field {
            RecordField::Contig => new.contig = value,
            RecordField::HitName => new.hit_name = value,
            RecordField::Hit => new.hit = value,
            RecordField::Upstream => new.upstream = value,
            RecordField::Downstream => new.downstream = value,
        }
        new
    }
}
