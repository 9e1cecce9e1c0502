use std::fmt::Display;
use std::str::FromStr;

use anyhow::bail;

use super::record::AnnotationRecord;
use super::typedef::SeqStr;

/// Column of the annotation table.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord)]
pub enum RecordField {
    /// Contig or scaffold identifier.
    Contig,
    /// Toxin family label.
    HitName,
    /// Toxin sequence.
    Hit,
    /// Antitoxin sequence found upstream of the toxin.
    Upstream,
    /// Antitoxin sequence found downstream of the toxin.
    Downstream,
}

impl RecordField {
    pub const ALL: [RecordField; 5] = [
        RecordField::Contig,
        RecordField::HitName,
        RecordField::Hit,
        RecordField::Upstream,
        RecordField::Downstream,
    ];

    /// Header of the column in the annotation table.
    pub const fn column_name(&self) -> &'static str {
        match self {
            RecordField::Contig => "Contig",
            RecordField::HitName => "Hit Name",
            RecordField::Hit => "Hit",
            RecordField::Upstream => "Upstream",
            RecordField::Downstream => "Downstream",
        }
    }

    /// Borrows the value of this column from `record`.
    pub fn get<'a>(
        &self,
        record: &'a AnnotationRecord,
    ) -> &'a SeqStr {
        match self {
            RecordField::Contig => record.contig(),
            RecordField::HitName => record.hit_name(),
            RecordField::Hit => record.hit(),
            RecordField::Upstream => record.upstream_raw(),
            RecordField::Downstream => record.downstream_raw(),
        }
    }
}

impl Display for RecordField {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

impl FromStr for RecordField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_lowercase()
            .replace(['_', '-', ' '], "");
        match normalized.as_str() {
            "contig" => Ok(RecordField::Contig),
            "hitname" => Ok(RecordField::HitName),
            "hit" => Ok(RecordField::Hit),
            "upstream" => Ok(RecordField::Upstream),
            "downstream" => Ok(RecordField::Downstream),
            _ => bail!(
                "Unknown column '{}'. Expected one of: Contig, Hit Name, Hit, Upstream, Downstream",
                s
            ),
        }
    }
}
