use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};

use anyhow::{
    anyhow,
    Context,
};
use bio::io::fasta::Writer as FastaWriter;
use indexmap::IndexMap;
use itertools::Itertools;
use log::{
    debug,
    info,
    warn,
};

use crate::config::family_path;
use crate::data_structs::typedef::SeqStr;
use crate::data_structs::{
    AnnotationRecord,
    RecordStore,
};

const TOXIN_SUFFIX: &str = "toxin";
const ANTITOXIN_SUFFIX: &str = "antitoxin";

/// Groups records by hit name. Families keep the order of their first
/// occurrence and records keep store order.
pub fn group_by_family(
    store: &RecordStore
) -> IndexMap<SeqStr, Vec<&AnnotationRecord>> {
    let mut families: IndexMap<SeqStr, Vec<&AnnotationRecord>> = IndexMap::new();
    for record in store {
        families
            .entry(record.hit_name().clone())
            .or_default()
            .push(record);
    }
    families
}

/// A family whose FASTA file could not be written.
#[derive(Debug)]
pub struct ExportFailure {
    pub family: SeqStr,
    pub path:   PathBuf,
    pub error:  anyhow::Error,
}

/// Outcome of [`FastaExporter::export`].
#[derive(Debug, Default)]
pub struct ExportReport {
    written:  Vec<PathBuf>,
    failures: Vec<ExportFailure>,
}

impl ExportReport {
    pub fn written(&self) -> &[PathBuf] { &self.written }

    pub fn failures(&self) -> &[ExportFailure] { &self.failures }

    pub fn is_ok(&self) -> bool { self.failures.is_empty() }

    /// Turns the report into an error naming every failed family, or
    /// returns the written paths.
    pub fn into_result(self) -> anyhow::Result<Vec<PathBuf>> {
        if self.failures.is_empty() {
            return Ok(self.written);
        }
        let details = self
            .failures
            .iter()
            .map(|f| format!("{} ({}): {:#}", f.family, f.path.display(), f.error))
            .join("; ");
        Err(anyhow!(
            "Failed to export {} of {} families: {}",
            self.failures.len(),
            self.failures.len() + self.written.len(),
            details
        ))
    }
}

/// Writes one `<hit name>.fasta` file per family, with a toxin entry
/// followed by its antitoxin entry for every record:
///
/// ```text
/// >{hit name}_{record id}.toxin
/// {hit}
/// >{hit name}_{record id}.antitoxin
/// {upstream, or downstream when upstream is absent}
/// ```
///
/// Existing files are overwritten.
#[derive(Debug, Clone)]
pub struct FastaExporter {
    output_dir: PathBuf,
    fail_fast:  bool,
}

impl FastaExporter {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
            fail_fast:  false,
        }
    }

    /// Stop at the first family that cannot be written instead of
    /// collecting failures.
    pub fn with_fail_fast(
        mut self,
        fail_fast: bool,
    ) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn output_dir(&self) -> &Path { &self.output_dir }

    pub fn export(
        &self,
        store: &RecordStore,
    ) -> anyhow::Result<ExportReport> {
        self.export_with(store, |_| {})
    }

    /// Same as [`FastaExporter::export`], calling `on_family` after each
    /// family has been processed.
    pub fn export_with<F: FnMut(&str)>(
        &self,
        store: &RecordStore,
        mut on_family: F,
    ) -> anyhow::Result<ExportReport> {
        let mut report = ExportReport::default();

        for (family, records) in group_by_family(store) {
            let path = family_path(&self.output_dir, &family);
            match write_family_file(&path, &family, &records) {
                Ok(()) => {
                    info!(
                        "Wrote {} pairs of {} to {}",
                        records.len(),
                        family,
                        path.display()
                    );
                    report.written.push(path);
                },
                Err(error) if self.fail_fast => {
                    return Err(error.context(format!(
                        "Failed to export family {} to {}",
                        family,
                        path.display()
                    )));
                },
                Err(error) => {
                    warn!("Failed to export family {}: {:#}", family, error);
                    report.failures.push(ExportFailure {
                        family: family.clone(),
                        path,
                        error,
                    });
                },
            }
            on_family(&family);
        }

        debug!(
            "Export finished: {} written, {} failed",
            report.written.len(),
            report.failures.len()
        );
        Ok(report)
    }
}

fn write_family_file(
    path: &Path,
    family: &str,
    records: &[&AnnotationRecord],
) -> anyhow::Result<()> {
    let writer = FastaWriter::to_file(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_family(writer, family, records)
}

/// Writes the entries of one family to `writer`.
pub fn write_family<W: Write>(
    mut writer: FastaWriter<W>,
    family: &str,
    records: &[&AnnotationRecord],
) -> anyhow::Result<()> {
    for record in records {
        let antitoxin = record.antitoxin().unwrap_or_default();
        if record.antitoxin().is_none() {
            warn!(
                "Record {} of {} has no antitoxin, writing an empty sequence",
                record.id(),
                family
            );
        }

        writer.write(
            &entry_name(family, record, TOXIN_SUFFIX),
            None,
            record.hit().as_bytes(),
        )?;
        writer.write(
            &entry_name(family, record, ANTITOXIN_SUFFIX),
            None,
            antitoxin.as_bytes(),
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn entry_name(
    family: &str,
    record: &AnnotationRecord,
    suffix: &str,
) -> String {
    format!("{}_{}.{}", family, record.id(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structs::RecordId;

    fn record(
        id: usize,
        hit_name: &str,
        upstream: &str,
        downstream: &str,
    ) -> AnnotationRecord {
        AnnotationRecord::new(
            RecordId::new(id),
            "c1",
            hit_name,
            "MKV",
            upstream,
            downstream,
        )
    }

    fn render(
        family: &str,
        records: &[AnnotationRecord],
    ) -> String {
        let mut buffer = Vec::new();
        let refs = records.iter().collect_vec();
        write_family(FastaWriter::new(&mut buffer), family, &refs).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn upstream_has_priority() {
        let out = render("T1", &[record(0, "T1", "QRS", "-")]);
        assert_eq!(out, ">T1_0.toxin\nMKV\n>T1_0.antitoxin\nQRS\n");
    }

    #[test]
    fn downstream_used_when_upstream_absent() {
        let out = render("T1", &[record(7, "T1", "-", "BBB")]);
        assert_eq!(out, ">T1_7.toxin\nMKV\n>T1_7.antitoxin\nBBB\n");
    }

    #[test]
    fn missing_antitoxin_writes_empty_line() {
        let out = render("T1", &[record(3, "T1", "-", "-")]);
        assert_eq!(out, ">T1_3.toxin\nMKV\n>T1_3.antitoxin\n\n");
    }

    #[test]
    fn families_keep_first_occurrence_order() {
        let store = RecordStore::new(vec![
            record(0, "B", "A", "-"),
            record(1, "A", "A", "-"),
            record(2, "B", "A", "-"),
        ]);
        let families = group_by_family(&store);
        let names = families.keys().map(|k| k.as_str()).collect_vec();
        assert_eq!(names, vec!["B", "A"]);
        let ids = families["B"].iter().map(|r| r.id().get()).collect_vec();
        assert_eq!(ids, vec![0, 2]);
    }
}
