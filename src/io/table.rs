use std::fs::File;
use std::io::{
    BufReader,
    Read,
    Write,
};
use std::path::Path;

use anyhow::{
    bail,
    Context,
};
use itertools::Itertools;
use log::{
    debug,
    info,
    warn,
};
use polars::prelude::{
    CsvWriter,
    DataFrame,
    SerWriter,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::{
    AnnotationRecord,
    RecordField,
    RecordId,
    RecordStore,
};
use crate::with_field_fn;

/// Row layout of the annotation table. Columns not listed here are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Contig")]
    contig:     String,
    #[serde(rename = "Hit Name")]
    hit_name:   String,
    #[serde(rename = "Hit")]
    hit:        String,
    #[serde(rename = "Upstream")]
    upstream:   String,
    #[serde(rename = "Downstream")]
    downstream: String,
}

impl RawRecord {
    fn into_record(
        self,
        id: RecordId,
    ) -> AnnotationRecord {
        AnnotationRecord::new(
            id,
            self.contig,
            self.hit_name,
            self.hit,
            self.upstream,
            self.downstream,
        )
    }
}

#[derive(Debug, Serialize)]
struct RawRecordRef<'a> {
    #[serde(rename = "Contig")]
    contig:     &'a str,
    #[serde(rename = "Hit Name")]
    hit_name:   &'a str,
    #[serde(rename = "Hit")]
    hit:        &'a str,
    #[serde(rename = "Upstream")]
    upstream:   &'a str,
    #[serde(rename = "Downstream")]
    downstream: &'a str,
}

impl<'a> From<&'a AnnotationRecord> for RawRecordRef<'a> {
    fn from(value: &'a AnnotationRecord) -> Self {
        Self {
            contig:     value.contig().as_str(),
            hit_name:   value.hit_name().as_str(),
            hit:        value.hit().as_str(),
            upstream:   value.upstream_raw().as_str(),
            downstream: value.downstream_raw().as_str(),
        }
    }
}

/// Reads annotation tables into a [`RecordStore`].
///
/// Record identifiers are the 0-based positions of the data rows.
#[derive(Debug, Clone)]
pub struct RecordReader {
    delimiter: u8,
}

impl Default for RecordReader {
    fn default() -> Self { Self { delimiter: b',' } }
}

impl RecordReader {
    with_field_fn!(delimiter, u8);

    pub fn read_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> anyhow::Result<RecordStore> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| {
            format!("Failed to open annotation table {}", path.display())
        })?;
        let store = self
            .read(BufReader::new(file))
            .with_context(|| format!("Failed to load {}", path.display()))?;
        info!("Loaded {} records from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn read<R: Read>(
        &self,
        reader: R,
    ) -> anyhow::Result<RecordStore> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .context("Failed to read table header")?
            .clone();
        let missing = RecordField::ALL
            .iter()
            .map(RecordField::column_name)
            .filter(|name| !headers.iter().any(|h| h == *name))
            .collect_vec();
        if !missing.is_empty() {
            bail!("Missing required columns: {}", missing.join(", "));
        }

        let mut records = Vec::new();
        for (idx, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
            let raw = row.with_context(|| format!("Malformed row {}", idx))?;
            if raw.hit.is_empty() {
                warn!("Row {} on contig {} has an empty Hit", idx, raw.contig);
            }
            records.push(raw.into_record(RecordId::new(idx)));
        }
        debug!("Parsed {} rows", records.len());

        Ok(RecordStore::new(records))
    }
}

/// Writes a [`RecordStore`] back into the annotation table layout.
///
/// The header line is written even when the store is empty.
pub struct RecordWriter<W: Write> {
    writer:         csv::Writer<W>,
    header_written: bool,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(
        sink: W,
        delimiter: u8,
    ) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_writer(sink);
        Self {
            writer,
            header_written: false,
        }
    }

    pub fn write_store(
        &mut self,
        store: &RecordStore,
    ) -> anyhow::Result<()> {
        if !self.header_written {
            self.writer
                .write_record(RecordField::ALL.iter().map(RecordField::column_name))
                .context("Failed to write table header")?;
            self.header_written = true;
        }
        for record in store {
            self.writer
                .serialize(RawRecordRef::from(record))
                .with_context(|| format!("Failed to write record {}", record.id()))?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> anyhow::Result<()> {
        if !self.header_written {
            self.write_store(&RecordStore::default())?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes a frame as CSV with a header line.
pub fn write_dataframe<W: Write>(
    df: &mut DataFrame,
    sink: W,
    delimiter: u8,
) -> anyhow::Result<()> {
    CsvWriter::new(sink)
        .include_header(true)
        .with_separator(delimiter)
        .finish(df)
        .context("Failed to write table")
}
