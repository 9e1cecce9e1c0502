mod common;
use std::fs;

use common::{
    demo_rows,
    read_fasta,
    write_table,
};
use itertools::Itertools;
use rstest::{
    fixture,
    rstest,
};
use tempfile::TempDir;
use toxinpairs::prelude::*;

#[fixture]
fn workdir() -> TempDir { tempfile::tempdir().unwrap() }

#[rstest]
fn single_record_file(workdir: TempDir) -> anyhow::Result<()> {
    let store = RecordStore::new(vec![AnnotationRecord::new(
        RecordId::new(0),
        "c1",
        "T1",
        "MKV",
        "QRS",
        "-",
    )]);
    let report = FastaExporter::new(workdir.path()).export(&store)?;
    assert!(report.is_ok());

    let path = workdir.path().join("T1.fasta");
    assert_eq!(report.written(), &[path.clone()]);
    assert_eq!(
        fs::read_to_string(path)?,
        ">T1_0.toxin\nMKV\n>T1_0.antitoxin\nQRS\n"
    );
    Ok(())
}

#[rstest]
fn overwrites_existing_file(workdir: TempDir) -> anyhow::Result<()> {
    let path = workdir.path().join("T1.fasta");
    fs::write(&path, "stale content that is longer than the new file\n")?;
    let store = RecordStore::new(vec![AnnotationRecord::new(
        RecordId::new(2),
        "c1",
        "T1",
        "M",
        "-",
        "Q",
    )]);
    FastaExporter::new(workdir.path()).export(&store)?.into_result()?;
    assert_eq!(fs::read_to_string(path)?, ">T1_2.toxin\nM\n>T1_2.antitoxin\nQ\n");
    Ok(())
}

#[rstest]
fn end_to_end_pipeline(workdir: TempDir) -> anyhow::Result<()> {
    let input = write_table(workdir.path(), &demo_rows());
    let out_dir = workdir.path().join("msa");
    let config = PipelineConfig::default()
        .with_input(input)
        .with_output_dir(out_dir.clone());

    let written = run_export(&config)?.into_result()?;
    let names = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect_vec();
    assert_eq!(names, vec!["HicB.fasta", "RelE.fasta"]);
    assert!(!out_dir.join("MazF.fasta").exists());

    let hicb = read_fasta(&out_dir.join("HicB.fasta"));
    assert_eq!(
        hicb,
        vec![
            ("HicB_0.toxin".to_string(), "MKV".to_string()),
            ("HicB_0.antitoxin".to_string(), "AAA".to_string()),
            ("HicB_1.toxin".to_string(), "MKI".to_string()),
            ("HicB_1.antitoxin".to_string(), "BBB".to_string()),
            ("HicB_2.toxin".to_string(), "MRL".to_string()),
            ("HicB_2.antitoxin".to_string(), "CCC".to_string()),
        ]
    );

    let rele = read_fasta(&out_dir.join("RelE.fasta"));
    let ids = rele.iter().map(|(id, _)| id.as_str()).collect_vec();
    assert_eq!(
        ids,
        vec!["RelE_5.toxin", "RelE_5.antitoxin", "RelE_6.toxin", "RelE_6.antitoxin"]
    );
    Ok(())
}

#[rstest]
fn resolution_feeds_export(workdir: TempDir) -> anyhow::Result<()> {
    let input = write_table(workdir.path(), &demo_rows());
    let store = RecordStore::from_csv(input)?;
    let resolution = resolve_duplicates(&store);
    assert_eq!(resolution.kept.len(), 5);
    assert_eq!(resolution.singletons, 1);
    assert_eq!(resolution.ambiguous, 3);
    Ok(())
}

#[rstest]
fn failures_are_collected(workdir: TempDir) -> anyhow::Result<()> {
    // A directory where the file should go makes that family unwritable.
    fs::create_dir(workdir.path().join("A.fasta"))?;
    let store: RecordStore = ["A", "B"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| AnnotationRecord::new(RecordId::new(i), "c", name, "M", "Q", "-"))
        .collect();

    let report = FastaExporter::new(workdir.path()).export(&store)?;
    assert_eq!(report.written().len(), 1);
    assert_eq!(report.failures().len(), 1);
    assert_eq!(report.failures()[0].family.as_str(), "A");
    assert!(workdir.path().join("B.fasta").is_file());

    let err = report.into_result().unwrap_err().to_string();
    assert!(err.contains("1 of 2 families"), "{}", err);
    Ok(())
}

#[rstest]
fn fail_fast_stops_at_first_failure(workdir: TempDir) -> anyhow::Result<()> {
    fs::create_dir(workdir.path().join("A.fasta"))?;
    let store: RecordStore = ["A", "B"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| AnnotationRecord::new(RecordId::new(i), "c", name, "M", "Q", "-"))
        .collect();

    let result = FastaExporter::new(workdir.path())
        .with_fail_fast(true)
        .export(&store);
    assert!(result.is_err());
    assert!(!workdir.path().join("B.fasta").exists());
    Ok(())
}

#[rstest]
fn load_error_writes_nothing(workdir: TempDir) {
    let out_dir = workdir.path().join("msa");
    let config = PipelineConfig::default()
        .with_input(workdir.path().join("missing.csv"))
        .with_output_dir(out_dir.clone());
    assert!(run_export(&config).is_err());
    assert!(!out_dir.exists());
}

#[rstest]
fn empty_table_exports_nothing(workdir: TempDir) -> anyhow::Result<()> {
    let input = write_table(workdir.path(), &[]);
    let config = PipelineConfig::default()
        .with_input(input)
        .with_output_dir(workdir.path().join("msa"));
    let report = run_export(&config)?;
    assert!(report.is_ok());
    assert!(report.written().is_empty());
    Ok(())
}
