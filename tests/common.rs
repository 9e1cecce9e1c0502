#![allow(dead_code)]
use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use bio::io::fasta::Reader as FastaReader;

pub const HEADER: &str = "Contig,Hit Name,Hit,Upstream,Downstream";

/// Builds an annotation table from `(contig, hit name, hit, upstream,
/// downstream)` rows.
pub fn table(rows: &[(&str, &str, &str, &str, &str)]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for (contig, name, hit, up, down) in rows {
        out.push_str(&format!("{},{},{},{},{}\n", contig, name, hit, up, down));
    }
    out
}

pub fn write_table(
    dir: &Path,
    rows: &[(&str, &str, &str, &str, &str)],
) -> PathBuf {
    let path = dir.join("Toxins.csv");
    fs::write(&path, table(rows)).unwrap();
    path
}

/// `(id, sequence)` entries of a FASTA file.
pub fn read_fasta(path: &Path) -> Vec<(String, String)> {
    FastaReader::from_file(path)
        .unwrap()
        .records()
        .map(|r| {
            let r = r.unwrap();
            (
                r.id().to_string(),
                String::from_utf8(r.seq().to_vec()).unwrap(),
            )
        })
        .collect()
}

/// A small dataset covering every resolution case:
///
/// - c1/HicB: clean pair, one upstream and one downstream antitoxin
/// - c2/HicB: pair where row 3 has both antitoxins
/// - c3/RelE: singleton
/// - c4/RelE: clean pair, both upstream
/// - c5/MazF: both members ambiguous
pub fn demo_rows() -> Vec<(&'static str, &'static str, &'static str, &'static str, &'static str)> {
    vec![
        ("c1", "HicB", "MKV", "AAA", "-"),
        ("c1", "HicB", "MKI", "-", "BBB"),
        ("c2", "HicB", "MRL", "-", "CCC"),
        ("c2", "HicB", "MRM", "DDD", "EEE"),
        ("c3", "RelE", "MSS", "FFF", "-"),
        ("c4", "RelE", "MTT", "GGG", "-"),
        ("c4", "RelE", "MTV", "HHH", "-"),
        ("c5", "MazF", "MQQ", "III", "JJJ"),
        ("c5", "MazF", "MQR", "KKK", "LLL"),
    ]
}
