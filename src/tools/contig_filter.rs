use hashbrown::HashMap;
use log::debug;

use crate::data_structs::RecordStore;

/// Records of family `hit_name` on contigs carrying exactly two hits of that
/// family, i.e. the contigs where a single toxin-antitoxin pair is possible.
///
/// Order follows `store`. An unknown family yields an empty store.
pub fn filter_pairable(
    store: &RecordStore,
    hit_name: &str,
) -> RecordStore {
    let mut per_contig: HashMap<&str, usize> = HashMap::new();
    for record in store.iter().filter(|r| r.hit_name().as_str() == hit_name) {
        *per_contig.entry(record.contig().as_str()).or_insert(0) += 1;
    }

    let filtered = store.filter(|r| {
        r.hit_name().as_str() == hit_name
            && per_contig.get(r.contig().as_str()) == Some(&2)
    });
    debug!(
        "{}: {} of {} contigs hold a pair, {} records kept",
        hit_name,
        per_contig.values().filter(|&&n| n == 2).count(),
        per_contig.len(),
        filtered.len()
    );
    filtered
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rstest::rstest;

    use super::*;
    use crate::data_structs::{
        AnnotationRecord,
        RecordId,
    };

    fn store(rows: &[(&str, &str)]) -> RecordStore {
        rows.iter()
            .enumerate()
            .map(|(i, (contig, name))| {
                AnnotationRecord::new(RecordId::new(i), *contig, *name, "M", "-", "-")
            })
            .collect()
    }

    #[rstest]
    #[case::pair(&[("c1", "A"), ("c1", "A")], "A", vec![0, 1])]
    #[case::single(&[("c1", "A")], "A", vec![])]
    #[case::triple(&[("c1", "A"), ("c1", "A"), ("c1", "A")], "A", vec![])]
    #[case::other_family_ignored(&[("c1", "A"), ("c1", "B"), ("c1", "A")], "A", vec![0, 2])]
    #[case::other_family_not_counted(&[("c1", "A"), ("c1", "B")], "A", vec![])]
    #[case::unknown_family(&[("c1", "A"), ("c1", "A")], "Z", vec![])]
    #[case::mixed_contigs(
        &[("c1", "A"), ("c2", "A"), ("c1", "A"), ("c2", "A"), ("c2", "A"), ("c3", "A")],
        "A",
        vec![0, 2]
    )]
    fn keeps_exact_pairs(
        #[case] rows: &[(&str, &str)],
        #[case] hit_name: &str,
        #[case] expected: Vec<usize>,
    ) {
        let filtered = filter_pairable(&store(rows), hit_name);
        let ids = filtered.iter().map(|r| r.id().get()).collect_vec();
        assert_eq!(ids, expected);
    }

    #[test]
    fn output_contigs_have_two_hits_of_family() {
        let input = store(&[
            ("c1", "A"),
            ("c2", "B"),
            ("c1", "A"),
            ("c2", "A"),
            ("c3", "A"),
            ("c3", "A"),
            ("c3", "B"),
        ]);
        let filtered = filter_pairable(&input, "A");
        assert!(filtered.iter().all(|r| r.hit_name().as_str() == "A"));
        for record in &filtered {
            let count = input
                .iter()
                .filter(|r| r.contig() == record.contig() && r.hit_name().as_str() == "A")
                .count();
            assert_eq!(count, 2);
        }
        assert_eq!(filtered.len(), 4);
    }
}
