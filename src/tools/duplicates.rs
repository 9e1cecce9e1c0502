use hashbrown::{
    HashMap,
    HashSet,
};
use log::{
    debug,
    info,
};

use crate::data_structs::{
    AnnotationRecord,
    RecordId,
    RecordStore,
};

/// Result of [`resolve_duplicates`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Records of duplicated loci with a single antitoxin orientation.
    pub kept:       RecordStore,
    /// Records dropped because their `(contig, hit name)` locus occurs once.
    pub singletons: usize,
    /// Records dropped because both antitoxin slots are filled.
    pub ambiguous:  usize,
}

impl Resolution {
    pub fn into_store(self) -> RecordStore { self.kept }
}

fn locus_key(record: &AnnotationRecord) -> (&str, &str) {
    (record.contig().as_str(), record.hit_name().as_str())
}

/// Selects the export-eligible records of `store`.
///
/// Records are grouped by `(contig, hit name)`. Only groups with two or more
/// members are considered; inside them every record carrying both an
/// upstream and a downstream antitoxin is discarded. Exclusion is done by
/// [`RecordId`], so identical rows are handled independently. Store order is
/// kept.
pub fn resolve_duplicates(store: &RecordStore) -> Resolution {
    let mut group_sizes: HashMap<(&str, &str), usize> = HashMap::new();
    for record in store {
        *group_sizes.entry(locus_key(record)).or_insert(0) += 1;
    }
    let duplicated: HashSet<RecordId> = store
        .iter()
        .filter(|r| group_sizes.get(&locus_key(r)).is_some_and(|&n| n >= 2))
        .map(AnnotationRecord::id)
        .collect();

    let ambiguous: HashSet<RecordId> = store
        .iter()
        .filter(|r| duplicated.contains(&r.id()) && r.is_ambiguous())
        .map(AnnotationRecord::id)
        .collect();

    let kept = store.filter(|r| duplicated.contains(&r.id()) && !ambiguous.contains(&r.id()));
    let singletons = store
        .iter()
        .filter(|r| !duplicated.contains(&r.id()))
        .count();

    debug!(
        "{} loci, {} duplicated",
        group_sizes.len(),
        group_sizes.values().filter(|&&n| n >= 2).count()
    );
    info!(
        "Resolved {} of {} records ({} single-locus, {} with both antitoxins)",
        kept.len(),
        store.len(),
        singletons,
        ambiguous.len()
    );

    Resolution {
        kept,
        singletons,
        ambiguous: ambiguous.len(),
    }
}
