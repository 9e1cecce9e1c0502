use itertools::Itertools;
use log::{
    debug,
    trace,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{
    Rng,
    SeedableRng,
};

use crate::data_structs::{
    RecordField,
    RecordStore,
};

/// Builds permutation null models by shuffling one column of a store.
///
/// Each shuffle is a full permutation of the values already present in the
/// column, so the multiset of values never changes. Repeated shuffles are
/// cumulative: iteration `i + 1` permutes the result of iteration `i`.
pub struct Randomizer<R: Rng> {
    rng: R,
}

impl Randomizer<StdRng> {
    pub fn from_seed(seed: u64) -> Self { Self::new(StdRng::seed_from_u64(seed)) }

    pub fn from_entropy() -> Self { Self::new(StdRng::from_entropy()) }
}

impl<R: Rng> Randomizer<R> {
    pub fn new(rng: R) -> Self { Self { rng } }

    /// Returns a copy of `store` with the values of `field` shuffled once.
    pub fn permute(
        &mut self,
        store: &RecordStore,
        field: RecordField,
    ) -> RecordStore {
        let mut values = store.column(field);
        values.shuffle(&mut self.rng);
        store
            .iter()
            .zip(values)
            .map(|(record, value)| record.with_value(field, value))
            .collect()
    }

    /// Shuffles `field` `n` times and returns the last state. `n == 0`
    /// returns an unchanged copy of `store`.
    pub fn randomize(
        &mut self,
        store: &RecordStore,
        n: usize,
        field: RecordField,
    ) -> RecordStore {
        self.permutations(store, n, field)
            .last()
            .unwrap_or_else(|| store.clone())
    }

    /// Iterates over the `n` successive permuted states of `store`.
    pub fn permutations(
        &mut self,
        store: &RecordStore,
        n: usize,
        field: RecordField,
    ) -> Permutations<'_, R> {
        Permutations {
            randomizer: self,
            current: store.clone(),
            field,
            done: 0,
            total: n,
        }
    }
}

pub struct Permutations<'a, R: Rng> {
    randomizer: &'a mut Randomizer<R>,
    current:    RecordStore,
    field:      RecordField,
    done:       usize,
    total:      usize,
}

impl<R: Rng> Iterator for Permutations<'_, R> {
    type Item = RecordStore;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done >= self.total {
            return None;
        }
        self.current = self.randomizer.permute(&self.current, self.field);
        self.done += 1;

        debug!("Permutation {}/{} of {}", self.done, self.total, self.field);
        trace!(
            "{}: [{}]",
            self.field,
            self.current.column(self.field).iter().join(", ")
        );
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.done;
        (left, Some(left))
    }
}

impl<R: Rng> ExactSizeIterator for Permutations<'_, R> {}
