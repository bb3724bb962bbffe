//! Exact-match frequency counting with deterministic ranking.

use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts of distinct values.
///
/// # Examples
///
/// ```
/// use wordstat_stats::frequency::FrequencyTable;
///
/// let table = FrequencyTable::from_iter(["b", "a", "b", "c", "a", "b"]);
/// assert_eq!(table.total(), 6);
/// let ranked = table.ranked();
/// assert_eq!(ranked[0], ("b", 3));
/// assert_eq!(ranked[1], ("a", 2));
/// ```
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    counts: HashMap<K, usize>,
    total: usize,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<K> FrequencyTable<K>
where
    K: Eq + Hash,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Total number of observations added.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct values observed.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// All values ordered by descending count, ties broken by ascending value.
    #[must_use]
    pub fn ranked(&self) -> Vec<(K, usize)>
    where
        K: Ord + Clone,
    {
        let mut ranked = self
            .counts
            .iter()
            .map(|(key, count)| (key.clone(), *count))
            .collect::<Vec<_>>();
        ranked.sort_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)));
        ranked
    }
}

impl<K> FromIterator<K> for FrequencyTable<K>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.add(key);
        }
        table
    }
}
