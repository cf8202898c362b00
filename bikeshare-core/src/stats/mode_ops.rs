use std::hash::Hash;

use itertools::Itertools;

/// counts occurrences of each value. the result is ordered by descending
/// count, with ties ordered by ascending value.
pub fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Ord + Hash,
    I: IntoIterator<Item = K>,
{
    values
        .into_iter()
        .counts()
        .into_iter()
        .sorted_by(|(a, a_count), (b, b_count)| b_count.cmp(a_count).then_with(|| a.cmp(b)))
        .collect()
}

/// the most frequent value. when several values share the highest count, the
/// smallest of them wins. returns None for empty input.
pub fn mode<K, I>(values: I) -> Option<K>
where
    K: Ord + Hash,
    I: IntoIterator<Item = K>,
{
    value_counts(values).into_iter().next().map(|(k, _)| k)
}
