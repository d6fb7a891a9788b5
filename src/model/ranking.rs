//! Rank normalization and the order bookkeeping that lets models work on
//! rank-sorted teams while callers get results back in their own order.

use itertools::Itertools;

use crate::model::structures::options::Options;

/// Sort keys for `n` teams, lower is better: explicit rankings when present,
/// otherwise negated scores, otherwise `1..=n`.
pub fn rank_keys(n: usize, options: &Options) -> Vec<f64> {
    if let Some(rankings) = options.rankings() {
        return ranking_keys(rankings);
    }

    if let Some(scores) = options.scores() {
        return scores.iter().map(|&s| -s).collect();
    }

    (1..=n).map(|i| i as f64).collect()
}

/// Maps integer rankings onto dense keys starting at 1. Order and ties are
/// kept exactly, including values too large to survive an `f64` cast.
pub fn ranking_keys(rankings: &[i64]) -> Vec<f64> {
    let distinct: Vec<i64> = rankings.iter().copied().sorted_unstable().dedup().collect();

    rankings
        .iter()
        .map(|r| (distinct.partition_point(|d| d < r) + 1) as f64)
        .collect()
}

/// Collapses keys into competition ranks.
///
/// Teams past the end of `keys` are keyed by their index. Walking in input
/// order, the rank jumps to the current index only when the key strictly
/// increases, otherwise the previous rank carries forward. On sorted keys this
/// is standard competition ranking, zero-based: `[1, 1, 3] -> [0, 0, 2]`.
pub fn rankings(n: usize, keys: &[f64]) -> Vec<usize> {
    let scores: Vec<f64> = (0..n).map(|i| keys.get(i).copied().unwrap_or(i as f64)).collect();

    let mut rank = 0;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        if i > 0 && scores[i - 1] < scores[i] {
            rank = i;
        }
        out.push(rank);
    }

    out
}

/// Dense ascending ranking, starting at 1. Equal values share a rank and the
/// next distinct value takes the following rank.
pub fn rank_data_min(data: &[f64]) -> Vec<usize> {
    let order: Vec<usize> = (0..data.len()).sorted_by(|&a, &b| data[a].total_cmp(&data[b])).collect();

    let mut ranks = vec![0; data.len()];
    let mut rank = 1;
    for (pos, &idx) in order.iter().enumerate() {
        ranks[idx] = rank;
        if let Some(&next) = order.get(pos + 1) {
            if data[idx] != data[next] {
                rank += 1;
            }
        }
    }

    ranks
}

/// Stably sorts `items` by `keys` ascending. Returns the sorted items and the
/// original index of each, for [`restore_order`].
pub fn capture_order<T: Clone>(keys: &[f64], items: &[T]) -> (Vec<T>, Vec<usize>) {
    let tenet: Vec<usize> = (0..items.len())
        .sorted_by(|&a, &b| keys[a].total_cmp(&keys[b]))
        .collect();
    let sorted = tenet.iter().map(|&i| items[i].clone()).collect();

    (sorted, tenet)
}

/// Puts items produced in sorted order back where [`capture_order`] found them.
pub fn restore_order<T>(tenet: &[usize], items: Vec<T>) -> Vec<T> {
    items
        .into_iter()
        .zip(tenet.iter().copied())
        .sorted_by_key(|(_, original)| *original)
        .map(|(item, _)| item)
        .collect()
}
