//! Comparison sets for the pairwise models. Both strategies index into the
//! rank-sorted team slice.

/// Every other team. O(n²) comparisons in total.
pub fn full_pairs(n: usize) -> Vec<Vec<usize>> {
    (0..n).map(|i| (0..n).filter(|&q| q != i).collect()).collect()
}

/// Only the teams directly above and below in the ranking. O(n) comparisons
/// in total; edge teams get a single neighbour and a lone team none.
pub fn ladder_pairs(n: usize) -> Vec<Vec<usize>> {
    (0..n)
        .map(|i| {
            let left = i.checked_sub(1);
            let right = Some(i + 1).filter(|&r| r < n);

            left.into_iter().chain(right).collect()
        })
        .collect()
}
