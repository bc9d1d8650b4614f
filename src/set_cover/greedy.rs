//! Greedy set cover.

use super::Instance;

/// Greedy unicost set cover.
///
/// Repeatedly picks the set covering the largest number of still-uncovered
/// elements (first index wins ties) until the ground set is covered.
/// Returns the chosen set indices in pick order, or `None` when some
/// elements remain uncovered and no set adds coverage.
///
/// # Complexity
/// O(cover_size · Σ|set|) time; each round scans every set once.
///
/// # Examples
///
/// ```
/// use cover_heur::set_cover::{greedy_cover, Instance};
///
/// let instance = Instance::new(4, vec![vec![0, 1, 2], vec![2, 3], vec![3]]);
/// let cover = greedy_cover(&instance).unwrap();
/// assert_eq!(cover, vec![0, 1]);
/// ```
pub fn greedy_cover(instance: &Instance) -> Option<Vec<usize>> {
    let n = instance.num_elements();
    let mut covered = vec![false; n];
    let mut covered_count = 0;
    let mut cover = Vec::new();

    while covered_count < n {
        let mut best_set = None;
        let mut max_gain = 0;
        for i in 0..instance.num_sets() {
            let gain = instance.set(i).iter().filter(|&&e| !covered[e]).count();
            if gain > max_gain {
                max_gain = gain;
                best_set = Some(i);
            }
        }

        // No set covers anything new: the remaining elements are unreachable.
        let best = best_set?;

        cover.push(best);
        for &e in instance.set(best) {
            if !covered[e] {
                covered[e] = true;
                covered_count += 1;
            }
        }
    }

    Some(cover)
}
