//! Synthetic set-cover instance generators.
//!
//! Three topologies with very different covering structure:
//!
//! - [`random_instance`]: sets of uniform random size over the whole
//!   ground set; dense overlap, easy for greedy.
//! - [`grid_instance`]: sets are adjacent cell pairs of a √n × √n grid;
//!   sparse, deterministic, many sets needed.
//! - [`cluster_instance`]: the ground set splits into clusters and most
//!   sets stay inside one cluster, giving block-diagonal structure.
//!
//! Generators take the RNG as `&mut R`, like the algorithm operators, so a
//! bench or test can drive everything from one seeded stream.

use super::Instance;
use rand::Rng;
use std::collections::BTreeSet;

/// Generates `m` sets, each with a uniform random size in `1..=n` and that
/// many distinct uniform elements.
///
/// # Panics
/// Panics if `n == 0`.
pub fn random_instance<R: Rng>(n: usize, m: usize, rng: &mut R) -> Instance {
    assert!(n > 0, "ground set must be non-empty");

    let mut sets = Vec::with_capacity(m);
    for _ in 0..m {
        let size = rng.random_range(1..=n);
        let mut set = BTreeSet::new();
        while set.len() < size {
            set.insert(rng.random_range(0..n));
        }
        sets.push(set.into_iter().collect());
    }
    Instance::new(n, sets)
}

/// Generates a deterministic grid instance.
///
/// Elements form a `side × side` grid with `side = ⌊√n⌋`. Set `i` belongs
/// to cell `(i / side, i % side)` and covers that cell together with the
/// cell below and the cell to the right, when those exist; cells on the far
/// border (or beyond the grid, when `m > side²`) yield empty sets.
pub fn grid_instance(n: usize, m: usize) -> Instance {
    let side = (n as f64).sqrt() as usize;

    let mut sets = Vec::with_capacity(m);
    for i in 0..m {
        let row = i / side.max(1);
        let col = i % side.max(1);
        let mut set = Vec::new();
        if row + 1 < side {
            set.push(row * side + col);
            set.push((row + 1) * side + col);
        }
        if col + 1 < side && row < side {
            set.push(row * side + col);
            set.push(row * side + col + 1);
        }
        sets.push(set);
    }
    Instance::new(n, sets)
}

/// Generates a clustered instance.
///
/// The ground set splits into `n / cluster_size` clusters. Each cluster
/// gets `m / clusters` sets drawn entirely from its own element range with
/// a uniform size in `1..=cluster_size`; the leftover `m mod clusters` sets
/// draw from the whole ground set.
///
/// # Panics
/// Panics if `cluster_size == 0` or `cluster_size > n`.
pub fn cluster_instance<R: Rng>(
    n: usize,
    m: usize,
    cluster_size: usize,
    rng: &mut R,
) -> Instance {
    assert!(
        cluster_size > 0 && cluster_size <= n,
        "cluster_size must be in 1..={n}"
    );

    let clusters = n / cluster_size;
    let per_cluster = m / clusters;

    let mut sets = Vec::with_capacity(m);
    for c in 0..clusters {
        let base = c * cluster_size;
        for _ in 0..per_cluster {
            let size = rng.random_range(1..=cluster_size);
            let mut set = BTreeSet::new();
            while set.len() < size {
                set.insert(base + rng.random_range(0..cluster_size));
            }
            sets.push(set.into_iter().collect());
        }
    }

    for _ in sets.len()..m {
        let size = rng.random_range(1..=cluster_size);
        let mut set = BTreeSet::new();
        while set.len() < size {
            set.insert(rng.random_range(0..n));
        }
        sets.push(set.into_iter().collect());
    }

    Instance::new(n, sets)
}
