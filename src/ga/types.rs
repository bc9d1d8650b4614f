//! Individual representation.

use rand::Rng;

/// Fitness sentinel for individuals whose selected sets do not cover the
/// whole ground set.
///
/// A full cover scores `n − selected ≥ n − m`, so on pathological
/// instances with `m > n` a feasible score can reach the sentinel value.
/// Callers should test feasibility through [`Individual::is_feasible`]
/// rather than comparing raw scores against this constant.
pub const INFEASIBLE: i64 = -1;

/// One candidate solution: a fixed-length bit-vector selecting candidate
/// sets, plus a cached fitness score.
///
/// All individuals in a run share the chromosome length `m` (the number of
/// candidate sets of the instance). The fitness cache starts at 0 and is
/// overwritten by the evaluator before it is ever compared.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    pub(crate) chromosome: Vec<bool>,
    pub(crate) fitness: i64,
}

impl Individual {
    /// Creates an individual with each chromosome bit drawn independently
    /// and uniformly from `{false, true}`.
    pub fn random<R: Rng>(m: usize, rng: &mut R) -> Self {
        Self {
            chromosome: (0..m).map(|_| rng.random_bool(0.5)).collect(),
            fitness: 0,
        }
    }

    /// Creates an individual from an explicit chromosome, fitness unset.
    pub fn from_chromosome(chromosome: Vec<bool>) -> Self {
        Self {
            chromosome,
            fitness: 0,
        }
    }

    /// The selection bit-vector, one bit per candidate set.
    pub fn chromosome(&self) -> &[bool] {
        &self.chromosome
    }

    /// The cached fitness score.
    ///
    /// `covered − selected` for a full cover, [`INFEASIBLE`] otherwise.
    pub fn fitness(&self) -> i64 {
        self.fitness
    }

    /// Indices of the selected candidate sets, ascending.
    ///
    /// ```
    /// use cover_heur::ga::Individual;
    ///
    /// let ind = Individual::from_chromosome(vec![true, false, true]);
    /// assert_eq!(ind.selected(), vec![0, 2]);
    /// ```
    pub fn selected(&self) -> Vec<usize> {
        self.chromosome
            .iter()
            .enumerate()
            .filter_map(|(i, &bit)| bit.then_some(i))
            .collect()
    }

    /// Number of selected candidate sets.
    pub fn num_selected(&self) -> usize {
        self.chromosome.iter().filter(|&&bit| bit).count()
    }

    /// Whether the cached fitness denotes a full cover.
    ///
    /// Derived from the [`INFEASIBLE`] sentinel, so it shares the sentinel's
    /// collision caveat on instances where a full cover can need `n + 1`
    /// sets.
    pub fn is_feasible(&self) -> bool {
        self.fitness != INFEASIBLE
    }
}
