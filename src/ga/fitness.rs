//! Fitness evaluation.

use super::types::{Individual, INFEASIBLE};
use crate::set_cover::Instance;

/// Computes the fitness of an individual against an instance.
///
/// Takes the union of all sets whose chromosome bit is set. A full cover
/// scores `|union| − selected`, rewarding sparser covers among complete
/// ones; anything short of full coverage scores [`INFEASIBLE`].
///
/// Pure: the individual's cache is not touched; the caller stores the
/// score (see [`evaluate_population`]).
///
/// # Examples
///
/// ```
/// use cover_heur::ga::{evaluate, Individual, INFEASIBLE};
/// use cover_heur::set_cover::Instance;
///
/// let instance = Instance::new(4, vec![vec![0, 1], vec![2, 3], vec![0, 2]]);
///
/// let full = Individual::from_chromosome(vec![true, true, false]);
/// assert_eq!(evaluate(&instance, &full), 4 - 2);
///
/// let partial = Individual::from_chromosome(vec![true, false, false]);
/// assert_eq!(evaluate(&instance, &partial), INFEASIBLE);
/// ```
pub fn evaluate(instance: &Instance, individual: &Individual) -> i64 {
    let n = instance.num_elements();
    let mut covered = vec![false; n];
    let mut covered_count = 0usize;

    for (i, &bit) in individual.chromosome().iter().enumerate() {
        if bit {
            for &e in instance.set(i) {
                if !covered[e] {
                    covered[e] = true;
                    covered_count += 1;
                }
            }
        }
    }

    if covered_count == n {
        covered_count as i64 - individual.num_selected() as i64
    } else {
        INFEASIBLE
    }
}

/// Evaluates every individual and stores the score in its fitness cache.
pub fn evaluate_population(instance: &Instance, population: &mut [Individual]) {
    for individual in population.iter_mut() {
        individual.fitness = evaluate(instance, individual);
    }
}
