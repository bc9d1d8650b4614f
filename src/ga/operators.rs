//! Crossover and mutation operators.
//!
//! Both operators are stateless apart from the RNG threaded through them
//! as `&mut R`; the runner owns one seeded stream for the whole run.

use super::types::Individual;
use rand::Rng;

/// Single-point crossover.
///
/// Picks one cut point uniformly from `[0, m)` and concatenates parent1's
/// bits before the cut with parent2's bits from the cut on. The offspring
/// chromosome length is always exactly `m`; its fitness is left unset for
/// the evaluator.
///
/// A cut at 0 clones parent2's chromosome.
///
/// # Panics
/// Panics if the parents have different chromosome lengths or are empty.
pub fn single_point_crossover<R: Rng>(
    parent1: &Individual,
    parent2: &Individual,
    rng: &mut R,
) -> Individual {
    let m = parent1.chromosome().len();
    assert_eq!(
        m,
        parent2.chromosome().len(),
        "parents must have equal chromosome length"
    );
    assert!(m > 0, "parents must not be empty");

    let cut = rng.random_range(0..m);
    let mut chromosome = Vec::with_capacity(m);
    chromosome.extend_from_slice(&parent1.chromosome()[..cut]);
    chromosome.extend_from_slice(&parent2.chromosome()[cut..]);
    Individual::from_chromosome(chromosome)
}

/// Flips exactly one chromosome bit, chosen uniformly.
///
/// There is no mutation-rate gate: mutation always fires once per
/// offspring, so exactly one bit differs from the pre-mutation chromosome.
///
/// # Panics
/// Panics if the chromosome is empty.
pub fn flip_mutation<R: Rng>(individual: &mut Individual, rng: &mut R) {
    let m = individual.chromosome.len();
    assert!(m > 0, "cannot mutate an empty chromosome");

    let idx = rng.random_range(0..m);
    individual.chromosome[idx] = !individual.chromosome[idx];
}
