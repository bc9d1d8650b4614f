//! Parent selection.
//!
//! Selection here is uniform by index, with replacement: the same
//! individual may serve as both parents of one offspring. All selection
//! pressure comes from the replace-worst-if-better policy in the runner;
//! switching to a fitness-weighted scheme would change the search
//! dynamics.

use super::types::Individual;
use rand::Rng;

/// Picks one parent uniformly at random.
///
/// # Panics
/// Panics if `population` is empty.
pub fn select_parent<'a, R: Rng>(population: &'a [Individual], rng: &mut R) -> &'a Individual {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    &population[rng.random_range(0..population.len())]
}
