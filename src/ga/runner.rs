//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete run: initialize → evaluate →
//! `generations` × (select two parents, crossover, mutate, evaluate,
//! replace worst if strictly better) → extract the best member.

use super::config::GaConfig;
use super::fitness::{evaluate, evaluate_population};
use super::operators::{flip_mutation, single_point_crossover};
use super::selection::select_parent;
use super::types::Individual;
use crate::set_cover::Instance;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best individual in the final population.
    pub best: Individual,

    /// Fitness of the best individual (same as `best.fitness()`).
    ///
    /// Carries [`super::INFEASIBLE`] when even the best member never
    /// reached full coverage. That is only possible when the instance
    /// itself is not coverable, since the all-selected chromosome is
    /// feasible on any coverable instance.
    pub best_fitness: i64,

    /// Number of generations (replacement attempts) executed.
    pub generations: usize,

    /// Best population fitness after initialization and after each
    /// generation; `generations + 1` entries, non-decreasing.
    pub fitness_history: Vec<i64>,
}

/// Executes the steady-state evolutionary loop.
///
/// # Usage
///
/// ```
/// use cover_heur::ga::{GaConfig, GaRunner};
/// use cover_heur::set_cover::Instance;
///
/// let instance = Instance::new(4, vec![vec![0, 1], vec![2, 3], vec![0, 2], vec![1, 3]]);
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&instance, &config);
/// assert!(result.best.is_feasible());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA against an instance.
    ///
    /// The population lives for exactly this call; only the returned best
    /// individual survives it. One `StdRng` is seeded once per run and
    /// threaded through every operator.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error) or if the instance has no
    /// candidate sets.
    pub fn run(instance: &Instance, config: &GaConfig) -> GaResult {
        config.validate().expect("invalid GaConfig");

        let m = instance.num_sets();
        assert!(m > 0, "instance must have at least one candidate set");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // 1. Initialize and evaluate the population.
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::random(m, &mut rng))
            .collect();
        evaluate_population(instance, &mut population);

        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(population[best_index(&population)].fitness());

        // 2. Steady-state loop: one offspring, one replacement attempt per
        //    generation. Population size is invariant.
        for _ in 0..config.generations {
            let mut offspring = {
                let parent1 = select_parent(&population, &mut rng);
                let parent2 = select_parent(&population, &mut rng);
                single_point_crossover(parent1, parent2, &mut rng)
            };
            flip_mutation(&mut offspring, &mut rng);
            offspring.fitness = evaluate(instance, &offspring);

            let worst = worst_index(&population);
            if offspring.fitness() > population[worst].fitness() {
                population[worst] = offspring;
            }

            fitness_history.push(population[best_index(&population)].fitness());
        }

        // 3. Extract the best member.
        let best = population[best_index(&population)].clone();
        GaResult {
            best_fitness: best.fitness(),
            best,
            generations: config.generations,
            fitness_history,
        }
    }
}

/// Index of the minimum-fitness member, first occurrence on ties.
fn worst_index(population: &[Individual]) -> usize {
    let mut worst = 0;
    for (i, individual) in population.iter().enumerate().skip(1) {
        if individual.fitness() < population[worst].fitness() {
            worst = i;
        }
    }
    worst
}

/// Index of the maximum-fitness member, first occurrence on ties.
fn best_index(population: &[Individual]) -> usize {
    let mut best = 0;
    for (i, individual) in population.iter().enumerate().skip(1) {
        if individual.fitness() > population[best].fitness() {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::INFEASIBLE;

    fn diamond_instance() -> Instance {
        Instance::new(4, vec![vec![0, 1], vec![2, 3], vec![0, 2], vec![1, 3]])
    }

    #[test]
    fn test_scenario_finds_feasible_cover() {
        let instance = diamond_instance();
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(50)
            .with_seed(42);

        let result = GaRunner::run(&instance, &config);

        assert!(result.best.is_feasible(), "expected a feasible cover");
        // Best achievable fitness on this instance is 4 − 2 = 2; the
        // trivial all-selected cover scores 0.
        assert!(
            (0..=2).contains(&result.best_fitness),
            "fitness {} outside [0, 2]",
            result.best_fitness
        );

        let mut covered = vec![false; 4];
        for i in result.best.selected() {
            for &e in instance.set(i) {
                covered[e] = true;
            }
        }
        assert!(covered.iter().all(|&c| c));
    }

    #[test]
    fn test_scenario_discovers_optimum_across_seeds() {
        // The size-2 cover {{0,1},{2,3}} (or {{0,2},{1,3}}) has fitness 2;
        // the search should reach it at least occasionally across runs.
        let instance = diamond_instance();
        let hits = (0..20)
            .filter(|&seed| {
                let config = GaConfig::default()
                    .with_population_size(20)
                    .with_generations(50)
                    .with_seed(seed);
                GaRunner::run(&instance, &config).best_fitness == 2
            })
            .count();
        assert!(hits > 0, "no seed out of 20 reached the optimal fitness 2");
    }

    #[test]
    fn test_degenerate_single_individual_zero_generations() {
        let instance = diamond_instance();
        let config = GaConfig::default()
            .with_population_size(1)
            .with_generations(0)
            .with_seed(42);

        let result = GaRunner::run(&instance, &config);

        // Result is the single randomly initialized individual, evaluated
        // exactly once.
        assert_eq!(result.generations, 0);
        assert_eq!(result.fitness_history.len(), 1);
        assert_eq!(result.best_fitness, result.best.fitness());
        assert_eq!(result.best_fitness, evaluate(&instance, &result.best));
    }

    #[test]
    fn test_history_is_monotonic() {
        let instance = diamond_instance();
        let config = GaConfig::default()
            .with_population_size(10)
            .with_generations(200)
            .with_seed(7);

        let result = GaRunner::run(&instance, &config);

        assert_eq!(result.fitness_history.len(), 201);
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best fitness regressed: {} -> {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_population_minimum_never_decreases() {
        // Replace-worst-if-strictly-better implies the population minimum
        // is non-decreasing. Track it through a manual loop mirroring the
        // runner's policy.
        let instance = diamond_instance();
        let config = GaConfig::default()
            .with_population_size(8)
            .with_generations(100)
            .with_seed(3);

        // Indirect check via the runner: rerun with increasing generation
        // budgets; a longer run can never end with a worse best.
        let short = GaRunner::run(&instance, &config.clone().with_generations(10));
        let long = GaRunner::run(&instance, &config);
        assert!(long.best_fitness >= short.best_fitness);
    }

    #[test]
    fn test_uncoverable_instance_returns_sentinel() {
        // Element 2 appears in no set: every chromosome is infeasible.
        let instance = Instance::new(3, vec![vec![0], vec![1], vec![0, 1]]);
        let config = GaConfig::default()
            .with_population_size(10)
            .with_generations(50)
            .with_seed(42);

        let result = GaRunner::run(&instance, &config);

        assert_eq!(result.best_fitness, INFEASIBLE);
        assert!(!result.best.is_feasible());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let instance = diamond_instance();
        let config = GaConfig::default().with_seed(99);

        let a = GaRunner::run(&instance, &config);
        let b = GaRunner::run(&instance, &config);

        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_fitness_never_exceeds_instance_optimum() {
        // Optimal cover size on the diamond instance is 2, so fitness is
        // bounded by 4 − 2 = 2 whatever the seed.
        let instance = diamond_instance();
        for seed in 0..10 {
            let config = GaConfig::default().with_seed(seed);
            let result = GaRunner::run(&instance, &config);
            assert!(result.best_fitness <= 2);
        }
    }

    #[test]
    fn test_worst_and_best_index_tie_break() {
        let mut population: Vec<Individual> = [2, 5, 2, 5]
            .iter()
            .map(|&f| {
                let mut ind = Individual::from_chromosome(vec![false]);
                ind.fitness = f;
                ind
            })
            .collect();
        assert_eq!(worst_index(&population), 0);
        assert_eq!(best_index(&population), 1);

        population.reverse();
        assert_eq!(worst_index(&population), 1);
        assert_eq!(best_index(&population), 0);
    }

    #[test]
    #[should_panic(expected = "invalid GaConfig")]
    fn test_invalid_config_panics() {
        let instance = diamond_instance();
        let config = GaConfig::default().with_population_size(0);
        GaRunner::run(&instance, &config);
    }
}
