//! Steady-state Genetic Algorithm for unicost minimum set cover.
//!
//! A population of bit-vector individuals (one bit per candidate set)
//! evolves one offspring per generation: two parents are drawn uniformly
//! at random, recombined with single-point crossover, perturbed by flipping
//! exactly one bit, and the offspring replaces the current worst member
//! only if its fitness is strictly better. Selection pressure lives
//! entirely in that replacement rule; parent selection is deliberately
//! uniform, not fitness-proportional.
//!
//! # Key Types
//!
//! - [`GaConfig`]: algorithm parameters (population size, generations, seed)
//! - [`Individual`]: chromosome plus cached fitness
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best individual found with run statistics
//!
//! # Fitness
//!
//! A full cover scores `covered − selected` (sparser covers win); a partial
//! cover scores the [`INFEASIBLE`] sentinel and loses every comparison.
//! Check feasibility through [`Individual::is_feasible`], not by comparing
//! raw scores.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Whitley (1989), "The GENITOR Algorithm and Selection Pressure"
//! - Beasley & Chu (1996), "A Genetic Algorithm for the Set Covering
//!   Problem"

mod config;
mod fitness;
mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use fitness::{evaluate, evaluate_population};
pub use operators::{flip_mutation, single_point_crossover};
pub use runner::{GaResult, GaRunner};
pub use selection::select_parent;
pub use types::{Individual, INFEASIBLE};
