//! Approximation and metaheuristic algorithms for covering problems.
//!
//! Provides implementations of classical covering heuristics:
//!
//! - **Steady-state Genetic Algorithm (GA)**: population-based search for
//!   unicost minimum set cover with uniform parent selection, single-point
//!   crossover, single-bit mutation, and replace-worst-if-better.
//! - **Greedy set cover**: the classical greedy that repeatedly takes the
//!   set covering the most still-uncovered elements.
//! - **Greedy vertex cover**: max-degree heuristic on undirected graphs.
//! - **Pricing method**: primal-dual vertex cover on vertex-weighted graphs
//!   using per-vertex prices and a tightness fixed point.
//!
//! # Architecture
//!
//! Each algorithm lives in its own module and operates on a plain problem
//! description: [`set_cover::Instance`] for the set-cover algorithms,
//! [`vertex_cover::Graph`] for the vertex-cover algorithms. The GA follows
//! a config / types / runner split: [`ga::GaConfig`] holds the parameters,
//! [`ga::GaRunner`] executes the evolutionary loop, and [`ga::GaResult`]
//! carries the best individual found plus run statistics.
//!
//! Synthetic instance generators ([`set_cover::generate`]) back the
//! criterion benches and the heavier tests; none of the algorithms depend
//! on them.
//!
//! None of the algorithms guarantee optimality or an approximation ratio;
//! the GA in particular is a best-effort local search bounded by a fixed
//! generation budget.

pub mod ga;
pub mod set_cover;
pub mod vertex_cover;
