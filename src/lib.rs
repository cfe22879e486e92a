//! Ant colony optimization for the permutation flow-shop scheduling
//! problem with weighted tardiness (PFSP-WT).
//!
//! Given jobs with per-machine processing times, due dates, and
//! tardiness weights, the solver searches for one job permutation,
//! applied identically on every machine, minimizing total weighted
//! tardiness, optionally tracking a Pareto front over
//! (weighted tardiness, makespan).
//!
//! # Components
//!
//! - [`instance`]: immutable problem data and `O(n·m)` objective
//!   evaluation.
//! - [`heuristics`]: NEH seeding and the earliest-due-date desirability
//!   used during construction.
//! - [`construction`]: probabilistic schedule construction from
//!   pheromone trails.
//! - [`local_search`]: best-improvement descent over swap, interchange,
//!   and insertion neighborhoods.
//! - [`pheromone`]: the (job, position) trail matrix and MMAS trail
//!   bounds.
//! - [`archive`]: the Pareto archive used in bi-objective mode.
//! - [`aco`]: the colony drivers (MMAS, M-MMAS, PACO) tying the above
//!   together under a wall-clock budget.
//!
//! # Example
//!
//! ```
//! use u_flowshop::aco::{AcoConfig, AcoRunner, Method};
//! use u_flowshop::instance::{Instance, Job};
//! use u_flowshop::local_search::Neighborhood;
//!
//! let instance = Instance::new(vec![
//!     Job::new(vec![4, 2], 7, 1.0),
//!     Job::new(vec![1, 5], 6, 2.0),
//!     Job::new(vec![3, 3], 5, 1.5),
//! ]);
//!
//! let config = AcoConfig::recommended(Method::Mmas)
//!     .with_local_search(Neighborhood::Insertion)
//!     .with_time_limit_ms(200)
//!     .with_seed(42);
//!
//! let result = AcoRunner::run(&instance, &config);
//! assert_eq!(result.best.permutation.len(), 3);
//! ```

pub mod aco;
pub mod archive;
pub mod construction;
pub mod heuristics;
pub mod instance;
pub mod local_search;
pub mod pheromone;
pub mod random;
pub mod solution;
