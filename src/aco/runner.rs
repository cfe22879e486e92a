//! Colony driver: repeated construction, refinement, and trail updates
//! under a wall-clock budget.
//!
//! One run moves through three phases: initialization (seed the global
//! best from NEH, set up the variant trail state), iteration (construct
//! `n_ants` schedules against a fixed trail snapshot, refine and
//! evaluate them, fold them into the bests and the archive, then apply
//! the variant trail update once), and termination (return the best
//! solution, or the Pareto front in bi-objective mode).
//!
//! The wall clock is checked only at generation boundaries, so a started
//! generation always completes. The driver never fails for lack of time:
//! even an immediately exhausted budget returns the refined seeding
//! solution.

use super::config::AcoConfig;
use super::variants::TrailModel;
use crate::archive::ParetoArchive;
use crate::construction::construct;
use crate::heuristics::{edd_desirability, neh};
use crate::instance::Instance;
use crate::local_search::descend;
use crate::random::create_rng;
use crate::solution::Solution;
use rand::Rng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a colony run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Best solution found (by weighted tardiness).
    pub best: Solution,

    /// Generations completed.
    pub generations: usize,

    /// Trail restarts performed (M-MMAS only).
    pub restarts: usize,

    /// Whether the run stopped early on the stagnation limit.
    pub stagnated: bool,

    /// Best weighted tardiness after initialization and after each
    /// generation. Non-increasing.
    pub tardiness_history: Vec<f64>,

    /// Pareto front over (weighted tardiness, makespan); empty unless
    /// the run was bi-objective.
    pub pareto: Vec<Solution>,
}

/// Executes the configured ACO variant on an instance.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony until the wall-clock budget (or an opt-in
    /// generation/stagnation cap) is reached.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call
    /// [`AcoConfig::validate`] first to get a descriptive error).
    pub fn run(instance: &Instance, config: &AcoConfig) -> AcoResult {
        config.validate().expect("invalid AcoConfig");

        let n = instance.n();
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // Seed the colony from NEH, refined once by the configured
        // local search.
        let mut seed_sequence = neh(instance);
        if let Some(neighborhood) = config.local_search {
            descend(instance, &mut seed_sequence, neighborhood, config.ls_passes);
        }
        let mut best = Solution::evaluate(instance, seed_sequence);

        let mut archive = ParetoArchive::new();
        if config.bi_objective {
            archive.try_admit(best.clone());
        }
        let mut history = vec![best.tardiness];

        if n == 1 {
            // a single job has exactly one schedule
            return AcoResult {
                best,
                generations: 0,
                restarts: 0,
                stagnated: false,
                tardiness_history: history,
                pareto: archive.into_members(),
            };
        }

        let desirability = edd_desirability(instance);
        let mut trail = TrailModel::new(config, n, &best);

        let started = Instant::now();
        let budget = Duration::from_millis(config.time_limit_ms);
        let mut generations = 0usize;
        let mut stagnation = 0usize;
        let mut stagnated = false;

        while started.elapsed() < budget {
            if config.max_generations > 0 && generations >= config.max_generations {
                break;
            }

            let ants = build_generation(instance, config, &desirability, &trail, &mut rng);

            // Fold ants into the bests and the archive in ant-index
            // order, keeping runs reproducible under parallelism.
            let mut iteration_best = 0;
            for (index, ant) in ants.iter().enumerate() {
                if ant.tardiness < ants[iteration_best].tardiness {
                    iteration_best = index;
                }
                if config.bi_objective {
                    archive.try_admit(ant.clone());
                }
            }
            let iteration_best = &ants[iteration_best];

            if iteration_best.tardiness < best.tardiness {
                best = iteration_best.clone();
                stagnation = 0;
            } else {
                stagnation += 1;
            }

            trail.update(config, iteration_best, &best);
            generations += 1;
            history.push(best.tardiness);

            if config.stagnation_limit > 0 && stagnation >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        AcoResult {
            best,
            generations,
            restarts: trail.restarts(),
            stagnated,
            tardiness_history: history,
            pareto: archive.into_members(),
        }
    }
}

/// Constructs, refines, and evaluates one generation of ants.
///
/// Every ant draws from its own RNG stream seeded from the master RNG,
/// so the parallel and sequential paths produce identical solutions.
fn build_generation<R: Rng>(
    instance: &Instance,
    config: &AcoConfig,
    desirability: &[f64],
    trail: &TrailModel,
    rng: &mut R,
) -> Vec<Solution> {
    let seeds: Vec<u64> = (0..config.n_ants).map(|_| rng.random()).collect();

    let build = |&seed: &u64| -> Solution {
        let mut ant_rng = create_rng(seed);
        let mut sequence = construct(
            trail.matrix(),
            desirability,
            config.alpha,
            config.beta,
            config.q0,
            &mut ant_rng,
        );
        if let Some(neighborhood) = config.local_search {
            descend(instance, &mut sequence, neighborhood, config.ls_passes);
        }
        Solution::evaluate(instance, sequence)
    };

    if config.parallel {
        seeds.par_iter().map(build).collect()
    } else {
        seeds.iter().map(build).collect()
    }
}
