//! Variant-specific trail policies.
//!
//! The three methods share construction, local search, and evaluation;
//! [`TrailModel`] carries the state that differs between them (trail
//! bounds and restart bookkeeping for the MMAS family, the elite
//! population for PACO) and applies the once-per-generation update.

use super::config::{AcoConfig, Deposit, Method};
use crate::pheromone::{deposit_credit, PheromoneMatrix, TrailBounds};
use crate::solution::Solution;

pub(crate) enum TrailModel {
    Mmas {
        tau: PheromoneMatrix,
        bounds: TrailBounds,
    },
    ModifiedMmas {
        tau: PheromoneMatrix,
        bounds: TrailBounds,
        /// Best solution since the last restart; its stagnation drives
        /// the restart trigger.
        restart_best: Solution,
        stagnation: usize,
        restarts: usize,
    },
    Paco {
        tau: PheromoneMatrix,
        /// Uniform base trail, also the per-member deposit.
        tau0: f64,
        population: Vec<Solution>,
        capacity: usize,
    },
}

impl TrailModel {
    /// Initializes the trail state from the seeding solution: the MMAS
    /// family starts every trail at τmax, PACO at the uniform constant
    /// `τ0 = 1 / f_seed`.
    pub fn new(config: &AcoConfig, n: usize, seed_solution: &Solution) -> Self {
        match config.method {
            Method::Mmas => {
                let bounds = TrailBounds::from_best(config.rho, seed_solution.tardiness);
                TrailModel::Mmas {
                    tau: PheromoneMatrix::new(n, bounds.max),
                    bounds,
                }
            }
            Method::ModifiedMmas => {
                let bounds = TrailBounds::from_best(config.rho, seed_solution.tardiness);
                TrailModel::ModifiedMmas {
                    tau: PheromoneMatrix::new(n, bounds.max),
                    bounds,
                    restart_best: seed_solution.clone(),
                    stagnation: 0,
                    restarts: 0,
                }
            }
            Method::Paco => {
                let tau0 = deposit_credit(seed_solution.tardiness);
                TrailModel::Paco {
                    tau: PheromoneMatrix::new(n, tau0),
                    tau0,
                    population: Vec::with_capacity(config.population_size),
                    capacity: config.population_size,
                }
            }
        }
    }

    /// The trail snapshot ants read during construction.
    pub fn matrix(&self) -> &PheromoneMatrix {
        match self {
            TrailModel::Mmas { tau, .. }
            | TrailModel::ModifiedMmas { tau, .. }
            | TrailModel::Paco { tau, .. } => tau,
        }
    }

    /// Trail restarts performed so far (M-MMAS only).
    pub fn restarts(&self) -> usize {
        match self {
            TrailModel::ModifiedMmas { restarts, .. } => *restarts,
            _ => 0,
        }
    }

    /// Applies the once-per-generation trail update.
    pub fn update(&mut self, config: &AcoConfig, iteration_best: &Solution, global_best: &Solution) {
        match self {
            TrailModel::Mmas { tau, bounds } => {
                tau.evaporate(config.rho);
                let source = match config.deposit {
                    Deposit::IterationBest => iteration_best,
                    Deposit::GlobalBest => global_best,
                };
                tau.deposit(&source.permutation, deposit_credit(source.tardiness));
                *bounds = TrailBounds::from_best(config.rho, global_best.tardiness);
                tau.clamp(*bounds);
            }
            TrailModel::ModifiedMmas {
                tau,
                bounds,
                restart_best,
                stagnation,
                restarts,
            } => {
                if iteration_best.tardiness < restart_best.tardiness {
                    *restart_best = iteration_best.clone();
                    *stagnation = 0;
                } else {
                    *stagnation += 1;
                }

                tau.evaporate(config.rho);
                tau.deposit(
                    &iteration_best.permutation,
                    deposit_credit(iteration_best.tardiness),
                );
                tau.deposit(
                    &restart_best.permutation,
                    deposit_credit(restart_best.tardiness),
                );
                *bounds = TrailBounds::from_best(config.rho, global_best.tardiness);
                tau.clamp(*bounds);

                if *stagnation >= config.restart_after {
                    tau.fill(bounds.max);
                    *restart_best = iteration_best.clone();
                    *stagnation = 0;
                    *restarts += 1;
                }
            }
            TrailModel::Paco {
                tau,
                tau0,
                population,
                capacity,
            } => {
                population.push(iteration_best.clone());
                if population.len() > *capacity {
                    let worst = worst_member(population);
                    population.remove(worst);
                }
                // rebuilt from membership, not decayed
                tau.fill(*tau0);
                for member in population.iter() {
                    tau.deposit(&member.permutation, *tau0);
                }
            }
        }
    }
}

/// Index of the highest-tardiness member; ties keep the oldest.
fn worst_member(population: &[Solution]) -> usize {
    let mut worst = 0;
    for (index, member) in population.iter().enumerate().skip(1) {
        if member.tardiness > population[worst].tardiness {
            worst = index;
        }
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_search::Neighborhood;

    fn solution(permutation: Vec<usize>, tardiness: f64) -> Solution {
        Solution {
            permutation,
            tardiness,
            makespan: 0,
        }
    }

    fn within_bounds(tau: &PheromoneMatrix, bounds: TrailBounds) -> bool {
        let n = tau.jobs();
        (0..n).all(|job| {
            (0..n).all(|position| {
                let trail = tau.get(job, position);
                trail >= bounds.min - 1e-12 && trail <= bounds.max + 1e-12
            })
        })
    }

    fn mmas_config() -> AcoConfig {
        AcoConfig::default()
            .with_method(Method::Mmas)
            .with_rho(0.3)
            .with_local_search(Neighborhood::Swap)
    }

    #[test]
    fn test_mmas_stays_within_bounds_over_many_updates() {
        let config = mmas_config();
        let seed = solution(vec![0, 1, 2, 3], 40.0);
        let mut trail = TrailModel::new(&config, 4, &seed);

        let mut global_best = seed.clone();
        for generation in 0..200 {
            // improving and non-improving generations alternate
            let tardiness = if generation % 3 == 0 {
                (global_best.tardiness - 1.0).max(5.0)
            } else {
                global_best.tardiness + 10.0
            };
            let iteration_best = solution(vec![3, 2, 1, 0], tardiness);
            if iteration_best.tardiness < global_best.tardiness {
                global_best = iteration_best.clone();
            }
            trail.update(&config, &iteration_best, &global_best);

            if let TrailModel::Mmas { tau, bounds } = &trail {
                assert!(within_bounds(tau, *bounds), "generation {generation}");
            } else {
                unreachable!();
            }
        }
    }

    #[test]
    fn test_mmas_deposit_reinforces_chosen_source() {
        let mut config = mmas_config().with_rho(0.1);
        config.deposit = Deposit::IterationBest;
        let seed = solution(vec![0, 1, 2], 30.0);
        let mut trail = TrailModel::new(&config, 3, &seed);

        let iteration_best = solution(vec![2, 0, 1], 20.0);
        trail.update(&config, &iteration_best, &seed);

        let tau = trail.matrix();
        // the deposited assignment (2 at 0) must now lead its column
        assert!(tau.get(2, 0) > tau.get(0, 0));
        assert!(tau.get(2, 0) > tau.get(1, 0));
    }

    #[test]
    fn test_modified_mmas_restarts_after_stagnation() {
        let config = AcoConfig::default()
            .with_method(Method::ModifiedMmas)
            .with_rho(0.3)
            .with_restart_after(5);
        let seed = solution(vec![0, 1, 2], 10.0);
        let mut trail = TrailModel::new(&config, 3, &seed);

        // never improves on the seed: stagnation accumulates
        let stuck = solution(vec![1, 0, 2], 15.0);
        for _ in 0..5 {
            trail.update(&config, &stuck, &seed);
        }
        assert_eq!(trail.restarts(), 1);

        // the restart reinitializes every trail to τmax
        if let TrailModel::ModifiedMmas { tau, bounds, stagnation, .. } = &trail {
            assert_eq!(*stagnation, 0);
            for job in 0..3 {
                for position in 0..3 {
                    assert!((tau.get(job, position) - bounds.max).abs() < 1e-12);
                }
            }
        } else {
            unreachable!();
        }
    }

    #[test]
    fn test_modified_mmas_improvement_resets_stagnation() {
        let config = AcoConfig::default()
            .with_method(Method::ModifiedMmas)
            .with_restart_after(3);
        let seed = solution(vec![0, 1], 10.0);
        let mut trail = TrailModel::new(&config, 2, &seed);

        let stuck = solution(vec![1, 0], 12.0);
        trail.update(&config, &stuck, &seed);
        trail.update(&config, &stuck, &seed);
        // an improvement arrives before the third stagnating generation
        let better = solution(vec![1, 0], 8.0);
        trail.update(&config, &better, &better);
        trail.update(&config, &stuck, &better);
        assert_eq!(trail.restarts(), 0);
    }

    #[test]
    fn test_paco_population_capacity_and_rebuild() {
        let config = AcoConfig::default()
            .with_method(Method::Paco)
            .with_population_size(2);
        let seed = solution(vec![0, 1, 2], 10.0);
        let mut trail = TrailModel::new(&config, 3, &seed);
        let tau0 = deposit_credit(seed.tardiness);

        trail.update(&config, &solution(vec![0, 1, 2], 30.0), &seed);
        trail.update(&config, &solution(vec![1, 2, 0], 20.0), &seed);
        // third insert evicts the 30.0 member
        trail.update(&config, &solution(vec![2, 0, 1], 25.0), &seed);

        if let TrailModel::Paco { tau, population, .. } = &trail {
            assert_eq!(population.len(), 2);
            assert!(population.iter().all(|member| member.tardiness < 30.0));

            // matrix is τ0 plus one deposit per covering member
            assert!((tau.get(1, 0) - 2.0 * tau0).abs() < 1e-12); // [1, 2, 0]
            assert!((tau.get(2, 0) - 2.0 * tau0).abs() < 1e-12); // [2, 0, 1]
            assert!((tau.get(0, 0) - tau0).abs() < 1e-12); // covered by no member
        } else {
            unreachable!();
        }
    }

    #[test]
    fn test_paco_trail_never_decays_below_base() {
        let config = AcoConfig::default()
            .with_method(Method::Paco)
            .with_population_size(3);
        let seed = solution(vec![0, 1], 5.0);
        let mut trail = TrailModel::new(&config, 2, &seed);
        let tau0 = deposit_credit(seed.tardiness);

        for _ in 0..10 {
            trail.update(&config, &solution(vec![1, 0], 7.0), &seed);
        }
        let tau = trail.matrix();
        for job in 0..2 {
            for position in 0..2 {
                assert!(tau.get(job, position) >= tau0 - 1e-12);
            }
        }
    }
}
