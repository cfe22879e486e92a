//! Colony configuration.
//!
//! [`AcoConfig`] holds every parameter of the colony driver. Builders
//! cover the common adjustments; [`AcoConfig::validate`] reports invalid
//! parameter combinations before a run starts.

use crate::local_search::Neighborhood;

/// ACO variant run by the colony driver.
///
/// All variants share construction, local search, and evaluation; they
/// differ only in how the trail matrix is updated between generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Max-Min Ant System: evaporation + single-solution deposit, trails
    /// clamped into dynamic `[τmin, τmax]` bounds.
    ///
    /// Reference: Stützle & Hoos (2000), "MAX-MIN Ant System".
    Mmas,

    /// MMAS with an additional restart-best deposit and a deterministic
    /// trail restart after a configured stagnation span.
    ModifiedMmas,

    /// Population-based ACO: the trail matrix is recomputed each
    /// generation from a bounded elite population, with no trail bounds.
    ///
    /// Reference: Guntsch & Middendorf (2002), "A Population Based
    /// Approach for ACO".
    Paco,
}

impl Default for Method {
    fn default() -> Self {
        Method::ModifiedMmas
    }
}

/// Which solution deposits trail credit under [`Method::Mmas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Deposit {
    /// The best solution of the current generation.
    IterationBest,
    /// The best solution found so far in the run.
    GlobalBest,
}

impl Default for Deposit {
    fn default() -> Self {
        Deposit::IterationBest
    }
}

/// Configuration for the colony driver.
///
/// # Examples
///
/// ```
/// use u_flowshop::aco::{AcoConfig, Method};
/// use u_flowshop::local_search::Neighborhood;
///
/// let config = AcoConfig::recommended(Method::Mmas)
///     .with_local_search(Neighborhood::Insertion)
///     .with_time_limit_ms(5_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// ACO variant.
    pub method: Method,

    /// Ants constructed per generation. Must be at least 1.
    pub n_ants: usize,

    /// Trail evaporation rate in (0, 1): each generation keeps a
    /// `1 − ρ` fraction of every trail before depositing.
    pub rho: f64,

    /// Exponent on the trail factor of the construction rule.
    pub alpha: f64,

    /// Exponent on the desirability factor of the construction rule.
    pub beta: f64,

    /// Probability of a greedy (arg-max) pick at each construction step;
    /// otherwise the job is drawn by roulette wheel. In `[0, 1]`.
    pub q0: f64,

    /// Deposit source for [`Method::Mmas`]. [`Method::ModifiedMmas`]
    /// always deposits from both the iteration-best and restart-best.
    pub deposit: Deposit,

    /// Local-search neighborhood applied to every constructed ant, or
    /// `None` to skip refinement.
    pub local_search: Option<Neighborhood>,

    /// Best-improvement passes per refinement; `0` descends to a local
    /// optimum.
    pub ls_passes: usize,

    /// Elite population capacity for [`Method::Paco`].
    pub population_size: usize,

    /// Generations without restart-best improvement before
    /// [`Method::ModifiedMmas`] reinitializes the trail matrix.
    pub restart_after: usize,

    /// Maintain a Pareto archive over (weighted tardiness, makespan)
    /// instead of single-best tracking only.
    pub bi_objective: bool,

    /// Wall-clock budget in milliseconds, checked at the start of each
    /// generation so generations complete atomically. Must be positive;
    /// a budget too small for even one generation still yields the
    /// refined seeding solution.
    pub time_limit_ms: u64,

    /// Hard generation cap; `0` (the default) leaves the wall clock as
    /// the only always-active terminator. Used for reproducible
    /// fixed-length runs.
    pub max_generations: usize,

    /// Consecutive generations without global-best improvement before
    /// stopping early; `0` disables.
    pub stagnation_limit: usize,

    /// Construct and refine the ants of one generation in parallel.
    /// Results are identical to the sequential order because every ant
    /// draws from its own pre-seeded RNG stream.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            method: Method::default(),
            n_ants: 40,
            rho: 0.25,
            alpha: 1.0,
            beta: 2.0,
            q0: 0.9,
            deposit: Deposit::default(),
            local_search: None,
            ls_passes: 3,
            population_size: 5,
            restart_after: 30,
            bi_objective: false,
            time_limit_ms: 30_000,
            max_generations: 0,
            stagnation_limit: 0,
            parallel: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Tuned preset for a method: colony size and evaporation rate from
    /// benchmark calibration.
    ///
    /// - MMAS: 22 ants, ρ = 0.77
    /// - M-MMAS: 34 ants, ρ = 0.70
    /// - PACO: 50 ants, ρ = 0.60
    pub fn recommended(method: Method) -> Self {
        let (n_ants, rho) = match method {
            Method::Mmas => (22, 0.77),
            Method::ModifiedMmas => (34, 0.70),
            Method::Paco => (50, 0.60),
        };
        Self {
            method,
            n_ants,
            rho,
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_n_ants(mut self, n: usize) -> Self {
        self.n_ants = n;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_q0(mut self, q0: f64) -> Self {
        self.q0 = q0;
        self
    }

    pub fn with_deposit(mut self, deposit: Deposit) -> Self {
        self.deposit = deposit;
        self
    }

    pub fn with_local_search(mut self, neighborhood: Neighborhood) -> Self {
        self.local_search = Some(neighborhood);
        self
    }

    pub fn without_local_search(mut self) -> Self {
        self.local_search = None;
        self
    }

    pub fn with_ls_passes(mut self, passes: usize) -> Self {
        self.ls_passes = passes;
        self
    }

    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    pub fn with_restart_after(mut self, generations: usize) -> Self {
        self.restart_after = generations;
        self
    }

    pub fn with_bi_objective(mut self, bi_objective: bool) -> Self {
        self.bi_objective = bi_objective;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    /// Nothing is ever silently clamped.
    pub fn validate(&self) -> Result<(), String> {
        if self.n_ants == 0 {
            return Err("n_ants must be at least 1".into());
        }
        if !(self.rho > 0.0 && self.rho < 1.0) {
            return Err(format!("rho must be in (0, 1), got {}", self.rho));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(format!("alpha must be finite and non-negative, got {}", self.alpha));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(format!("beta must be finite and non-negative, got {}", self.beta));
        }
        if !(0.0..=1.0).contains(&self.q0) {
            return Err(format!("q0 must be in [0, 1], got {}", self.q0));
        }
        if self.time_limit_ms == 0 {
            return Err("time_limit_ms must be positive".into());
        }
        if self.method == Method::Paco && self.population_size == 0 {
            return Err("population_size must be at least 1 for PACO".into());
        }
        if self.method == Method::ModifiedMmas && self.restart_after == 0 {
            return Err("restart_after must be at least 1 for M-MMAS".into());
        }
        Ok(())
    }
}
