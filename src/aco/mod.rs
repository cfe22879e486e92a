//! Ant colony drivers for PFSP-WT.
//!
//! Three variants share one generation loop and differ only in their
//! trail policy:
//!
//! - [`Method::Mmas`]: Max-Min Ant System. Evaporation plus a single
//!   deposit per generation, trails clamped into dynamic
//!   `[τmin, τmax]` bounds recomputed from the best solution so far.
//! - [`Method::ModifiedMmas`]: MMAS depositing from both the
//!   iteration-best and the restart-best solution, with a deterministic
//!   trail restart once the restart-best stagnates.
//! - [`Method::Paco`]: Population-based ACO. The trail matrix is
//!   rebuilt each generation from a bounded elite population.
//!
//! # References
//!
//! - Stützle & Hoos (2000), "MAX-MIN Ant System"
//! - Guntsch & Middendorf (2002), "A Population Based Approach for ACO"
//! - Rajendran & Ziegler (2004), "Ant-colony algorithms for permutation
//!   flowshop scheduling to minimize makespan/total flowtime of jobs"

mod config;
mod runner;
mod variants;

pub use config::{AcoConfig, Deposit, Method};
pub use runner::{AcoResult, AcoRunner};
