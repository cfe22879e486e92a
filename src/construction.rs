//! Probabilistic schedule construction from pheromone trails.
//!
//! An ant builds a permutation one position at a time: every unplaced
//! job `j` is scored `τ[j][p]^α · η_j^β` for the current position `p`,
//! then one job is drawn greedily (arg-max) with probability `q0`,
//! otherwise by roulette wheel over the scores. When the score mass is
//! numerically negligible the pick falls back to a uniform random choice
//! among the unplaced jobs, so degenerate trails never divide by zero.

use crate::pheromone::PheromoneMatrix;
use rand::Rng;

/// Score mass below this is treated as degenerate.
const NEGLIGIBLE: f64 = 1e-12;

/// Builds one permutation from the trail matrix and the per-job
/// desirability vector.
pub fn construct<R: Rng>(
    tau: &PheromoneMatrix,
    desirability: &[f64],
    alpha: f64,
    beta: f64,
    q0: f64,
    rng: &mut R,
) -> Vec<usize> {
    let n = tau.jobs();
    debug_assert_eq!(desirability.len(), n);

    let mut unplaced: Vec<usize> = (0..n).collect();
    let mut permutation = Vec::with_capacity(n);
    let mut scores = Vec::with_capacity(n);

    for position in 0..n {
        scores.clear();
        scores.extend(
            unplaced
                .iter()
                .map(|&job| tau.get(job, position).powf(alpha) * desirability[job].powf(beta)),
        );
        let total: f64 = scores.iter().sum();

        let pick = if !total.is_finite() || total <= NEGLIGIBLE {
            rng.random_range(0..unplaced.len())
        } else if q0 > 0.0 && rng.random_range(0.0..1.0) < q0 {
            greedy_pick(&scores)
        } else {
            roulette_pick(&scores, total, rng)
        };

        permutation.push(unplaced.remove(pick));
    }
    permutation
}

/// Index of the highest score; ties keep the earliest unplaced job.
fn greedy_pick(scores: &[f64]) -> usize {
    let mut best = 0;
    for (index, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = index;
        }
    }
    best
}

/// Roulette-wheel draw proportional to the scores.
fn roulette_pick<R: Rng>(scores: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (index, &score) in scores.iter().enumerate() {
        cumulative += score;
        if cumulative > threshold {
            return index;
        }
    }
    scores.len() - 1 // floating-point fallback
}
