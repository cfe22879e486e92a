//! Seeding heuristics for the colony.
//!
//! # Reference
//!
//! Nawaz, Enscore & Ham (1983), "A heuristic algorithm for the m-machine,
//! n-job flow-shop sequencing problem", *Omega* 11(1), 91-95.

use crate::instance::Instance;

/// Builds an initial permutation with the NEH insertion heuristic.
///
/// Jobs are ordered by earliest due date, then inserted one at a time at
/// the position minimizing the weighted tardiness of the partial
/// sequence. Ties keep the earliest position.
pub fn neh(instance: &Instance) -> Vec<usize> {
    let n = instance.n();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&job| (instance.jobs()[job].due_date, job));

    let mut sequence = Vec::with_capacity(n);
    sequence.push(order[0]);

    let mut candidate = Vec::with_capacity(n);
    for &job in &order[1..] {
        let mut best_position = 0;
        let mut best_tardiness = f64::INFINITY;
        for position in 0..=sequence.len() {
            candidate.clear();
            candidate.extend_from_slice(&sequence[..position]);
            candidate.push(job);
            candidate.extend_from_slice(&sequence[position..]);
            let tardiness = instance.weighted_tardiness(&candidate);
            if tardiness < best_tardiness {
                best_tardiness = tardiness;
                best_position = position;
            }
        }
        sequence.insert(best_position, job);
    }
    sequence
}

/// Earliest-due-date desirability per job: `η_j = 1 / (1 + d_j)`.
///
/// Used as the heuristic factor of the construction rule; jobs with
/// earlier due dates look more attractive at every position.
pub fn edd_desirability(instance: &Instance) -> Vec<f64> {
    instance
        .jobs()
        .iter()
        .map(|job| 1.0 / (1.0 + f64::from(job.due_date)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Job;

    fn is_permutation(sequence: &[usize], n: usize) -> bool {
        let mut seen = vec![false; n];
        sequence.len() == n
            && sequence
                .iter()
                .all(|&j| j < n && !std::mem::replace(&mut seen[j], true))
    }

    #[test]
    fn test_neh_returns_permutation() {
        let instance = Instance::new(vec![
            Job::new(vec![4, 2, 1], 9, 1.0),
            Job::new(vec![1, 5, 2], 6, 2.0),
            Job::new(vec![3, 3, 3], 5, 1.5),
            Job::new(vec![2, 1, 4], 12, 0.5),
        ]);
        let sequence = neh(&instance);
        assert!(is_permutation(&sequence, 4));
    }

    #[test]
    fn test_neh_picks_better_of_two_orders() {
        // [1, 0] scores 7.0 and [0, 1] scores 6.0; NEH must not return
        // the worse one.
        let instance = Instance::new(vec![
            Job::new(vec![3, 2], 4, 2.0),
            Job::new(vec![2, 1], 2, 1.0),
        ]);
        let sequence = neh(&instance);
        assert!((instance.weighted_tardiness(&sequence) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_neh_single_job() {
        let instance = Instance::new(vec![Job::new(vec![3], 1, 1.0)]);
        assert_eq!(neh(&instance), vec![0]);
    }

    #[test]
    fn test_edd_desirability_orders_by_due_date() {
        let instance = Instance::new(vec![
            Job::new(vec![1], 10, 1.0),
            Job::new(vec![1], 2, 1.0),
            Job::new(vec![1], 5, 1.0),
        ]);
        let eta = edd_desirability(&instance);
        assert!(eta[1] > eta[2]);
        assert!(eta[2] > eta[0]);
        assert!(eta.iter().all(|&e| e > 0.0 && e <= 1.0));
    }
}
