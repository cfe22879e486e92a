//! Evaluated schedules.

use crate::instance::Instance;

/// One evaluated schedule: a job permutation plus its objective values.
///
/// Solutions are immutable once evaluated. Duplicate detection (used by
/// the Pareto archive) compares permutation content, not objectives.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Job indices in processing order, shared by all machines.
    pub permutation: Vec<usize>,

    /// Total weighted tardiness (the primary objective).
    pub tardiness: f64,

    /// Completion time of the last job on the last machine.
    pub makespan: u64,
}

impl Solution {
    /// Evaluates a permutation against an instance.
    ///
    /// # Panics
    ///
    /// Panics if the objective overflows to a non-finite value, which
    /// indicates an internal modeling bug rather than a recoverable
    /// runtime condition.
    pub fn evaluate(instance: &Instance, permutation: Vec<usize>) -> Self {
        let (tardiness, makespan) = instance.objectives(&permutation);
        assert!(
            tardiness.is_finite(),
            "weighted tardiness evaluated to a non-finite value"
        );
        Solution {
            permutation,
            tardiness,
            makespan,
        }
    }

    /// Whether two solutions schedule the jobs in the same order.
    pub fn same_schedule(&self, other: &Solution) -> bool {
        self.permutation == other.permutation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Job;

    #[test]
    fn test_evaluate_fills_both_objectives() {
        let instance = Instance::new(vec![
            Job::new(vec![3, 2], 4, 2.0),
            Job::new(vec![2, 1], 2, 1.0),
        ]);
        let solution = Solution::evaluate(&instance, vec![0, 1]);
        assert!((solution.tardiness - 6.0).abs() < 1e-12);
        assert_eq!(solution.makespan, 6);
        assert_eq!(solution.permutation, vec![0, 1]);
    }

    #[test]
    fn test_same_schedule_ignores_objectives() {
        let a = Solution {
            permutation: vec![0, 1, 2],
            tardiness: 1.0,
            makespan: 10,
        };
        let b = Solution {
            permutation: vec![0, 1, 2],
            tardiness: 99.0,
            makespan: 99,
        };
        let c = Solution {
            permutation: vec![2, 1, 0],
            tardiness: 1.0,
            makespan: 10,
        };
        assert!(a.same_schedule(&b));
        assert!(!a.same_schedule(&c));
    }
}
