//! PFSP-WT problem instances and objective evaluation.
//!
//! An [`Instance`] is the immutable description of one scheduling problem:
//! `n` jobs, each with a processing time on every one of `m` machines, a
//! due date, and a tardiness weight. A schedule is a single permutation of
//! the jobs, processed in that order on every machine.
//!
//! Objectives are evaluated with the standard flow-shop completion-time
//! recurrence
//!
//! ```text
//! C(i, k) = max(C(i-1, k), C(i, k-1)) + p(i, k)
//! ```
//!
//! in one `O(n·m)` forward pass over the sequence, keeping only an `O(m)`
//! rolling row of completion times.

/// One job of a flow-shop instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job {
    /// Processing time on each machine, in machine order.
    pub processing: Vec<u32>,

    /// Due date; completion past it accrues weighted tardiness.
    pub due_date: u32,

    /// Tardiness weight (priority). Must be finite and non-negative.
    pub weight: f64,
}

impl Job {
    pub fn new(processing: Vec<u32>, due_date: u32, weight: f64) -> Self {
        Job {
            processing,
            due_date,
            weight,
        }
    }
}

/// An immutable PFSP-WT instance.
///
/// # Examples
///
/// ```
/// use u_flowshop::instance::{Instance, Job};
///
/// let instance = Instance::new(vec![
///     Job::new(vec![3, 2], 4, 2.0),
///     Job::new(vec![2, 1], 2, 1.0),
/// ]);
/// assert_eq!(instance.n(), 2);
/// assert_eq!(instance.m(), 2);
/// assert_eq!(instance.makespan(&[0, 1]), 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    jobs: Vec<Job>,
    machines: usize,
}

impl Instance {
    /// Creates an instance from its jobs.
    ///
    /// # Panics
    ///
    /// Panics if `jobs` is empty, if any job visits zero machines or a
    /// different number of machines than the others, or if any weight is
    /// non-finite or negative. These checks are what keeps every later
    /// objective value finite.
    pub fn new(jobs: Vec<Job>) -> Self {
        assert!(!jobs.is_empty(), "instance must contain at least one job");
        let machines = jobs[0].processing.len();
        assert!(machines > 0, "jobs must visit at least one machine");
        for job in &jobs {
            assert_eq!(
                job.processing.len(),
                machines,
                "all jobs must have one processing time per machine"
            );
            assert!(
                job.weight.is_finite() && job.weight >= 0.0,
                "job weights must be finite and non-negative"
            );
        }
        Instance { jobs, machines }
    }

    /// Number of jobs.
    pub fn n(&self) -> usize {
        self.jobs.len()
    }

    /// Number of machines.
    pub fn m(&self) -> usize {
        self.machines
    }

    /// The jobs, in index order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Evaluates both objectives of a job sequence in one pass.
    ///
    /// Returns `(weighted tardiness, makespan)`. The sequence may be a
    /// full permutation or any shorter sequence of distinct job indices;
    /// partial sequences are evaluated over the scheduled jobs only,
    /// which is what insertion heuristics need.
    pub fn objectives(&self, sequence: &[usize]) -> (f64, u64) {
        debug_assert!(
            self.is_valid_sequence(sequence),
            "sequence must hold distinct job indices below n"
        );

        let mut row = vec![0u64; self.machines];
        let mut tardiness = 0.0;
        let mut makespan = 0u64;

        for &job_index in sequence {
            let job = &self.jobs[job_index];
            // completion of this job on the previous machine
            let mut left = 0u64;
            for (busy_until, &p) in row.iter_mut().zip(job.processing.iter()) {
                left = (*busy_until).max(left) + u64::from(p);
                *busy_until = left;
            }
            makespan = left;
            let overrun = left.saturating_sub(u64::from(job.due_date));
            tardiness += job.weight * overrun as f64;
        }

        (tardiness, makespan)
    }

    /// Total weighted tardiness of a job sequence.
    pub fn weighted_tardiness(&self, sequence: &[usize]) -> f64 {
        self.objectives(sequence).0
    }

    /// Completion time of the last job on the last machine.
    pub fn makespan(&self, sequence: &[usize]) -> u64 {
        self.objectives(sequence).1
    }

    fn is_valid_sequence(&self, sequence: &[usize]) -> bool {
        let mut seen = vec![false; self.jobs.len()];
        sequence.iter().all(|&job| {
            job < self.jobs.len() && !std::mem::replace(&mut seen[job], true)
        })
    }
}
