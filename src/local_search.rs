//! Best-improvement local search over schedule neighborhoods.
//!
//! Each [`Neighborhood`] defines a move set on a permutation. One pass
//! evaluates every move in the set and applies the single best strictly
//! improving one; [`descend`] repeats passes until no move improves (a
//! local optimum) or a pass budget is spent. Termination is guaranteed:
//! a pass evaluates `O(n²)` moves and the objective strictly decreases
//! with every accepted move.
//!
//! The objective minimized is weighted tardiness, also when the colony
//! runs in bi-objective mode.

use crate::instance::Instance;

/// Move set explored by the local search. Fixed per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Neighborhood {
    /// Exchange the jobs at positions `i` and `j`, for every pair `i < j`.
    Swap,

    /// Remove the job at position `i` and reinsert it at position `j`,
    /// for every ordered pair `i != j`: relocations in both directions.
    Interchange,

    /// Remove the job at position `i` and reinsert it at an earlier
    /// position `j < i`, keeping the relative order of the other jobs.
    Insertion,
}

/// Moves the element at `from` to `to`, shifting the span between them.
fn relocate(sequence: &mut [usize], from: usize, to: usize) {
    if from < to {
        sequence[from..=to].rotate_left(1);
    } else if to < from {
        sequence[to..=from].rotate_right(1);
    }
}

impl Neighborhood {
    /// Applies the best strictly improving move, if any.
    ///
    /// Returns the improved objective, or `None` when `sequence` is
    /// locally optimal for this neighborhood (the sequence is then
    /// unchanged).
    fn improve_once(self, instance: &Instance, sequence: &mut [usize], current: f64) -> Option<f64> {
        let n = sequence.len();
        let mut best = current;
        let mut best_move = None;

        match self {
            Neighborhood::Swap => {
                for i in 0..n {
                    for j in (i + 1)..n {
                        sequence.swap(i, j);
                        let tardiness = instance.weighted_tardiness(sequence);
                        sequence.swap(i, j);
                        if tardiness < best {
                            best = tardiness;
                            best_move = Some((i, j));
                        }
                    }
                }
                let (i, j) = best_move?;
                sequence.swap(i, j);
            }
            Neighborhood::Interchange | Neighborhood::Insertion => {
                let move_later = matches!(self, Neighborhood::Interchange);
                for from in 0..n {
                    for to in 0..n {
                        if to == from || (to > from && !move_later) {
                            continue;
                        }
                        relocate(sequence, from, to);
                        let tardiness = instance.weighted_tardiness(sequence);
                        relocate(sequence, to, from);
                        if tardiness < best {
                            best = tardiness;
                            best_move = Some((from, to));
                        }
                    }
                }
                let (from, to) = best_move?;
                relocate(sequence, from, to);
            }
        }
        Some(best)
    }
}

/// Best-improvement descent on `sequence`.
///
/// Runs improvement passes until the sequence is locally optimal or
/// `max_passes` passes have been applied (`0` = no pass budget). Returns
/// the final weighted tardiness; the result is never worse than the
/// input.
pub fn descend(
    instance: &Instance,
    sequence: &mut [usize],
    neighborhood: Neighborhood,
    max_passes: usize,
) -> f64 {
    let mut current = instance.weighted_tardiness(sequence);
    let mut passes = 0;
    while max_passes == 0 || passes < max_passes {
        match neighborhood.improve_once(instance, sequence, current) {
            Some(improved) => current = improved,
            None => break,
        }
        passes += 1;
    }
    current
}
