use serde::{Deserialize, Serialize};

use crate::Step;

/// The fully-annotated trace of one digit-square-sum sequence.
///
/// A trace is built once per input value and is immutable after that: the
/// tracer returns it by value and never merges or mutates traces. The step
/// list runs from the input up to (and including) the step whose `next_value`
/// first repeats an earlier value; the repeat itself is not appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Ordered steps, starting at the input value.
    pub steps: Vec<Step>,
    /// Index of the first step belonging to the cycle.
    pub cycle_start_index: usize,
    /// Number of steps in the cycle (`steps.len() - cycle_start_index`).
    pub cycle_length: usize,
}

impl Trace {
    /// The repeating suffix of the trace, from the cycle entry to the end.
    #[inline]
    pub fn cycle_steps(&self) -> &[Step] {
        &self.steps[self.cycle_start_index..]
    }

    /// The non-repeating prefix of the trace (empty when the input itself
    /// starts the cycle).
    #[inline]
    pub fn tail_steps(&self) -> &[Step] {
        &self.steps[..self.cycle_start_index]
    }

    /// Whether a true repeat was found.
    ///
    /// False only when the iteration ceiling was hit first; the cycle fields
    /// then point at the last recorded step and no step is marked as entry.
    #[inline]
    pub fn cycle_found(&self) -> bool {
        self.steps
            .get(self.cycle_start_index)
            .is_some_and(|s| s.is_cycle_entry)
    }

    /// Whether the sequence settles on a single self-mapping value.
    #[inline]
    pub fn is_fixed_point(&self) -> bool {
        self.cycle_found() && self.cycle_length == 1
    }

    /// Whether the sequence resolves to the fixed point `1` (since `1² = 1`).
    #[inline]
    pub fn converges_to_one(&self) -> bool {
        self.is_fixed_point() && self.steps[self.cycle_start_index].value == 1
    }
}
