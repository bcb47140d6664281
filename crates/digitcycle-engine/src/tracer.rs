use std::collections::HashMap;

use digitcycle_model::{Step, Trace, TraceError};

use crate::digits;

/// Default iteration ceiling.
///
/// Digit-square-sum sequences over supported inputs cycle in well under 100
/// steps, so this is generous headroom against unexpected inputs rather than
/// a tuned limit.
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// Largest `f64` below which every integer is exactly representable (2^53 - 1).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_991.0;

/// Computes digit-square-sum traces.
///
/// The tracer holds only its iteration ceiling; each [`Tracer::trace`] call
/// allocates fresh call-local state and returns an independently owned
/// [`Trace`], so a single tracer may be shared across threads freely.
#[derive(Clone, Copy, Debug)]
pub struct Tracer {
    max_steps: usize,
}

impl Default for Tracer {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl Tracer {
    /// Tracer with the default iteration ceiling ([`DEFAULT_MAX_STEPS`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracer with a caller-chosen iteration ceiling.
    pub fn with_max_steps(max_steps: usize) -> Self {
        Self { max_steps }
    }

    /// The configured iteration ceiling.
    #[inline]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Trace the digit-square-sum sequence starting at `n`.
    ///
    /// Steps are accumulated until the next value repeats one already seen
    /// (the repeat itself is not appended) or the iteration ceiling is hit.
    /// Cycle annotation is a separate linear pass over the finished step
    /// list, keeping the loop's state machine decoupled from presentation
    /// of the result.
    pub fn trace(&self, n: u64) -> Trace {
        let mut seen: HashMap<u64, usize> = HashMap::new();
        let mut steps: Vec<Step> = Vec::new();
        let mut current = n;
        let mut step_index = 0usize;

        while !seen.contains_key(&current) {
            seen.insert(current, step_index);

            let digits = digits::decompose(current);
            let next_value = digits::square_sum(&digits);

            steps.push(Step {
                index: step_index,
                value: current,
                digits,
                next_value,
                in_cycle: false,
                is_cycle_entry: false,
            });

            current = next_value;
            step_index += 1;

            if step_index > self.max_steps {
                break;
            }
        }

        // `current` is absent from the map only when the ceiling stopped the
        // loop first; the cycle fields then degenerate to the last step.
        let repeat = seen.get(&current).copied();
        let cycle_start_index = repeat.unwrap_or(steps.len() - 1);
        let cycle_length = steps.len() - cycle_start_index;

        for step in &mut steps[cycle_start_index..] {
            step.in_cycle = true;
        }
        if repeat.is_some() {
            steps[cycle_start_index].is_cycle_entry = true;
        }

        Trace {
            steps,
            cycle_start_index,
            cycle_length,
        }
    }

    /// Validating entry point for numeric input that may not be a
    /// representable non-negative integer.
    ///
    /// Rejects negative, non-integral, and non-finite values, as well as
    /// anything above 2^53 - 1 (where `f64` stops representing every integer
    /// exactly). Fails before producing any output; there is no partial
    /// trace.
    pub fn trace_value(&self, value: f64) -> Result<Trace, TraceError> {
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > MAX_EXACT_INT {
            return Err(TraceError::InvalidInput { value });
        }
        Ok(self.trace(value as u64))
    }
}

/// Trace `n` with the default iteration ceiling.
pub fn trace(n: u64) -> Trace {
    Tracer::new().trace(n)
}
