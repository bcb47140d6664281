use serde::{Deserialize, Serialize};

/// One point in a digit-square-sum sequence.
///
/// A step records the value *before* transformation together with its digit
/// breakdown and the transformed value; `steps[i].next_value` always equals
/// `steps[i + 1].value` when a next step exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// 0-based position within the trace.
    pub index: usize,
    /// The integer at this step, before transformation.
    pub value: u64,
    /// Decimal digits of `value`, most-significant first (`[0]` for zero).
    pub digits: Vec<u8>,
    /// Sum of the squares of `digits`.
    pub next_value: u64,
    /// True from the cycle entry to the end of the trace.
    pub in_cycle: bool,
    /// True only for the step where the cycle begins.
    pub is_cycle_entry: bool,
}
