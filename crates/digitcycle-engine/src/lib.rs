//! `digitcycle-engine` computes digit-square-sum sequence traces.
//!
//! Given a non-negative integer, the tracer repeatedly replaces the number
//! with the sum of the squares of its decimal digits and stops at the first
//! repeated value, returning a [`Trace`] with the cycle boundaries marked.
//! The computation is a pure function of its input: it allocates only
//! call-local state and is safely callable from any number of threads.

pub mod digits;
mod tracer;

pub use digitcycle_model::{Step, Trace, TraceError};
pub use tracer::{trace, Tracer, DEFAULT_MAX_STEPS};
