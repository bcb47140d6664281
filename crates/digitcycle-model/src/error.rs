use thiserror::Error;

/// Errors raised at the tracing entry point.
///
/// Tracing either fails here, before any step is produced, or returns a
/// complete [`Trace`](crate::Trace); there is no partial-failure mode.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum TraceError {
    /// The input was negative, non-integral, or outside the range in which
    /// every integer is exactly representable.
    #[error("invalid input {value}: expected a non-negative integer within exact range")]
    InvalidInput { value: f64 },
}
