//! `digitcycle-model` defines the data model for digit-square-sum traces.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the sequence tracer (`digitcycle-engine`)
//! - history/persistence layers that store a [`Trace`] as an opaque value
//! - UI/IPC boundaries via `serde` (JSON-safe schema)

mod error;
mod step;
mod trace;

pub use error::TraceError;
pub use step::Step;
pub use trace::Trace;
