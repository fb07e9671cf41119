//! Intake conversion and stack capability traits.

pub mod into_cause;
pub mod stack_tracer;

pub use into_cause::{BoxedError, Cause, IntoCause};
pub use stack_tracer::StackTracer;
