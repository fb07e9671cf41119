//! Stack-annotated error wrapping, joining, and detailed report rendering.
//!
//! Errors constructed or annotated through this crate record the call
//! stack at the annotation point. Wrapping builds single-cause chains,
//! joining aggregates independent errors into an ordered fan-out, and the
//! report machinery walks the resulting tree into an indented,
//! stack-annotated printout for log adapters.
//!
//! # Examples
//!
//! ## Wrapping with stacks
//!
//! ```
//! use error_details::{new, wrap, with_stack};
//!
//! let root = new("connection refused");
//! let err = wrap(root, "loading configuration").unwrap();
//! assert_eq!(err.to_string(), "loading configuration: connection refused");
//!
//! // Absent causes are a designed no-op, not a failure.
//! assert!(with_stack(None::<error_details::Error>).is_none());
//! ```
//!
//! ## Joining and reporting
//!
//! ```
//! use error_details::{new, print_error_details, wrap};
//!
//! let primary = wrap(new("read failed"), "loading cache").unwrap();
//! let fallback = new("fallback failed");
//! let err = error_details::join!(primary, fallback).unwrap();
//!
//! for line in print_error_details(&err) {
//!     eprintln!("{line}");
//! }
//! ```
//!
//! ## Custom error types
//!
//! Embed [`WrapperError`] to give a custom error type the same message,
//! source, and stack-trace behavior without redefining it.

/// Format-style and variadic construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Error tree linearization and report rendering
pub mod report;
/// Intake conversion and stack capability traits
pub mod traits;
/// Error node types, frames, and stack capture
pub mod types;

pub use report::{
    format_error_details, linearize, print_error_details, render, report, Record, Report,
};
pub use traits::{BoxedError, Cause, IntoCause, StackTracer};
pub use types::error::{join, new, with_stack, wrap};
pub use types::{
    AnnotatedError, Chain, Error, ErrorVec, Frame, JoinedError, Stack, WrapperError,
    WrapperErrorBuilder,
};

#[cfg(feature = "tracing")]
pub use report::log_error_details;
