//! Log adapter emitting detailed reports as `tracing` events.

use std::error::Error as StdError;

use crate::report::format_error_details;

/// Emits an error-level event carrying the composed message and the full
/// detailed report, for subscribers that want the annotated stacks in a
/// single field.
pub fn log_error_details<E>(err: &E)
where
    E: StdError + 'static,
{
    tracing::error!(error = %err, details = %format_error_details(err));
}
