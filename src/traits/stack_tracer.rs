//! Capability trait for errors that carry a captured stack.

use crate::types::Stack;

/// Implemented by error types that record a [`Stack`] at construction.
///
/// The report machinery recognizes this crate's implementors when it walks
/// an error tree. Custom error types surface their stack by embedding
/// [`WrapperError`](crate::WrapperError) and exposing it through
/// `std::error::Error::source`.
pub trait StackTracer {
    /// The stack captured when the error was created.
    fn stack_trace(&self) -> &Stack;
}
