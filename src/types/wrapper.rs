//! Embeddable building block for custom stack-carrying error types.

use std::error::Error as StdError;
use std::fmt;

use crate::traits::{Cause, IntoCause, StackTracer};
use crate::types::Stack;

/// A helper error that optionally wraps a cause and records the stack
/// starting at the frame where the embedding error was created.
///
/// Meant to be embedded inside custom error types so they get the message,
/// source, and stack-trace behavior without redefining it. The embedding
/// type exposes the wrapper through `std::error::Error::source`, which is
/// how the report walk finds the captured stack.
///
/// # Examples
///
/// ```
/// use std::fmt;
/// use error_details::WrapperError;
///
/// #[derive(Debug)]
/// struct ConnectionError {
///     inner: WrapperError,
/// }
///
/// impl ConnectionError {
///     fn new(cause: std::io::Error) -> Self {
///         ConnectionError {
///             inner: WrapperError::builder()
///                 .message("connection error")
///                 .build(cause),
///         }
///     }
/// }
///
/// impl fmt::Display for ConnectionError {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         fmt::Display::fmt(&self.inner, f)
///     }
/// }
///
/// impl std::error::Error for ConnectionError {
///     fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
///         Some(&self.inner)
///     }
/// }
///
/// let err = ConnectionError::new(std::io::Error::other("refused"));
/// assert_eq!(err.to_string(), "connection error: refused");
/// ```
///
/// The default capture depth assumes exactly one constructor layer between
/// [`WrapperError::builder`]'s `build` call and the embedding type's
/// public constructor, as in the example above. Embedding deeper than one
/// layer misattributes the recorded frame; raise
/// [`caller_depth`](WrapperErrorBuilder::caller_depth) by one per extra
/// layer in that case.
pub struct WrapperError {
    cause: Option<Cause>,
    message: String,
    stack: Stack,
}

impl WrapperError {
    /// Wraps `err` with default options: no message, default capture
    /// depth. `err` may be absent, producing a message-less leaf.
    #[must_use]
    pub fn new(err: impl IntoCause) -> Self {
        WrapperError {
            cause: err.into_cause(),
            message: String::new(),
            stack: Stack::capture(1),
        }
    }

    /// Returns a builder for configuring the message and capture depth.
    #[must_use]
    pub fn builder() -> WrapperErrorBuilder {
        WrapperErrorBuilder {
            message: None,
            caller_depth: 0,
        }
    }

    /// This wrapper's own message fragment, excluding the cause's message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(Cause::error)
    }

    pub(crate) fn cause_entry(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }
}

impl StackTracer for WrapperError {
    fn stack_trace(&self) -> &Stack {
        &self.stack
    }
}

impl fmt::Display for WrapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            None => f.write_str(&self.message),
            Some(cause) if self.message.is_empty() => fmt::Display::fmt(cause, f),
            Some(cause) => write!(f, "{}: {}", self.message, cause),
        }
    }
}

impl fmt::Debug for WrapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapperError")
            .field("message", &self.message)
            .field("cause", &self.cause)
            .field("stack", &self.stack)
            .finish()
    }
}

impl StdError for WrapperError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause()
    }
}

/// Builder for [`WrapperError`].
///
/// Formatted messages are produced with `format!` at the call site and
/// passed to [`message`](Self::message).
#[must_use]
pub struct WrapperErrorBuilder {
    message: Option<String>,
    caller_depth: usize,
}

impl WrapperErrorBuilder {
    /// Sets the wrapper's own message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Number of extra constructor layers between the `build` call and the
    /// code the recorded frame should point at. Defaults to `0`, meaning
    /// one embedding layer.
    pub fn caller_depth(mut self, depth: usize) -> Self {
        self.caller_depth = depth;
        self
    }

    /// Builds the wrapper, capturing the stack. `err` may be absent.
    #[must_use]
    pub fn build(self, err: impl IntoCause) -> WrapperError {
        WrapperError {
            cause: err.into_cause(),
            message: self.message.unwrap_or_default(),
            stack: Stack::capture(self.caller_depth + 1),
        }
    }
}
