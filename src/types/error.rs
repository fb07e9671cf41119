//! The error node model and its construction operations.
//!
//! Errors come in two shapes: [`AnnotatedError`] wraps at most one cause
//! with a message, forming a singly-linked causal chain, and
//! [`JoinedError`] aggregates an ordered list of independent errors. Both
//! record the call stack at the point they were constructed. The
//! constructors accept anything implementing
//! [`IntoCause`](crate::traits::IntoCause), so both present and absent
//! causes flow through one signature: wrapping an absent cause yields
//! `None` rather than an error node.
//!
//! # Examples
//!
//! ```
//! use error_details::{new, wrap};
//!
//! let root = new("connection refused");
//! let err = wrap(root, "loading configuration").unwrap();
//! assert_eq!(err.to_string(), "loading configuration: connection refused");
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::report::linearize::unwrap_children;
use crate::traits::{Cause, IntoCause, StackTracer};
use crate::types::{ErrorVec, Stack};

/// An error annotated with a message and a captured stack, optionally
/// wrapping a cause.
///
/// An empty message defers to the cause's message when rendered.
pub struct AnnotatedError {
    pub(crate) cause: Option<Cause>,
    pub(crate) message: String,
    pub(crate) stack: Stack,
}

impl AnnotatedError {
    /// This node's own message fragment, excluding the cause's message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(Cause::error)
    }

    /// The stack captured when this node was constructed.
    #[inline]
    pub fn stack_trace(&self) -> &Stack {
        &self.stack
    }
}

impl fmt::Display for AnnotatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            None => f.write_str(&self.message),
            Some(cause) if self.message.is_empty() => fmt::Display::fmt(cause, f),
            Some(cause) => write!(f, "{}: {}", self.message, cause),
        }
    }
}

impl fmt::Debug for AnnotatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotatedError")
            .field("message", &self.message)
            .field("cause", &self.cause)
            .field("stack", &self.stack)
            .finish()
    }
}

/// An ordered aggregation of independent errors with its own captured
/// stack.
///
/// Never constructed with zero children: the join operations report "no
/// error" (`None`) instead.
pub struct JoinedError {
    pub(crate) children: ErrorVec<Cause>,
    pub(crate) stack: Stack,
}

impl JoinedError {
    /// The joined errors, in input order.
    #[inline]
    pub fn children(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        self.children.iter().map(Cause::error)
    }

    /// The stack captured when this node was constructed.
    #[inline]
    pub fn stack_trace(&self) -> &Stack {
        &self.stack
    }
}

impl fmt::Display for JoinedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            fmt::Display::fmt(child, f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for JoinedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinedError")
            .field("children", &self.children)
            .field("stack", &self.stack)
            .finish()
    }
}

/// A stack-annotated error: either a single annotation in a causal chain
/// or a join of several independent errors.
///
/// Immutable after construction, and safe to share read-only across
/// threads. `Display` renders the composed message; `Debug` renders the
/// full detailed report.
pub enum Error {
    /// A message annotation with at most one cause.
    Annotated(AnnotatedError),
    /// An ordered fan-out over several errors.
    Joined(JoinedError),
}

impl Error {
    /// Joins pre-converted causes, preserving order and dropping absent
    /// entries. Returns `None` when every entry is absent.
    ///
    /// This is the building block under [`join`] and the
    /// [`join!`](macro@crate::join) macro; the stack is attributed to the
    /// caller.
    #[must_use]
    pub fn join_causes<I>(causes: I) -> Option<Error>
    where
        I: IntoIterator<Item = Option<Cause>>,
    {
        let children: ErrorVec<Cause> = causes.into_iter().flatten().collect();
        if children.is_empty() {
            return None;
        }
        Some(Error::Joined(JoinedError {
            children,
            stack: Stack::capture(0),
        }))
    }

    /// The single wrapped cause: the cause of an annotation, `None` for a
    /// join or a chain leaf.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Annotated(a) => a.cause(),
            Error::Joined(_) => None,
        }
    }

    /// All direct causes in order: at most one for an annotation, the
    /// child list for a join.
    pub fn causes(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        let children: &[Cause] = match self {
            Error::Annotated(a) => a.cause.as_slice(),
            Error::Joined(j) => &j.children,
        };
        children.iter().map(Cause::error)
    }

    /// Every error reachable from this one, in depth-first pre-order,
    /// starting with this error itself.
    ///
    /// Useful for causal-membership tests:
    ///
    /// ```
    /// use error_details::wrap;
    ///
    /// let err = wrap(std::io::Error::other("disk gone"), "saving state").unwrap();
    /// assert!(err.chain().any(|e| e.is::<std::io::Error>()));
    /// ```
    pub fn chain(&self) -> Chain<'_> {
        let root: &(dyn StdError + 'static) = self;
        Chain {
            pending: vec![root],
        }
    }

    pub(crate) fn variant_type_name(&self) -> &'static str {
        match self {
            Error::Annotated(_) => std::any::type_name::<AnnotatedError>(),
            Error::Joined(_) => std::any::type_name::<JoinedError>(),
        }
    }
}

impl StackTracer for Error {
    fn stack_trace(&self) -> &Stack {
        match self {
            Error::Annotated(a) => &a.stack,
            Error::Joined(j) => &j.stack,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Annotated(a) => fmt::Display::fmt(a, f),
            Error::Joined(j) => fmt::Display::fmt(j, f),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = crate::report::print_error_details(self);
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        // A join has no single cause; its children are reachable through
        // `causes` and the report walk.
        match self {
            Error::Annotated(a) => a.cause(),
            Error::Joined(_) => None,
        }
    }
}

/// Depth-first pre-order iterator over every error reachable from a root.
///
/// Returned by [`Error::chain`].
pub struct Chain<'a> {
    pending: Vec<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.pending.pop()?;
        // Children are pushed in reverse so the traversal stays
        // depth-first, left to right.
        let children = unwrap_children(next);
        for child in children.into_iter().rev() {
            self.pending.push(child.error());
        }
        Some(next)
    }
}

/// Returns a new error with the supplied message, recording the stack at
/// the call site.
///
/// # Examples
///
/// ```
/// let err = error_details::new("out of disk space");
/// assert_eq!(err.to_string(), "out of disk space");
/// ```
#[must_use]
pub fn new(message: impl Into<String>) -> Error {
    Error::Annotated(AnnotatedError {
        cause: None,
        message: message.into(),
        stack: Stack::capture(0),
    })
}

/// Annotates `err` with the stack at the call site, without adding a
/// message. Returns `None` when the cause is absent.
#[must_use]
pub fn with_stack(err: impl IntoCause) -> Option<Error> {
    match err.into_cause() {
        Some(cause) => Some(Error::Annotated(AnnotatedError {
            cause: Some(cause),
            message: String::new(),
            stack: Stack::capture(0),
        })),
        None => None,
    }
}

/// Annotates `err` with the supplied message and the stack at the call
/// site. Returns `None` when the cause is absent.
///
/// # Examples
///
/// ```
/// use error_details::{new, wrap};
///
/// let err = wrap(new("a"), "b").unwrap();
/// assert_eq!(err.to_string(), "b: a");
/// assert!(wrap(None::<error_details::Error>, "b").is_none());
/// ```
#[must_use]
pub fn wrap(err: impl IntoCause, message: impl Into<String>) -> Option<Error> {
    match err.into_cause() {
        Some(cause) => Some(Error::Annotated(AnnotatedError {
            cause: Some(cause),
            message: message.into(),
            stack: Stack::capture(0),
        })),
        None => None,
    }
}

/// Joins the given errors into one, preserving order and dropping absent
/// entries. Returns `None` when every entry is absent.
///
/// The rendered message is the concatenation of each child's message,
/// separated by a line break. For heterogeneous error types use the
/// [`join!`](macro@crate::join) macro instead.
///
/// # Examples
///
/// ```
/// use error_details::{join, new};
///
/// let err = join([Some(new("a")), None, Some(new("b"))]).unwrap();
/// assert_eq!(err.to_string(), "a\nb");
/// assert!(join([None::<error_details::Error>, None]).is_none());
/// ```
#[must_use]
pub fn join<I>(errs: I) -> Option<Error>
where
    I: IntoIterator,
    I::Item: IntoCause,
{
    let children: ErrorVec<Cause> = errs
        .into_iter()
        .filter_map(IntoCause::into_cause)
        .collect();
    if children.is_empty() {
        return None;
    }
    Some(Error::Joined(JoinedError {
        children,
        stack: Stack::capture(0),
    }))
}
