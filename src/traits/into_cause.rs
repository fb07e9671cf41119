//! Intake conversion for causes passed to the construction operations.
//!
//! Wrapping and joining accept "maybe an error" inputs: a present cause,
//! an optional error produced by another construction operation, or an
//! already-boxed error. [`IntoCause`] folds all of these into
//! `Option<Cause>` so that `wrap`, `with_stack`, and `join` can treat an
//! absent cause as the designed no-op instead of a failure.

use std::any::type_name;
use std::error::Error as StdError;
use std::fmt;

use crate::types::{Error, WrapperError};

/// A boxed error usable as the cause of an annotation.
pub type BoxedError = Box<dyn StdError + Send + Sync + 'static>;

/// Fallback label for errors whose concrete type is no longer known.
pub(crate) const DYN_TYPE_NAME: &str = "dyn std::error::Error";

/// A cause retained by an annotated or joined error.
///
/// Keeps the concrete type name recorded at the intake boundary next to
/// the boxed error: a `dyn Error` cannot report its dynamic type name, so
/// it is captured here while the type is still statically known, for use
/// in rendered reports.
pub struct Cause {
    type_name: &'static str,
    error: BoxedError,
}

impl Cause {
    /// Wraps an already-boxed error. The concrete type name is no longer
    /// known at this point, so reports fall back to a generic label.
    #[must_use]
    pub fn from_boxed(error: BoxedError) -> Self {
        Cause {
            type_name: DYN_TYPE_NAME,
            error,
        }
    }

    /// Concrete type name of the error as recorded at intake.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The wrapped error.
    #[inline]
    pub fn error(&self) -> &(dyn StdError + 'static) {
        &*self.error
    }
}

impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Cause {
            type_name: type_name::<E>(),
            error: Box::new(error),
        }
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cause")
            .field("type_name", &self.type_name)
            .field("error", &self.error)
            .finish()
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

/// Conversion into an optional [`Cause`].
///
/// Implemented for everything convertible into a [`Cause`] — any sendable
/// `std::error::Error` — and for the optional forms the construction
/// operations hand around. An absent cause makes `wrap`, `with_stack`,
/// and the `join` operations report "no error" rather than produce a
/// node.
///
/// Boxed errors and optional errors of other types go through [`Cause`]
/// explicitly:
///
/// ```
/// use error_details::{wrap, BoxedError, Cause};
///
/// let maybe: Option<std::io::Error> = None;
/// assert!(wrap(maybe.map(Cause::from), "m").is_none());
///
/// let boxed: BoxedError = Box::new(std::io::Error::other("disk gone"));
/// let err = wrap(Cause::from_boxed(boxed), "saving state").unwrap();
/// assert_eq!(err.to_string(), "saving state: disk gone");
/// ```
pub trait IntoCause {
    /// Returns the cause, or `None` when no error is present.
    fn into_cause(self) -> Option<Cause>;
}

impl<C> IntoCause for C
where
    C: Into<Cause>,
{
    #[inline]
    fn into_cause(self) -> Option<Cause> {
        Some(self.into())
    }
}

impl IntoCause for Option<Error> {
    #[inline]
    fn into_cause(self) -> Option<Cause> {
        self.map(Cause::from)
    }
}

impl IntoCause for Option<WrapperError> {
    #[inline]
    fn into_cause(self) -> Option<Cause> {
        self.map(Cause::from)
    }
}

impl IntoCause for Option<Cause> {
    #[inline]
    fn into_cause(self) -> Option<Cause> {
        self
    }
}
