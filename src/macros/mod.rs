//! Format-style and variadic construction macros.
//!
//! These macros cover the operations a plain function signature cannot
//! express:
//!
//! - [`macro@crate::errorf`] - Creates a new annotated error from a format
//!   string, recording the stack at the call site.
//! - [`macro@crate::wrapf`] - Wraps an error with a formatted message,
//!   returning `None` when the cause is absent.
//! - [`macro@crate::join`] - Joins any number of errors of heterogeneous
//!   types, dropping absent entries.
//!
//! # Examples
//!
//! ```
//! use error_details::{errorf, join, new, wrapf};
//!
//! let parse = errorf!("bad value on line {}", 7);
//! let err = wrapf!(parse, "loading {}", "config.toml").unwrap();
//! assert_eq!(err.to_string(), "loading config.toml: bad value on line 7");
//!
//! let both = join!(new("read failed"), std::io::Error::other("fsync failed")).unwrap();
//! assert_eq!(both.to_string(), "read failed\nfsync failed");
//! ```

/// Creates a new annotated error from a format string, recording the
/// stack at the call site.
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use error_details::errorf;
///
/// let err = errorf!("unexpected status {}", 502);
/// assert_eq!(err.to_string(), "unexpected status 502");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::new(format!($($arg)*))
    };
}

/// Wraps an error with a formatted message and the stack at the call
/// site, returning `None` when the cause is absent.
///
/// The first argument is the cause; the rest are the same arguments as
/// the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use error_details::{new, wrapf};
///
/// let err = wrapf!(new("no route to host"), "dialing {}", "10.0.0.2").unwrap();
/// assert_eq!(err.to_string(), "dialing 10.0.0.2: no route to host");
/// assert!(wrapf!(None::<error_details::Error>, "dialing").is_none());
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)*) => {
        $crate::wrap($err, format!($($arg)*))
    };
}

/// Joins any number of errors into one, preserving order and dropping
/// absent entries. Evaluates to `None` when every entry is absent.
///
/// Unlike the [`join`](crate::types::error::join) function, the arguments
/// may be of heterogeneous types: anything implementing
/// [`IntoCause`](crate::traits::IntoCause) is accepted, `Option`s
/// included. The stack is recorded at the call site.
///
/// # Examples
///
/// ```
/// use error_details::{join, new};
///
/// let err = join!(new("a"), None::<error_details::Error>, new("b")).unwrap();
/// assert_eq!(err.to_string(), "a\nb");
///
/// assert!(join!().is_none());
/// assert!(join!(None::<error_details::Error>).is_none());
/// ```
#[macro_export]
macro_rules! join {
    () => {
        ::core::option::Option::<$crate::Error>::None
    };
    ($($err:expr),+ $(,)?) => {
        $crate::Error::join_causes([$($crate::traits::IntoCause::into_cause($err)),+])
    };
}
