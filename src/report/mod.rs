//! Error tree linearization, report rendering, and log-adapter hooks.
//!
//! The report machinery walks the causal structure rooted at any error —
//! a chain of annotations, possibly fanning out at joins — and renders it
//! as indented, stack-annotated text lines. Log adapters consume it
//! through [`print_error_details`] (lines), [`format_error_details`] (one
//! string), or [`report`] (a structured value).
//!
//! # Examples
//!
//! ```
//! use error_details::{new, print_error_details, wrap};
//!
//! let err = wrap(new("connection refused"), "loading configuration").unwrap();
//! let lines = print_error_details(&err);
//! assert!(!lines.is_empty());
//! ```

use std::error::Error as StdError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod linearize;
pub mod render;

#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use linearize::{linearize, Record};
pub use render::render;

#[cfg(feature = "tracing")]
pub use tracing_ext::log_error_details;

/// Renders the full detailed report for `err`: one entry per reachable
/// error, depth-first, each annotated with its recorded stack location.
///
/// This is the primary boundary call for log adapters.
#[must_use]
pub fn print_error_details<E>(err: &E) -> Vec<String>
where
    E: StdError + 'static,
{
    render(&linearize(err))
}

/// Value-to-string hook for adapters that need the report as a single
/// string: the detail lines joined by line breaks.
#[must_use]
pub fn format_error_details<E>(err: &E) -> String
where
    E: StdError + 'static,
{
    print_error_details(err).join("\n")
}

/// Structured-marshal hook for adapters that need the report as a
/// structured field rather than a string.
#[must_use]
pub fn report<E>(err: &E) -> Report
where
    E: StdError + 'static,
{
    Report {
        message: err.to_string(),
        details: print_error_details(err),
    }
}

/// A detailed error report: the composed message plus the rendered detail
/// lines.
///
/// `Display` renders the detail lines separated by line breaks.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    message: String,
    details: Vec<String>,
}

impl Report {
    /// The composed message of the reported error.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The rendered detail lines, top-level error first.
    #[inline]
    pub fn details(&self) -> &[String] {
        &self.details
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.details.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
