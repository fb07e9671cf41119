//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_details::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Constructors**: [`new`], [`wrap`], [`with_stack`], [`join`]
//! - **Macros**: [`errorf!`], [`wrapf!`], [`join!`]
//! - **Types**: [`Error`], [`Stack`], [`WrapperError`], [`Report`]
//! - **Traits**: [`IntoCause`], [`StackTracer`]
//! - **Reporting**: [`print_error_details`], [`format_error_details`],
//!   [`report`]

// Macros
pub use crate::{errorf, join, wrapf};

// Constructors
pub use crate::types::error::{new, with_stack, wrap};

// Core types
pub use crate::types::{Error, Frame, Stack, WrapperError};

// Traits
pub use crate::traits::{IntoCause, StackTracer};

// Reporting
pub use crate::report::{format_error_details, print_error_details, report, Report};
