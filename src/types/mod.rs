//! Error node types, frames, and stack capture.
//!
//! The error model is a closed two-variant union: [`AnnotatedError`] holds
//! an optional cause, a message, and its own captured [`Stack`];
//! [`JoinedError`] holds an ordered, non-empty list of independent child
//! errors plus its own stack. [`WrapperError`] is the embeddable building
//! block for custom error types that want the same behavior.

use smallvec::SmallVec;

pub mod error;
pub mod frame;
pub mod stack;
pub mod wrapper;

pub use error::{AnnotatedError, Chain, Error, JoinedError};
pub use frame::Frame;
pub use stack::Stack;
pub use wrapper::{WrapperError, WrapperErrorBuilder};

/// SmallVec-backed child list for joined errors.
///
/// Uses inline storage for two entries: joins overwhelmingly aggregate two
/// or three errors, so the common case stays off the heap.
pub type ErrorVec<T> = SmallVec<[T; 2]>;
