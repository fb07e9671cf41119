//! Stack capture at error-construction time.

use std::fmt;

use crate::types::Frame;

/// Maximum number of frames recorded per capture.
const MAX_DEPTH: usize = 32;

/// Frames sitting between the unwinder callback and the caller of the
/// constructor that invoked [`Stack::capture`]: the unwind trampoline and
/// its wrapper, `trace`, `capture` itself, and the constructor frame.
/// These are skipped before caller-requested skipping starts.
const BASE_SKIP: usize = 5;

/// An ordered sequence of captured frames, innermost first.
///
/// Captured once when the owning error is constructed and never mutated
/// afterwards. Symbol resolution of the individual frames is deferred until
/// they are read, see [`Frame`].
pub struct Stack {
    frames: Vec<Frame>,
}

impl Stack {
    /// Captures the current call stack.
    ///
    /// `skip` is the number of additional caller frames to omit: `0`
    /// attributes the first recorded frame to the caller of the constructor
    /// invoking `capture`, and helper layers pass `1`, `2`, ... to point
    /// the trace at *their* callers instead.
    ///
    /// Capture never fails. When the host cannot produce frames the
    /// returned stack is shorter than expected, possibly empty, and report
    /// rendering degrades accordingly.
    #[inline(never)]
    pub fn capture(skip: usize) -> Self {
        let mut frames = Vec::new();
        let mut remaining = BASE_SKIP + skip;
        backtrace::trace(|frame| {
            if remaining > 0 {
                remaining -= 1;
                return true;
            }
            frames.push(Frame::from_raw(frame.clone()));
            frames.len() < MAX_DEPTH
        });
        Stack { frames }
    }

    /// The captured frames, innermost first.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of captured frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when the host produced no frames at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterates over the captured frames, innermost first.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.frames.iter()).finish()
    }
}
