//! A single captured stack location with lazy symbol resolution.
//!
//! Frames hold the raw program counter recorded at capture time. Turning a
//! program counter into a function name, file path, and line number is far
//! more expensive than recording it, so resolution is deferred until a
//! frame is first read and memoized afterwards. Creating an error therefore
//! stays cheap even when its report is never rendered.

use std::ffi::c_void;
use std::fmt;
use std::sync::OnceLock;

/// Symbol information resolved for one program counter.
#[derive(Debug, Clone)]
struct Symbol {
    name: String,
    file: String,
    line: u32,
}

impl Symbol {
    fn unresolved() -> Self {
        Symbol {
            name: "unknown".to_string(),
            file: "unknown".to_string(),
            line: 0,
        }
    }
}

/// One captured stack location.
///
/// Immutable once captured. Resolution is idempotent and performed at most
/// once; the memoized result is shared by all subsequent reads, from any
/// thread.
pub struct Frame {
    raw: backtrace::Frame,
    symbol: OnceLock<Symbol>,
}

impl Frame {
    pub(crate) fn from_raw(raw: backtrace::Frame) -> Self {
        Frame {
            raw,
            symbol: OnceLock::new(),
        }
    }

    /// Raw instruction pointer of this frame. Opaque and host-specific.
    #[inline]
    pub fn ip(&self) -> *mut c_void {
        self.raw.ip()
    }

    /// Resolved function name, or `"unknown"` when the symbol table has no
    /// entry for this program counter.
    #[inline]
    pub fn name(&self) -> &str {
        &self.resolve().name
    }

    /// Resolved source file path, or `"unknown"`.
    #[inline]
    pub fn file(&self) -> &str {
        &self.resolve().file
    }

    /// Resolved line number, or `0` when unavailable.
    #[inline]
    pub fn line(&self) -> u32 {
        self.resolve().line
    }

    fn resolve(&self) -> &Symbol {
        self.symbol.get_or_init(|| {
            let mut resolved = Symbol::unresolved();
            let mut filled = false;
            backtrace::resolve_frame(&self.raw, |symbol| {
                // The first symbol is the innermost one when several
                // inlined functions map to the same program counter.
                if filled {
                    return;
                }
                if let Some(name) = symbol.name() {
                    resolved.name = name.to_string();
                }
                if let Some(file) = symbol.filename() {
                    resolved.file = file.display().to_string();
                }
                if let Some(line) = symbol.lineno() {
                    resolved.line = line;
                }
                filled = true;
            });
            resolved
        })
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.name(), self.file(), self.line())
    }
}
