//! Call-stack snapshots.

use std::fmt;

use lull_ir::Position;

/// One active function invocation: the callee and where it was called from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub name: String,
    pub call_site: Position,
}

impl Frame {
    pub fn new(name: impl Into<String>, call_site: Position) -> Self {
        Frame {
            name: name.into(),
            call_site,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  at {} ({})", self.name, self.call_site)
    }
}

/// Immutable snapshot of the call stack, innermost frame first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Backtrace {
    frames: Vec<Frame>,
}

impl Backtrace {
    /// Create a backtrace from frames ordered innermost first.
    pub fn new(frames: Vec<Frame>) -> Self {
        Backtrace { frames }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
