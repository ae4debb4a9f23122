//! Call-frame tracking for runtime backtraces.

use lull_diagnostic::{Backtrace, Frame};

/// Active function invocations of one run, outermost first.
///
/// Owned by the interpreter; errors copy it out with [`CallStack::capture`]
/// at the point they are raised.
#[derive(Clone, Debug, Default)]
pub struct CallStack {
    frames: Vec<Frame>,
}

impl CallStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Snapshot of the stack, most recent call first.
    pub fn capture(&self) -> Backtrace {
        Backtrace::new(self.frames.iter().rev().cloned().collect())
    }
}
