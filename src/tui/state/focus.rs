//! Focus cycling for screens with several interactive controls
//!
//! Tab moves forward and BackTab moves backward, wrapping at both ends.

/// Index of the focused control among a fixed number of controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusCycle {
    len: usize,
    index: usize,
}

impl FocusCycle {
    /// Create a cycle over `len` controls, focusing the first
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn is(&self, index: usize) -> bool {
        self.index == index
    }

    /// Move focus to the next control, wrapping to the first
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Move focus to the previous control, wrapping to the last
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = self.index.checked_sub(1).unwrap_or(self.len - 1);
        }
    }

    /// Return focus to the first control
    pub fn reset(&mut self) {
        self.index = 0;
    }
}
