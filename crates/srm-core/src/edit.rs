//! Single-byte slot edits

use std::fmt;

use serde::{Deserialize, Serialize};

/// Write `value` at `offset` within a slot.
///
/// Offsets are slot-relative; the same edit is applied to every slot copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edit {
    pub offset: usize,
    pub value: u8,
}

impl Edit {
    pub const fn new(offset: usize, value: u8) -> Self {
        Self { offset, value }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05x} <- {:#04x}", self.offset, self.value)
    }
}

impl From<(usize, u8)> for Edit {
    fn from((offset, value): (usize, u8)) -> Self {
        Self::new(offset, value)
    }
}

/// Ordered edits; later writes to the same offset win.
pub type EditList = Vec<Edit>;
