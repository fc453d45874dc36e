//! Slot checksum codec
//!
//! The firmware validates a slot by summing its data region as little-endian
//! 16-bit words and adding the stored inverse checksum; the low 16 bits must
//! come out to [`CHECKSUM_TARGET`]. Before trusting that it also checks a
//! static marker word.

use log::{error, warn};

use crate::consts::{
    CHECKSUM_BIAS, CHECKSUM_TARGET, DATA_LEN, INVERSE_CHECKSUM_OFFSET, STATIC_MARKER,
    STATIC_MARKER_OFFSET, SlotBytes,
};

/// Outcome of verifying one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotVerdict {
    /// Marker and checksum are good.
    ///
    /// `consistent` is false when recomputing the inverse checksum disagrees
    /// with the stored one even though the sum test passed.
    Valid { consistent: bool },
    /// Static marker did not hold [`STATIC_MARKER`]
    BadMarker { found: u16 },
    /// Data sum plus stored inverse checksum missed [`CHECKSUM_TARGET`]
    BadChecksum { stored: u16, total: u16 },
}

impl SlotVerdict {
    pub const fn is_valid(&self) -> bool {
        matches!(self, SlotVerdict::Valid { .. })
    }

    /// True for a valid slot whose redundant recomputation disagreed
    pub const fn is_inconsistent(&self) -> bool {
        matches!(self, SlotVerdict::Valid { consistent: false })
    }
}

#[inline]
fn word_at(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

/// Sum the little-endian 16-bit words in `bytes[start..stop]`.
///
/// The sum is not reduced; callers mask as needed.
///
/// # Panics
///
/// Panics if `stop - start` is odd, or if the range is out of bounds.
pub fn sum16(bytes: &[u8], start: usize, stop: usize) -> u64 {
    assert!(
        (stop - start) % 2 == 0,
        "word range {start:#x}..{stop:#x} has odd length"
    );
    bytes[start..stop]
        .chunks_exact(2)
        .map(|w| u64::from(u16::from_le_bytes([w[0], w[1]])))
        .sum()
}

/// The inverse checksum the firmware expects for this slot's current data
pub fn compute_inverse_checksum(slot: &SlotBytes) -> u16 {
    let sum = sum16(slot, 0, DATA_LEN);
    (CHECKSUM_BIAS.wrapping_sub(sum) & 0xFFFF) as u16
}

/// Verify one slot, logging why it failed.
pub fn inspect_slot(slot: &SlotBytes) -> SlotVerdict {
    let marker = word_at(slot, STATIC_MARKER_OFFSET);
    if marker != STATIC_MARKER {
        warn!("got bad static marker {marker:#06x}");
        return SlotVerdict::BadMarker { found: marker };
    }

    let sum = sum16(slot, 0, DATA_LEN);
    let stored = word_at(slot, INVERSE_CHECKSUM_OFFSET);
    let total = (sum.wrapping_add(u64::from(stored)) & 0xFFFF) as u16;
    if total != CHECKSUM_TARGET {
        warn!("got bad inverse checksum {stored:#06x} (total {total:#06x})");
        return SlotVerdict::BadChecksum { stored, total };
    }

    let expected = compute_inverse_checksum(slot);
    if expected != stored {
        error!("checksum mismatch: calculated {expected:#06x}, stored {stored:#06x}");
        return SlotVerdict::Valid { consistent: false };
    }
    SlotVerdict::Valid { consistent: true }
}

/// True if the firmware would accept this slot
pub fn verify_slot(slot: &SlotBytes) -> bool {
    inspect_slot(slot).is_valid()
}
