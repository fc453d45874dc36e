//! Patch a single save slot

use log::debug;

use crate::checksum::compute_inverse_checksum;
use crate::consts::{INVERSE_CHECKSUM_OFFSET, SLOT_SIZE, SlotBytes};
use crate::edit::Edit;
use crate::error::SaveError;

/// Reject any edit that would land outside a slot
pub fn check_edits(edits: &[Edit]) -> Result<(), SaveError> {
    match edits.iter().find(|e| e.offset >= SLOT_SIZE) {
        Some(edit) => Err(SaveError::EditOutOfBounds {
            offset: edit.offset,
            limit: SLOT_SIZE,
        }),
        None => Ok(()),
    }
}

/// Write every edit into `slot` in order, then reseal its inverse checksum.
///
/// Bounds are checked before the first write, so a rejected batch leaves the
/// slot untouched. Verification is left to the caller.
pub fn apply_edits(slot: &mut SlotBytes, edits: &[Edit]) -> Result<(), SaveError> {
    check_edits(edits)?;
    debug!("altering slot: {} edits", edits.len());
    for edit in edits {
        debug!("  {edit}");
        slot[edit.offset] = edit.value;
    }
    let cs = compute_inverse_checksum(slot);
    slot[INVERSE_CHECKSUM_OFFSET..INVERSE_CHECKSUM_OFFSET + 2].copy_from_slice(&cs.to_le_bytes());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::{inspect_slot, verify_slot};
    use crate::consts::{STATIC_MARKER, STATIC_MARKER_OFFSET};

    fn blank_slot() -> SlotBytes {
        let mut slot = [0u8; SLOT_SIZE];
        slot[STATIC_MARKER_OFFSET..STATIC_MARKER_OFFSET + 2]
            .copy_from_slice(&STATIC_MARKER.to_le_bytes());
        slot
    }

    #[test]
    fn test_apply_writes_and_seals() {
        let mut slot = blank_slot();
        apply_edits(&mut slot, &[Edit::new(0x377, 30), Edit::new(0x343, 5)]).unwrap();
        assert_eq!(slot[0x377], 30);
        assert_eq!(slot[0x343], 5);
        assert!(verify_slot(&slot));
    }

    #[test]
    fn test_last_write_wins() {
        let mut slot = blank_slot();
        apply_edits(&mut slot, &[Edit::new(0x10, 1), Edit::new(0x10, 2)]).unwrap();
        assert_eq!(slot[0x10], 2);
    }

    #[test]
    fn test_empty_batch_reseals() {
        let mut slot = blank_slot();
        slot[0x200] = 0x77;
        assert!(!verify_slot(&slot));
        apply_edits(&mut slot, &[]).unwrap();
        assert!(verify_slot(&slot));
    }

    #[test]
    fn test_out_of_bounds_leaves_slot_untouched() {
        let mut slot = blank_slot();
        let before = slot;
        let err = apply_edits(&mut slot, &[Edit::new(0x20, 9), Edit::new(SLOT_SIZE, 1)]);
        assert_eq!(
            err,
            Err(SaveError::EditOutOfBounds {
                offset: SLOT_SIZE,
                limit: SLOT_SIZE
            })
        );
        assert_eq!(slot, before);
    }

    #[test]
    fn test_edit_on_checksum_bytes_is_overwritten() {
        let mut slot = blank_slot();
        apply_edits(&mut slot, &[Edit::new(INVERSE_CHECKSUM_OFFSET, 0)]).unwrap();
        assert!(inspect_slot(&slot).is_valid());
    }
}
