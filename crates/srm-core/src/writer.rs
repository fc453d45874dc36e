//! Replicate edits across every redundant slot

use log::warn;
use serde::Serialize;

use crate::checksum::{SlotVerdict, inspect_slot};
use crate::consts::{MIN_SAVE_LEN, SLOT_COUNT, SLOT_OFFSETS, SLOT_SIZE, SlotBytes};
use crate::edit::Edit;
use crate::error::SaveError;
use crate::slot::{apply_edits, check_edits};

/// Verification result for one patched slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotReport {
    pub index: usize,
    pub offset: usize,
    pub verdict: SlotVerdict,
}

/// Per-slot verification after a multi-slot write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub slots: Vec<SlotReport>,
}

impl PatchReport {
    /// Every slot verified and none flagged an internal mismatch
    pub fn is_clean(&self) -> bool {
        self.slots
            .iter()
            .all(|s| matches!(s.verdict, SlotVerdict::Valid { consistent: true }))
    }

    /// Slots the firmware would reject
    pub fn failures(&self) -> impl Iterator<Item = &SlotReport> {
        self.slots.iter().filter(|s| !s.verdict.is_valid())
    }

    /// Slots that passed but whose recomputed checksum disagreed
    pub fn inconsistencies(&self) -> impl Iterator<Item = &SlotReport> {
        self.slots.iter().filter(|s| s.verdict.is_inconsistent())
    }

    /// Turn the first failed slot into an error
    pub fn into_result(self) -> Result<Self, SaveError> {
        let first = self.failures().next().map(|s| (s.index, s.offset));
        match first {
            Some((slot, offset)) => Err(SaveError::ChecksumInconsistency { slot, offset }),
            None => Ok(self),
        }
    }
}

#[derive(Serialize)]
struct SlotSummary<'a> {
    index: usize,
    offset: usize,
    status: &'a str,
}

impl Serialize for PatchReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let summary: Vec<SlotSummary<'_>> = self
            .slots
            .iter()
            .map(|s| SlotSummary {
                index: s.index,
                offset: s.offset,
                status: match s.verdict {
                    SlotVerdict::Valid { consistent: true } => "valid",
                    SlotVerdict::Valid { consistent: false } => "inconsistent",
                    SlotVerdict::BadMarker { .. } => "bad_marker",
                    SlotVerdict::BadChecksum { .. } => "bad_checksum",
                },
            })
            .collect();
        summary.serialize(serializer)
    }
}

/// Check that a save buffer is long enough to hold every slot
pub fn check_len(save: &[u8]) -> Result<(), SaveError> {
    if save.len() < MIN_SAVE_LEN {
        return Err(too_short(save));
    }
    Ok(())
}

fn too_short(save: &[u8]) -> SaveError {
    SaveError::TooShort {
        len: save.len(),
        min: MIN_SAVE_LEN,
    }
}

/// Borrow the slot window starting at `offset`
pub fn slot_at(save: &[u8], offset: usize) -> Result<&SlotBytes, SaveError> {
    save.get(offset..)
        .and_then(|rest| rest.first_chunk::<SLOT_SIZE>())
        .ok_or_else(|| too_short(save))
}

fn slot_at_mut(save: &mut [u8], offset: usize) -> Result<&mut SlotBytes, SaveError> {
    let err = too_short(save);
    save.get_mut(offset..)
        .and_then(|rest| rest.first_chunk_mut::<SLOT_SIZE>())
        .ok_or(err)
}

/// Apply `edits` to each of the three slots and verify every one.
///
/// Length and edit bounds are checked before anything is written. A slot
/// that fails verification afterwards is logged and recorded in the report;
/// the remaining slots are still patched.
pub fn apply_to_all_slots(save: &mut [u8], edits: &[Edit]) -> Result<PatchReport, SaveError> {
    check_len(save)?;
    check_edits(edits)?;

    let mut slots = Vec::with_capacity(SLOT_COUNT);
    for (index, &offset) in SLOT_OFFSETS.iter().enumerate() {
        let slot = slot_at_mut(save, offset)?;
        apply_edits(slot, edits)?;
        let verdict = inspect_slot(slot);
        if !verdict.is_valid() {
            warn!("slot {index} at {offset:#05x} failed verification after patching: {verdict:?}");
        }
        slots.push(SlotReport {
            index,
            offset,
            verdict,
        });
    }
    Ok(PatchReport { slots })
}
