//! Edit planning and the top-level "generate edited save" request

use log::{debug, info, warn};

use crate::checksum::{SlotVerdict, inspect_slot};
use crate::consts::{SLOT_COUNT, SLOT_OFFSETS};
use crate::edit::EditList;
use crate::error::{EditError, FieldError, FieldErrorKind, SaveError};
use crate::fields::{FieldInputs, FieldName, RawValue, bottle_updates, field_specs};
use crate::writer::{PatchReport, apply_to_all_slots, check_len, slot_at};

fn required<'a>(inputs: &'a FieldInputs, name: FieldName) -> Result<&'a RawValue, FieldError> {
    inputs
        .get(name.as_ref())
        .ok_or_else(|| FieldError::new(name.to_string(), FieldErrorKind::MissingInput))
}

/// Run every field spec in table order, then the bottle rule.
///
/// Stops at the first missing or invalid input and returns it labeled with
/// the field name. Per-field edits keep their order; bottle edits come last.
pub fn plan_edits(inputs: &FieldInputs) -> Result<EditList, FieldError> {
    let mut edits = EditList::new();
    for spec in field_specs() {
        let raw = required(inputs, spec.name)?;
        let produced = spec
            .generate_edits(raw)
            .map_err(|kind| FieldError::new(spec.name.to_string(), kind))?;
        debug!("{} = {raw} -> {} edits", spec.name, produced.len());
        edits.extend(produced);
    }

    let tavern = required(inputs, FieldName::TavernBottle)?;
    let vendor = required(inputs, FieldName::VendorBottle)?;
    edits.extend(bottle_updates(tavern, vendor)?);
    Ok(edits)
}

/// An edited save, ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditedSave {
    pub bytes: Vec<u8>,
    pub edits: EditList,
    pub report: PatchReport,
}

/// Plan edits from `inputs` and apply them to a private copy of `baseline`.
///
/// Input errors are returned before any byte is copied or written. The
/// baseline is never modified. Slots that fail verification after patching
/// are logged and left in the report for the caller to act on.
pub fn generate_edited_save(
    baseline: &[u8],
    inputs: &FieldInputs,
) -> Result<EditedSave, EditError> {
    check_len(baseline)?;
    let edits = plan_edits(inputs)?;

    let mut bytes = baseline.to_vec();
    let report = apply_to_all_slots(&mut bytes, &edits)?;
    if report.is_clean() {
        info!("applied {} edits to {SLOT_COUNT} slots", edits.len());
    } else {
        warn!("edited save has slots that failed verification");
    }
    Ok(EditedSave {
        bytes,
        edits,
        report,
    })
}

/// Verify every slot of a save without changing it
pub fn verify_save(save: &[u8]) -> Result<[SlotVerdict; SLOT_COUNT], SaveError> {
    check_len(save)?;
    let mut verdicts = [SlotVerdict::Valid { consistent: true }; SLOT_COUNT];
    for (verdict, &offset) in verdicts.iter_mut().zip(SLOT_OFFSETS.iter()) {
        *verdict = inspect_slot(slot_at(save, offset)?);
        if !verdict.is_valid() {
            warn!("bad checksum in slot at {offset:#05x}");
        }
    }
    Ok(verdicts)
}
