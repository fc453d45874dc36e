//! srm-core: Save slot codec and edit planner for the SRAM editor
//!
//! This crate contains all editing logic with no I/O dependencies.
//! Callers hand it an already-loaded save buffer and a set of field inputs;
//! it hands back a new buffer whose three redundant slots all carry the
//! requested edits and a valid checksum.
//!
//! The pipeline runs leaves first:
//!
//! - **checksum** – 16-bit word sum, inverse checksum, per-slot verification
//! - **slot** – apply a batch of [`Edit`]s to one slot and re-checksum it
//! - **writer** – replicate a batch across all three slots and verify each
//! - **fields** – table of field specs turning one raw input into edits
//! - **planner** – run every field spec plus the bottle rule into one edit list

pub mod addresses;
pub mod checksum;
pub mod fields;
pub mod planner;
pub mod slot;
pub mod writer;

mod consts;
mod edit;
mod error;

pub use checksum::{SlotVerdict, compute_inverse_checksum, inspect_slot, sum16, verify_slot};
pub use consts::*;
pub use edit::{Edit, EditList};
pub use error::{EditError, FieldError, FieldErrorKind, SaveError};
pub use fields::{FieldInputs, FieldName, RawValue};
pub use planner::{EditedSave, generate_edited_save, plan_edits, verify_save};
pub use slot::apply_edits;
pub use writer::{PatchReport, SlotReport, apply_to_all_slots};
