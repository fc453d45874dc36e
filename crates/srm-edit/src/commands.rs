//! The `verify`, `plan`, and `edit` subcommands
//!
//! Each command writes its human-facing output to `out` and returns an error
//! when the process should exit non-zero.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::{info, warn};

use srm_core::{SLOT_OFFSETS, SlotVerdict, generate_edited_save, plan_edits};
use srm_save::{default_output_path, load_save, write_save};

use crate::args::InputArgs;

/// One-line summary of a slot verdict
pub fn describe(verdict: &SlotVerdict) -> String {
    match verdict {
        SlotVerdict::Valid { consistent: true } => "ok".to_string(),
        SlotVerdict::Valid { consistent: false } => {
            "ok (checksum recomputation disagrees)".to_string()
        }
        SlotVerdict::BadMarker { found } => format!("bad static marker {found:#06x}"),
        SlotVerdict::BadChecksum { stored, total } => {
            format!("bad inverse checksum {stored:#06x} (total {total:#06x})")
        }
    }
}

/// True when both paths name the same file.
///
/// Paths that exist are compared after canonicalizing, so `./seed.srm`,
/// `dir/../seed.srm`, and symlinks all match the file they point at.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Print every slot's verdict; fails if any slot is bad
pub fn verify(save: &Path, out: &mut impl Write) -> Result<()> {
    let loaded =
        load_save(save).with_context(|| format!("Unable to load save {}", save.display()))?;
    for (i, (verdict, offset)) in loaded.verdicts.iter().zip(SLOT_OFFSETS).enumerate() {
        writeln!(out, "slot {i} @ {offset:#05x}: {}", describe(verdict))?;
    }
    if !loaded.is_valid() {
        bail!("{} has slots that fail verification", save.display());
    }
    Ok(())
}

/// Print the planned edits as a JSON array
pub fn plan(inputs: &InputArgs, out: &mut impl Write) -> Result<()> {
    let edits = plan_edits(&inputs.collect()?)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&edits)?)?;
    Ok(())
}

/// Write an edited copy of `baseline` and return where it went.
///
/// The output is written even when a slot fails verification afterwards; the
/// failure is still returned so the caller can exit non-zero.
pub fn edit(
    baseline: &Path,
    output: Option<PathBuf>,
    inputs: &InputArgs,
    out: &mut impl Write,
) -> Result<PathBuf> {
    let output = output.unwrap_or_else(|| default_output_path(baseline));
    if same_file(&output, baseline) {
        bail!("refusing to overwrite the baseline save {}", baseline.display());
    }

    let fields = inputs.collect()?;
    let loaded = load_save(baseline)
        .with_context(|| format!("Unable to load baseline {}", baseline.display()))?;
    if !loaded.is_valid() {
        warn!("baseline has bad slots: {:x?}", loaded.bad_slots());
    }

    let edited = generate_edited_save(&loaded.bytes, &fields)?;
    write_save(&output, &edited.bytes)
        .with_context(|| format!("Unable to write {}", output.display()))?;
    info!("{} edits written to {}", edited.edits.len(), output.display());

    edited
        .report
        .into_result()
        .with_context(|| format!("{} failed verification", output.display()))?;
    writeln!(out, "{}", output.display())?;
    Ok(output)
}
