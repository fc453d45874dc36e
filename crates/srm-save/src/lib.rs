//! srm-save: Save file and profile persistence for the SRAM editor
//!
//! Reads a baseline save from disk, writes edited saves back out, and
//! loads the JSON input profiles the editor fills its fields from.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use srm_core::{FieldInputs, SLOT_COUNT, SLOT_OFFSETS, SlotVerdict, verify_save};

/// Save/profile I/O errors
#[derive(Debug, Error)]
pub enum SaveIoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Profile error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error(transparent)]
    Save(#[from] srm_core::SaveError),
}

/// A save file read from disk, with each slot's verification result
#[derive(Debug, Clone)]
pub struct LoadedSave {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub verdicts: [SlotVerdict; SLOT_COUNT],
}

impl LoadedSave {
    /// Every slot passed verification
    pub fn is_valid(&self) -> bool {
        self.verdicts.iter().all(SlotVerdict::is_valid)
    }

    /// Offsets of slots that failed verification
    pub fn bad_slots(&self) -> Vec<usize> {
        self.verdicts
            .iter()
            .zip(SLOT_OFFSETS)
            .filter(|(v, _)| !v.is_valid())
            .map(|(_, offset)| offset)
            .collect()
    }
}

fn not_found(path: &Path, err: std::io::Error) -> SaveIoError {
    if err.kind() == std::io::ErrorKind::NotFound {
        SaveIoError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        SaveIoError::Io(err)
    }
}

/// Load a save file and sanity-check every slot.
///
/// A slot that fails verification is logged but does not stop the load.
pub fn load_save(path: impl AsRef<Path>) -> Result<LoadedSave, SaveIoError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| not_found(path, e))?;
    let verdicts = verify_save(&bytes)?;
    for (verdict, offset) in verdicts.iter().zip(SLOT_OFFSETS) {
        if !verdict.is_valid() {
            warn!("{}: bad checksum in slot at {offset:#05x}", path.display());
        }
    }
    Ok(LoadedSave {
        path: path.to_path_buf(),
        bytes,
        verdicts,
    })
}

/// Write save bytes to a file
pub fn write_save(path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), SaveIoError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;
    info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Load field inputs from a JSON profile
pub fn load_profile(path: impl AsRef<Path>) -> Result<FieldInputs, SaveIoError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| not_found(path, e))?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Where the editor looks for a profile when none is given
pub fn default_profile_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("srm-edit");
    path.push("profile.json");
    path
}

/// `<stem>-edited.<ext>` next to the baseline, so the baseline is never overwritten
pub fn default_output_path(baseline: &Path) -> PathBuf {
    let stem = baseline
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "save".to_string());
    let name = match baseline.extension() {
        Some(ext) => format!("{stem}-edited.{}", ext.to_string_lossy()),
        None => format!("{stem}-edited"),
    };
    baseline.with_file_name(name)
}
