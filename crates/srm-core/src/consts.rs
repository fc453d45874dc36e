//! Save file layout constants
//!
//! These describe the battery-backed SRAM image the cartridge writes:
//! three redundant copies of the same game state, each checksummed on its own.

/// Size of one save slot in bytes
pub const SLOT_SIZE: usize = 0x500;

/// Byte offsets of the three redundant slots within the save file
pub const SLOT_OFFSETS: [usize; 3] = [0x000, 0x500, 0xA00];

/// Number of redundant slots
pub const SLOT_COUNT: usize = SLOT_OFFSETS.len();

/// Smallest save file that holds all three slots
pub const MIN_SAVE_LEN: usize = SLOT_OFFSETS[SLOT_COUNT - 1] + SLOT_SIZE;

/// Length of the checksummed data region at the start of a slot
pub const DATA_LEN: usize = 0x4FE;

/// Offset of the 2-byte little-endian static marker
pub const STATIC_MARKER_OFFSET: usize = 0x3E1;

/// Value the static marker must hold for the slot to be trusted
pub const STATIC_MARKER: u16 = 0x55AA;

/// Offset of the 2-byte little-endian inverse checksum
pub const INVERSE_CHECKSUM_OFFSET: usize = DATA_LEN;

/// Data sum plus inverse checksum must equal this, mod 0x10000
pub const CHECKSUM_TARGET: u16 = 0x5A5A;

/// Bias the firmware subtracts the data sum from
pub const CHECKSUM_BIAS: u64 = 0x1_5A5A;

/// One slot as a fixed-size byte window
pub type SlotBytes = [u8; SLOT_SIZE];
