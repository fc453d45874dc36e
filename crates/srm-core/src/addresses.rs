//! Slot-relative addresses of the fields the editor touches
//!
//! Only the handful of WRAM mirrors needed for the supported edits are here.

pub const ARROWS: usize = 0x377;
pub const BOMBS: usize = 0x343;
/// Low byte only; enough for the rupee counts the editor allows
pub const RUPEES: usize = 0x360;
/// Displayed rupee counter, kept in step with [`RUPEES`]
pub const RUPEE_DISP: usize = 0x362;
/// 0 none, 1 mushroom, 2 magic powder
pub const MUSHROOM: usize = 0x344;
pub const MAX_HEALTH: usize = 0x36C;
/// Health the player spawns in with
pub const CURRENT_HEALTH: usize = 0x36D;
pub const BUG_NET: usize = 0x34D;
pub const BOTTLE_1: usize = 0x35C;
pub const BOTTLE_2: usize = 0x35D;
pub const HEART_REFILL: usize = 0x372;
/// Only the "bottle bought from vendor" bit may be set through the editor
pub const PROGRESS_FLAGS: usize = 0x3C9;

/// Room state bytes (low byte, `ccccqqqq`)
pub mod rooms {
    pub const SANCTUARY: usize = 0x24;
    pub const TAVERN: usize = 0x206;
}

const NAMED: &[(&str, usize)] = &[
    ("arrows", ARROWS),
    ("bombs", BOMBS),
    ("rupees", RUPEES),
    ("rupee_disp", RUPEE_DISP),
    ("mushroom", MUSHROOM),
    ("max_health", MAX_HEALTH),
    ("current_health", CURRENT_HEALTH),
    ("bug_net", BUG_NET),
    ("bottle_1", BOTTLE_1),
    ("bottle_2", BOTTLE_2),
    ("heart_refill", HEART_REFILL),
    ("progress_flags", PROGRESS_FLAGS),
];

const ROOMS: &[(&str, usize)] = &[("sanc", rooms::SANCTUARY), ("tavern", rooms::TAVERN)];

/// Look up a field address by name
pub fn address_of(name: &str) -> Option<usize> {
    NAMED.iter().find(|(n, _)| *n == name).map(|&(_, a)| a)
}

/// Look up a room-flag address by room name
pub fn room_address_of(room: &str) -> Option<usize> {
    ROOMS.iter().find(|(n, _)| *n == room).map(|&(_, a)| a)
}
