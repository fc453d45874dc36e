//! Starting bottles from the tavern chest and the vendor

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use crate::addresses::{self, rooms};
use crate::edit::{Edit, EditList};
use crate::error::{FieldError, FieldErrorKind};
use crate::fields::input::RawValue;
use crate::fields::spec::{FieldName, parse_selection};

/// Tavern room flags: chest opened plus the quadrants seen on the way in.
/// 0x1A = 0b11010
pub const TAVERN_CHEST_FLAGS: u8 = 0x1A;

/// Progress flag for "bottle bought from vendor"; no other bit may be set here
pub const VENDOR_BOTTLE_FLAG: u8 = 0x2;

/// Bottle contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum BottleState {
    #[strum(to_string = "none", serialize = "no")]
    None = 0,
    Empty = 2,
    Red = 3,
    Fairy = 6,
    Bee = 7,
}

impl BottleState {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

fn parse_bottle(raw: &RawValue, which: &str) -> Result<BottleState, FieldErrorKind> {
    let s = parse_selection(raw)?;
    BottleState::from_str(&s).map_err(|_| {
        FieldErrorKind::ProductionFailure(format!("invalid value for {which} bottle: {s:?}"))
    })
}

/// Edits for the two starting bottles.
///
/// Bottle slots are handed out in order, tavern first, so two real bottles
/// never share an address.
pub fn bottle_edits(tavern: BottleState, vendor: BottleState) -> Result<EditList, FieldErrorKind> {
    if tavern == BottleState::Red && vendor == BottleState::Red {
        return Err(FieldErrorKind::ConflictingState(
            "starting with 2 red potions is not allowed".into(),
        ));
    }

    let mut free = vec![addresses::BOTTLE_2, addresses::BOTTLE_1];
    let mut edits = EditList::new();
    if tavern != BottleState::None {
        if let Some(addr) = free.pop() {
            edits.push(Edit::new(addr, tavern.code()));
        }
        edits.push(Edit::new(rooms::TAVERN, TAVERN_CHEST_FLAGS));
    }
    if vendor != BottleState::None {
        if let Some(addr) = free.pop() {
            edits.push(Edit::new(addr, vendor.code()));
        }
        edits.push(Edit::new(addresses::PROGRESS_FLAGS, VENDOR_BOTTLE_FLAG));
    }
    Ok(edits)
}

/// Parse both bottle inputs and produce their edits, labeling any error.
pub fn bottle_updates(tavern: &RawValue, vendor: &RawValue) -> Result<EditList, FieldError> {
    let label = |name: FieldName| {
        move |kind: FieldErrorKind| FieldError::new(name.to_string(), kind)
    };

    let tavern_state = parse_bottle(tavern, "tavern").map_err(label(FieldName::TavernBottle))?;
    let vendor_state = parse_bottle(vendor, "vendor").map_err(label(FieldName::VendorBottle))?;
    bottle_edits(tavern_state, vendor_state).map_err(|kind| FieldError::new("bottles", kind))
}
