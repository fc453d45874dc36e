//! Field specs: parse one raw input, then turn it into slot edits

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::addresses::{address_of, room_address_of};
use crate::edit::{Edit, EditList};
use crate::error::FieldErrorKind;
use crate::fields::input::RawValue;

/// Names of every external input the planner consumes
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Arrows,
    Bombs,
    Rupees,
    SancHeart,
    HeartRefill,
    BugNet,
    Mushroom,
    TavernBottle,
    VendorBottle,
}

/// Heart count (with the sanctuary heart applied) to spawn-in health, in hearts
pub const SPAWN_IN_HEALTH: &[(u8, u8)] = &[(6, 4), (7, 5), (10, 6), (11, 7)];

/// Health bytes store hearts as eighths
pub const HEALTH_PER_HEART: u8 = 8;

/// The game's full heart refill amount.
///
/// The heart refill field computes this but writes the raw checkbox value;
/// kept for reference and not applied.
pub const HEART_REFILL_AMOUNT: u8 = 0xA0;

/// Sanctuary room flag bit for the collected heart container
pub const SANCTUARY_HEART_FLAG_SHIFT: u32 = 4;

/// Spawn-in health, in hearts, for a total heart count
pub fn spawn_in_health(hps: u8) -> Option<u8> {
    SPAWN_IN_HEALTH
        .iter()
        .find(|&&(h, _)| h == hps)
        .map(|&(_, units)| units)
}

/// Mushroom slot contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum MushroomState {
    #[default]
    Other = 0,
    Mushroom = 1,
    Powder = 2,
}

impl MushroomState {
    /// Anything other than `mushroom` or `powder` leaves the slot empty
    pub fn from_selection(s: &str) -> Self {
        match s {
            "mushroom" => MushroomState::Mushroom,
            "powder" => MushroomState::Powder,
            _ => MushroomState::Other,
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// A parsed, range-checked field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Byte(u8),
    Flag(bool),
    Heart { hps_without: u8, checked: bool },
    Selection(String),
}

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Full range of a byte
    pub const BYTE: Bounds = Bounds::new(0, u8::MAX as i64);

    fn check(self, value: i64) -> Result<u8, FieldErrorKind> {
        if value < self.min || value > self.max {
            return Err(FieldErrorKind::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        u8::try_from(value).map_err(|_| FieldErrorKind::OutOfRange {
            value,
            min: 0,
            max: i64::from(u8::MAX),
        })
    }
}

/// How a field reads its raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parser {
    /// Decimal number checked against the field's bounds
    Numeric(Bounds),
    /// Checkbox
    Checked,
    /// Base heart count plus checkbox
    SancHeart,
    /// Enumerated selection, lowercased
    Selected,
}

fn parse_number(raw: &RawValue) -> Result<i64, FieldErrorKind> {
    match raw {
        RawValue::Number(n) => Ok(*n),
        RawValue::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| FieldErrorKind::ParseFailure(format!("{s:?} is not a number: {e}"))),
        RawValue::Other(serde_json::Value::Number(n)) => n
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
            .ok_or_else(|| FieldErrorKind::ParseFailure(format!("{n} is not a whole number"))),
        other => Err(FieldErrorKind::ParseFailure(format!(
            "expected a number, got {other}"
        ))),
    }
}

fn parse_flag(raw: &RawValue) -> Result<bool, FieldErrorKind> {
    match raw {
        RawValue::Flag(b) => Ok(*b),
        RawValue::Number(0) => Ok(false),
        RawValue::Number(1) => Ok(true),
        RawValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(true),
            "false" | "off" | "no" | "0" => Ok(false),
            _ => Err(FieldErrorKind::ParseFailure(format!(
                "{s:?} is not a checkbox value"
            ))),
        },
        other => Err(FieldErrorKind::ParseFailure(format!(
            "expected a checkbox value, got {other}"
        ))),
    }
}

pub(crate) fn parse_selection(raw: &RawValue) -> Result<String, FieldErrorKind> {
    match raw {
        RawValue::Text(s) => Ok(s.trim().to_ascii_lowercase()),
        other => Err(FieldErrorKind::ParseFailure(format!(
            "expected a selection, got {other}"
        ))),
    }
}

impl Parser {
    pub fn parse(self, raw: &RawValue) -> Result<FieldValue, FieldErrorKind> {
        match self {
            Parser::Numeric(bounds) => bounds.check(parse_number(raw)?).map(FieldValue::Byte),
            Parser::Checked => parse_flag(raw).map(FieldValue::Flag),
            Parser::SancHeart => match raw {
                RawValue::Heart {
                    hps_without,
                    checked,
                } => Ok(FieldValue::Heart {
                    hps_without: Bounds::BYTE.check(parse_number(hps_without)?)?,
                    checked: *checked,
                }),
                other => Err(FieldErrorKind::ParseFailure(format!(
                    "expected a heart count and checkbox, got {other}"
                ))),
            },
            Parser::Selected => parse_selection(raw).map(FieldValue::Selection),
        }
    }
}

/// Turns a parsed value into edits
pub type Producer = fn(FieldValue) -> Result<EditList, FieldErrorKind>;

/// One entry of the field table
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: FieldName,
    pub parser: Parser,
    pub produce: Producer,
}

impl FieldSpec {
    /// Parse, range-check, and transform one raw input
    pub fn generate_edits(&self, raw: &RawValue) -> Result<EditList, FieldErrorKind> {
        let value = self.parser.parse(raw)?;
        (self.produce)(value)
    }
}

fn unexpected(value: &FieldValue) -> FieldErrorKind {
    FieldErrorKind::ProductionFailure(format!("unexpected value {value:?}"))
}

fn as_byte(value: FieldValue) -> Result<u8, FieldErrorKind> {
    match value {
        FieldValue::Byte(b) => Ok(b),
        FieldValue::Flag(b) => Ok(u8::from(b)),
        other => Err(unexpected(&other)),
    }
}

/// Single byte write at a named address
pub fn write_named(name: &str, value: FieldValue) -> Result<EditList, FieldErrorKind> {
    let addr = address_of(name)
        .ok_or_else(|| FieldErrorKind::ProductionFailure(format!("no address named {name}")))?;
    Ok(vec![Edit::new(addr, as_byte(value)?)])
}

fn produce_arrows(value: FieldValue) -> Result<EditList, FieldErrorKind> {
    write_named("arrows", value)
}

fn produce_bombs(value: FieldValue) -> Result<EditList, FieldErrorKind> {
    write_named("bombs", value)
}

fn produce_bug_net(value: FieldValue) -> Result<EditList, FieldErrorKind> {
    write_named("bug_net", value)
}

/// Rupees are mirrored into the display counter
fn produce_rupees(value: FieldValue) -> Result<EditList, FieldErrorKind> {
    let mut edits = write_named("rupees", value.clone())?;
    edits.extend(write_named("rupee_disp", value)?);
    Ok(edits)
}

// Writes the checkbox itself, not HEART_REFILL_AMOUNT.
fn produce_heart_refill(value: FieldValue) -> Result<EditList, FieldErrorKind> {
    write_named("heart_refill", value)
}

fn produce_sanc_heart(value: FieldValue) -> Result<EditList, FieldErrorKind> {
    let FieldValue::Heart {
        hps_without,
        checked,
    } = value
    else {
        return Err(unexpected(&value));
    };
    let hps = hps_without
        .checked_add(u8::from(checked))
        .ok_or_else(|| FieldErrorKind::ProductionFailure("heart count overflows".into()))?;
    let units = spawn_in_health(hps).ok_or_else(|| {
        FieldErrorKind::ProductionFailure(format!("no spawn-in health for {hps} hearts"))
    })?;
    let health = units * HEALTH_PER_HEART;
    let sanc = room_address_of("sanc")
        .ok_or_else(|| FieldErrorKind::ProductionFailure("no room named sanc".into()))?;
    let flag = (0xFFFF & (u32::from(checked) << SANCTUARY_HEART_FLAG_SHIFT)) as u8;

    let mut edits = write_named("max_health", FieldValue::Byte(health))?;
    edits.push(Edit::new(sanc, flag));
    edits.extend(write_named("current_health", FieldValue::Byte(health))?);
    Ok(edits)
}

fn produce_mushroom(value: FieldValue) -> Result<EditList, FieldErrorKind> {
    let FieldValue::Selection(s) = value else {
        return Err(unexpected(&value));
    };
    write_named(
        "mushroom",
        FieldValue::Byte(MushroomState::from_selection(&s).code()),
    )
}

static FIELD_SPECS: [FieldSpec; 7] = [
    FieldSpec {
        name: FieldName::Arrows,
        parser: Parser::Numeric(Bounds::new(0, 30)),
        produce: produce_arrows,
    },
    FieldSpec {
        name: FieldName::Bombs,
        parser: Parser::Numeric(Bounds::new(0, 5)),
        produce: produce_bombs,
    },
    FieldSpec {
        name: FieldName::Rupees,
        parser: Parser::Numeric(Bounds::new(0, 250)),
        produce: produce_rupees,
    },
    FieldSpec {
        name: FieldName::SancHeart,
        parser: Parser::SancHeart,
        produce: produce_sanc_heart,
    },
    FieldSpec {
        name: FieldName::HeartRefill,
        parser: Parser::Checked,
        produce: produce_heart_refill,
    },
    FieldSpec {
        name: FieldName::BugNet,
        parser: Parser::Checked,
        produce: produce_bug_net,
    },
    FieldSpec {
        name: FieldName::Mushroom,
        parser: Parser::Selected,
        produce: produce_mushroom,
    },
];

/// The table-driven fields, in planner order
pub fn field_specs() -> &'static [FieldSpec] {
    &FIELD_SPECS
}

/// Look up a field spec by name
pub fn field_spec(name: FieldName) -> Option<&'static FieldSpec> {
    FIELD_SPECS.iter().find(|spec| spec.name == name)
}
