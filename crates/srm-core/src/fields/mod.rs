//! Field pipeline: raw inputs to slot edits
//!
//! Each supported field is one [`FieldSpec`] in a fixed table. A spec parses
//! its raw input (range checks happen here), then produces zero or more
//! [`Edit`](crate::Edit)s. The two bottle inputs are handled together by
//! [`bottle_updates`] since they share the bottle slots.

mod bottles;
mod input;
mod spec;

pub use bottles::{
    BottleState, TAVERN_CHEST_FLAGS, VENDOR_BOTTLE_FLAG, bottle_edits, bottle_updates,
};
pub use input::{FieldInputs, RawValue};
pub use spec::{
    Bounds, FieldName, FieldSpec, FieldValue, HEALTH_PER_HEART, HEART_REFILL_AMOUNT,
    MushroomState, Parser, Producer, SANCTUARY_HEART_FLAG_SHIFT, SPAWN_IN_HEALTH, field_spec,
    field_specs, spawn_in_health, write_named,
};
