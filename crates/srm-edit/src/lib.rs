//! srm-edit: command-line front end for the SRAM save editor
//!
//! The `srm-edit` binary parses arguments and dispatches to [`commands`].

pub mod args;
pub mod commands;

pub use args::InputArgs;
pub use commands::{describe, edit, plan, same_file, verify};
