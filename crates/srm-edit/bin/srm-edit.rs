//! SRAM save editor
//!
//! Main entry point: verify a save, preview the edits a set of field values
//! would make, or write an edited copy of a baseline save.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use srm_edit::{InputArgs, commands};

/// Edit a cartridge SRAM save while keeping every slot checksum valid
#[derive(Parser, Debug)]
#[command(name = "srm-edit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the static marker and checksum of every slot
    Verify {
        /// Save file to check
        save: PathBuf,
    },

    /// Print the edits the given field values produce, as JSON
    Plan {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Write an edited copy of a baseline save
    Edit {
        /// Baseline save file; never modified
        baseline: PathBuf,

        /// Output file (defaults to <baseline>-edited.<ext>)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        #[command(flatten)]
        inputs: InputArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Verify { save } => commands::verify(&save, &mut out),
        Command::Plan { inputs } => commands::plan(&inputs, &mut out),
        Command::Edit {
            baseline,
            output,
            inputs,
        } => commands::edit(&baseline, output, &inputs, &mut out).map(|_| ()),
    }
}
