// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `inspect` — loads a corpus and reports counts + batch shapes
//   2. `show`    — prints one encoded sample by index
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, ShowArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "review-dataset",
    version = "0.1.0",
    about = "Encode a labelled review CSV into fixed-length token-id batches."
)]
pub struct Cli {
    /// The subcommand to run (inspect or show)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    ///
    /// Matching moves the argument payload out of `self`, so the
    /// handlers are associated functions taking only the args —
    /// they never needed the Cli value anyway.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Inspect(args) => Self::run_inspect(args),
            Commands::Show(args)    => Self::run_show(args),
        }
    }

    /// Handles the `inspect` subcommand.
    /// Converts CLI args into a PipelineConfig and hands off to Layer 2.
    fn run_inspect(args: InspectArgs) -> Result<()> {
        use crate::application::inspect_use_case::InspectUseCase;

        tracing::info!("Inspecting dataset at: {}", args.data_path);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = InspectUseCase::new(args.into());
        use_case.execute()?;

        Ok(())
    }

    /// Handles the `show` subcommand.
    /// Builds the dataset and prints the sample at the requested index.
    fn run_show(args: ShowArgs) -> Result<()> {
        use crate::application::show_use_case::ShowUseCase;

        let index = args.index;
        let use_case = ShowUseCase::new(args.into(), index);
        use_case.execute()?;

        Ok(())
    }
}
