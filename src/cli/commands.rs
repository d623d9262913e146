// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `inspect` and `show`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Flag defaults mirror the stock pipeline configuration, so
// running with no flags inspects data/train.csv with the
// bert strategy exactly as the downstream trainer would.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::inspect_use_case::PipelineConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a corpus and report sample count, batch count, and batch shapes
    Inspect(InspectArgs),

    /// Print one encoded sample by index
    Show(ShowArgs),
}

/// All arguments for the `inspect` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// CSV corpus to load, one `<label>,<text>` line per sample
    #[arg(long, default_value = "data/train.csv")]
    pub data_path: String,

    /// Newline-delimited character vocabulary file
    #[arg(long, default_value = "chars.txt")]
    pub vocab_path: String,

    /// Encoding strategy selector — "bert" uses the pretrained
    /// subword tokenizer, any other value uses the character vocabulary
    #[arg(long, default_value = "bert")]
    pub model_type: String,

    /// Pretrained model directory holding tokenizer.json
    /// (only read when --model-type is "bert")
    #[arg(long, default_value = "models/bert-base-chinese")]
    pub pretrain_model_path: String,

    /// Fixed token-id sequence length every sample is padded/truncated to
    #[arg(long, default_value_t = 30)]
    pub max_length: usize,

    /// Number of samples stacked into one batch
    #[arg(long, default_value_t = 100)]
    pub batch_size: usize,

    /// Shuffle seed for the DataLoader
    #[arg(long, default_value_t = 987)]
    pub seed: u64,
}

/// Convert CLI InspectArgs into the application-layer PipelineConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types. Fields without
/// a flag keep their stock defaults.
impl From<InspectArgs> for PipelineConfig {
    fn from(a: InspectArgs) -> Self {
        PipelineConfig {
            train_data_path:     a.data_path,
            vocab_path:          a.vocab_path,
            model_type:          a.model_type,
            pretrain_model_path: a.pretrain_model_path,
            max_length:          a.max_length,
            batch_size:          a.batch_size,
            seed:                a.seed,
            ..Default::default()
        }
    }
}

/// All arguments for the `show` command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Zero-based index of the sample to print
    #[arg(long, default_value_t = 0)]
    pub index: usize,

    /// CSV corpus to load
    #[arg(long, default_value = "data/train.csv")]
    pub data_path: String,

    /// Newline-delimited character vocabulary file
    #[arg(long, default_value = "chars.txt")]
    pub vocab_path: String,

    /// Encoding strategy selector (see `inspect`)
    #[arg(long, default_value = "bert")]
    pub model_type: String,

    /// Pretrained model directory holding tokenizer.json
    #[arg(long, default_value = "models/bert-base-chinese")]
    pub pretrain_model_path: String,

    /// Fixed token-id sequence length
    #[arg(long, default_value_t = 30)]
    pub max_length: usize,
}

impl From<ShowArgs> for PipelineConfig {
    fn from(a: ShowArgs) -> Self {
        PipelineConfig {
            train_data_path:     a.data_path,
            vocab_path:          a.vocab_path,
            model_type:          a.model_type,
            pretrain_model_path: a.pretrain_model_path,
            max_length:          a.max_length,
            ..Default::default()
        }
    }
}
