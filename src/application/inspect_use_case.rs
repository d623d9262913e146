// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Orchestrates the full data pipeline in order:
//
//   Step 1: Load the character vocabulary   (Layer 4 - data)
//   Step 2: Select the encoding strategy    (Layer 4 - data)
//   Step 3: Read + encode the CSV corpus    (Layer 4 - data)
//   Step 4: Merge the resolved config values
//   Step 5: Build the shuffled DataLoader   (Burn)
//   Step 6: Report counts and batch shapes
//
// Steps 1–4 are shared with ShowUseCase through
// build_pipeline(), the single place where the concrete
// encoder is chosen.
//
// Reference: Burn Book §4 (Dataloaders)
//            Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use burn::data::dataloader::{DataLoader, DataLoaderBuilder};
use serde::{Deserialize, Serialize};

use crate::data::{
    batcher::ReviewBatcher,
    dataset::{ResolvedConfig, ReviewDataset},
    encoder::{CharEncoder, EncodingStrategy, SubwordEncoder},
    vocab::Vocabulary,
};
use crate::domain::traits::SentenceEncoder;
use crate::infra::tokenizer_store::TokenizerStore;

// A data pipeline has no gradients to track — the plain
// ndarray backend is all the inspection commands need.
type PipelineBackend = burn::backend::NdArray;

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// All hyperparameters for a data-loading run, in one flat
// serialisable struct. Most fields are pass-through values the
// pipeline itself never interprets — they ride along unmodified
// for the downstream trainer. The two resolved fields start at
// 0 and are filled in by apply() after dataset construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub model_path:          String,
    pub train_data_path:     String,
    pub valid_data_path:     String,
    pub vocab_path:          String,
    pub model_type:          String,
    pub max_length:          usize,
    pub hidden_size:         usize,
    pub kernel_size:         usize,
    pub num_layers:          usize,
    pub epoch:               usize,
    pub batch_size:          usize,
    pub pooling_style:       String,
    pub optimizer:           String,
    pub learning_rate:       f64,
    pub pretrain_model_path: String,
    pub seed:                u64,

    /// Resolved during dataset construction — 0 until apply()
    pub vocab_size: usize,
    /// Resolved during dataset construction — 0 until apply()
    pub class_num:  usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model_path:          "output".to_string(),
            train_data_path:     "data/train.csv".to_string(),
            valid_data_path:     "data/valid.csv".to_string(),
            vocab_path:          "chars.txt".to_string(),
            model_type:          "bert".to_string(),
            max_length:          30,
            hidden_size:         256,
            kernel_size:         3,
            num_layers:          2,
            epoch:               15,
            batch_size:          100,
            pooling_style:       "max".to_string(),
            optimizer:           "adam".to_string(),
            learning_rate:       1e-3,
            pretrain_model_path: "models/bert-base-chinese".to_string(),
            seed:                987,
            vocab_size:          0,
            class_num:           0,
        }
    }
}

impl PipelineConfig {
    /// Merge the values discovered during dataset construction.
    /// This is the explicit counterpart of what used to be a
    /// hidden write-back into shared config state — the caller
    /// decides when and where resolved values land.
    pub fn apply(&mut self, resolved: ResolvedConfig) {
        self.vocab_size = resolved.vocab_size;
        self.class_num  = resolved.class_num;
    }
}

// ─── Pipeline assembly ────────────────────────────────────────────────────────
/// Build the vocabulary, pick the encoder, and load one CSV
/// corpus. Shared by both use cases.
///
/// The strategy is chosen exactly once, here: "bert" selects
/// the pretrained subword tokenizer, every other model_type
/// falls back to the character vocabulary.
pub fn build_pipeline(
    cfg:       &PipelineConfig,
    data_path: &str,
) -> Result<(ReviewDataset, ResolvedConfig)> {
    // ── Step 1: Load the character vocabulary ─────────────────────────────────
    // Loaded unconditionally — even under the subword strategy
    // its entry count becomes the resolved vocab_size.
    let vocab = Vocabulary::from_file(&cfg.vocab_path)?;
    tracing::info!("Vocabulary loaded: {} tokens", vocab.len());

    // ── Step 2: Select the encoding strategy ──────────────────────────────────
    let encoder: Box<dyn SentenceEncoder> =
        match EncodingStrategy::from_model_type(&cfg.model_type) {
            EncodingStrategy::Subword => {
                tracing::info!("Encoding strategy: subword ({})", cfg.model_type);
                let store = TokenizerStore::new(&cfg.pretrain_model_path);
                Box::new(SubwordEncoder::new(store.load(cfg.max_length)?))
            }
            EncodingStrategy::Character => {
                tracing::info!("Encoding strategy: character ({})", cfg.model_type);
                Box::new(CharEncoder::new(vocab.clone(), cfg.max_length)?)
            }
        };

    // ── Step 3: Read and encode the corpus eagerly ────────────────────────────
    ReviewDataset::from_csv(data_path, encoder.as_ref(), &vocab)
}

// ─── InspectUseCase ───────────────────────────────────────────────────────────
/// Loads a corpus end to end and prints what the downstream
/// trainer would see: sample count, batch count, and the
/// tensor shapes of the first batch.
pub struct InspectUseCase {
    config: PipelineConfig,
}

impl InspectUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<()> {
        let mut cfg = self.config.clone();
        let data_path = cfg.train_data_path.clone();

        // ── Build the dataset and merge resolved values ───────────────────────
        let (dataset, resolved) = build_pipeline(&cfg, &data_path)?;
        cfg.apply(resolved);
        tracing::info!(
            "Resolved config: vocab_size={}, class_num={}",
            cfg.vocab_size,
            cfg.class_num
        );

        let sample_count = dataset.sample_count();
        // Final batch may be shorter, so round up
        let batch_count = sample_count.div_ceil(cfg.batch_size);

        // ── Shuffled DataLoader over the dataset ──────────────────────────────
        // The DataLoader owns batching and shuffling; we only
        // provide the Dataset contract and the Batcher.
        let device  = Default::default();
        let batcher = ReviewBatcher::<PipelineBackend>::new(device);
        let loader  = DataLoaderBuilder::new(batcher)
            .batch_size(cfg.batch_size)
            .shuffle(cfg.seed)
            .num_workers(1)
            .build(dataset);

        println!("Total samples: {sample_count}");
        println!("Total batches: {batch_count}");

        // One batch is enough to show the tensor shapes
        for batch in loader.iter() {
            println!("First batch:");
            println!("  input_ids shape: {:?}", batch.input_ids.dims());
            println!("  labels shape:    {:?}", batch.labels.dims());
            break;
        }

        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    /// A character-strategy config pointed at throwaway files
    fn char_config(vocab: &NamedTempFile, data: &NamedTempFile) -> PipelineConfig {
        PipelineConfig {
            model_type:      "char".to_string(),
            vocab_path:      vocab.path().to_string_lossy().into_owned(),
            train_data_path: data.path().to_string_lossy().into_owned(),
            max_length:      4,
            batch_size:      2,
            ..Default::default()
        }
    }

    #[test]
    fn test_build_pipeline_character_strategy() {
        let vocab = write_file("a\nb\n[UNK]\n");
        let data  = write_file("1,ab\n0,abc\n1,ba\n");
        let cfg   = char_config(&vocab, &data);

        let (dataset, resolved) = build_pipeline(&cfg, &cfg.train_data_path).unwrap();
        assert_eq!(dataset.sample_count(), 3);
        assert_eq!(resolved.vocab_size, 3);
        assert_eq!(resolved.class_num, 2);
    }

    #[test]
    fn test_apply_merges_resolved_values() {
        let mut cfg = PipelineConfig::default();
        assert_eq!(cfg.vocab_size, 0);
        assert_eq!(cfg.class_num, 0);

        cfg.apply(ResolvedConfig { vocab_size: 3, class_num: 2 });
        assert_eq!(cfg.vocab_size, 3);
        assert_eq!(cfg.class_num, 2);
    }

    #[test]
    fn test_pass_through_fields_survive_apply() {
        // The pipeline must not touch hyperparameters it doesn't interpret
        let mut cfg = PipelineConfig::default();
        cfg.apply(ResolvedConfig { vocab_size: 9, class_num: 2 });

        let defaults = PipelineConfig::default();
        assert_eq!(cfg.hidden_size, defaults.hidden_size);
        assert_eq!(cfg.epoch, defaults.epoch);
        assert_eq!(cfg.optimizer, defaults.optimizer);
        assert_eq!(cfg.seed, defaults.seed);
    }

    #[test]
    fn test_inspect_runs_end_to_end() {
        let vocab = write_file("a\nb\n[UNK]\n");
        let data  = write_file("1,ab\n0,abc\n1,ba\n");
        let cfg   = char_config(&vocab, &data);

        InspectUseCase::new(cfg).execute().unwrap();
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let cfg = PipelineConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: PipelineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_length, cfg.max_length);
        assert_eq!(back.model_type, cfg.model_type);
    }
}
