// ============================================================
// Layer 5 — Tokenizer Store
// ============================================================
// Loads the pretrained subword tokenizer used by the "bert"
// encoding strategy.
//
// The tokenizers crate reads the HuggingFace tokenizer.json
// format directly, so pointing this store at a downloaded
// bert-base model directory is enough — no Python, no
// transformers install.
//
// Truncation and padding are configured HERE, once, at load
// time. After that, every encode() call on the tokenizer
// returns exactly max_length ids: longer texts are truncated
// on the right, shorter ones padded on the right with the
// [PAD] id 0. The SubwordEncoder can stay a thin wrapper.
//
// Reference: tokenizers crate documentation
//            Devlin et al. (2019) - BERT paper

use anyhow::Result;
use std::path::PathBuf;
use tokenizers::{PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};

pub struct TokenizerStore {
    dir: PathBuf,
}

impl TokenizerStore {
    /// Point the store at a pretrained model directory
    /// (the one containing tokenizer.json)
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: PathBuf::from(dir.into()) }
    }

    /// Load the pretrained tokenizer and pin its truncation and
    /// fixed padding to `max_length`. Required only when the
    /// subword strategy is selected; a missing or unparsable
    /// tokenizer.json is fatal.
    pub fn load(&self, max_length: usize) -> Result<Tokenizer> {
        let path = self.dir.join("tokenizer.json");

        let mut tokenizer = Tokenizer::from_file(&path).map_err(|e| {
            anyhow::anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e)
        })?;

        // Truncate anything longer than max_length on the right
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length,
                ..Default::default()
            }))
            .map_err(|e| anyhow::anyhow!("Cannot configure truncation: {e}"))?;

        // Pad anything shorter up to exactly max_length.
        // The defaults already use pad_id 0 and the [PAD] token.
        tokenizer.with_padding(Some(PaddingParams {
            strategy: PaddingStrategy::Fixed(max_length),
            ..Default::default()
        }));

        tracing::info!(
            "Pretrained tokenizer loaded from '{}' (vocab_size={})",
            path.display(),
            tokenizer.get_vocab_size(true)
        );

        Ok(tokenizer)
    }
}
