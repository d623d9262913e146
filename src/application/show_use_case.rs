// ============================================================
// Layer 2 — ShowUseCase
// ============================================================
// Loads a corpus through the same pipeline assembly as
// InspectUseCase, then prints one encoded sample by index —
// the quickest way to eyeball what the encoder actually
// produces for a given line of the CSV.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{anyhow, Result};
use burn::data::dataset::Dataset;

use crate::application::inspect_use_case::{build_pipeline, PipelineConfig};
use crate::domain::label::LabelSpace;

pub struct ShowUseCase {
    config: PipelineConfig,
    index:  usize,
}

impl ShowUseCase {
    pub fn new(config: PipelineConfig, index: usize) -> Self {
        Self { config, index }
    }

    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        let (dataset, resolved) = build_pipeline(cfg, &cfg.train_data_path)?;
        tracing::info!(
            "Resolved config: vocab_size={}, class_num={}",
            resolved.vocab_size,
            resolved.class_num
        );

        // Dataset::get returns None past the end — turn that into
        // a readable bounds error for the user
        let sample = dataset.get(self.index).ok_or_else(|| {
            anyhow!(
                "Index {} out of range — dataset has {} samples",
                self.index,
                dataset.sample_count()
            )
        })?;

        let label_name = LabelSpace::name(sample.label).unwrap_or("unknown");

        println!("Sample {}:", self.index);
        println!("  label:     {} ({})", sample.label, label_name);
        println!("  tokens:    {} real, {} padding",
            sample.token_count(),
            sample.input_ids.len() - sample.token_count(),
        );
        println!("  input_ids: {:?}", sample.input_ids);

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

    fn char_config(vocab: &NamedTempFile, data: &NamedTempFile) -> PipelineConfig {
        PipelineConfig {
            model_type:      "char".to_string(),
            vocab_path:      vocab.path().to_string_lossy().into_owned(),
            train_data_path: data.path().to_string_lossy().into_owned(),
            max_length:      4,
            ..Default::default()
        }
    }

    #[test]
    fn test_show_existing_sample() {
        let vocab = write_file("a\nb\n[UNK]\n");
        let data  = write_file("1,ab\n");

        ShowUseCase::new(char_config(&vocab, &data), 0).execute().unwrap();
    }

    #[test]
    fn test_show_out_of_range_index_fails() {
        let vocab = write_file("a\nb\n[UNK]\n");
        let data  = write_file("1,ab\n");

        let result = ShowUseCase::new(char_config(&vocab, &data), 5).execute();
        assert!(result.is_err());
    }
}
