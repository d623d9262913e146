// ============================================================
// Layer 4 — Review Dataset
// ============================================================
// Reads the whole CSV corpus at construction time, encodes
// every line into a ReviewSample, and exposes the result
// through Burn's Dataset trait (get + len) so the DataLoader
// can shuffle and batch it.
//
// Line format (no header, no quoting):
//   <integer label>,<review text>
//
// The split is deliberately strict: the line is split on ','
// and the first two fields are taken as (label, text). A text
// that itself contains a comma is therefore silently cut off
// at its next comma — the upstream corpus format promises
// comma-free text, and we reproduce the strict behaviour
// rather than invent quoting rules the format doesn't have.
// A line with no comma at all is a hard parse error.
//
// Construction is eager and synchronous: the dataset is not
// usable until every line has been read and encoded. After
// that, samples are immutable, so concurrent read access from
// multi-worker loaders is safe.
//
// Reference: Burn Book §4 (Datasets)
//            Rust Book §9 (Error Handling)

use anyhow::{anyhow, Context, Result};
use burn::data::dataset::Dataset;
use std::fs;
use std::path::Path;

use crate::data::vocab::Vocabulary;
use crate::domain::label::LabelSpace;
use crate::domain::sample::ReviewSample;
use crate::domain::traits::SentenceEncoder;

// ─── ResolvedConfig ───────────────────────────────────────────────────────────
/// Values discovered while building a dataset, returned to the
/// caller explicitly instead of being written back into shared
/// configuration state. The caller merges them into its config.
///
///   vocab_size — entry count of the character vocabulary.
///                Set unconditionally, even under the subword
///                strategy where only the tokenizer's own vocab
///                is actually used for encoding.
///   class_num  — size of the fixed label space (2 here).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub vocab_size: usize,
    pub class_num:  usize,
}

// ─── ReviewDataset ────────────────────────────────────────────────────────────
/// An insertion-ordered, in-memory collection of encoded samples.
pub struct ReviewDataset {
    samples: Vec<ReviewSample>,
}

impl ReviewDataset {
    /// Read and encode an entire CSV corpus.
    ///
    /// Every line must parse — a missing comma, a non-integer
    /// label, or an unreadable file aborts construction with an
    /// error naming the offending line. Unknown characters are
    /// NOT errors; the encoder substitutes them internally.
    pub fn from_csv(
        path:    impl AsRef<Path>,
        encoder: &dyn SentenceEncoder,
        vocab:   &Vocabulary,
    ) -> Result<(Self, ResolvedConfig)> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read data file '{}'", path.display()))?;

        let mut samples = Vec::new();

        for (line_no, line) in content.lines().enumerate() {
            let sample = parse_line(line, encoder)
                .with_context(|| format!("Line {} of '{}'", line_no + 1, path.display()))?;
            samples.push(sample);
        }

        let resolved = ResolvedConfig {
            vocab_size: vocab.len(),
            class_num:  LabelSpace::class_count(),
        };

        tracing::info!(
            "Loaded {} samples from '{}' (vocab_size={}, class_num={})",
            samples.len(),
            path.display(),
            resolved.vocab_size,
            resolved.class_num,
        );

        Ok((Self { samples }, resolved))
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

// ─── Burn Dataset Trait Implementation ────────────────────────────────────────
// This is the index/length contract the DataLoader consumes.
// Out-of-range access surfaces as None at this seam.
impl Dataset<ReviewSample> for ReviewDataset {
    fn get(&self, index: usize) -> Option<ReviewSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

// ─── Line parsing ─────────────────────────────────────────────────────────────
/// Split one CSV line into (label, text) and encode the text.
/// Takes exactly the first two comma-separated fields; anything
/// after a second comma is dropped with the rest of the line.
fn parse_line(line: &str, encoder: &dyn SentenceEncoder) -> Result<ReviewSample> {
    let mut fields = line.split(',');

    // split() always yields at least one field, even on ""
    let tag = fields.next().unwrap_or("");
    let text = fields
        .next()
        .ok_or_else(|| anyhow!("Missing ',' delimiter between label and text"))?;

    let label: i64 = tag
        .trim()
        .parse()
        .with_context(|| format!("Label '{tag}' is not an integer"))?;

    let input_ids = encoder.encode(text.trim())?;

    Ok(ReviewSample::new(input_ids, label))
}
