// ============================================================
// Layer 4 — Review Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<ReviewSample>
// into stacked tensors.
//
// What is a Batcher?
//   A Batcher takes a list of individual samples and stacks
//   them into a single batch tensor. The DataLoader decides
//   WHICH samples form a batch (and the final batch may be
//   shorter than batch_size); the Batcher only does the
//   stacking.
//
// How batching works here:
//   Input:  Vec of N ReviewSamples, each with max_length ids
//   Output: ReviewBatch with tensors [N, max_length] and [N, 1]
//
//   We flatten all input_ids into one long Vec, then reshape:
//   [s1_t1, ..., s1_tL, s2_t1, ..., sN_tL] → [N, L]
//
// Why is this easy here?
//   Because every sequence is already padded to the same length
//   by the SentenceEncoder. If they weren't, we'd need dynamic
//   padding here.
//
// Reference: Burn Book §4 (Batcher)
//            Rust Book §8 (Vectors)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::domain::sample::ReviewSample;

// ─── ReviewBatch ──────────────────────────────────────────────────────────────
/// A batch of encoded review samples ready for a classifier's
/// forward pass. All tensors have batch_size as their first
/// dimension.
///
/// B is the Burn Backend (e.g. NdArray, Wgpu) —
/// generic so the same batcher works on any device.
#[derive(Debug, Clone)]
pub struct ReviewBatch<B: Backend> {
    /// Token id sequences — shape: [batch_size, max_length]
    /// Each row is one sample's input_ids
    pub input_ids: Tensor<B, 2, Int>,

    /// Class labels — shape: [batch_size, 1]
    /// One integer per sample
    pub labels: Tensor<B, 2, Int>,
}

// ─── ReviewBatcher ────────────────────────────────────────────────────────────
/// The batcher struct — holds the target device so tensors
/// are created in the correct place.
#[derive(Clone, Debug)]
pub struct ReviewBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> ReviewBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

// ─── Burn Batcher Trait Implementation ────────────────────────────────────────
// This is what makes ReviewBatcher work with Burn's DataLoader.
// The DataLoader calls .batch(items) with each mini-batch.
impl<B: Backend> Batcher<ReviewSample, ReviewBatch<B>> for ReviewBatcher<B> {
    fn batch(&self, items: Vec<ReviewSample>) -> ReviewBatch<B> {
        let batch_size = items.len();
        // All sequences have the same length (pre-padded).
        // The DataLoader never emits an empty batch, but an empty
        // Vec still stacks into a [0, 0] tensor rather than panicking.
        let seq_len = items.first().map_or(0, |s| s.input_ids.len());

        // ── Flatten input_ids ─────────────────────────────────────────────────
        // Vec<Vec<u32>> → Vec<i32> (Burn uses i32 for Int tensors)
        let input_flat: Vec<i32> = items
            .iter()
            .flat_map(|s| s.input_ids.iter().map(|&x| x as i32))
            .collect();

        // ── Collect labels ────────────────────────────────────────────────────
        let label_flat: Vec<i32> = items
            .iter()
            .map(|s| s.label as i32)
            .collect();

        // ── Create tensors ────────────────────────────────────────────────────
        // Tensor::from_ints creates a 1D tensor from a slice,
        // then .reshape() gives it the 2D shape [batch, len]

        let input_ids = Tensor::<B, 1, Int>::from_ints(
            input_flat.as_slice(), &self.device
        ).reshape([batch_size, seq_len]);

        // Labels become a [batch_size, 1] column so they stack
        // the same way the sequences do
        let labels = Tensor::<B, 1, Int>::from_ints(
            label_flat.as_slice(), &self.device
        ).reshape([batch_size, 1]);

        ReviewBatch { input_ids, labels }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_batch_shapes() {
        let batcher = ReviewBatcher::<TestBackend>::new(Default::default());

        let items = vec![
            ReviewSample::new(vec![1, 2, 0, 0], 1),
            ReviewSample::new(vec![1, 2, 3, 0], 0),
        ];

        let batch = batcher.batch(items);
        assert_eq!(batch.input_ids.dims(), [2, 4]);
        assert_eq!(batch.labels.dims(), [2, 1]);
    }

    #[test]
    fn test_rows_keep_sample_order() {
        let batcher = ReviewBatcher::<TestBackend>::new(Default::default());

        let items = vec![
            ReviewSample::new(vec![5, 6], 1),
            ReviewSample::new(vec![7, 8], 0),
        ];

        let batch = batcher.batch(items);
        let values = batch.input_ids.into_data().convert::<i32>().value;
        assert_eq!(values, vec![5, 6, 7, 8]);

        let labels = batch.labels.into_data().convert::<i32>().value;
        assert_eq!(labels, vec![1, 0]);
    }

    #[test]
    fn test_empty_batch_does_not_panic() {
        let batcher = ReviewBatcher::<TestBackend>::new(Default::default());

        let batch = batcher.batch(Vec::new());
        assert_eq!(batch.input_ids.dims(), [0, 0]);
        assert_eq!(batch.labels.dims(), [0, 1]);
    }

    #[test]
    fn test_short_final_batch() {
        // The DataLoader may hand over fewer than batch_size items
        let batcher = ReviewBatcher::<TestBackend>::new(Default::default());

        let items = vec![ReviewSample::new(vec![1, 0, 0], 1)];
        let batch = batcher.batch(items);
        assert_eq!(batch.input_ids.dims(), [1, 3]);
        assert_eq!(batch.labels.dims(), [1, 1]);
    }
}
