// ============================================================
// Layer 3 — ReviewSample Domain Type
// ============================================================
// Represents a single encoded training sample in domain terms.
// This is the core unit of text classification:
//   - We have a piece of review text, encoded as token ids
//   - We have an integer class label (0 = negative, 1 = positive)
//
// By the time a ReviewSample exists, all the variable-length
// messiness of raw text is gone: every sample carries EXACTLY
// `max_length` token ids, padded with PAD_ID on the right.
// That fixed shape is what lets the batcher stack samples
// into rectangular tensors without any per-batch padding.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// The reserved padding id. The vocabulary loader never assigns
/// it to a real token — positions past the end of the text hold
/// this value so every sequence reaches the fixed length.
pub const PAD_ID: u32 = 0;

/// One fully encoded and padded training sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSample {
    /// Token id sequence — always exactly `max_length` entries,
    /// right-padded with PAD_ID
    pub input_ids: Vec<u32>,

    /// Class index parsed from the CSV label field
    pub label: i64,
}

impl ReviewSample {
    /// Create a new sample from an already fixed-length id sequence
    pub fn new(input_ids: Vec<u32>, label: i64) -> Self {
        Self { input_ids, label }
    }

    /// Number of non-padding positions in the sequence
    pub fn token_count(&self) -> usize {
        self.input_ids.iter().filter(|&&id| id != PAD_ID).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_count_ignores_padding() {
        let sample = ReviewSample::new(vec![5, 3, 7, 0, 0], 1);
        assert_eq!(sample.token_count(), 3);
    }

    #[test]
    fn test_all_padding_sample() {
        // An empty review encodes to an all-padding sequence
        let sample = ReviewSample::new(vec![0, 0, 0, 0], 0);
        assert_eq!(sample.token_count(), 0);
    }
}
