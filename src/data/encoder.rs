// ============================================================
// Layer 4 — Sentence Encoders
// ============================================================
// The two mutually exclusive strategies for turning review
// text into a fixed-length token id sequence:
//
//   CharEncoder    — one id per character, looked up in the
//                    Vocabulary; pads/truncates itself
//   SubwordEncoder — delegates to a pretrained HuggingFace
//                    tokenizer that was configured with
//                    truncation + fixed padding at load time
//
// Which one runs is decided ONCE, at construction, from the
// `model_type` configuration string — not re-checked per line.
// After that, callers only see the SentenceEncoder trait.
//
// Reference: Rust Book §10 (Traits), §17 (Trait Objects)

use anyhow::{anyhow, Result};
use tokenizers::Tokenizer;

use crate::data::vocab::Vocabulary;
use crate::domain::sample::PAD_ID;
use crate::domain::traits::SentenceEncoder;

/// The unknown-token sentinel the character strategy substitutes
/// for characters absent from the vocabulary. The vocabulary file
/// MUST contain this entry — its absence is a configuration error.
pub const UNK_TOKEN: &str = "[UNK]";

// ─── Strategy selection ───────────────────────────────────────────────────────
/// Which encoding strategy a `model_type` value selects.
/// Resolved once at pipeline construction so the per-line hot
/// path never inspects the configuration string again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingStrategy {
    /// Pretrained subword tokenizer (model_type == "bert")
    Subword,
    /// Character-vocabulary lookup (every other model_type)
    Character,
}

impl EncodingStrategy {
    pub fn from_model_type(model_type: &str) -> Self {
        if model_type == "bert" {
            Self::Subword
        } else {
            Self::Character
        }
    }
}

// ─── CharEncoder ──────────────────────────────────────────────────────────────
/// Character-level encoding: each character maps to its
/// vocabulary id, unknown characters map to the [UNK] id,
/// and the result is truncated/right-padded to `max_length`.
pub struct CharEncoder {
    vocab:      Vocabulary,
    unk_id:     u32,
    max_length: usize,
}

impl CharEncoder {
    /// Build a character encoder over a loaded vocabulary.
    /// Fails if the vocabulary has no [UNK] entry — without it
    /// there is nothing to substitute for unknown characters.
    pub fn new(vocab: Vocabulary, max_length: usize) -> Result<Self> {
        let unk_id = vocab.id(UNK_TOKEN).ok_or_else(|| {
            anyhow!("Vocabulary has no '{UNK_TOKEN}' entry — cannot encode unknown characters")
        })?;

        Ok(Self { vocab, unk_id, max_length })
    }
}

impl SentenceEncoder for CharEncoder {
    fn encode(&self, text: &str) -> Result<Vec<u32>> {
        // ── Step 1: Map each character to its id ──────────────────────────────
        // Characters missing from the vocabulary are recovered
        // locally with the [UNK] id — never an error.
        let mut input_ids: Vec<u32> = text
            .chars()
            .map(|c| self.vocab.id_of_char(c).unwrap_or(self.unk_id))
            .collect();

        // ── Step 2: Truncate, then right-pad with PAD_ID ──────────────────────
        // Every sequence leaves here with exactly max_length ids,
        // whatever the original text length was (zero included).
        input_ids.truncate(self.max_length);
        input_ids.resize(self.max_length, PAD_ID);

        Ok(input_ids)
    }
}

// ─── SubwordEncoder ───────────────────────────────────────────────────────────
/// Subword encoding via a pretrained tokenizer. The tokenizer
/// is already configured (by the TokenizerStore) to truncate
/// and pad to the fixed length itself, so there is no pad or
/// truncate logic on this path.
pub struct SubwordEncoder {
    tokenizer: Tokenizer,
}

impl SubwordEncoder {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }
}

impl SentenceEncoder for SubwordEncoder {
    fn encode(&self, text: &str) -> Result<Vec<u32>> {
        // `true` adds the special [CLS]/[SEP] tokens, matching
        // what a BERT-style classifier expects at its input
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| anyhow!("Tokenisation error: {e}"))?;

        Ok(encoding.get_ids().to_vec())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Build a Vocabulary holding exactly the given lines
    fn vocab_from(lines: &str) -> Vocabulary {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{lines}").unwrap();
        Vocabulary::from_file(file.path()).unwrap()
    }

    /// The spec-level reference vocabulary: a=1, b=2, [UNK]=3
    fn small_encoder(max_length: usize) -> CharEncoder {
        CharEncoder::new(vocab_from("a\nb\n[UNK]\n"), max_length).unwrap()
    }

    #[test]
    fn test_strategy_selection() {
        assert_eq!(EncodingStrategy::from_model_type("bert"), EncodingStrategy::Subword);
        assert_eq!(EncodingStrategy::from_model_type("lstm"), EncodingStrategy::Character);
        assert_eq!(EncodingStrategy::from_model_type(""), EncodingStrategy::Character);
    }

    #[test]
    fn test_missing_unk_entry_is_a_config_error() {
        let vocab = vocab_from("a\nb\n");
        assert!(CharEncoder::new(vocab, 4).is_err());
    }

    #[test]
    fn test_short_text_is_right_padded() {
        let encoder = small_encoder(4);
        assert_eq!(encoder.encode("ab").unwrap(), vec![1, 2, 0, 0]);
    }

    #[test]
    fn test_unknown_char_maps_to_unk_id() {
        let encoder = small_encoder(4);
        // 'c' is not in the vocabulary → [UNK] id 3 at its position
        assert_eq!(encoder.encode("abc").unwrap(), vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_empty_text_encodes_to_all_padding() {
        let encoder = small_encoder(4);
        assert_eq!(encoder.encode("").unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_exact_length_text_is_untouched() {
        let encoder = small_encoder(4);
        assert_eq!(encoder.encode("abab").unwrap(), vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_long_text_keeps_first_max_length_ids() {
        let encoder = small_encoder(4);
        // max_length + 1 characters → encoding of the first 4
        assert_eq!(encoder.encode("ababa").unwrap(), vec![1, 2, 1, 2]);
        assert_eq!(
            encoder.encode("ababa").unwrap(),
            encoder.encode("abab").unwrap()
        );
    }

    #[test]
    fn test_output_length_is_always_max_length() {
        let encoder = small_encoder(6);
        for text in ["", "a", "abab", "ababab", "abababababab"] {
            assert_eq!(encoder.encode(text).unwrap().len(), 6);
        }
    }

    #[test]
    fn test_padding_boundary() {
        // max_length - k characters → last k entries are PAD_ID and
        // the prefix matches the unpadded character encoding
        let encoder = small_encoder(6);
        let encoded = encoder.encode("aba").unwrap();
        assert_eq!(&encoded[..3], &[1, 2, 1]);
        assert_eq!(&encoded[3..], &[0, 0, 0]);
    }

    #[test]
    fn test_encoding_is_idempotent() {
        let encoder = small_encoder(8);
        assert_eq!(
            encoder.encode("abba").unwrap(),
            encoder.encode("abba").unwrap()
        );
    }
}
