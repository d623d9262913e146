// ============================================================
// Layer 4 — Vocabulary Loader
// ============================================================
// Loads the character vocabulary from a newline-delimited
// token file (one token per line, e.g. chars.txt).
//
// Id assignment rule:
//   The Nth line of the file (0-indexed) gets id N + 1.
//   Id 0 is NEVER assigned — it is reserved as the padding
//   value that short sequences are filled with.
//
// The vocabulary is built once at startup and immutable
// afterwards. Its entry count becomes the resolved
// `vocab_size` (the classifier's embedding cardinality).
//
// Two deliberate non-features, matching the file format:
//   - Duplicate lines: the LAST occurrence wins, silently
//   - Empty lines: become an empty-string token entry
//
// Reference: Rust Book §8 (HashMaps)
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The token → id mapping used by the character encoding strategy.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    map: HashMap<String, u32>,
}

impl Vocabulary {
    /// Load a vocabulary from a newline-delimited token file.
    /// Each line is trimmed of surrounding whitespace before
    /// becoming a key; line order determines the ids.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read vocabulary file '{}'", path.display()))?;

        let mut map = HashMap::new();

        for (index, line) in content.lines().enumerate() {
            let token = line.trim();
            // Ids start at 1 — id 0 stays reserved for padding.
            // insert() overwrites on duplicates (last wins).
            map.insert(token.to_string(), (index + 1) as u32);
        }

        tracing::debug!(
            "Loaded {} vocabulary entries from '{}'",
            map.len(),
            path.display()
        );

        Ok(Self { map })
    }

    /// Number of distinct tokens in the vocabulary
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if the vocabulary file had no usable lines
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Look up the id of a token string
    pub fn id(&self, token: &str) -> Option<u32> {
        self.map.get(token).copied()
    }

    /// Look up the id of a single character
    pub fn id_of_char(&self, c: char) -> Option<u32> {
        self.id(&c.to_string())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Write `lines` into a throwaway file and load it as a vocabulary
    fn vocab_from(lines: &str) -> Vocabulary {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{lines}").unwrap();
        Vocabulary::from_file(file.path()).unwrap()
    }

    #[test]
    fn test_ids_are_one_based_line_indices() {
        let vocab = vocab_from("a\nb\n[UNK]\n");
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.id("a"), Some(1));
        assert_eq!(vocab.id("b"), Some(2));
        assert_eq!(vocab.id("[UNK]"), Some(3));
    }

    #[test]
    fn test_id_zero_is_never_assigned() {
        let vocab = vocab_from("a\nb\nc\nd\n");
        for token in ["a", "b", "c", "d"] {
            assert_ne!(vocab.id(token), Some(0));
        }
    }

    #[test]
    fn test_lines_are_trimmed() {
        // Trailing whitespace must not become part of the key
        let vocab = vocab_from("a  \n b\n");
        assert_eq!(vocab.id("a"), Some(1));
        assert_eq!(vocab.id("b"), Some(2));
    }

    #[test]
    fn test_duplicate_token_last_wins() {
        let vocab = vocab_from("a\nb\na\n");
        // "a" appears on lines 0 and 2 → keeps the later id 3
        assert_eq!(vocab.id("a"), Some(3));
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_empty_line_becomes_empty_token() {
        let vocab = vocab_from("a\n\nb\n");
        assert_eq!(vocab.id(""), Some(2));
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_char_lookup() {
        let vocab = vocab_from("好\n评\n");
        assert_eq!(vocab.id_of_char('好'), Some(1));
        assert_eq!(vocab.id_of_char('x'), None);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Vocabulary::from_file("no/such/vocab.txt");
        assert!(result.is_err());
    }
}
