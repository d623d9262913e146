// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - CharEncoder implements SentenceEncoder
//   - SubwordEncoder implements SentenceEncoder
//   - The dataset builder only sees SentenceEncoder
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;

// ─── SentenceEncoder ──────────────────────────────────────────────────────────
/// Any component that can turn raw text into a FIXED-LENGTH
/// sequence of token ids.
///
/// Contract: `encode` returns exactly `max_length` ids for every
/// input — empty text included (it encodes to all padding).
/// Truncation and padding are the implementation's problem;
/// callers may rely on the fixed shape unconditionally.
///
/// Implementations:
///   - CharEncoder    → per-character vocabulary lookup
///   - SubwordEncoder → pretrained HuggingFace tokenizer
pub trait SentenceEncoder {
    /// Encode one piece of text into a fixed-length id sequence
    fn encode(&self, text: &str) -> Result<Vec<u32>>;
}
