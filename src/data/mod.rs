// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the raw CSV corpus
// all the way to tensor batches ready for a classifier.
//
// The pipeline flows in this order:
//
//   chars.txt
//       │
//       ▼
//   Vocabulary        → token string → dense integer id
//       │
//   train.csv         → one `<label>,<text>` line per sample
//       │
//       ▼
//   SentenceEncoder   → text → fixed-length id sequence
//   (char or subword)
//       │
//       ▼
//   ReviewDataset     → implements Burn's Dataset trait
//       │
//       ▼
//   ReviewBatcher     → stacks samples into tensor batches
//       │
//       ▼
//   DataLoader        → shuffles and feeds batches downstream
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Loads the newline-delimited character vocabulary
pub mod vocab;

/// The two encoding strategies behind the SentenceEncoder trait
pub mod encoder;

/// Reads the CSV corpus and implements Burn's Dataset trait
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
