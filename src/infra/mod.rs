// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Handles cross-cutting concerns that don't belong in any
// specific business layer:
//
//   tokenizer_store.rs — Pretrained tokenizer loading
//                        Loads the HuggingFace tokenizer.json
//                        from the pretrained model directory
//                        and pins its truncation/padding to
//                        the configured sequence length, so
//                        the subword encoder never has to
//                        re-implement that logic.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Pretrained tokenizer loading and configuration
pub mod tokenizer_store;
