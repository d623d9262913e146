// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (inspecting a dataset or showing a sample).
//
// Rules for this layer:
//   - No encoding math here (that's Layer 4)
//   - No UI or argument parsing here (that's Layer 1)
//   - No direct file access (that's Layer 4 and 5)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Dataset inspection workflow (counts + batch shapes);
// also owns PipelineConfig and the shared pipeline assembly
pub mod inspect_use_case;

// Single-sample display workflow
pub mod show_use_case;
