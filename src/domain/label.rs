// ============================================================
// Layer 3 — Label Space
// ============================================================
// The fixed two-class label space for review sentiment.
//
// The CSV already stores class INDICES (0 or 1), so nothing
// needs to be looked up during parsing — this table exists to
// give the indices human-readable names and to provide the
// class count that downstream model configuration needs
// (the output layer has one logit per class).
//
// Reference: Rust Book §5 (Structs and Methods)

/// Class names, indexed by label value.
/// Index 0 = negative review, index 1 = positive review.
const CLASS_NAMES: [&str; 2] = ["negative", "positive"];

/// The fixed label space of the review-classification task.
pub struct LabelSpace;

impl LabelSpace {
    /// Number of classes — recorded in the resolved configuration
    /// so the downstream classifier knows its output dimension
    pub fn class_count() -> usize {
        CLASS_NAMES.len()
    }

    /// Human-readable name for a class index, or None if the
    /// index is outside the label space
    pub fn name(index: i64) -> Option<&'static str> {
        usize::try_from(index).ok().and_then(|i| CLASS_NAMES.get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_count_is_two() {
        assert_eq!(LabelSpace::class_count(), 2);
    }

    #[test]
    fn test_names() {
        assert_eq!(LabelSpace::name(0), Some("negative"));
        assert_eq!(LabelSpace::name(1), Some("positive"));
    }

    #[test]
    fn test_out_of_space_index() {
        assert_eq!(LabelSpace::name(2), None);
        assert_eq!(LabelSpace::name(-1), None);
    }
}
