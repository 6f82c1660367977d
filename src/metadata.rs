//! Sequence metadata: exact size and ordering traits carried alongside a sequence.

use serde::{Deserialize, Serialize};

/// Descriptor of what is known about a sequence before it is traversed.
///
/// `size` is `Some(n)` only when the number of remaining elements is known
/// exactly. The flags describe the encounter order of the elements:
/// `ordered` means the order is meaningful, `distinct` that no two elements
/// are equal, `sorted` that elements arrive in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SequenceMetadata {
    #[serde(default)]
    pub size: Option<usize>,
    #[serde(default)]
    pub ordered: bool,
    #[serde(default)]
    pub distinct: bool,
    #[serde(default)]
    pub sorted: bool,
}

impl SequenceMetadata {
    /// Unknown size, no traits.
    pub const fn unknown() -> Self {
        Self {
            size: None,
            ordered: false,
            distinct: false,
            sorted: false,
        }
    }

    /// Unknown size, ordered. This is what a plain iterator of unknown
    /// length is assumed to be.
    pub const fn ordered() -> Self {
        Self {
            size: None,
            ordered: true,
            distinct: false,
            sorted: false,
        }
    }

    /// Derive metadata from an iterator's `size_hint`. The size is known only
    /// when both bounds agree.
    pub fn from_size_hint(hint: (usize, Option<usize>)) -> Self {
        let size = match hint {
            (lower, Some(upper)) if lower == upper => Some(lower),
            _ => None,
        };
        Self {
            size,
            ..Self::ordered()
        }
    }

    pub fn with_size(self, size: usize) -> Self {
        Self {
            size: Some(size),
            ..self
        }
    }

    /// Same traits, size forced to unknown.
    pub fn without_size(self) -> Self {
        Self { size: None, ..self }
    }

    pub fn with_ordered(self, ordered: bool) -> Self {
        Self { ordered, ..self }
    }

    pub fn with_distinct(self, distinct: bool) -> Self {
        Self { distinct, ..self }
    }

    pub fn with_sorted(self, sorted: bool) -> Self {
        Self { sorted, ..self }
    }

    pub fn is_sized(&self) -> bool {
        self.size.is_some()
    }

    pub fn exact_size(&self) -> Option<usize> {
        self.size
    }

    /// Metadata of a pairwise combination of `self` and `other`.
    ///
    /// The size is known only if both sizes are known, and is then the
    /// smaller of the two. `ordered` holds only if it holds on both sides.
    /// `distinct` and `sorted` are always cleared: the combiner is arbitrary,
    /// so neither trait survives pairing even when both inputs have it.
    pub fn merge(&self, other: &SequenceMetadata) -> SequenceMetadata {
        let size = match (self.size, other.size) {
            (Some(left), Some(right)) => Some(left.min(right)),
            _ => None,
        };
        SequenceMetadata {
            size,
            ordered: self.ordered && other.ordered,
            distinct: false,
            sorted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_takes_smaller_size_when_both_known() {
        let left = SequenceMetadata::ordered().with_size(10);
        let right = SequenceMetadata::ordered().with_size(3);
        assert_eq!(left.merge(&right).size, Some(3));
        assert_eq!(right.merge(&left).size, Some(3));
    }

    #[test]
    fn merge_is_unsized_if_either_side_is() {
        let left = SequenceMetadata::ordered().with_size(10);
        let right = SequenceMetadata::ordered();
        assert_eq!(left.merge(&right).size, None);
        assert_eq!(right.merge(&left).size, None);
    }

    #[test]
    fn merge_clears_distinct_and_sorted() {
        let both = SequenceMetadata::ordered()
            .with_distinct(true)
            .with_sorted(true)
            .with_size(4);
        let merged = both.merge(&both);
        assert!(merged.ordered);
        assert!(!merged.distinct);
        assert!(!merged.sorted);
    }

    #[test]
    fn merge_ands_ordered() {
        let ordered = SequenceMetadata::ordered();
        let unordered = SequenceMetadata::unknown();
        assert!(!ordered.merge(&unordered).ordered);
    }

    #[test]
    fn size_hint_is_exact_only_when_bounds_agree() {
        assert_eq!(SequenceMetadata::from_size_hint((5, Some(5))).size, Some(5));
        assert_eq!(SequenceMetadata::from_size_hint((0, Some(5))).size, None);
        assert_eq!(SequenceMetadata::from_size_hint((0, None)).size, None);
    }

    #[test]
    fn builders_set_flags_and_size() {
        let meta = SequenceMetadata::unknown().with_ordered(true).with_distinct(true);
        assert!(meta.ordered && meta.distinct && !meta.sorted);
        assert!(!meta.is_sized());
        assert!(!meta.with_ordered(false).ordered);

        let sized = meta.with_size(7);
        assert!(sized.is_sized());
        assert_eq!(sized.exact_size(), Some(7));
    }

    #[test]
    fn without_size_keeps_traits() {
        let meta = SequenceMetadata::ordered().with_sorted(true).with_size(2);
        let stripped = meta.without_size();
        assert_eq!(stripped.size, None);
        assert!(stripped.ordered && stripped.sorted);
    }
}
