//! Per-index roles emitted with every frame.

use std::fmt;

/// The role of one index in a single frame.
///
/// Engines only decide roles. Turning a role into a color is the job of
/// whatever sink draws the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorTag {
    /// Untouched in this step.
    #[default]
    Normal,
    /// Just exchanged (or shifted) with a neighbour.
    Swapped,
    /// Compared, no exchange needed.
    Compared,
    /// Quicksort pivot.
    Pivot,
    /// Insertion sort element being placed.
    SelectedForInsertion,
    /// Final slot of a shifted element.
    WrittenBack,
    /// Left of the pivot after a partition.
    PartitionLeft,
    /// Right of the pivot after a partition.
    PartitionRight,
}

impl ColorTag {
    /// All tags, in declaration order.
    pub const ALL: [ColorTag; 8] = [
        ColorTag::Normal,
        ColorTag::Swapped,
        ColorTag::Compared,
        ColorTag::Pivot,
        ColorTag::SelectedForInsertion,
        ColorTag::WrittenBack,
        ColorTag::PartitionLeft,
        ColorTag::PartitionRight,
    ];

    /// Single-character code used in logs and traces.
    pub fn symbol(self) -> char {
        match self {
            ColorTag::Normal => '.',
            ColorTag::Swapped => 'S',
            ColorTag::Compared => 'C',
            ColorTag::Pivot => 'P',
            ColorTag::SelectedForInsertion => 'I',
            ColorTag::WrittenBack => 'W',
            ColorTag::PartitionLeft => 'L',
            ColorTag::PartitionRight => 'R',
        }
    }

    /// Config key for this tag (`snake_case`).
    pub fn key(self) -> &'static str {
        match self {
            ColorTag::Normal => "normal",
            ColorTag::Swapped => "swapped",
            ColorTag::Compared => "compared",
            ColorTag::Pivot => "pivot",
            ColorTag::SelectedForInsertion => "selected",
            ColorTag::WrittenBack => "written_back",
            ColorTag::PartitionLeft => "partition_left",
            ColorTag::PartitionRight => "partition_right",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Renders a tag slice as a compact string, one [`ColorTag::symbol`] per index.
pub fn tag_string(tags: &[ColorTag]) -> String {
    tags.iter().map(|t| t.symbol()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_unique() {
        let mut seen: Vec<char> = ColorTag::ALL.iter().map(|t| t.symbol()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), ColorTag::ALL.len());
    }

    #[test]
    fn test_tag_string() {
        let tags = [ColorTag::Normal, ColorTag::Pivot, ColorTag::Swapped];
        assert_eq!(tag_string(&tags), ".PS");
        assert_eq!(tag_string(&[]), "");
    }
}
