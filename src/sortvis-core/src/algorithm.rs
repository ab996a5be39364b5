//! Engine selection by name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::context::{RunReport, StepContext};
use crate::engines;
use crate::error::Result;

/// One of the available sort engines.
///
/// Parses from ids, menu names and shorthands such as `quick`; see
/// [`Algorithm::from_str_loose`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Algorithm {
    /// Bubble sort with shrinking passes and early exit
    #[default]
    Bubble,
    /// Bubble sort that rescans the whole sequence every pass
    UnoptimizedBubble,
    /// Quicksort with a first-element pivot
    Quicksort,
    /// Shellsort with halving gaps
    Shellsort,
    /// Insertion sort
    Insertion,
}

impl Algorithm {
    /// Every engine, in menu order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::UnoptimizedBubble,
        Algorithm::Quicksort,
        Algorithm::Shellsort,
        Algorithm::Insertion,
    ];

    /// Human-readable name shown in the status bar.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble sort",
            Algorithm::UnoptimizedBubble => "Unoptimized Bubble sort",
            Algorithm::Quicksort => "Quicksort",
            Algorithm::Shellsort => "Shellsort",
            Algorithm::Insertion => "Insert sort",
        }
    }

    /// Stable identifier used in config files and logs.
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::UnoptimizedBubble => "unoptimized-bubble",
            Algorithm::Quicksort => "quicksort",
            Algorithm::Shellsort => "shellsort",
            Algorithm::Insertion => "insertion",
        }
    }

    /// Next engine in menu order, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous engine in menu order, wrapping around.
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Parse from a loose name (case-insensitive, spaces, `-` and `_`
    /// ignored, menu names accepted).
    pub fn from_str_loose(s: &str) -> Option<Algorithm> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "bubble" | "bubblesort" => Some(Algorithm::Bubble),
            "unoptimizedbubble" | "unoptimizedbubblesort" => Some(Algorithm::UnoptimizedBubble),
            "quick" | "quicksort" => Some(Algorithm::Quicksort),
            "shell" | "shellsort" => Some(Algorithm::Shellsort),
            "insert" | "insertion" | "insertsort" | "insertionsort" => Some(Algorithm::Insertion),
            _ => None,
        }
    }

    /// Runs this engine over `seq`.
    pub fn run(self, seq: &mut [u32], ctx: &mut StepContext<'_>) -> Result<RunReport> {
        match self {
            Algorithm::Bubble => engines::bubble_sort(seq, ctx),
            Algorithm::UnoptimizedBubble => engines::unoptimized_bubble_sort(seq, ctx),
            Algorithm::Quicksort => engines::quicksort(seq, ctx),
            Algorithm::Shellsort => engines::shellsort(seq, ctx),
            Algorithm::Insertion => engines::insertion_sort(seq, ctx),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when an algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm: {0}")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = UnknownAlgorithm;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        Self::from_str_loose(&s).ok_or(UnknownAlgorithm(s))
    }
}

impl From<Algorithm> for &'static str {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.id()
    }
}
