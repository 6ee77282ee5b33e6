//! How the positional mask is carried between guesses

use crate::core::{CandidateMask, Word};

/// Selects what happens to the positional mask after the dictionary rescan
///
/// Both policies admit exactly the same words at every step. `Condensed` just
/// keeps a tighter mask, which makes the printed mask easier to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskPolicy {
    /// Keep the mask produced by the feedback filter
    #[default]
    Filtered,
    /// Replace the mask with the union of the surviving words
    Condensed,
}

impl MaskPolicy {
    /// Create policy from name string
    ///
    /// Supported names: "filtered", "condensed"
    /// Defaults to filtered if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "condensed" | "condense" => Self::Condensed,
            _ => Self::Filtered,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Filtered => "filtered",
            Self::Condensed => "condensed",
        }
    }

    /// The mask to carry forward, given the filtered mask and the survivors
    pub(crate) fn settle(self, filtered: CandidateMask, members: &[&Word]) -> CandidateMask {
        match self {
            Self::Filtered => filtered,
            Self::Condensed => members.iter().copied().collect(),
        }
    }
}
