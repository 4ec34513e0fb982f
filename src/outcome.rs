//! Search verdicts shared by all strategies.

use std::fmt;

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// A conflict-free board was reached.
    Solved,
    /// The iteration budget ran out first. The result still carries the
    /// best-effort board.
    GaveUp,
}

impl Verdict {
    /// `Solved` if `solved`, otherwise `GaveUp`.
    pub fn from_solved(solved: bool) -> Self {
        if solved {
            Verdict::Solved
        } else {
            Verdict::GaveUp
        }
    }

    pub fn is_solved(self) -> bool {
        self == Verdict::Solved
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Solved => f.write_str("solved"),
            Verdict::GaveUp => f.write_str("gave up"),
        }
    }
}
