use serde::{Deserialize, Serialize};

/// Which Cantor construction is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FractalMode {
    /// The 1-D Cantor set.
    #[default]
    Line,
    /// The 2-D Cantor dust.
    Dust,
}

impl FractalMode {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Dust => "Dust",
        }
    }

    /// Deepest level the interactive surface accepts for this mode.
    #[must_use]
    pub const fn max_depth(self) -> u32 {
        match self {
            Self::Line => 20,
            Self::Dust => 12,
        }
    }

    /// Number of items a construction at `level` holds: `2^level` or `4^level`.
    #[must_use]
    pub fn item_count(self, level: u32) -> u64 {
        match self {
            Self::Line => 1u64.checked_shl(level).unwrap_or(u64::MAX),
            Self::Dust => 1u64.checked_shl(level.saturating_mul(2)).unwrap_or(u64::MAX),
        }
    }
}

impl std::fmt::Display for FractalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
