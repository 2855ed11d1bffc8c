use serde::{Deserialize, Serialize};

/// Number of statistical features compared between players.
pub const FEATURE_COUNT: usize = 7;

/// Feature names in feature-vector order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "goals_per_90",
    "assists_per_90",
    "npxg_plus_xag_per_90",
    "progressive_carries_per_90",
    "progressive_passes_per_90",
    "progressive_receives_per_90",
    "total_contributions",
];

/// A midfielder and the season statistics used to compare them to others.
///
/// Counting stats (`goals`, `assists`, `minutes_played`) are kept for display;
/// only the per-90 rates and `total_contributions` enter the feature vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique id, stable for the process lifetime. Assigned at load time.
    pub player_id: u32,
    /// Display name, not guaranteed unique.
    pub name: String,
    pub team: String,
    pub position: String,
    pub age: u32,
    pub goals: u32,
    pub assists: u32,
    pub minutes_played: u32,
    pub goals_per_90: f32,
    pub assists_per_90: f32,
    pub npxg_plus_xag_per_90: f32,
    pub progressive_carries_per_90: f32,
    pub progressive_passes_per_90: f32,
    pub progressive_receives_per_90: f32,
    pub total_contributions: u32,
}

impl Player {
    /// The fixed-length feature vector used for similarity scoring.
    #[must_use]
    pub fn features(&self) -> [f32; FEATURE_COUNT] {
        [
            self.goals_per_90,
            self.assists_per_90,
            self.npxg_plus_xag_per_90,
            self.progressive_carries_per_90,
            self.progressive_passes_per_90,
            self.progressive_receives_per_90,
            self.total_contributions as f32,
        ]
    }
}
