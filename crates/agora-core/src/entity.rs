use serde::{Deserialize, Serialize};

/// A platform member as surfaced by profile and leaderboard views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub reputation: i64,
    pub verified: bool,
    pub debates_count: u32,
    pub arguments_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebateStatus {
    Hot,
    Active,
    New,
}

impl DebateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebateStatus::Hot => "hot",
            DebateStatus::Active => "active",
            DebateStatus::New => "new",
        }
    }
}

impl std::str::FromStr for DebateStatus {
    type Err = crate::EnumConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hot" => Ok(DebateStatus::Hot),
            "active" => Ok(DebateStatus::Active),
            "new" => Ok(DebateStatus::New),
            other => Err(crate::EnumConversionError::UnknownDebateStatus(
                other.to_string(),
            )),
        }
    }
}

/// Card-level view of a debate, as listed on the browse and search screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateSummary {
    pub id: crate::DebateId,
    pub title: String,
    pub category: String,
    pub creator: String,
    pub status: DebateStatus,
    pub argument_count: u32,
    pub participant_count: u32,
    pub avg_reputation: u32,
    /// Human-readable recency ("2h ago"); display-only, never parsed.
    pub last_active: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    pub reputation: i64,
    pub debates_won: u32,
    pub avg_rating: f32,
    pub trend: String,
}
