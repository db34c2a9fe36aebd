use serde::{Deserialize, Serialize};

/// Lifecycle status of a match suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    Suggested,
    Liked,
    Passed,
}

/// User decision on the current suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDecision {
    Like,
    Pass,
}

/// Transient animation direction shown after a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl From<SwipeDecision> for SwipeDirection {
    fn from(decision: SwipeDecision) -> Self {
        match decision {
            SwipeDecision::Like => SwipeDirection::Right,
            SwipeDecision::Pass => SwipeDirection::Left,
        }
    }
}

/// Reference to the creator profile behind a suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRef {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "nicheTags", default)]
    pub niche_tags: Vec<String>,
    #[serde(rename = "rizzScore")]
    pub rizz_score: f64,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
}

/// Per-dimension compatibility sub-scores (each 0-100), computed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ScoreBreakdown {
    pub niche: f64,
    pub audience: f64,
    pub engagement: f64,
    pub trust: f64,
}

/// A candidate match plus its backend-computed compatibility data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSuggestion {
    #[serde(rename = "_id")]
    pub id: String,
    pub profile: ProfileRef,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: f64,
    #[serde(default)]
    pub breakdown: ScoreBreakdown,
    #[serde(default = "default_status")]
    pub status: SuggestionStatus,
    #[serde(rename = "actionTakenAt", default)]
    pub action_taken_at: Option<chrono::DateTime<chrono::Utc>>,
}

fn default_status() -> SuggestionStatus {
    SuggestionStatus::Suggested
}

/// Inclusive numeric range used by score-style filters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

/// Inclusive follower-count range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudienceRange {
    pub min: u64,
    pub max: u64,
}

/// Candidate-selection criteria adjustable by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchFilters {
    #[serde(rename = "audienceSize")]
    pub audience_size: AudienceRange,
    #[serde(rename = "rizzScore")]
    pub rizz_score: ScoreRange,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub niches: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(rename = "engagementRate")]
    pub engagement_rate: ScoreRange,
    #[serde(rename = "requiresCollabHistory")]
    pub requires_collab_history: bool,
    #[serde(rename = "verifiedOnly")]
    pub verified_only: bool,
    #[serde(rename = "premiumOnly")]
    pub premium_only: bool,
}

impl Default for MatchFilters {
    fn default() -> Self {
        Self {
            audience_size: AudienceRange { min: 0, max: 10_000_000 },
            rizz_score: ScoreRange { min: 0.0, max: 100.0 },
            location: None,
            niches: vec![],
            platforms: vec![],
            engagement_rate: ScoreRange { min: 0.0, max: 100.0 },
            requires_collab_history: false,
            verified_only: false,
            premium_only: false,
        }
    }
}

/// Partial filter edit; unset fields keep their prior values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchFilterPatch {
    #[serde(rename = "audienceSize", default)]
    pub audience_size: Option<AudienceRange>,
    #[serde(rename = "rizzScore", default)]
    pub rizz_score: Option<ScoreRange>,
    #[serde(default, with = "double_option")]
    pub location: Option<Option<String>>,
    #[serde(default)]
    pub niches: Option<Vec<String>>,
    #[serde(default)]
    pub platforms: Option<Vec<String>>,
    #[serde(rename = "engagementRate", default)]
    pub engagement_rate: Option<ScoreRange>,
    #[serde(rename = "requiresCollabHistory", default)]
    pub requires_collab_history: Option<bool>,
    #[serde(rename = "verifiedOnly", default)]
    pub verified_only: Option<bool>,
    #[serde(rename = "premiumOnly", default)]
    pub premium_only: Option<bool>,
}

/// Distinguishes "field absent" from "field explicitly set to null"
/// so a patch can clear the optional location.
pub(crate) mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

/// View state over the decided-match history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryFilters {
    #[serde(default)]
    pub status: Option<SuggestionStatus>,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl Default for HistoryFilters {
    fn default() -> Self {
        Self {
            status: None,
            page: 1,
            page_size: 20,
        }
    }
}

/// Partial history-view edit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryFilterPatch {
    #[serde(default, with = "double_option")]
    pub status: Option<Option<SuggestionStatus>>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(rename = "pageSize", default)]
    pub page_size: Option<u32>,
}

/// Backend-computed trust/influence metric for the session's own profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RizzScore {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    pub score: f64,
    pub percentile: f64,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// One row of the backend-computed ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    #[serde(rename = "profileId")]
    pub profile_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "rizzScore")]
    pub rizz_score: f64,
}
