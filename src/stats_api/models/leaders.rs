use serde::{Deserialize, Serialize};

use super::player::PersonRef;

/// Envelope of the stat leaders endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadersResponse {
    #[serde(rename = "leagueLeaders", default)]
    pub league_leaders: Vec<LeaderCategory>,
}

/// Leaders for one category within one stat group. A single category
/// request returns several of these (hitting and pitching variants).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderCategory {
    #[serde(rename = "leaderCategory", default)]
    pub leader_category: Option<String>,
    #[serde(rename = "statGroup", default)]
    pub stat_group: Option<String>,
    #[serde(default)]
    pub leaders: Vec<Leader>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leader {
    pub rank: i64,
    /// Rendered by the API as a string, e.g. "62" or "2.25"
    pub value: String,
    pub person: PersonRef,
}
