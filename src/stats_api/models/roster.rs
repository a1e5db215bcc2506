use serde::{Deserialize, Serialize};

use super::player::PersonRef;

/// Envelope of the team roster endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
}

/// One roster slot. Player details (position, handedness, stats) come from
/// a follow-up people lookup, so only the person reference matters here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub person: PersonRef,
    #[serde(rename = "jerseyNumber", default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<String>,
}
