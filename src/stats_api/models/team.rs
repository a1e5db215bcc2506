use serde::{Deserialize, Serialize};

/// Envelope of the teams endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    /// Full display name, e.g. "Toronto Blue Jays"
    pub name: String,
    /// Club nickname, e.g. "Blue Jays"
    #[serde(rename = "clubName")]
    pub club_name: String,
    /// Short team name, e.g. "Blue Jays" (lowercased and squashed for slugs)
    #[serde(rename = "teamName")]
    pub team_name: String,
    pub abbreviation: String,
    pub venue: VenueRef,
    pub league: LeagueRef,
    pub division: DivisionMembership,
    pub season: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueRef {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionMembership {
    pub id: i64,
}

/// Envelope of the divisions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionsResponse {
    #[serde(default)]
    pub divisions: Vec<Division>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Division {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Short display name, e.g. "AL East"
    #[serde(rename = "nameShort")]
    pub name_short: String,
}
